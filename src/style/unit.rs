//! Style units: one selector's declarations plus nested rules.

use indexmap::IndexMap;
use serde::Serialize;

use super::value::Value;

/// Ordered property → value declarations.
///
/// Order is kept for output and is significant: `margin` before `margin-top`
/// renders differently from the reverse. [`StyleUnit`] and [`SupportsQuery`]
/// equality compare declarations in order.
pub type Declarations = IndexMap<String, Value>;

/// Order-sensitive declaration comparison.
fn same_declarations(a: &Declarations, b: &Declarations) -> bool {
    a.as_slice() == b.as_slice()
}

/// A media feature inside a [`MediaQuery`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum MediaFeature {
    /// A media type such as `screen` or `print`, optionally negated.
    Type { name: String, negated: bool },
    /// A feature expression such as `(max-width: 800px)`.
    Feature { name: String, value: Value },
}

/// A media query, rendered as its features joined with `and`.
///
/// ```rust
/// use herb::{MediaQuery, Value};
///
/// let query = MediaQuery::new()
///     .media_type("screen")
///     .feature("max-width", Value::px(800.0));
/// assert_eq!(query.to_css(false), "screen and (max-width:800px)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaQuery {
    pub features: Vec<MediaFeature>,
}

impl MediaQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn media_type(mut self, name: impl Into<String>) -> Self {
        self.features.push(MediaFeature::Type {
            name: name.into(),
            negated: false,
        });
        self
    }

    pub fn not_media_type(mut self, name: impl Into<String>) -> Self {
        self.features.push(MediaFeature::Type {
            name: name.into(),
            negated: true,
        });
        self
    }

    pub fn feature(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.features.push(MediaFeature::Feature {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Renders the query text, without the `@media` keyword.
    pub fn to_css(&self, pretty: bool) -> String {
        let separator = if pretty { ": " } else { ":" };
        self.features
            .iter()
            .map(|feature| match feature {
                MediaFeature::Type { name, negated } => {
                    if *negated {
                        format!("not {}", name)
                    } else {
                        name.clone()
                    }
                }
                MediaFeature::Feature { name, value } => {
                    format!("({}{}{})", name, separator, value.to_css())
                }
            })
            .collect::<Vec<_>>()
            .join(" and ")
    }
}

/// A feature query, rendered as `(property: value)` pairs joined with `and`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SupportsQuery {
    pub conditions: Declarations,
}

impl PartialEq for SupportsQuery {
    fn eq(&self, other: &Self) -> bool {
        same_declarations(&self.conditions, &other.conditions)
    }
}

impl SupportsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn condition(mut self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.insert(property.into(), value.into());
        self
    }

    /// Renders the condition text, without the `@supports` keyword.
    pub fn to_css(&self, pretty: bool) -> String {
        let separator = if pretty { ": " } else { ":" };
        self.conditions
            .iter()
            .map(|(property, value)| format!("({}{}{})", property, separator, value.to_css()))
            .collect::<Vec<_>>()
            .join(" and ")
    }
}

/// A combinator entry: a tag such as `>` plus the element selectors it joins.
///
/// Tags are kept as written. The renderer decides which ones it understands,
/// so an unknown tag surfaces as a render error rather than a construction
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CombinatorKey {
    pub tag: String,
    pub elements: Vec<String>,
}

impl CombinatorKey {
    pub fn new<I, S>(tag: impl Into<String>, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tag: tag.into(),
            elements: elements.into_iter().map(Into::into).collect(),
        }
    }
}

/// Everything needed to render one selector's CSS.
///
/// The builder methods mirror the shape of a style function's output:
///
/// ```rust
/// use herb::{CombinatorKey, MediaQuery, StyleUnit, Value};
///
/// let unit = StyleUnit::new()
///     .add("color", "black")
///     .pseudo("hover", [("color", "red")])
///     .media(
///         MediaQuery::new().feature("max-width", Value::px(600.0)),
///         StyleUnit::new().add("color", "blue"),
///     )
///     .combinator(CombinatorKey::new(">", ["span"]), [("margin", 0)]);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct StyleUnit {
    pub style: Declarations,
    pub pseudo: IndexMap<String, Declarations>,
    pub media: Vec<(MediaQuery, StyleUnit)>,
    pub supports: Vec<(SupportsQuery, StyleUnit)>,
    pub prefix: bool,
    pub vendors: Vec<String>,
    pub combinators: Vec<(CombinatorKey, Declarations)>,
}

impl PartialEq for StyleUnit {
    /// Exact comparison: equal units render identical CSS, so declaration
    /// and pseudo order both count.
    fn eq(&self, other: &Self) -> bool {
        same_declarations(&self.style, &other.style)
            && self.pseudo.len() == other.pseudo.len()
            && self
                .pseudo
                .iter()
                .zip(&other.pseudo)
                .all(|((a, da), (b, db))| a == b && same_declarations(da, db))
            && self.media == other.media
            && self.supports == other.supports
            && self.prefix == other.prefix
            && self.vendors == other.vendors
            && self.combinators.len() == other.combinators.len()
            && self
                .combinators
                .iter()
                .zip(&other.combinators)
                .all(|((a, da), (b, db))| a == b && same_declarations(da, db))
    }
}

impl StyleUnit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a declaration, replacing any previous value for the property.
    pub fn add(mut self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    /// Adds declarations for a pseudo class (`hover`) or element (`:before`).
    pub fn pseudo<I, K, V>(mut self, name: impl Into<String>, declarations: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.pseudo
            .insert(name.into(), collect_declarations(declarations));
        self
    }

    pub fn media(mut self, query: MediaQuery, unit: StyleUnit) -> Self {
        self.media.push((query, unit));
        self
    }

    pub fn supports(mut self, query: SupportsQuery, unit: StyleUnit) -> Self {
        self.supports.push((query, unit));
        self
    }

    /// Requests vendor prefixes for every declaration of this unit.
    ///
    /// With no vendors listed, the configured vendors are used.
    pub fn prefixed<I, S>(mut self, vendors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefix = true;
        self.vendors = vendors.into_iter().map(Into::into).collect();
        self
    }

    pub fn combinator<I, K, V>(mut self, key: CombinatorKey, declarations: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.combinators
            .push((key, collect_declarations(declarations)));
        self
    }

    /// Returns true if this unit would render no CSS at all.
    pub fn is_empty(&self) -> bool {
        self.style.is_empty()
            && self.pseudo.values().all(|d| d.is_empty())
            && self.media.iter().all(|(_, unit)| unit.is_empty())
            && self.supports.iter().all(|(_, unit)| unit.is_empty())
            && self.combinators.iter().all(|(_, d)| d.is_empty())
    }
}

fn collect_declarations<I, K, V>(declarations: I) -> Declarations
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    declarations
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// A raw selector paired with a unit.
///
/// Used for global styles (`body`, `html, body`) and keyframe steps (`from`,
/// `50%`), where the selector is written verbatim instead of being derived
/// from a class name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    pub selector: String,
    pub unit: StyleUnit,
}

impl Rule {
    pub fn new(selector: impl Into<String>, unit: StyleUnit) -> Self {
        Self {
            selector: selector.into(),
            unit,
        }
    }
}
