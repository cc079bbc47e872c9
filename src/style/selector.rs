//! Class and id selectors used as variant keys.

use serde::Serialize;

/// Whether a selector targets a class or an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorKind {
    Class,
    Id,
}

/// The selector a [`StyleUnit`](super::StyleUnit) is rendered under.
///
/// Selectors double as variant keys inside a
/// [`StyleRecord`](crate::StyleRecord): every variant of a grouped style has
/// its own selector and all of them share one element.
///
/// Names are escaped on output, so any string is a valid selector name.
///
/// ```rust
/// use herb::Selector;
///
/// assert_eq!(Selector::class("button").to_css(), ".button");
/// assert_eq!(Selector::id("main").to_css(), "#main");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Selector {
    pub kind: SelectorKind,
    pub name: String,
}

impl Selector {
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            kind: SelectorKind::Class,
            name: name.into(),
        }
    }

    pub fn id(name: impl Into<String>) -> Self {
        Self {
            kind: SelectorKind::Id,
            name: name.into(),
        }
    }

    /// Returns the escaped selector text, including its `.` or `#` sigil.
    pub fn to_css(&self) -> String {
        let mut out = String::with_capacity(self.name.len() + 1);
        out.push(match self.kind {
            SelectorKind::Class => '.',
            SelectorKind::Id => '#',
        });
        // Writing into a String cannot fail.
        let _ = cssparser::serialize_identifier(&self.name, &mut out);
        out
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_css())
    }
}
