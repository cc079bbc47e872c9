//! Identifiers and generated names for style producers.
//!
//! A style function is known by its namespace and name. From that pair this
//! module derives:
//!
//! - the registry key ([`StyleIdentifier`]), stable across calls
//! - a CSS-safe class name ([`class_name`])
//! - the human readable `data-herb` attribute value ([`debug_attribute`])
//!
//! Anonymous producers have no name, so their key is a hash of the unit they
//! produced.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::unit::StyleUnit;

/// Registry key shared by every variant of one logical style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StyleIdentifier(String);

impl StyleIdentifier {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Builds the key for a named producer: `namespace/name`.
    pub fn qualified(namespace: &str, name: &str) -> Self {
        Self(format!("{}/{}", namespace, name))
    }

    /// Builds a key for an anonymous producer from the content it produced.
    ///
    /// The hashed form keeps declaration order, matching `StyleUnit`
    /// equality: equal units get the same key within a process, and units
    /// that differ only in order get different keys.
    pub fn anonymous(unit: &StyleUnit) -> Self {
        let mut hasher = DefaultHasher::new();
        // Serializing a StyleUnit to JSON cannot fail: keys are strings and
        // every value is representable.
        let canonical = serde_json::to_string(unit).unwrap_or_default();
        canonical.hash(&mut hasher);
        Self(format!("anon-{:x}", hasher.finish()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StyleIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StyleIdentifier {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for StyleIdentifier {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for StyleIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Generates a class name for a style function.
///
/// Non-ASCII characters are transliterated, then anything outside
/// `[A-Za-z0-9_-]` becomes `-`. Namespace and name are joined with `_`, and a
/// variant key, when present, is appended with `-`.
///
/// ```rust
/// use herb::class_name;
///
/// assert_eq!(class_name("app.ui", "button", None), "app-ui_button");
/// assert_eq!(class_name("app.ui", "button", Some("primary")), "app-ui_button-primary");
/// assert_eq!(class_name("café", "crème", None), "cafe_creme");
/// ```
pub fn class_name(namespace: &str, name: &str, key: Option<&str>) -> String {
    let mut out = sanitize(namespace);
    out.push('_');
    out.push_str(&sanitize(name));
    if let Some(key) = key {
        out.push('-');
        out.push_str(&sanitize(key));
    }
    out
}

/// Formats the `data-herb` attribute value for a style function.
///
/// ```rust
/// use herb::debug_attribute;
///
/// assert_eq!(debug_attribute("app.ui", "button", None), "app.ui/button");
/// assert_eq!(debug_attribute("app.ui", "button", Some("primary")), "app.ui/button[primary]");
/// ```
pub fn debug_attribute(namespace: &str, name: &str, key: Option<&str>) -> String {
    match key {
        Some(key) => format!("{}/{}[{}]", namespace, name, key),
        None => format!("{}/{}", namespace, name),
    }
}

fn sanitize(s: &str) -> String {
    deunicode::deunicode(s)
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_identifier() {
        let id = StyleIdentifier::qualified("app.ui", "button");
        assert_eq!(id.as_str(), "app.ui/button");
        assert_eq!(id.to_string(), "app.ui/button");
    }

    #[test]
    fn test_anonymous_identifier_is_content_addressed() {
        let a = StyleUnit::new().add("color", "red");
        let b = StyleUnit::new().add("color", "red");
        let c = StyleUnit::new().add("color", "blue");

        assert_eq!(StyleIdentifier::anonymous(&a), StyleIdentifier::anonymous(&b));
        assert_ne!(StyleIdentifier::anonymous(&a), StyleIdentifier::anonymous(&c));
        assert!(StyleIdentifier::anonymous(&a).as_str().starts_with("anon-"));
    }

    #[test]
    fn test_anonymous_identifier_agrees_with_equality() {
        let units = [
            StyleUnit::new().add("color", "red").add("margin", 0),
            StyleUnit::new().add("margin", 0).add("color", "red"),
            StyleUnit::new().add("color", "red").add("margin", 0),
        ];
        for a in &units {
            for b in &units {
                assert_eq!(
                    a == b,
                    StyleIdentifier::anonymous(a) == StyleIdentifier::anonymous(b)
                );
            }
        }
    }

    #[test]
    fn test_class_name_sanitizes() {
        assert_eq!(class_name("a.b/c", "d e", None), "a-b-c_d-e");
        assert_eq!(class_name("ns", "btn", Some("x y")), "ns_btn-x-y");
    }

    #[test]
    fn test_class_name_transliterates() {
        assert_eq!(class_name("ns", "größe", None), "ns_grosse");
    }

    #[test]
    fn test_debug_attribute() {
        assert_eq!(debug_attribute("ns", "f", None), "ns/f");
        assert_eq!(debug_attribute("ns", "f", Some("k")), "ns/f[k]");
    }
}
