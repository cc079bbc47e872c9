//! Keyed storage of injected styles.
//!
//! A [`Registry`] is a plain key-value map: no merging, no locking. The
//! reconciliation engine decides what to store and callers serialize access.
//!
//! [`Registries`] bundles the three independent key spaces the runtime needs.
//! A regular style, a keyframes definition and a global style may all share a
//! name without clashing.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use indexmap::IndexMap;

use crate::dom::ElementHandle;
use crate::style::{Rule, Selector, StyleUnit};

/// Everything known about one injected style identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRecord {
    /// One unit per variant, in insertion order.
    pub data: IndexMap<Selector, StyleUnit>,
    /// The `data-herb` value the element was tagged with, if any.
    pub data_string: Option<String>,
    /// The element holding this style's CSS. Owned by this record.
    pub element: ElementHandle,
    /// Rendered CSS of every variant, newline-joined in `data` order.
    pub css: String,
}

/// A keyframes or global definition.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRecord {
    pub data: Vec<Rule>,
    pub css: String,
}

/// Key-value storage for one kind of record.
#[derive(Debug, Clone)]
pub struct Registry<R> {
    records: HashMap<String, R>,
}

impl<R> Registry<R> {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.get(id)
    }

    /// Stores `record` under `id`, returning the record it replaced.
    pub fn put(&mut self, id: impl Into<String>, record: R) -> Option<R> {
        self.records.insert(id.into(), record)
    }

    pub fn remove(&mut self, id: &str) -> Option<R> {
        self.records.remove(id)
    }

    pub(crate) fn entry(&mut self, id: &str) -> Entry<'_, String, R> {
        self.records.entry(id.to_string())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns an iterator over all registered identifiers.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &R)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl<R> Default for Registry<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// The three key spaces held by a runtime.
#[derive(Debug, Clone, Default)]
pub struct Registries {
    pub styles: Registry<StyleRecord>,
    pub keyframes: Registry<AggregateRecord>,
    pub globals: Registry<AggregateRecord>,
}

impl Registries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.styles.clear();
        self.keyframes.clear();
        self.globals.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(css: &str) -> StyleRecord {
        StyleRecord {
            data: IndexMap::new(),
            data_string: None,
            element: ElementHandle::from_raw(0),
            css: css.to_string(),
        }
    }

    #[test]
    fn test_put_get_remove() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());

        assert!(registry.put("a", record("x")).is_none());
        assert_eq!(registry.get("a").map(|r| r.css.as_str()), Some("x"));
        assert!(registry.contains("a"));
        assert_eq!(registry.len(), 1);

        let old = registry.put("a", record("y")).unwrap();
        assert_eq!(old.css, "x");
        assert_eq!(registry.get("a").unwrap().css, "y");

        assert!(registry.remove("a").is_some());
        assert!(registry.get("a").is_none());
        assert!(registry.remove("a").is_none());
    }

    #[test]
    fn test_put_does_not_merge() {
        let mut registry = Registry::new();
        let mut first = record("x");
        first
            .data
            .insert(Selector::class("a"), StyleUnit::new().add("color", "red"));
        registry.put("id", first);
        registry.put("id", record("y"));

        assert!(registry.get("id").unwrap().data.is_empty());
    }

    #[test]
    fn test_names_and_iter() {
        let mut registry = Registry::new();
        registry.put("a", record("1"));
        registry.put("b", record("2"));

        let mut names: Vec<&str> = registry.names().collect();
        names.sort();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(registry.iter().count(), 2);

        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_key_spaces_are_independent() {
        let mut registries = Registries::new();
        registries.styles.put("ns/x", record(".x{}"));
        registries.keyframes.put(
            "ns/x",
            AggregateRecord {
                data: vec![],
                css: "@keyframes x{}".into(),
            },
        );

        assert_eq!(registries.styles.get("ns/x").unwrap().css, ".x{}");
        assert_eq!(registries.keyframes.get("ns/x").unwrap().css, "@keyframes x{}");
        assert!(registries.globals.get("ns/x").is_none());

        registries.clear();
        assert!(registries.styles.is_empty());
        assert!(registries.keyframes.is_empty());
    }
}
