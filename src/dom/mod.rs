//! Style element management.
//!
//! The engine never touches a document directly. It goes through the
//! [`StyleHost`] trait, which knows how to create `<style>` elements under the
//! document's style root, find the shared singletons, and change an element's
//! text.
//!
//! [`MemoryDocument`] is the built-in host. It keeps elements in memory and is
//! what the process-wide runtime uses; embedders with a real document
//! implement [`StyleHost`] over it.

mod memory;

use thiserror::Error;

pub use memory::{MemoryDocument, StyleElement};

/// Attribute used to tag managed style elements.
pub const DATA_ATTRIBUTE: &str = "data-herb";

/// Opaque handle to a style element created by a [`StyleHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct ElementHandle(usize);

impl ElementHandle {
    /// Wraps a host-specific index. Only hosts should create handles.
    pub fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Failures reported by a [`StyleHost`].
///
/// Both variants indicate a broken host rather than a bad style.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The document has no style root to attach elements to.
    #[error("document has no style root to attach style elements to")]
    MissingRoot,
    /// The handle does not belong to this host.
    #[error("style element {0} does not exist in this document")]
    UnknownElement(ElementHandle),
}

/// A document that can carry managed style elements.
pub trait StyleHost {
    /// Creates a style element under the style root.
    ///
    /// When `attribute` is given the element is tagged with
    /// [`DATA_ATTRIBUTE`]`=attribute`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::MissingRoot`] if there is nowhere to attach it.
    fn create_element(&mut self, attribute: Option<&str>) -> Result<ElementHandle, HostError>;

    /// Finds an existing element tagged with `attribute_value`.
    fn locate_singleton(&self, attribute_value: &str) -> Option<ElementHandle>;

    /// Appends text to the element, keeping what is already there.
    fn append_text(&mut self, element: ElementHandle, text: &str) -> Result<(), HostError>;

    /// Replaces the element's whole text.
    fn replace_text(&mut self, element: ElementHandle, text: &str) -> Result<(), HostError>;

    /// Empties the element.
    fn clear_text(&mut self, element: ElementHandle) -> Result<(), HostError>;

    /// Current text of the element.
    fn text(&self, element: ElementHandle) -> Option<&str>;

    /// Finds the element tagged with `attribute_value`, creating it if needed.
    fn acquire_singleton(&mut self, attribute_value: &str) -> Result<ElementHandle, HostError> {
        match self.locate_singleton(attribute_value) {
            Some(element) => Ok(element),
            None => self.create_element(Some(attribute_value)),
        }
    }
}
