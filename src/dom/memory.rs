//! In-memory document head.

use super::{ElementHandle, HostError, StyleHost, DATA_ATTRIBUTE};

/// A `<style>` element held by a [`MemoryDocument`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleElement {
    pub attribute: Option<String>,
    pub text: String,
}

/// A document reduced to what style injection needs: a head holding style
/// elements in insertion order.
///
/// Every text mutation is counted, which lets callers check that repeated
/// identical injections leave the document alone.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    /// `None` models a document without a head.
    head: Option<Vec<StyleElement>>,
    writes: usize,
}

impl MemoryDocument {
    /// Creates a document with an empty head.
    pub fn new() -> Self {
        Self {
            head: Some(Vec::new()),
            writes: 0,
        }
    }

    /// Creates a document with no style root. Every element creation fails.
    pub fn headless() -> Self {
        Self {
            head: None,
            writes: 0,
        }
    }

    /// Style elements in document order.
    pub fn elements(&self) -> &[StyleElement] {
        self.head.as_deref().unwrap_or(&[])
    }

    pub fn element(&self, handle: ElementHandle) -> Option<&StyleElement> {
        self.elements().get(handle.raw())
    }

    pub fn element_count(&self) -> usize {
        self.elements().len()
    }

    /// Handles of every element tagged with `value`.
    pub fn elements_with_attribute(&self, value: &str) -> Vec<ElementHandle> {
        self.elements()
            .iter()
            .enumerate()
            .filter(|(_, el)| el.attribute.as_deref() == Some(value))
            .map(|(i, _)| ElementHandle::from_raw(i))
            .collect()
    }

    /// Number of text mutations performed so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Serializes the head's style elements as HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for el in self.elements() {
            out.push_str("<style");
            if let Some(attribute) = &el.attribute {
                out.push(' ');
                out.push_str(DATA_ATTRIBUTE);
                out.push_str("=\"");
                out.push_str(&escape_attribute(attribute));
                out.push('"');
            }
            out.push('>');
            out.push_str(&el.text);
            out.push_str("</style>\n");
        }
        out
    }

    fn element_mut(&mut self, handle: ElementHandle) -> Result<&mut StyleElement, HostError> {
        self.head
            .as_mut()
            .and_then(|head| head.get_mut(handle.raw()))
            .ok_or(HostError::UnknownElement(handle))
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleHost for MemoryDocument {
    fn create_element(&mut self, attribute: Option<&str>) -> Result<ElementHandle, HostError> {
        let head = self.head.as_mut().ok_or(HostError::MissingRoot)?;
        head.push(StyleElement {
            attribute: attribute.map(str::to_string),
            text: String::new(),
        });
        Ok(ElementHandle::from_raw(head.len() - 1))
    }

    fn locate_singleton(&self, attribute_value: &str) -> Option<ElementHandle> {
        self.elements()
            .iter()
            .position(|el| el.attribute.as_deref() == Some(attribute_value))
            .map(ElementHandle::from_raw)
    }

    fn append_text(&mut self, element: ElementHandle, text: &str) -> Result<(), HostError> {
        self.element_mut(element)?.text.push_str(text);
        self.writes += 1;
        Ok(())
    }

    fn replace_text(&mut self, element: ElementHandle, text: &str) -> Result<(), HostError> {
        let el = self.element_mut(element)?;
        el.text.clear();
        el.text.push_str(text);
        self.writes += 1;
        Ok(())
    }

    fn clear_text(&mut self, element: ElementHandle) -> Result<(), HostError> {
        self.element_mut(element)?.text.clear();
        self.writes += 1;
        Ok(())
    }

    fn text(&self, element: ElementHandle) -> Option<&str> {
        self.element(element).map(|el| el.text.as_str())
    }
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}
