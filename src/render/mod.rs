//! CSS text generation.
//!
//! This module defines the [`CssRenderer`] trait, the seam between the
//! reconciliation engine and whatever turns style trees into CSS text. The
//! default implementation is [`CssTextRenderer`].
//!
//! The engine renders three shapes of input, described by [`StyleTree`]:
//!
//! - a single [`StyleUnit`] under a class or id selector (regular styles)
//! - a list of raw-selector [`Rule`]s (global styles)
//! - a named list of keyframe steps
//!
//! Renderers must be pure: the same tree and options always produce the same
//! text. The engine's change detection assumes it.

mod css;

use thiserror::Error;

use crate::style::{Rule, Selector, StyleUnit};

pub use css::CssTextRenderer;

/// Formatting options read from the config store on every render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Vendors used when prefixing (`webkit`, `moz`, ...).
    pub vendors: Vec<String>,
    /// Prefix every declaration, not only those of units that ask for it.
    pub auto_prefix: bool,
    /// Multi-line output with indentation.
    pub pretty_print: bool,
}

/// Input to a [`CssRenderer`].
#[derive(Debug, Clone, Copy)]
pub enum StyleTree<'a> {
    /// One unit rendered under a class or id selector.
    Unit {
        selector: &'a Selector,
        unit: &'a StyleUnit,
    },
    /// Rules with verbatim selectors.
    Rules(&'a [Rule]),
    /// An `@keyframes` block; each rule is one step (`from`, `50%`, `to`).
    Keyframes { name: &'a str, frames: &'a [Rule] },
}

/// Errors produced while rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A combinator tag the renderer does not know.
    #[error("unsupported combinator `{combinator}` for elements [{}] in style {style}", .elements.join(", "))]
    UnsupportedCombinator {
        combinator: String,
        elements: Vec<String>,
        style: String,
    },
}

/// Turns style trees into CSS text.
pub trait CssRenderer: Send {
    /// Renders `tree` to CSS text.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] when the tree contains something the
    /// renderer cannot express.
    fn render(&self, tree: &StyleTree<'_>, options: &RenderOptions) -> Result<String, RenderError>;
}
