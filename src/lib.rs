//! # Herb - runtime style injection
//!
//! Herb turns style declarations produced by plain functions into CSS text and
//! keeps that text in managed `<style>` elements of a document. Calling a
//! style function again with the same output is free; calling it with a
//! different output patches the existing element instead of adding a new one.
//!
//! ## Quick Start
//!
//! ```rust
//! use herb::{Config, CssTextRenderer, MemoryDocument, Mode, RuntimeState, Selector, StyleUnit};
//!
//! let mut runtime = RuntimeState::new(
//!     MemoryDocument::new(),
//!     CssTextRenderer,
//!     Config::default().with_mode(Mode::Production),
//! );
//!
//! let button = StyleUnit::new().add("color", "red");
//! let record = runtime
//!     .inject_style("demo/button", &Selector::class("button"), &button, None, false)
//!     .unwrap();
//!
//! assert_eq!(record.css, ".button{color:red}");
//! ```
//!
//! ## Core Concepts
//!
//! - [`StyleUnit`]: declarations for one selector, plus pseudo classes, media
//!   and supports blocks, combinators and vendor prefixing
//! - [`RuntimeState`]: owns the registries, the config store, the document
//!   and the renderer; [`RuntimeState::inject_style`] is the reconciliation
//!   entry point
//! - [`StyleHost`]: the document seam; [`MemoryDocument`] is the built-in host
//! - [`CssRenderer`]: the CSS text seam; [`CssTextRenderer`] is the built-in
//!   renderer
//! - [`runtime::global`]: one process-wide runtime behind a mutex
//!
//! ## Grouped styles
//!
//! Several variants can share one identifier (and one element). Pass
//! `is_group = true` so that a change to any variant rebuilds the whole group
//! in its original order:
//!
//! ```rust
//! use herb::{Config, CssTextRenderer, MemoryDocument, Mode, RuntimeState, Selector, StyleUnit};
//!
//! let mut runtime = RuntimeState::new(
//!     MemoryDocument::new(),
//!     CssTextRenderer,
//!     Config::default().with_mode(Mode::Production),
//! );
//! let primary = Selector::class("btn-primary");
//! let danger = Selector::class("btn-danger");
//!
//! runtime.inject_style("ui/btn", &primary, &StyleUnit::new().add("color", "blue"), None, true).unwrap();
//! runtime.inject_style("ui/btn", &danger, &StyleUnit::new().add("color", "red"), None, true).unwrap();
//! let record = runtime
//!     .inject_style("ui/btn", &danger, &StyleUnit::new().add("color", "crimson"), None, true)
//!     .unwrap();
//!
//! assert_eq!(record.css, ".btn-primary{color:blue}\n.btn-danger{color:crimson}");
//! ```

pub mod config;
pub mod dom;
mod error;
pub mod registry;
pub mod render;
pub mod runtime;
pub mod style;

pub use config::{Config, ConfigError, Mode};
pub use dom::{ElementHandle, HostError, MemoryDocument, StyleHost, DATA_ATTRIBUTE};
pub use error::HerbError;
pub use registry::{AggregateRecord, Registries, Registry, StyleRecord};
pub use render::{CssRenderer, CssTextRenderer, RenderError, RenderOptions, StyleTree};
pub use runtime::{AggregateKind, RuntimeState};
pub use style::{
    class_name, debug_attribute, CombinatorKey, Declarations, MediaFeature, MediaQuery, Rule,
    Selector, SelectorKind, StyleIdentifier, StyleUnit, SupportsQuery, Value,
};
