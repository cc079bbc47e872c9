//! Style model consumed by the reconciliation engine.
//!
//! This module provides the data that flows from style producers into the
//! renderer:
//!
//! - [`StyleUnit`]: declarations for one selector plus nested at-rules
//! - [`Value`]: a single declaration value
//! - [`Selector`]: the class or id a unit is rendered under (the variant key)
//! - [`StyleIdentifier`]: the registry key shared by all variants of a style
//! - [`Rule`]: a raw selector paired with a unit, used by keyframes and
//!   global styles
//!
//! Equality on every type here is structural. The engine relies on it to
//! decide whether a producer's output changed.

mod identifier;
mod producer;
mod selector;
mod unit;
mod value;

pub use identifier::{class_name, debug_attribute, StyleIdentifier};
pub use selector::{Selector, SelectorKind};
pub use unit::{
    CombinatorKey, Declarations, MediaFeature, MediaQuery, Rule, StyleUnit, SupportsQuery,
};
pub use value::Value;
