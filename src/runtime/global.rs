//! The process-wide runtime.
//!
//! Most applications have exactly one style tree. This module keeps one
//! [`RuntimeState`] over a [`MemoryDocument`] behind a mutex and exposes the
//! injection operations as free functions. Each call holds the lock for its
//! whole reconciliation, so concurrent callers injecting the same identifier
//! can never both create an element.
//!
//! Records are returned by value because the lock is released on return.
//!
//! ```rust
//! use herb::runtime::global;
//! use herb::{Config, Mode, Selector, StyleUnit};
//!
//! global::init(Config::new().with_mode(Mode::Production));
//! let record = global::inject_style(
//!     "docs/title",
//!     &Selector::class("title"),
//!     &StyleUnit::new().add("font-weight", "bold"),
//!     None,
//!     false,
//! )
//! .unwrap();
//! assert_eq!(record.css, ".title{font-weight:bold}");
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;

use super::{AggregateKind, RuntimeState};
use crate::config::Config;
use crate::dom::MemoryDocument;
use crate::error::HerbError;
use crate::registry::StyleRecord;
use crate::render::CssTextRenderer;
use crate::style::{Rule, Selector, StyleUnit};

/// The runtime type held by this module.
pub type GlobalRuntime = RuntimeState<MemoryDocument, CssTextRenderer>;

static RUNTIME: Lazy<Mutex<GlobalRuntime>> = Lazy::new(|| Mutex::new(RuntimeState::default()));

fn lock() -> MutexGuard<'static, GlobalRuntime> {
    // A panic mid-injection cannot leave a half-written record: every write
    // happens after rendering succeeded, and a rebuild is one host call.
    RUNTIME.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Sets the process-wide config used by every later render.
pub fn init(config: Config) {
    lock().init(config);
}

/// See [`RuntimeState::inject_style`].
pub fn inject_style(
    identifier: &str,
    variant: &Selector,
    unit: &StyleUnit,
    data_attribute: Option<&str>,
    is_group: bool,
) -> Result<StyleRecord, HerbError> {
    lock()
        .inject_style(identifier, variant, unit, data_attribute, is_group)
        .cloned()
}

/// See [`RuntimeState::inject_aggregate`].
pub fn inject_aggregate(symbol: &str, kind: AggregateKind, rules: &[Rule]) -> Result<(), HerbError> {
    lock().inject_aggregate(symbol, kind, rules)
}

/// The stored record for `identifier`, if any.
pub fn style(identifier: &str) -> Option<StyleRecord> {
    lock().style(identifier).cloned()
}

/// Runs `f` with exclusive access to the process-wide runtime.
pub fn with_runtime<T>(f: impl FnOnce(&mut GlobalRuntime) -> T) -> T {
    f(&mut lock())
}

/// Replaces the process-wide runtime with a fresh one: empty document, empty
/// registries, default config.
pub fn reset() {
    *lock() = RuntimeState::default();
}
