//! Keyframes and global style injection.
//!
//! Aggregate definitions do not get an element each. All keyframes share the
//! element tagged `data-herb="keyframes"` and all global styles share the one
//! tagged `data-herb="global"`. Those singletons are looked up in the
//! document before being created, so a runtime that starts over an existing
//! document reuses them.
//!
//! A changed definition is appended again rather than patched in place; the
//! later text wins in the cascade.

use log::{debug, trace};

use super::{AggregateKind, RuntimeState};
use crate::dom::StyleHost;
use crate::error::HerbError;
use crate::registry::AggregateRecord;
use crate::render::{CssRenderer, StyleTree};
use crate::style::Rule;

impl<H: StyleHost, R: CssRenderer> RuntimeState<H, R> {
    /// Injects a keyframes or global definition under `symbol`.
    ///
    /// Keyframes are named after the last `/`-separated segment of `symbol`,
    /// so `app.anim/fade-in` becomes `@keyframes fade-in`.
    ///
    /// Nothing happens when `rules` equals what is stored for `symbol`.
    ///
    /// # Errors
    ///
    /// - [`HerbError::Render`] if a rule cannot be rendered; nothing is
    ///   changed
    /// - [`HerbError::PreconditionViolation`] if the singleton element cannot
    ///   be created
    pub fn inject_aggregate(
        &mut self,
        symbol: &str,
        kind: AggregateKind,
        rules: &[Rule],
    ) -> Result<(), HerbError> {
        let options = self.config.render_options();
        let RuntimeState {
            registries,
            host,
            renderer,
            ..
        } = self;
        let registry = match kind {
            AggregateKind::Keyframes => &mut registries.keyframes,
            AggregateKind::Global => &mut registries.globals,
        };

        if let Some(existing) = registry.get(symbol) {
            if existing.data.as_slice() == rules {
                trace!("{:?} {} unchanged", kind, symbol);
                return Ok(());
            }
        }

        let tree = match kind {
            AggregateKind::Keyframes => StyleTree::Keyframes {
                name: keyframes_name(symbol),
                frames: rules,
            },
            AggregateKind::Global => StyleTree::Rules(rules),
        };
        let css = renderer.render(&tree, &options)?;

        let element = host.acquire_singleton(kind.attribute())?;
        let chunk = match host.text(element) {
            Some(existing) if !existing.is_empty() => format!("\n{}", css),
            _ => css.clone(),
        };
        host.append_text(element, &chunk)?;
        debug!("appended {:?} {} to element {}", kind, symbol, element);

        registry.put(
            symbol,
            AggregateRecord {
                data: rules.to_vec(),
                css,
            },
        );
        Ok(())
    }
}

fn keyframes_name(symbol: &str) -> &str {
    symbol.rsplit('/').next().unwrap_or(symbol)
}
