//! Runtime state and the injection entry points.
//!
//! [`RuntimeState`] owns everything injection needs: the three registries,
//! the config store, the document host and the renderer. One instance stands
//! for one running application's style tree.
//!
//! - [`RuntimeState::inject_style`] reconciles a style variant with what is
//!   already in the document (see the `inject` module docs for the rules)
//! - [`RuntimeState::inject_aggregate`] appends keyframes and global styles to
//!   their shared elements
//! - [`global`] wraps one process-wide instance behind a mutex
//!
//! Every method that changes state takes `&mut self`, so a read-decide-mutate
//! sequence for an identifier can never interleave with another one.

mod aggregate;
pub mod global;
mod inject;

use serde_json::{json, Map, Value as Json};

use crate::config::Config;
use crate::dom::{MemoryDocument, StyleHost};
use crate::registry::{AggregateRecord, Registries, Registry, StyleRecord};
use crate::render::{CssRenderer, CssTextRenderer};

/// Which shared element an aggregate definition goes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateKind {
    Keyframes,
    Global,
}

impl AggregateKind {
    /// The literal `data-herb` value of the kind's singleton element.
    pub fn attribute(self) -> &'static str {
        match self {
            AggregateKind::Keyframes => "keyframes",
            AggregateKind::Global => "global",
        }
    }
}

/// Registries, config, document and renderer of one application.
#[derive(Debug)]
pub struct RuntimeState<H = MemoryDocument, R = CssTextRenderer> {
    registries: Registries,
    config: Config,
    host: H,
    renderer: R,
}

impl<H: StyleHost, R: CssRenderer> RuntimeState<H, R> {
    pub fn new(host: H, renderer: R, config: Config) -> Self {
        Self {
            registries: Registries::new(),
            config,
            host,
            renderer,
        }
    }

    /// Replaces the config store. Affects renders from now on; CSS already
    /// in the document is left as is.
    pub fn init(&mut self, config: Config) {
        log::debug!("herb config set: {:?}", config);
        self.config = config;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registries(&self) -> &Registries {
        &self.registries
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The record for a style identifier, if it was injected.
    pub fn style(&self, identifier: &str) -> Option<&StyleRecord> {
        self.registries.styles.get(identifier)
    }

    pub fn keyframes(&self, symbol: &str) -> Option<&AggregateRecord> {
        self.registries.keyframes.get(symbol)
    }

    pub fn global(&self, symbol: &str) -> Option<&AggregateRecord> {
        self.registries.globals.get(symbol)
    }

    /// Dumps every record as JSON, for debugging and inspection tools.
    pub fn snapshot(&self) -> Json {
        let mut styles = Map::new();
        for (id, record) in self.registries.styles.iter() {
            let mut data = Map::new();
            for (selector, unit) in &record.data {
                data.insert(
                    selector.to_css(),
                    serde_json::to_value(unit).unwrap_or(Json::Null),
                );
            }
            styles.insert(
                id.to_string(),
                json!({
                    "data": data,
                    "data-string": record.data_string,
                    "element": record.element,
                    "css": record.css,
                }),
            );
        }

        json!({
            "styles": styles,
            "keyframes": aggregate_snapshot(&self.registries.keyframes),
            "globals": aggregate_snapshot(&self.registries.globals),
        })
    }

    /// Splits the runtime into its document and renderer, dropping the
    /// registries.
    pub fn into_parts(self) -> (H, R) {
        (self.host, self.renderer)
    }
}

impl<H: StyleHost + Default, R: CssRenderer + Default> Default for RuntimeState<H, R> {
    fn default() -> Self {
        Self::new(H::default(), R::default(), Config::default())
    }
}

fn aggregate_snapshot(registry: &Registry<AggregateRecord>) -> Json {
    let mut out = Map::new();
    for (symbol, record) in registry.iter() {
        out.insert(
            symbol.to_string(),
            json!({
                "data": serde_json::to_value(&record.data).unwrap_or(Json::Null),
                "css": record.css,
            }),
        );
    }
    Json::Object(out)
}
