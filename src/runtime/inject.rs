//! Style reconciliation.
//!
//! Each call to [`RuntimeState::inject_style`] compares one variant against
//! the record stored for its identifier and takes exactly one of four paths:
//!
//! | Record | Variant | Unit | Action |
//! |--------|---------|------|--------|
//! | absent | - | - | create an element, render the variant into it |
//! | present | absent | - | render the variant, append it to the element |
//! | present | present | changed | rewrite the element's text |
//! | present | present | equal | nothing |
//!
//! A rebuild of a grouped style replays every variant in its original order,
//! so siblings survive a change to one of them. A rebuild of a non-grouped
//! style keeps only the changed variant.
//!
//! CSS is always rendered before anything is mutated. A render error leaves
//! both the registry and the document exactly as they were.

use std::collections::hash_map::Entry;

use indexmap::IndexMap;
use log::{debug, trace, warn};

use super::RuntimeState;
use crate::dom::{ElementHandle, HostError, StyleHost};
use crate::error::HerbError;
use crate::registry::StyleRecord;
use crate::render::{CssRenderer, RenderError, RenderOptions, StyleTree};
use crate::style::{Selector, StyleUnit};

/// How an injected variant relates to the stored record.
enum Change {
    NewVariant,
    Updated,
    Unchanged,
}

impl<H: StyleHost, R: CssRenderer> RuntimeState<H, R> {
    /// Injects one variant of a style and returns the identifier's record.
    ///
    /// - `identifier`: registry key shared by all variants of the style
    /// - `variant`: the selector this unit renders under
    /// - `data_attribute`: `data-herb` value for a newly created element;
    ///   ignored in production mode
    /// - `is_group`: whether the identifier's variants form a group that must
    ///   be rebuilt together
    ///
    /// # Errors
    ///
    /// - [`HerbError::Render`] if the unit cannot be rendered; nothing is
    ///   changed
    /// - [`HerbError::PreconditionViolation`] if the document has no style
    ///   root (first injection) or rejects an element handle
    pub fn inject_style(
        &mut self,
        identifier: &str,
        variant: &Selector,
        unit: &StyleUnit,
        data_attribute: Option<&str>,
        is_group: bool,
    ) -> Result<&StyleRecord, HerbError> {
        let options = self.config.render_options();
        let attribute = data_attribute.filter(|_| self.config.is_development());
        let RuntimeState {
            registries,
            host,
            renderer,
            ..
        } = self;

        match registries.styles.entry(identifier) {
            Entry::Vacant(slot) => {
                let css = render_variant(renderer, variant, unit, &options)?;
                let element = host.create_element(attribute)?;
                host.append_text(element, &css)?;
                debug!("created style element {} for {}", element, identifier);

                let mut data = IndexMap::new();
                data.insert(variant.clone(), unit.clone());
                Ok(&*slot.insert(StyleRecord {
                    data,
                    data_string: attribute.map(str::to_string),
                    element,
                    css,
                }))
            }
            Entry::Occupied(slot) => {
                let record = slot.into_mut();
                let change = match record.data.get(variant) {
                    None => Change::NewVariant,
                    Some(existing) if existing == unit => Change::Unchanged,
                    Some(_) => Change::Updated,
                };

                match change {
                    Change::Unchanged => {
                        trace!("{} {} unchanged", identifier, variant);
                    }
                    Change::NewVariant => {
                        let css = render_variant(renderer, variant, unit, &options)?;
                        // A record always holds at least one variant.
                        let chunk = format!("\n{}", css);
                        host.append_text(record.element, &chunk)?;
                        record.css.push_str(&chunk);
                        record.data.insert(variant.clone(), unit.clone());
                        debug!("added variant {} to {}", variant, identifier);
                    }
                    Change::Updated if is_group => {
                        let mut data = record.data.clone();
                        // Replacing an existing key keeps its position.
                        data.insert(variant.clone(), unit.clone());
                        let rendered = data
                            .iter()
                            .map(|(selector, unit)| render_variant(renderer, selector, unit, &options))
                            .collect::<Result<Vec<_>, _>>()?;

                        debug!(
                            "rebuilding group {} ({} variants) after {} changed",
                            identifier,
                            data.len(),
                            variant
                        );
                        let css = replay(host, record.element, rendered)?;
                        *record = StyleRecord {
                            data,
                            data_string: record.data_string.take(),
                            element: record.element,
                            css,
                        };
                    }
                    Change::Updated => {
                        let css = render_variant(renderer, variant, unit, &options)?;
                        if record.data.len() > 1 {
                            warn!(
                                "{} is not a group but holds {} variants; updating {} discards the others",
                                identifier,
                                record.data.len(),
                                variant
                            );
                        }

                        debug!("rebuilding {} after {} changed", identifier, variant);
                        host.replace_text(record.element, &css)?;
                        let mut data = IndexMap::new();
                        data.insert(variant.clone(), unit.clone());
                        *record = StyleRecord {
                            data,
                            data_string: record.data_string.take(),
                            element: record.element,
                            css,
                        };
                    }
                }

                Ok(&*record)
            }
        }
    }
}

fn render_variant<R: CssRenderer>(
    renderer: &R,
    selector: &Selector,
    unit: &StyleUnit,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    renderer.render(&StyleTree::Unit { selector, unit }, options)
}

/// Writes every rendered variant, newline-joined, as the element's whole
/// text in one host call. A failing host leaves the old text in place.
fn replay<H: StyleHost>(
    host: &mut H,
    element: ElementHandle,
    rendered: Vec<String>,
) -> Result<String, HostError> {
    let css = rendered.join("\n");
    host.replace_text(element, &css)?;
    Ok(css)
}
