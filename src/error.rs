//! Top-level error type.

use thiserror::Error;

use crate::config::ConfigError;
use crate::dom::HostError;
use crate::render::RenderError;

/// Errors surfaced by injection entry points.
///
/// None of these are transient. Each one points at a broken document, a
/// malformed style or a misbehaving style function, so callers should report
/// them rather than retry.
#[derive(Debug, Error)]
pub enum HerbError {
    /// The document has no usable style root, or a handle no longer resolves.
    #[error("precondition violated: {0}")]
    PreconditionViolation(#[from] HostError),

    /// The renderer rejected a style. Nothing was injected.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// A style function returned something other than a declarations map.
    #[error("style function {namespace}/{function} must return a map of declarations, got: {value}")]
    ProducerContractViolation {
        function: String,
        namespace: String,
        value: String,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_display() {
        let err = HerbError::from(HostError::MissingRoot);
        let msg = err.to_string();
        assert!(msg.contains("precondition"));
        assert!(msg.contains("root"));
    }

    #[test]
    fn test_producer_violation_display() {
        let err = HerbError::ProducerContractViolation {
            function: "button".into(),
            namespace: "app.ui".into(),
            value: "42".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("app.ui/button"));
        assert!(msg.contains("42"));
    }
}
