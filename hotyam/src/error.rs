//! Failure values for the node classifier.
//!
//! Parse failures are ordinary values, not panics: every parse attempt
//! returns `Result<_, NotParsed>`, and "try variant A, else variant B" is
//! plain control flow over that result.

use serde_yaml_ng::Value;

/// A parser could not classify a tree value.
///
/// Carries the offending value and a `"Component: reason"` message. When a
/// classifier tries several alternatives, only the last alternative's
/// failure survives; earlier shapes were already ruled out structurally.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct NotParsed {
    /// The tree value that failed to parse.
    pub node: Value,
    /// `"Component: reason"`, e.g. `"Node: not a valid HTML node"`.
    pub message: String,
}

impl NotParsed {
    pub(crate) fn new(component: &str, node: &Value, reason: &str) -> Self {
        Self {
            node: node.clone(),
            message: format!("{component}: {reason}"),
        }
    }

    /// Human-readable dump for outer entry points: the offending subtree
    /// re-serialized as YAML, followed by the failure message.
    pub fn diagnostic(&self) -> String {
        let node = serde_yaml_ng::to_string(&self.node)
            .unwrap_or_else(|_| format!("{:?}\n", self.node));
        format!("Could not parse:\n{node}\n{}", self.message)
    }
}

/// Error type for the text-level convenience entry (`parse_str`).
///
/// YAML syntax errors happen before the classifier ever runs, so they are a
/// separate arm from classification failures.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source text is not valid YAML.
    #[error("invalid yaml: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    /// The tree parsed, but does not describe an HTML document.
    #[error(transparent)]
    NotParsed(#[from] NotParsed),
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_format() {
        let failure = NotParsed::new("Literal", &Value::Null, "not text");
        assert_eq!(failure.message, "Literal: not text");
        assert_eq!(failure.to_string(), "Literal: not text");
    }

    #[test]
    fn test_carries_offending_node() {
        let node = Value::Sequence(vec![Value::Bool(true)]);
        let failure = NotParsed::new("Text", &node, "not a valid text node");
        assert_eq!(failure.node, node);
    }

    #[test]
    fn test_diagnostic_dump() {
        let failure = NotParsed {
            node: Value::String("foo".into()),
            message: "bad node".into(),
        };
        assert_eq!(failure.diagnostic(), "Could not parse:\nfoo\n\nbad node");
    }

    #[test]
    fn test_equality() {
        let a = NotParsed::new("Node", &Value::Null, "not a valid HTML node");
        let b = NotParsed::new("Node", &Value::Null, "not a valid HTML node");
        assert_eq!(a, b);
    }
}
