//! Dispatch failures.
//!
//! Every variant is a structural mismatch between what the model produced and
//! what the dispatch table declares. None of them is transient, so callers
//! surface them instead of retrying.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    /// The tool call names an operation that is not in the dispatch table.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// The arguments payload is not a JSON object.
    #[error("malformed arguments {raw:?}: {cause}")]
    MalformedArguments {
        raw: String,
        #[source]
        cause: serde_json::Error,
    },

    /// A declared argument is missing or has the wrong primitive type.
    #[error("operation '{operation}' requires argument '{field}'")]
    SchemaMismatch { operation: String, field: String },

    /// The model answered without selecting any operation.
    #[error("model produced no tool call")]
    NoToolCallProduced,

    /// The model selected several operations and the policy forbids it.
    #[error("model produced {0} tool calls, expected exactly one")]
    MultipleToolCalls(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_parts() {
        let err = DispatchError::UnknownOperation("delete".into());
        assert_eq!(err.to_string(), "unknown operation: delete");

        let err = DispatchError::SchemaMismatch {
            operation: "list".into(),
            field: "genre".into(),
        };
        assert_eq!(err.to_string(), "operation 'list' requires argument 'genre'");
    }

    #[test]
    fn malformed_arguments_keeps_cause_as_source() {
        let cause = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        let err = DispatchError::MalformedArguments {
            raw: "not-json".into(),
            cause,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("malformed arguments \"not-json\""));
    }
}
