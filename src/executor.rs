//! Tool call execution engine.
//!
//! Turns a raw tool call into a catalog result:
//! 1. Look up the operation in the dispatch table
//! 2. Parse the arguments payload as a JSON object
//! 3. Validate it against the operation's declared parameters
//! 4. Run the bound catalog query

use crate::catalog::Catalog;
use crate::error::DispatchError;
use crate::tools;
use crate::types::{CallOutput, MultiCallPolicy, ToolCall};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

/// Executes tool calls against a fixed catalog.
#[derive(Debug, Clone)]
pub struct CallExecutor {
    catalog: Catalog,
}

impl CallExecutor {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Execute a tool call by name.
    pub fn execute(&self, call: &ToolCall) -> Result<CallOutput, DispatchError> {
        info!("Calling {} with args {}", call.name, call.arguments);

        let spec = tools::lookup(&call.name).ok_or_else(|| {
            warn!("Rejected tool call to unknown operation '{}'", call.name);
            DispatchError::UnknownOperation(call.name.clone())
        })?;

        let args = parse_arguments(&call.arguments)?;
        debug!("Parsed {} argument field(s) for '{}'", args.len(), spec.name);

        if let Some(field) = tools::definition::first_mismatch(spec.params, &args) {
            warn!("Tool call '{}' failed schema check on '{}'", spec.name, field);
            return Err(schema_mismatch(spec, field));
        }

        spec.operation
            .run(&self.catalog, Value::Object(args))
            .map_err(|e| {
                warn!("Tool call '{}' could not decode arguments: {}", spec.name, e);
                schema_mismatch(spec, spec.params.first().map_or("", |p| p.name))
            })
    }
}

fn schema_mismatch(spec: &tools::OperationSpec, field: &str) -> DispatchError {
    DispatchError::SchemaMismatch {
        operation: spec.name.to_string(),
        field: field.to_string(),
    }
}

/// Parse a raw arguments payload into a JSON object.
///
/// Valid JSON that is not an object (e.g. `"abc"` or `[1]`) is rejected the
/// same way as unparseable text.
pub fn parse_arguments(raw: &str) -> Result<Map<String, Value>, DispatchError> {
    serde_json::from_str::<Map<String, Value>>(raw).map_err(|cause| {
        warn!("Malformed tool arguments: {}", cause);
        DispatchError::MalformedArguments {
            raw: raw.to_string(),
            cause,
        }
    })
}

/// Pick the tool call to execute from everything the model returned.
pub fn select_call(calls: Vec<ToolCall>, policy: MultiCallPolicy) -> Result<ToolCall, DispatchError> {
    let count = calls.len();
    match (count, policy) {
        (0, _) => Err(DispatchError::NoToolCallProduced),
        (1, _) | (_, MultiCallPolicy::First) => {
            if count > 1 {
                warn!("Model produced {} tool calls; keeping the first", count);
            }
            calls.into_iter().next().ok_or(DispatchError::NoToolCallProduced)
        }
        (_, MultiCallPolicy::Fail) => Err(DispatchError::MultipleToolCalls(count)),
    }
}
