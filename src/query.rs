//! One query, end to end: invoker → selection → executor.

use crate::executor::{select_call, CallExecutor};
use crate::invoker::Invoker;
use crate::tools;
use crate::types::{CallOutput, MultiCallPolicy, ToolCall};
use anyhow::{Context, Result};
use tracing::info;

/// Outcome of a single query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome {
    pub call: ToolCall,
    pub output: CallOutput,
}

/// Ask the invoker for a tool call and execute it.
///
/// Dispatch failures are returned as a [`crate::error::DispatchError`] inside
/// the `anyhow::Error` so callers can downcast to the exact failure kind.
pub async fn run_query(
    invoker: &dyn Invoker,
    executor: &CallExecutor,
    query: &str,
    policy: MultiCallPolicy,
) -> Result<QueryOutcome> {
    info!("User query: {}", query);

    let calls = invoker
        .select_tool_calls(query, &tools::tool_definitions())
        .await
        .context("Invoker failed to select a tool call")?;

    let call = select_call(calls, policy)?;
    info!("Inferred tool call: {}", call);

    let output = executor.execute(&call)?;
    info!("Tool call returned {} book(s)", output.books().len());

    Ok(QueryOutcome { call, output })
}
