//! Boundary to the language-model runtime that selects tool calls.
//!
//! The dispatch layer only consumes what an invoker returns; how the model is
//! prompted, retried, or reached over the network lives behind this trait.

pub mod replay;

pub use replay::ReplayInvoker;

use crate::tools::ToolDefinition;
use crate::types::ToolCall;
use anyhow::Result;
use async_trait::async_trait;

/// Turns a user query plus the declared tools into the model's tool calls.
#[async_trait]
pub trait Invoker: Send + Sync {
    /// Returns every tool call the model produced, in order. An empty vec
    /// means the model answered without selecting a tool.
    async fn select_tool_calls(&self, query: &str, tools: &[ToolDefinition]) -> Result<Vec<ToolCall>>;
}

/// Invoker that always returns the same calls.
#[derive(Debug, Clone, Default)]
pub struct StaticInvoker {
    calls: Vec<ToolCall>,
}

impl StaticInvoker {
    pub fn new(calls: Vec<ToolCall>) -> Self {
        Self { calls }
    }

    pub fn single(call: ToolCall) -> Self {
        Self { calls: vec![call] }
    }
}

#[async_trait]
impl Invoker for StaticInvoker {
    async fn select_tool_calls(&self, _query: &str, _tools: &[ToolDefinition]) -> Result<Vec<ToolCall>> {
        Ok(self.calls.clone())
    }
}
