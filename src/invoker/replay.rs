//! Replays a recorded chat-completion response.
//!
//! Accepts the OpenAI-compatible response body a function-calling model
//! returns, so a captured response can be fed through the dispatcher without
//! a live model.

use super::Invoker;
use crate::tools::ToolDefinition;
use crate::types::ToolCall;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

// -- OpenAI-compatible response types ----------------------------------------

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    tool_calls: Vec<ToolCallPayload>,
}

#[derive(Debug, Deserialize)]
struct ToolCallPayload {
    function: FunctionCallPayload,
}

#[derive(Debug, Deserialize)]
struct FunctionCallPayload {
    name: String,
    arguments: String,
}

/// Invoker backed by a recorded response body.
#[derive(Debug, Clone)]
pub struct ReplayInvoker {
    calls: Vec<ToolCall>,
}

impl ReplayInvoker {
    /// Parse a response body.
    pub fn from_json(body: &str) -> Result<Self> {
        let response: ChatResponse =
            serde_json::from_str(body).context("Failed to parse recorded model response")?;

        let Some(choice) = response.choices.into_iter().next() else {
            warn!("Recorded response has no choices");
            return Ok(Self { calls: Vec::new() });
        };

        let calls = choice
            .message
            .tool_calls
            .into_iter()
            .map(|tc| ToolCall::new(tc.function.name, tc.function.arguments))
            .collect();

        Ok(Self { calls })
    }

    /// Read and parse a response body from disk.
    pub async fn from_file(path: &Path) -> Result<Self> {
        let body = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read recorded response {}", path.display()))?;
        Self::from_json(&body)
    }

    pub fn calls(&self) -> &[ToolCall] {
        &self.calls
    }
}

#[async_trait]
impl Invoker for ReplayInvoker {
    async fn select_tool_calls(&self, query: &str, tools: &[ToolDefinition]) -> Result<Vec<ToolCall>> {
        debug!(
            "Replaying {} recorded tool call(s) for query {:?} ({} tools declared)",
            self.calls.len(),
            query,
            tools.len()
        );
        Ok(self.calls.clone())
    }
}
