//! Execution report models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Overall outcome of a workflow run
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionState {
    Completed,
    Failed,
}

/// Outcome of a single node
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeResult {
    pub node_id: String,

    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NodeResult {
    pub fn succeeded(node_id: impl Into<String>, result: Value) -> Self {
        Self {
            node_id: node_id.into(),
            success: true,
            result: Some(result),
            error: None,
        }
    }

    pub fn failed(node_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            success: false,
            result: None,
            error: Some(error.into()),
        }
    }
}

/// Per-node trace of one workflow run, in node order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionReport {
    pub workflow_id: String,

    pub executed_at: DateTime<Utc>,

    pub status: ExecutionState,

    pub results: Vec<NodeResult>,
}

impl ExecutionReport {
    /// The failing node's result, if the run halted
    pub fn failure(&self) -> Option<&NodeResult> {
        self.results.iter().find(|r| !r.success)
    }
}
