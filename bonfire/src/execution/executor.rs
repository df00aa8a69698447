//! Sequential workflow executor

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info};

use crate::errors::BonfireError;
use crate::execution::node_runner::NodeRunnerRegistry;
use crate::models::execution::{ExecutionReport, ExecutionState, NodeResult};
use crate::models::workflow::Workflow;
use crate::store::WorkflowRepository;

/// Runs a workflow's nodes one after another in array order.
///
/// `connections` are not consulted. The first failing node ends the run and
/// nodes after it are never attempted.
pub struct WorkflowExecutor {
    workflows: Arc<WorkflowRepository>,
    runners: NodeRunnerRegistry,
}

impl WorkflowExecutor {
    /// Create a new workflow executor
    pub fn new(workflows: Arc<WorkflowRepository>, runners: NodeRunnerRegistry) -> Self {
        Self { workflows, runners }
    }

    /// Execute a stored workflow by ID
    pub async fn execute(&self, workflow_id: &str) -> Result<ExecutionReport, BonfireError> {
        let workflow = self
            .workflows
            .get(workflow_id)
            .ok_or_else(BonfireError::workflow_not_found)?;

        Ok(self.run(&workflow).await)
    }

    /// Execute a workflow snapshot
    pub async fn run(&self, workflow: &Workflow) -> ExecutionReport {
        info!("Executing workflow: {} ({} nodes)", workflow.name, workflow.nodes.len());

        let mut results = Vec::with_capacity(workflow.nodes.len());
        let mut status = ExecutionState::Completed;

        for node in &workflow.nodes {
            debug!("Executing node: {} ({})", node.id, node.node_type);

            let runner = self.runners.runner_for(node.node_type);
            match runner.run(node, workflow).await {
                Ok(output) => {
                    results.push(NodeResult::succeeded(&node.id, output));
                }
                Err(e) => {
                    error!("Node {} failed: {}", node.id, e);
                    results.push(NodeResult::failed(&node.id, e.to_string()));
                    status = ExecutionState::Failed;
                    break;
                }
            }
        }

        ExecutionReport {
            workflow_id: workflow.id.clone(),
            executed_at: Utc::now(),
            status,
            results,
        }
    }
}
