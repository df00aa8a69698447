//! Node runner implementations

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::errors::BonfireError;
use crate::models::workflow::{NodeType, Workflow, WorkflowNode};

/// Node runner trait
#[async_trait]
pub trait NodeRunner: Send + Sync {
    /// Run a node in the context of its workflow
    async fn run(&self, node: &WorkflowNode, workflow: &Workflow) -> Result<Value, BonfireError>;
}

/// Runners keyed by node type, with a fallback for unregistered types
pub struct NodeRunnerRegistry {
    runners: HashMap<NodeType, Arc<dyn NodeRunner>>,
    fallback: Arc<dyn NodeRunner>,
}

impl NodeRunnerRegistry {
    /// An empty registry; every node goes to the passthrough runner
    pub fn empty() -> Self {
        Self {
            runners: HashMap::new(),
            fallback: Arc::new(PassthroughNodeRunner),
        }
    }

    /// Register (or replace) the runner for a node type
    pub fn register(&mut self, node_type: NodeType, runner: Arc<dyn NodeRunner>) -> &mut Self {
        self.runners.insert(node_type, runner);
        self
    }

    /// Replace the runner used for unregistered node types
    pub fn set_fallback(&mut self, runner: Arc<dyn NodeRunner>) -> &mut Self {
        self.fallback = runner;
        self
    }

    /// Get the runner for a node type
    pub fn runner_for(&self, node_type: NodeType) -> Arc<dyn NodeRunner> {
        self.runners
            .get(&node_type)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

impl Default for NodeRunnerRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register(NodeType::Trigger, Arc::new(TriggerNodeRunner))
            .register(NodeType::Action, Arc::new(ActionNodeRunner))
            .register(NodeType::Integration, Arc::new(IntegrationNodeRunner));
        registry
    }
}

/// Trigger node runner. Acknowledges the trigger; no trigger source is evaluated.
pub struct TriggerNodeRunner;

#[async_trait]
impl NodeRunner for TriggerNodeRunner {
    async fn run(&self, node: &WorkflowNode, _workflow: &Workflow) -> Result<Value, BonfireError> {
        debug!("Trigger: {}", node.name);
        Ok(json!({ "message": "Workflow triggered" }))
    }
}

/// Action node runner. Echoes the node configuration back.
pub struct ActionNodeRunner;

#[async_trait]
impl NodeRunner for ActionNodeRunner {
    async fn run(&self, node: &WorkflowNode, _workflow: &Workflow) -> Result<Value, BonfireError> {
        debug!("Action: {} {:?}", node.name, node.config);
        Ok(json!({
            "message": "Action executed",
            "config": node.config,
        }))
    }
}

/// Integration node runner.
///
/// Resolves `config.integrationId` against the workflow's own integrations.
/// The integration itself is not called.
pub struct IntegrationNodeRunner;

#[async_trait]
impl NodeRunner for IntegrationNodeRunner {
    async fn run(&self, node: &WorkflowNode, workflow: &Workflow) -> Result<Value, BonfireError> {
        // Only string IDs can match; other values are reported as given
        let integration = match node.config.get("integrationId") {
            Some(Value::String(id)) => workflow
                .integration(id)
                .ok_or_else(|| BonfireError::integration_not_found(id))?,
            Some(other) => return Err(BonfireError::integration_not_found(&other.to_string())),
            None => return Err(BonfireError::integration_not_found("undefined")),
        };

        debug!("Integration: {} -> {}", node.name, integration.id);
        Ok(json!({
            "message": "Integration called",
            "integration": integration.integration_type(),
        }))
    }
}

/// Passthrough node runner (for node types without a dedicated runner)
pub struct PassthroughNodeRunner;

#[async_trait]
impl NodeRunner for PassthroughNodeRunner {
    async fn run(&self, node: &WorkflowNode, _workflow: &Workflow) -> Result<Value, BonfireError> {
        debug!("Passthrough node ({}): {}", node.node_type, node.name);
        Ok(json!({
            "message": "Node executed",
            "type": node.node_type,
        }))
    }
}
