//! Workflow graph construction and integration bookkeeping

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::errors::BonfireError;
use crate::models::integration::{Integration, NewIntegration};
use crate::models::workflow::{NewNode, Workflow, WorkflowNode, WorkflowUpdate};
use crate::store::{IntegrationRepository, WorkflowRepository};
use crate::utils::generate_id;

/// Builds and evolves workflows on top of the injected stores.
///
/// Every mutation is a get-modify-put; concurrent mutations of the same
/// workflow are not serialized and the last put wins.
pub struct WorkflowManager {
    workflows: Arc<WorkflowRepository>,
    integrations: Arc<IntegrationRepository>,
}

impl WorkflowManager {
    /// Create a new workflow manager
    pub fn new(workflows: Arc<WorkflowRepository>, integrations: Arc<IntegrationRepository>) -> Self {
        Self {
            workflows,
            integrations,
        }
    }

    /// Create an empty, inactive workflow
    pub fn create_workflow(&self, name: &str, description: Option<String>) -> Workflow {
        let now = Utc::now();
        let workflow = Workflow {
            id: generate_id(),
            name: name.to_string(),
            description,
            nodes: Vec::new(),
            integrations: Vec::new(),
            active: false,
            created_at: now,
            updated_at: now,
        };

        self.workflows.put(workflow.clone());
        info!("Created workflow: {} ({})", workflow.name, workflow.id);
        workflow
    }

    /// Get a workflow by ID
    pub fn get_workflow(&self, id: &str) -> Option<Workflow> {
        self.workflows.get(id)
    }

    /// Get all workflows
    pub fn list_workflows(&self) -> Vec<Workflow> {
        self.workflows.list()
    }

    /// Append a node to a workflow under a fresh ID
    pub fn add_node(&self, workflow_id: &str, node: NewNode) -> Result<WorkflowNode, BonfireError> {
        let mut workflow = self
            .workflows
            .get(workflow_id)
            .ok_or_else(BonfireError::workflow_not_found)?;

        let node = node.into_node(generate_id());
        workflow.nodes.push(node.clone());
        workflow.touch();
        self.workflows.put(workflow);

        debug!("Added node {} ({}) to workflow {}", node.id, node.node_type, workflow_id);
        Ok(node)
    }

    /// Add an edge from `source_id` to `target_id`.
    ///
    /// Connecting an existing edge again changes nothing. The target is not
    /// required to exist.
    pub fn connect_nodes(
        &self,
        workflow_id: &str,
        source_id: &str,
        target_id: &str,
    ) -> Result<(), BonfireError> {
        let mut workflow = self
            .workflows
            .get(workflow_id)
            .ok_or_else(BonfireError::workflow_not_found)?;

        let source = workflow
            .node_mut(source_id)
            .ok_or_else(|| BonfireError::NotFound("Source node not found".to_string()))?;

        if source.connections.iter().any(|c| c == target_id) {
            return Ok(());
        }

        source.connections.push(target_id.to_string());
        workflow.touch();
        self.workflows.put(workflow);

        debug!("Connected {} -> {} in workflow {}", source_id, target_id, workflow_id);
        Ok(())
    }

    /// Merge `update` over an existing workflow; `None` if it does not exist
    pub fn update_workflow(&self, id: &str, update: WorkflowUpdate) -> Option<Workflow> {
        let mut workflow = self.workflows.get(id)?;
        update.apply(&mut workflow);
        self.workflows.put(workflow.clone());
        Some(workflow)
    }

    /// Delete a workflow. Its integrations are left alone.
    pub fn delete_workflow(&self, id: &str) -> bool {
        let deleted = self.workflows.delete(id);
        if deleted {
            info!("Deleted workflow: {}", id);
        }
        deleted
    }

    /// Register a new, disconnected integration
    pub fn create_integration(&self, integration: NewIntegration) -> Integration {
        let integration = integration.into_integration(generate_id());
        self.integrations.put(integration.clone());
        info!(
            "Created {} integration: {} ({})",
            integration.integration_type(),
            integration.name,
            integration.id
        );
        integration
    }

    /// Get an integration by ID
    pub fn get_integration(&self, id: &str) -> Option<Integration> {
        self.integrations.get(id)
    }

    /// Get all integrations
    pub fn list_integrations(&self) -> Vec<Integration> {
        self.integrations.list()
    }

    /// Delete an integration. Nodes referencing it keep their reference.
    pub fn delete_integration(&self, id: &str) -> bool {
        self.integrations.delete(id)
    }
}
