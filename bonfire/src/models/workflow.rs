//! Workflow models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::integration::Integration;

/// A workflow definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    /// Unique workflow ID
    pub id: String,

    /// Workflow name
    pub name: String,

    /// Workflow description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Nodes in execution order
    #[serde(default)]
    pub nodes: Vec<WorkflowNode>,

    /// Integrations scoped to this workflow
    #[serde(default)]
    pub integrations: Vec<Integration>,

    /// Set by the caller, not consulted during execution
    #[serde(default)]
    pub active: bool,

    /// Created timestamp
    pub created_at: DateTime<Utc>,

    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Workflow {
    /// Get a node by ID
    pub fn node(&self, node_id: &str) -> Option<&WorkflowNode> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    /// Get a mutable node by ID
    pub fn node_mut(&mut self, node_id: &str) -> Option<&mut WorkflowNode> {
        self.nodes.iter_mut().find(|n| n.id == node_id)
    }

    /// Get a workflow-scoped integration by ID
    pub fn integration(&self, integration_id: &str) -> Option<&Integration> {
        self.integrations.iter().find(|i| i.id == integration_id)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Node type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Trigger,
    Action,
    Integration,
    Code,
    Api,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Trigger => "trigger",
            NodeType::Action => "action",
            NodeType::Integration => "integration",
            NodeType::Code => "code",
            NodeType::Api => "api",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in the workflow graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowNode {
    /// Unique node ID
    pub id: String,

    #[serde(rename = "type")]
    pub node_type: NodeType,

    /// Display label
    pub name: String,

    /// Node-specific configuration
    #[serde(default)]
    pub config: Map<String, Value>,

    /// Layout position, presentation only
    #[serde(default)]
    pub position: Position,

    /// Outgoing edges (target node IDs)
    #[serde(default)]
    pub connections: Vec<String>,
}

impl WorkflowNode {
    /// Get a string value from the node configuration
    pub fn config_str(&self, key: &str) -> Option<&str> {
        self.config.get(key).and_then(|v| v.as_str())
    }
}

/// Node position
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A node to be added to a workflow; the ID is assigned on insertion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNode {
    #[serde(rename = "type")]
    pub node_type: NodeType,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub config: Map<String, Value>,

    #[serde(default)]
    pub position: Position,

    #[serde(default)]
    pub connections: Vec<String>,
}

impl NewNode {
    pub fn new(node_type: NodeType, name: impl Into<String>) -> Self {
        Self {
            node_type,
            name: name.into(),
            config: Map::new(),
            position: Position::default(),
            connections: Vec::new(),
        }
    }

    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn into_node(self, id: String) -> WorkflowNode {
        WorkflowNode {
            id,
            node_type: self.node_type,
            name: self.name,
            config: self.config,
            position: self.position,
            connections: self.connections,
        }
    }
}

/// Partial workflow update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowUpdate {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub nodes: Option<Vec<WorkflowNode>>,

    #[serde(default)]
    pub integrations: Option<Vec<Integration>>,

    #[serde(default)]
    pub active: Option<bool>,
}

impl WorkflowUpdate {
    /// Merge the provided fields over `workflow`. The ID and creation time are kept.
    pub fn apply(self, workflow: &mut Workflow) {
        if let Some(name) = self.name {
            workflow.name = name;
        }
        if let Some(description) = self.description {
            workflow.description = Some(description);
        }
        if let Some(nodes) = self.nodes {
            workflow.nodes = nodes;
        }
        if let Some(integrations) = self.integrations {
            workflow.integrations = integrations;
        }
        if let Some(active) = self.active {
            workflow.active = active;
        }
        workflow.touch();
    }
}
