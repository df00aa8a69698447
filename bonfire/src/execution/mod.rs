//! Workflow execution

pub mod executor;
pub mod node_runner;
