//! Workflow graph mutation

pub mod manager;
