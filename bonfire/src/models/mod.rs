//! Domain models

pub mod execution;
pub mod integration;
pub mod workflow;
