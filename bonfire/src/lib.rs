//! BonFire Library
//!
//! Workflow graphs, integration connectivity checks and sequential
//! workflow execution behind a small HTTP API.

pub mod app;
pub mod errors;
pub mod execution;
pub mod filesys;
pub mod http;
pub mod integrations;
pub mod logs;
pub mod models;
pub mod server;
pub mod storage;
pub mod store;
pub mod utils;
pub mod workflows;
