//! HTTP request handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};
use bonfire_api::models::{
    ConnectNodesRequest, CreateWorkflowRequest, HealthResponse, SuccessResponse,
};

use crate::errors::BonfireError;
use crate::models::integration::{presets, NewIntegration};
use crate::models::workflow::{NewNode, WorkflowUpdate};
use crate::server::error::ApiError;
use crate::server::state::ServerState;
use crate::utils::{now_rfc3339, version_info};

fn require_name(name: &str, what: &str) -> Result<(), ApiError> {
    if name.trim().is_empty() {
        return Err(BonfireError::ValidationError(format!("{} name is required", what)).into());
    }
    Ok(())
}

/// Health check handler
pub async fn health_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let version = version_info();
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: version.name,
        version: version.version,
        timestamp: now_rfc3339(),
        uptime_secs: state.started_at.elapsed().as_secs(),
    })
}

/// Create workflow handler
pub async fn create_workflow_handler(
    State(state): State<Arc<ServerState>>,
    request: Result<Json<CreateWorkflowRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = request?;
    require_name(&request.name, "Workflow")?;
    let workflow = state
        .manager
        .create_workflow(&request.name, request.description);
    Ok(Json(workflow))
}

/// List workflows handler
pub async fn list_workflows_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(state.manager.list_workflows())
}

/// Get workflow handler
pub async fn get_workflow_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .manager
        .get_workflow(&id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Workflow not found"))
}

/// Update workflow handler
pub async fn update_workflow_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
    update: Result<Json<WorkflowUpdate>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(update) = update?;
    if let Some(name) = &update.name {
        require_name(name, "Workflow")?;
    }
    state
        .manager
        .update_workflow(&id, update)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Workflow not found"))
}

/// Delete workflow handler
pub async fn delete_workflow_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.manager.delete_workflow(&id) {
        return Err(ApiError::not_found("Workflow not found"));
    }
    Ok(Json(SuccessResponse { success: true }))
}

/// Add node handler
pub async fn add_node_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
    node: Result<Json<NewNode>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(node) = node?;
    require_name(&node.name, "Node")?;
    let node = state.manager.add_node(&id, node)?;
    Ok(Json(node))
}

/// Connect nodes handler
pub async fn connect_nodes_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
    request: Result<Json<ConnectNodesRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = request?;
    state
        .manager
        .connect_nodes(&id, &request.source_node_id, &request.target_node_id)?;
    Ok(Json(SuccessResponse { success: true }))
}

/// Execute workflow handler
pub async fn execute_workflow_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let report = state.executor.execute(&id).await?;
    Ok(Json(report))
}

/// Integration presets handler
pub async fn presets_handler() -> impl IntoResponse {
    Json(presets())
}

/// Create integration handler
pub async fn create_integration_handler(
    State(state): State<Arc<ServerState>>,
    integration: Result<Json<NewIntegration>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(integration) = integration?;
    require_name(&integration.name, "Integration")?;
    Ok(Json(state.manager.create_integration(integration)))
}

/// List integrations handler
pub async fn list_integrations_handler(
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    Json(state.manager.list_integrations())
}

/// Get integration handler
pub async fn get_integration_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .manager
        .get_integration(&id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Integration not found"))
}

/// Delete integration handler
pub async fn delete_integration_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.manager.delete_integration(&id) {
        return Err(ApiError::not_found("Integration not found"));
    }
    Ok(Json(SuccessResponse { success: true }))
}

/// Test integration handler
pub async fn test_integration_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let success = state.tester.test(&id).await?;
    Ok(Json(SuccessResponse { success }))
}
