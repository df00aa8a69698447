//! HTTP server setup

use std::future::Future;
use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::app::options::ServerOptions;
use crate::errors::BonfireError;
use crate::server::handlers::{
    add_node_handler, connect_nodes_handler, create_integration_handler, create_workflow_handler,
    delete_integration_handler, delete_workflow_handler, execute_workflow_handler,
    get_integration_handler, get_workflow_handler, health_handler, list_integrations_handler,
    list_workflows_handler, presets_handler, test_integration_handler, update_workflow_handler,
};
use crate::server::state::ServerState;

/// Build the API router
pub fn router(state: Arc<ServerState>, web_url: &str) -> Result<Router, BonfireError> {
    let origin = HeaderValue::from_str(web_url)
        .map_err(|e| BonfireError::ConfigError(format!("invalid web_url {}: {}", web_url, e)))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    let app = Router::new()
        // Health
        .route("/health", get(health_handler))
        // Workflows
        .route(
            "/api/workflows",
            post(create_workflow_handler).get(list_workflows_handler),
        )
        .route(
            "/api/workflows/{id}",
            get(get_workflow_handler)
                .patch(update_workflow_handler)
                .delete(delete_workflow_handler),
        )
        .route("/api/workflows/{id}/nodes", post(add_node_handler))
        .route("/api/workflows/{id}/connections", post(connect_nodes_handler))
        .route("/api/workflows/{id}/execute", post(execute_workflow_handler))
        // Integrations
        .route("/api/integrations/presets", get(presets_handler))
        .route(
            "/api/integrations",
            post(create_integration_handler).get(list_integrations_handler),
        )
        .route(
            "/api/integrations/{id}",
            get(get_integration_handler).delete(delete_integration_handler),
        )
        .route("/api/integrations/{id}/test", post(test_integration_handler))
        // State and middleware
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

/// Start the HTTP server
pub async fn serve(
    options: &ServerOptions,
    web_url: &str,
    state: Arc<ServerState>,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<JoinHandle<Result<(), BonfireError>>, BonfireError> {
    let app = router(state, web_url)?;

    let addr = format!("{}:{}", options.host, options.port);
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| BonfireError::ServerError(e.to_string()))?;

    let handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| BonfireError::ServerError(e.to_string()))
    });

    Ok(handle)
}
