//! Main application run loop

use std::future::Future;
use std::sync::Arc;

use tracing::{error, info};

use crate::app::options::AppOptions;
use crate::app::state::AppState;
use crate::errors::BonfireError;
use crate::server::serve::serve;
use crate::server::state::ServerState;

/// Run the BonFire service until `shutdown_signal` resolves
pub async fn run(
    options: AppOptions,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), BonfireError> {
    info!("Initializing BonFire...");

    let app_state = AppState::init(&options).await?;
    let server_state = Arc::new(ServerState::from(&app_state));

    let handle = serve(&options.server, &options.web_url, server_state, shutdown_signal).await?;
    let served = match handle.await {
        Ok(result) => result,
        Err(e) => Err(BonfireError::ServerError(e.to_string())),
    };
    if let Err(e) = &served {
        error!("HTTP server stopped with error: {}", e);
    }

    // Persist even when the server failed
    app_state.shutdown().await?;
    served
}
