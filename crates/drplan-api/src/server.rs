//! Server startup.

use drplan_core::Result;
use tracing::info;

use crate::config::ServerConfig;
use crate::routes::build_router;
use crate::state::AppState;

/// Bind the configured address and serve the API until shutdown.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let app = build_router(state, config);
    let addr = config.socket_addr()?;

    info!("Starting API server on {addr}");
    info!("CORS allowed origins: {:?}", config.cors_origins);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
