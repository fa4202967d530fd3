//! Listener setup and the serve loop.

use std::future::Future;

use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::error::{Result, ServerError};
use crate::utils::shutdown_signal;

/// Serve the API on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let router = create_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

/// Validate `config`, bind, and serve until a shutdown signal arrives.
pub async fn run(config: &Config) -> Result<()> {
    config.validate().map_err(ServerError::InvalidConfig)?;

    let mode = config.mode();
    let addr = config.bind_addr();

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, %mode, debug = mode.is_debug(), "HTTP server listening");

    serve(listener, AppState::new(mode), shutdown_signal()).await?;

    info!("Server shutdown complete");
    Ok(())
}
