//! Server initialization and runtime setup.
//!
//! Loads the reserved tokens and persisted statistics, wires the shared
//! state, and runs the Axum server until the listener fails.

use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;
use crate::store::StatsStore;
use crate::tokens::ReservedPaths;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Reserved-path tokens (loaded from disk or freshly generated)
/// - Statistics store (loaded from disk or empty)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the listen address cannot be bound or the server
/// fails at runtime. Token-file write failures are logged but not fatal.
pub async fn run(config: Config) -> Result<()> {
    let mut rng = rand::rng();
    let reserved = ReservedPaths::load_or_generate(&config.paths_file, &mut rng).await;
    let store = StatsStore::load(config.stats_file.clone()).await;

    let state = AppState::new(
        Arc::new(store),
        Arc::new(reserved.clone()),
        config.base_url.clone(),
        config.filter.clone(),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on http://{addr}");
    tracing::info!("Redirecting all requests to {}", config.base_url);
    tracing::info!("Stats page:  http://{addr}/{}", reserved.stats_path);
    tracing::info!("Stats JSON:  http://{addr}/{}", reserved.stats_json_path);
    tracing::info!("Reset stats: http://{addr}/{} (POST)", reserved.reset_path);

    axum::serve(listener, app).await?;

    Ok(())
}
