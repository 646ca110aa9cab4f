//! Handler resetting all statistics.

use axum::{extract::State, response::Redirect};
use tracing::{error, info};

use crate::error::AppError;
use crate::state::AppState;

/// Clears all statistics and redirects back to the HTML report.
///
/// # Endpoint
///
/// `POST /{reset_path}` - other methods receive 405 from the router.
///
/// # Errors
///
/// Returns 500 Internal Server Error when the zeroed state cannot be
/// persisted; the in-memory reset is not reverted.
pub async fn reset_handler(State(state): State<AppState>) -> Result<Redirect, AppError> {
    if let Err(e) = state.store.reset().await {
        error!("Error saving statistics after reset: {}", e);
        return Err(AppError::internal("Error saving statistics"));
    }

    info!("Statistics reset");

    Ok(Redirect::to(&format!("/{}", state.reserved.stats_path)))
}
