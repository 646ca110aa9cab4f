//! Catch-all handler redirecting every unmatched request to the base URL.

use axum::{
    extract::State,
    http::Uri,
    response::Redirect,
};
use tracing::error;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects the request to the configured base URL, recording the hit.
///
/// # Endpoint
///
/// Fallback for any method on any path not matching a reserved token.
///
/// # Request Flow
///
/// 1. Check the path against the keyword allow-list (before any mutation)
/// 2. Build the target URL: `base_url + path`, `?query` appended when non-empty
/// 3. Record the redirect and persist statistics under one lock
/// 4. Return a permanent redirect to the target
///
/// # Errors
///
/// Returns 403 Forbidden when the path matches no filter keyword.
/// Returns 500 Internal Server Error when statistics cannot be persisted;
/// in that case no redirect is issued, though the in-memory counter already
/// holds the increment.
pub async fn redirect_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Redirect, AppError> {
    let path = uri.path();

    if !state.filter.allows(path) {
        return Err(AppError::forbidden(
            "Forbidden: URL does not match filter criteria",
        ));
    }

    let mut target = format!("{}{}", state.base_url, path);
    // A bare trailing "?" yields Some(""); only append a real query
    if let Some(query) = uri.query()
        && !query.is_empty()
    {
        target.push('?');
        target.push_str(query);
    }

    if let Err(e) = state.store.record_redirect(path).await {
        error!("Error saving statistics: {}", e);
        return Err(AppError::internal("Error saving statistics"));
    }

    Ok(Redirect::permanent(&target))
}
