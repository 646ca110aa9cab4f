//! Handlers for the HTML and JSON statistics reports.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};
use tracing::error;

use crate::error::AppError;
use crate::state::AppState;

/// Template for the statistics report page.
///
/// Renders `templates/stats.html` with the total redirect count, the server
/// start time, a path/count table, and a reset form posting to the reserved
/// reset URL. All values come from one snapshot so the page is internally
/// consistent.
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    total_redirects: u64,
    start_time: String,
    paths: Vec<(String, u64)>,
    reset_path: String,
}

/// Renders the HTML statistics report.
///
/// # Endpoint
///
/// `GET /{stats_path}`
pub async fn stats_html_handler(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.store.snapshot().await;

    StatsTemplate {
        total_redirects: snapshot.total_redirects,
        start_time: snapshot.start_time.to_rfc3339(),
        paths: snapshot.paths.into_iter().collect(),
        reset_path: state.reserved.reset_path.clone(),
    }
}

/// Serves the statistics snapshot as pretty-printed JSON.
///
/// # Endpoint
///
/// `GET /{stats_json_path}`
///
/// # Response
///
/// `Content-Type: application/json` with fields `total_redirects`, `paths`,
/// and `start_time`.
pub async fn stats_json_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let snapshot = state.store.snapshot().await;

    let body = serde_json::to_string_pretty(&snapshot).map_err(|e| {
        error!("Error encoding JSON stats: {}", e);
        AppError::internal("Error encoding statistics")
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}
