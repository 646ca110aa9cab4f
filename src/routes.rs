//! Router configuration.
//!
//! # Route Structure
//!
//! - `/{stats_path}`      - HTML statistics report (GET)
//! - `/{stats_json_path}` - JSON statistics report (GET)
//! - `/{reset_path}`      - Reset statistics (POST only; other methods 405)
//! - everything else      - Redirect to the base URL (any method)
//!
//! The three reserved segments come from the token registry loaded at
//! startup, so the router is built at runtime from [`AppState`]. Paths are
//! matched and forwarded byte-for-byte; no trailing-slash normalization is
//! applied.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::handlers::{redirect_handler, reset_handler, stats_html_handler, stats_json_handler};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// Any request not matching one of the reserved token routes falls through
/// to the redirect handler, regardless of method.
pub fn app_router(state: AppState) -> Router {
    let reserved = state.reserved.clone();

    Router::new()
        .route(&format!("/{}", reserved.stats_path), get(stats_html_handler))
        .route(
            &format!("/{}", reserved.stats_json_path),
            get(stats_json_handler),
        )
        .route(&format!("/{}", reserved.reset_path), post(reset_handler))
        .fallback(redirect_handler)
        .with_state(state)
        .layer(trace_layer())
}

/// Tracing middleware: INFO span per request, INFO response log with latency
/// in milliseconds.
fn trace_layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
