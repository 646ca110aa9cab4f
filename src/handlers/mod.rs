//! Axum request handlers.

pub mod redirect;
pub mod reset;
pub mod stats;

pub use redirect::redirect_handler;
pub use reset::reset_handler;
pub use stats::{stats_html_handler, stats_json_handler};
