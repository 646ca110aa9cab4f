use std::sync::Arc;

use crate::filter::PathFilter;
use crate::store::StatsStore;
use crate::tokens::ReservedPaths;

/// Shared application state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<StatsStore>,
    pub reserved: Arc<ReservedPaths>,
    pub base_url: String,
    pub filter: Arc<PathFilter>,
}

impl AppState {
    pub fn new(
        store: Arc<StatsStore>,
        reserved: Arc<ReservedPaths>,
        base_url: String,
        filter: PathFilter,
    ) -> Self {
        Self {
            store,
            reserved,
            base_url,
            filter: Arc::new(filter),
        }
    }
}
