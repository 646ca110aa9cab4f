#![allow(dead_code)]

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tempfile::TempDir;

use redirector::filter::PathFilter;
use redirector::state::AppState;
use redirector::store::StatsStore;
use redirector::tokens::ReservedPaths;

/// Test fixture holding the shared state and the temp directory backing the
/// persisted files. Keep the struct alive for the duration of the test so
/// the directory is not removed early.
pub struct TestContext {
    pub state: AppState,
    pub dir: TempDir,
}

impl TestContext {
    pub fn reserved(&self) -> &ReservedPaths {
        &self.state.reserved
    }
}

pub async fn create_test_state(base_url: &str, filter: PathFilter) -> TestContext {
    let dir = TempDir::new().unwrap();

    let store = StatsStore::load(dir.path().join("stats.json")).await;

    let mut rng = StdRng::seed_from_u64(7);
    let reserved = ReservedPaths::load_or_generate(&dir.path().join("paths.json"), &mut rng).await;

    let state = AppState::new(
        Arc::new(store),
        Arc::new(reserved),
        base_url.to_string(),
        filter,
    );

    TestContext { state, dir }
}

/// Like [`create_test_state`], but points the stats file at a directory so
/// every persist attempt fails.
pub async fn create_state_with_broken_persistence(base_url: &str) -> TestContext {
    let dir = TempDir::new().unwrap();

    let store = StatsStore::load(dir.path().to_path_buf()).await;

    let mut rng = StdRng::seed_from_u64(7);
    let reserved = ReservedPaths::load_or_generate(&dir.path().join("paths.json"), &mut rng).await;

    let state = AppState::new(
        Arc::new(store),
        Arc::new(reserved),
        base_url.to_string(),
        PathFilter::default(),
    );

    TestContext { state, dir }
}
