//! Thread-safe statistics store with JSON file persistence.
//!
//! A single [`StatsStore`] instance is shared by every request handler. The
//! raw counters never leave this module: all call sites go through
//! [`record_redirect`](StatsStore::record_redirect),
//! [`snapshot`](StatsStore::snapshot), and [`reset`](StatsStore::reset),
//! each of which serializes against concurrent callers with one exclusive
//! lock held across the full read-modify-persist sequence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;
use tokio::sync::Mutex;

/// Error persisting statistics to disk.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to encode statistics: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write statistics file: {0}")]
    Write(#[from] std::io::Error),
}

/// On-disk and in-memory statistics record.
///
/// Invariant: `total_redirects` equals the sum of all values in `paths`
/// after any completed update.
#[derive(Debug, Serialize, Deserialize)]
struct Stats {
    total_redirects: u64,
    paths: HashMap<String, u64>,
    start_time: DateTime<Utc>,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            total_redirects: 0,
            paths: HashMap::new(),
            start_time: Utc::now(),
        }
    }
}

/// Immutable point-in-time copy of the store's state.
///
/// Uses a `BTreeMap` so iteration order is stable within a single render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub total_redirects: u64,
    pub paths: BTreeMap<String, u64>,
    pub start_time: DateTime<Utc>,
}

/// Statistics store backed by a pretty-printed JSON file.
pub struct StatsStore {
    path: PathBuf,
    inner: Mutex<Stats>,
}

impl StatsStore {
    /// Loads statistics from `path`, or starts empty.
    ///
    /// A missing file means a first run and is not an error. An unreadable
    /// or corrupt file is logged and recovered by starting from empty stats;
    /// startup is never fatal here.
    pub async fn load(path: PathBuf) -> Self {
        let stats = match tokio::fs::read(&path).await {
            Ok(data) => match serde_json::from_slice(&data) {
                Ok(stats) => stats,
                Err(e) => {
                    tracing::warn!(
                        "Corrupt stats file {}: {}. Starting with empty stats.",
                        path.display(),
                        e
                    );
                    Stats::default()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Stats::default(),
            Err(e) => {
                tracing::warn!(
                    "Failed to read stats file {}: {}. Starting with empty stats.",
                    path.display(),
                    e
                );
                Stats::default()
            }
        };

        Self {
            path,
            inner: Mutex::new(stats),
        }
    }

    /// Records one redirect for `path` and persists the updated store.
    ///
    /// The increment and the disk write happen under one lock, so concurrent
    /// callers cannot lose updates or interleave file writes. On a write
    /// failure the in-memory increment is kept (the next successful persist
    /// includes it) and the error is returned for the caller to surface.
    pub async fn record_redirect(&self, path: &str) -> Result<(), StoreError> {
        let mut stats = self.inner.lock().await;
        stats.total_redirects += 1;
        *stats.paths.entry(path.to_string()).or_insert(0) += 1;
        self.persist(&stats).await
    }

    /// Returns an immutable copy of the current state.
    pub async fn snapshot(&self) -> StatsSnapshot {
        let stats = self.inner.lock().await;
        StatsSnapshot {
            total_redirects: stats.total_redirects,
            paths: stats
                .paths
                .iter()
                .map(|(path, count)| (path.clone(), *count))
                .collect(),
            start_time: stats.start_time,
        }
    }

    /// Replaces all counters with a fresh zero state and persists it.
    ///
    /// `start_time` is set to now. A persistence failure is returned but the
    /// in-memory reset is not reverted.
    pub async fn reset(&self) -> Result<(), StoreError> {
        let mut stats = self.inner.lock().await;
        *stats = Stats::default();
        self.persist(&stats).await
    }

    async fn persist(&self, stats: &Stats) -> Result<(), StoreError> {
        let data = serde_json::to_vec_pretty(stats)?;
        tokio::fs::write(&self.path, data).await?;
        Ok(())
    }
}
