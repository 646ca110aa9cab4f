use redirector::store::StatsStore;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_no_lost_updates_under_concurrency() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(StatsStore::load(dir.path().join("stats.json")).await);

    const TASKS: usize = 16;
    const HITS_PER_TASK: usize = 16;

    let mut handles = Vec::new();
    for task in 0..TASKS {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let path = format!("/path-{}", task % 4);
            for _ in 0..HITS_PER_TASK {
                store.record_redirect(&path).await.unwrap();
            }
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    let snapshot = store.snapshot().await;
    let expected = (TASKS * HITS_PER_TASK) as u64;
    assert_eq!(snapshot.total_redirects, expected);
    assert_eq!(snapshot.paths.values().sum::<u64>(), expected);
}

#[tokio::test]
async fn test_persist_and_reload_round_trip() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("stats.json");

    let store = StatsStore::load(file.clone()).await;
    store.record_redirect("/docs").await.unwrap();
    store.record_redirect("/docs").await.unwrap();
    store.record_redirect("/blog").await.unwrap();
    let saved = store.snapshot().await;

    let reloaded = StatsStore::load(file).await;
    let snapshot = reloaded.snapshot().await;

    assert_eq!(snapshot, saved);
    assert_eq!(snapshot.total_redirects, 3);
    assert_eq!(snapshot.paths.get("/docs"), Some(&2));
    assert_eq!(snapshot.paths.get("/blog"), Some(&1));
}

#[tokio::test]
async fn test_stats_file_is_pretty_printed_json() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("stats.json");

    let store = StatsStore::load(file.clone()).await;
    store.record_redirect("/docs").await.unwrap();

    let contents = tokio::fs::read_to_string(&file).await.unwrap();
    assert!(contents.contains("\n  \"total_redirects\": 1"));
    assert!(contents.contains("\"start_time\""));
}

#[tokio::test]
async fn test_missing_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let store = StatsStore::load(dir.path().join("does-not-exist.json")).await;

    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.total_redirects, 0);
    assert!(snapshot.paths.is_empty());
}

#[tokio::test]
async fn test_corrupt_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("stats.json");
    tokio::fs::write(&file, b"{ not json").await.unwrap();

    let store = StatsStore::load(file).await;
    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.total_redirects, 0);
    assert!(snapshot.paths.is_empty());
}

#[tokio::test]
async fn test_reset_zeroes_counts_and_advances_start_time() {
    let dir = TempDir::new().unwrap();
    let store = StatsStore::load(dir.path().join("stats.json")).await;

    store.record_redirect("/docs").await.unwrap();
    let before = store.snapshot().await;

    tokio::time::sleep(Duration::from_millis(5)).await;
    store.reset().await.unwrap();

    let after = store.snapshot().await;
    assert_eq!(after.total_redirects, 0);
    assert!(after.paths.is_empty());
    assert!(after.start_time > before.start_time);
}

#[tokio::test]
async fn test_failed_persist_keeps_in_memory_delta() {
    let dir = TempDir::new().unwrap();
    // A directory as the target path makes every write fail.
    let store = StatsStore::load(dir.path().to_path_buf()).await;

    assert!(store.record_redirect("/docs").await.is_err());

    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.total_redirects, 1);
    assert_eq!(snapshot.paths.get("/docs"), Some(&1));
}
