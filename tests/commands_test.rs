use leetlog_lib::commands::{prev, stats};
use leetlog_lib::store::DataStore;
use tempfile::TempDir;

#[tokio::test]
async fn test_stats_recovers_from_wrong_shape_solved_log() {
    let dir = TempDir::new().unwrap();
    let store = DataStore::new(dir.path());
    std::fs::write(store.problems_path(), "[]").unwrap();
    std::fs::write(store.solved_path(), "{}").unwrap();

    stats::run(&store).await.unwrap();
    assert_eq!(std::fs::read_to_string(store.solved_path()).unwrap().trim(), "[]");
}

#[tokio::test]
async fn test_stats_fails_on_malformed_solved_log() {
    let dir = TempDir::new().unwrap();
    let store = DataStore::new(dir.path());
    std::fs::write(store.problems_path(), "[]").unwrap();
    std::fs::write(store.solved_path(), "[{\"id\": ").unwrap();

    assert!(stats::run(&store).await.is_err());
    assert_eq!(std::fs::read_to_string(store.solved_path()).unwrap(), "[{\"id\": ");
}

#[tokio::test]
async fn test_prev_rejects_non_positive_without_touching_files() {
    let dir = TempDir::new().unwrap();
    let store = DataStore::new(dir.path());

    prev::run(&store, Some("0")).await.unwrap();
    prev::run(&store, Some("-4")).await.unwrap();
    assert!(!store.history_path().exists());
}

#[tokio::test]
async fn test_prev_reads_history_for_valid_count() {
    let dir = TempDir::new().unwrap();
    let store = DataStore::new(dir.path());

    prev::run(&store, Some("99")).await.unwrap();
    assert!(store.history_path().exists());
}
