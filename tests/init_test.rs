use leetlog_lib::commands::init::bootstrap;
use leetlog_lib::config::settings::Config;
use leetlog_lib::store::DataStore;
use tempfile::TempDir;

#[tokio::test]
async fn test_bootstrap_creates_data_files() {
    let dir = TempDir::new().unwrap();
    let store = DataStore::new(dir.path().join("data"));

    let report = bootstrap(&store, "secret-key").await.unwrap();
    assert!(report.wrote_catalog);
    assert!(report.created_solved);
    assert!(report.created_history);
    assert!(report.stored_key);

    let catalog = store.load_catalog().await.unwrap();
    assert!(!catalog.is_empty());
    assert!(store.load_solved().await.unwrap().is_empty());
    assert!(store.load_history().await.unwrap().is_empty());

    let raw = std::fs::read_to_string(store.config_path()).unwrap();
    let config: Config = serde_json::from_str(&raw).unwrap();
    assert_eq!(config.api_key, "secret-key");
}

#[tokio::test]
async fn test_bootstrap_preserves_existing_data() {
    let dir = TempDir::new().unwrap();
    let store = DataStore::new(dir.path());

    bootstrap(&store, "first-key").await.unwrap();
    store.mark_solved("1", "Two Sum").await.unwrap();
    std::fs::write(store.problems_path(), "[]").unwrap();

    let report = bootstrap(&store, "   ").await.unwrap();
    assert!(!report.wrote_catalog);
    assert!(!report.created_solved);
    assert!(!report.created_history);

    assert_eq!(store.load_solved().await.unwrap().len(), 1);
    assert_eq!(std::fs::read_to_string(store.problems_path()).unwrap(), "[]");

    let raw = std::fs::read_to_string(store.config_path()).unwrap();
    let config: Config = serde_json::from_str(&raw).unwrap();
    assert_eq!(config.api_key, "first-key");
}
