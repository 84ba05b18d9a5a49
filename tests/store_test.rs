use chrono::NaiveDate;
use leetlog_lib::error::ErrorKind;
use leetlog_lib::store::history::{HistoryEntry, MAX_HISTORY};
use leetlog_lib::store::solved::MarkOutcome;
use leetlog_lib::store::{recover_reset, DataStore};
use tempfile::TempDir;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn temp_store() -> (TempDir, DataStore) {
    let dir = TempDir::new().unwrap();
    let store = DataStore::new(dir.path());
    (dir, store)
}

#[tokio::test]
async fn test_mark_solved_is_idempotent_per_id() {
    let (_dir, store) = temp_store();

    let first = store.mark_solved_on("1", "Two Sum", date("2024-03-01")).await.unwrap();
    let second = store.mark_solved_on("1", "Two Sum", date("2024-03-05")).await.unwrap();
    assert_eq!(first, MarkOutcome::Added);
    assert_eq!(second, MarkOutcome::Updated);

    let solved = store.load_solved().await.unwrap();
    assert_eq!(solved.len(), 1);
    assert_eq!(solved[0].id, "1");
    assert_eq!(solved[0].date, "2024-03-05");
}

#[tokio::test]
async fn test_append_history_keeps_last_ten() {
    let (_dir, store) = temp_store();

    for i in 0..15 {
        let entry = HistoryEntry::new(i.to_string(), format!("Problem {}", i), date("2024-01-01"));
        store.append_history(entry, MAX_HISTORY).await.unwrap();
    }

    let history = store.load_history().await.unwrap();
    let ids: Vec<String> = history.iter().map(|h| h.id.clone()).collect();
    let expected: Vec<String> = (5..15).map(|i| i.to_string()).collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn test_missing_files_are_created_empty() {
    let (_dir, store) = temp_store();

    assert!(store.load_solved().await.unwrap().is_empty());
    assert!(store.load_history().await.unwrap().is_empty());
    assert!(store.solved_path().exists());
    assert_eq!(std::fs::read_to_string(store.history_path()).unwrap().trim(), "[]");
}

#[tokio::test]
async fn test_wrong_shape_history_is_reset() {
    let (_dir, store) = temp_store();
    std::fs::write(store.history_path(), "{}").unwrap();

    let err = store.load_history().await.unwrap_err();
    assert!(err.is(ErrorKind::CorruptData));
    assert_eq!(std::fs::read_to_string(store.history_path()).unwrap().trim(), "[]");

    // A later read sees the repaired file
    assert!(store.load_history().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_garbage_history_recovers_to_empty() {
    let (_dir, store) = temp_store();
    std::fs::write(store.history_path(), "not json").unwrap();

    let history = recover_reset(store.load_history().await).unwrap();
    assert!(history.is_empty());
}

#[tokio::test]
async fn test_malformed_solved_is_left_for_repair() {
    let (_dir, store) = temp_store();
    std::fs::write(store.solved_path(), "[{\"id\": ").unwrap();

    let err = store.load_solved().await.unwrap_err();
    assert!(err.is(ErrorKind::Parse));
    assert_eq!(std::fs::read_to_string(store.solved_path()).unwrap(), "[{\"id\": ");

    // Marking must not clobber the file either
    let err = store.mark_solved_on("1", "Two Sum", date("2024-03-01")).await.unwrap_err();
    assert!(err.is(ErrorKind::Parse));
}

#[tokio::test]
async fn test_missing_catalog_is_io_error() {
    let (_dir, store) = temp_store();
    let err = store.load_catalog().await.unwrap_err();
    assert!(err.is(ErrorKind::Io));
}

#[tokio::test]
async fn test_wrong_shape_solved_is_reset() {
    let (_dir, store) = temp_store();
    std::fs::write(store.solved_path(), "{\"1\": \"Two Sum\"}").unwrap();

    let solved = recover_reset(store.load_solved().await).unwrap();
    assert!(solved.is_empty());
    assert_eq!(std::fs::read_to_string(store.solved_path()).unwrap().trim(), "[]");

    // Marking afterwards starts a fresh log
    let outcome = store.mark_solved_on("1", "Two Sum", date("2024-03-01")).await.unwrap();
    assert_eq!(outcome, MarkOutcome::Added);
}
