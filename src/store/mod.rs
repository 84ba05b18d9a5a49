pub mod history;
pub mod solved;

use std::path::{Path, PathBuf};
use serde::{de::DeserializeOwned, Serialize};
use crate::error::{ErrorKind, LeetError};
use crate::problems::problem::Problem;

pub const PROBLEMS_FILE: &str = "problems.json";
pub const SOLVED_FILE: &str = "solved.json";
pub const HISTORY_FILE: &str = "history.json";
pub const CONFIG_FILE: &str = "config.json";

/// Flat-file store rooted at the data directory.
/// Every write replaces the whole file; there is no locking.
#[derive(Debug, Clone)]
pub struct DataStore {
    dir: PathBuf,
}

impl DataStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        DataStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn problems_path(&self) -> PathBuf {
        self.dir.join(PROBLEMS_FILE)
    }

    pub fn solved_path(&self) -> PathBuf {
        self.dir.join(SOLVED_FILE)
    }

    pub fn history_path(&self) -> PathBuf {
        self.dir.join(HISTORY_FILE)
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    pub async fn load_catalog(&self) -> Result<Vec<Problem>, LeetError> {
        Problem::load_all(&self.problems_path()).await
    }
}

/// What to do when a log file holds text that is not JSON at all.
/// Wrong-shape JSON (e.g. `{}`) is always reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OnMalformed {
    /// Overwrite with `[]` and report `CorruptData`
    Reset,
    /// Leave the file alone for manual repair and report `Parse`
    Keep,
}

/// Read a JSON array file, creating it as `[]` when absent.
pub(crate) async fn read_json_array<T: DeserializeOwned>(
    path: &Path,
    on_malformed: OnMalformed,
) -> Result<Vec<T>, LeetError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = ?path, "File missing, creating empty array");
            write_empty_array(path).await?;
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(LeetError::io(
                format!("Failed to read {}: {}", file_label(path), e),
                "store"
            ).with_context(format!("path: {:?}", path)));
        }
    };

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: serde_json::Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => return malformed::<T>(path, on_malformed, e.to_string()).await,
    };

    if !value.is_array() {
        tracing::warn!(path = ?path, "Expected a JSON array, resetting file");
        write_empty_array(path).await?;
        return Err(LeetError::corrupt(
            format!("{} did not hold a JSON array; reset to empty", file_label(path)),
            "store"
        ).with_context(format!("path: {:?}", path)));
    }

    match serde_json::from_value::<Vec<T>>(value) {
        Ok(items) => Ok(items),
        Err(e) => malformed::<T>(path, on_malformed, e.to_string()).await,
    }
}

async fn malformed<T: DeserializeOwned>(
    path: &Path,
    on_malformed: OnMalformed,
    detail: String,
) -> Result<Vec<T>, LeetError> {
    match on_malformed {
        OnMalformed::Reset => {
            tracing::warn!(path = ?path, error = %detail, "Malformed file, resetting");
            write_empty_array(path).await?;
            Err(LeetError::corrupt(
                format!("{} was invalid; reset to empty", file_label(path)),
                "store"
            ).with_source(detail))
        }
        OnMalformed::Keep => Err(LeetError::parse(
            format!("{} is invalid; delete or fix the file", file_label(path)),
            "store"
        ).with_context(format!("path: {:?}", path)).with_source(detail)),
    }
}

pub(crate) async fn write_empty_array(path: &Path) -> Result<(), LeetError> {
    write_json_array::<serde_json::Value>(path, &[]).await
}

/// Overwrite `path` with the pretty-printed array, creating parent dirs.
pub(crate) async fn write_json_array<T: Serialize>(
    path: &Path,
    items: &[T],
) -> Result<(), LeetError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| LeetError::io(
                    format!("Failed to create directory: {}", e),
                    "store"
                ).with_context(format!("path: {:?}", parent)))?;
        }
    }

    let json = serde_json::to_string_pretty(items)
        .map_err(|e| LeetError::parse(
            format!("Failed to serialize {}: {}", file_label(path), e),
            "json_serialize"
        ))?;

    tokio::fs::write(path, json)
        .await
        .map_err(|e| LeetError::io(
            format!("Failed to write {}: {}", file_label(path), e),
            "store"
        ).with_context(format!("path: {:?}", path)))
}

/// Treat a `CorruptData` result as the empty collection it was reset to.
/// Any other error is passed through. Printing a notice is up to the caller.
pub fn recover_reset<T>(result: Result<Vec<T>, LeetError>) -> Result<Vec<T>, LeetError> {
    match result {
        Err(e) if e.is(ErrorKind::CorruptData) => {
            tracing::warn!(error = %e, "Recovered from corrupt data file");
            Ok(Vec::new())
        }
        other => other,
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
