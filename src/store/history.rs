use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::dates;
use crate::error::LeetError;
use super::{read_json_array, recover_reset, write_json_array, DataStore, OnMalformed};

/// Number of past suggestions kept on disk
pub const MAX_HISTORY: usize = 10;

/// A past suggestion. The history file is ordered oldest to newest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub title: String,
    pub date: String,
}

impl HistoryEntry {
    pub fn new<S: Into<String>>(id: S, title: S, date: NaiveDate) -> Self {
        HistoryEntry {
            id: id.into(),
            title: title.into(),
            date: dates::format_date(date),
        }
    }

    pub fn today<S: Into<String>>(id: S, title: S) -> Self {
        Self::new(id, title, dates::today())
    }
}

/// Append, then evict from the front until at most `max_len` remain
pub fn push_bounded(history: &mut Vec<HistoryEntry>, entry: HistoryEntry, max_len: usize) {
    history.push(entry);
    if history.len() > max_len {
        let excess = history.len() - max_len;
        history.drain(..excess);
    }
}

impl DataStore {
    /// Load suggestion history. Any invalid content resets the file.
    pub async fn load_history(&self) -> Result<Vec<HistoryEntry>, LeetError> {
        read_json_array(&self.history_path(), OnMalformed::Reset).await
    }

    pub async fn save_history(&self, history: &[HistoryEntry]) -> Result<(), LeetError> {
        write_json_array(&self.history_path(), history).await
    }

    pub async fn append_history(
        &self,
        entry: HistoryEntry,
        max_len: usize,
    ) -> Result<(), LeetError> {
        let mut history = recover_reset(self.load_history().await)?;
        tracing::debug!(id = %entry.id, len = history.len(), "Appending to history");
        push_bounded(&mut history, entry, max_len);
        self.save_history(&history).await
    }
}
