use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::dates;
use crate::error::LeetError;
use super::{read_json_array, recover_reset, write_json_array, DataStore, OnMalformed};

/// One solved problem. At most one entry per id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvedEntry {
    pub id: String,
    pub title: String,
    /// ISO calendar date of the most recent solve
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    Added,
    Updated,
}

/// Insert or refresh `id` in place. Never creates a second entry for an id.
pub fn upsert_solved(
    solved: &mut Vec<SolvedEntry>,
    id: &str,
    title: &str,
    date: NaiveDate,
) -> MarkOutcome {
    let date = dates::format_date(date);
    if let Some(entry) = solved.iter_mut().find(|s| s.id == id) {
        entry.date = date;
        return MarkOutcome::Updated;
    }
    solved.push(SolvedEntry {
        id: id.to_string(),
        title: title.to_string(),
        date,
    });
    MarkOutcome::Added
}

impl DataStore {
    /// Load the solved log. A malformed file is left in place for repair.
    pub async fn load_solved(&self) -> Result<Vec<SolvedEntry>, LeetError> {
        read_json_array(&self.solved_path(), OnMalformed::Keep).await
    }

    pub async fn save_solved(&self, solved: &[SolvedEntry]) -> Result<(), LeetError> {
        write_json_array(&self.solved_path(), solved).await
    }

    /// Mark `id` as solved today (local timezone)
    pub async fn mark_solved(&self, id: &str, title: &str) -> Result<MarkOutcome, LeetError> {
        self.mark_solved_on(id, title, dates::today()).await
    }

    pub async fn mark_solved_on(
        &self,
        id: &str,
        title: &str,
        date: NaiveDate,
    ) -> Result<MarkOutcome, LeetError> {
        let mut solved = recover_reset(self.load_solved().await)?;
        let outcome = upsert_solved(&mut solved, id, title, date);
        self.save_solved(&solved).await?;
        tracing::info!(id = %id, outcome = ?outcome, "Marked problem as solved");
        Ok(outcome)
    }
}
