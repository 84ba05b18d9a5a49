use crate::dates;
use crate::error::LeetError;
use crate::stats::{summarize, SolveSummary};
use crate::store::DataStore;
use super::or_reset;

pub async fn run(store: &DataStore) -> Result<(), LeetError> {
    let solved = or_reset(store.load_solved().await)?;
    let catalog = store.load_catalog().await?;

    let summary = summarize(&catalog, &solved, dates::today());
    tracing::debug!(summary = ?summary, "Computed stats");
    println!("{}", render(&summary));
    Ok(())
}

const INNER_WIDTH: usize = 36;

/// Boxed stats panel
pub fn render(summary: &SolveSummary) -> String {
    let weak = if summary.weak_topics.is_empty() {
        "-".to_string()
    } else {
        summary.weak_topics.join(", ")
    };

    let rows = [
        format!("Total Solved      : {}", summary.total),
        format!("Easy / Med / Hard : {} / {} / {}", summary.easy, summary.medium, summary.hard),
        format!("Current Streak    : {}", summary.streak.current),
        format!("Longest Streak    : {}", summary.streak.longest),
        format!("Weak Topics       : {}", weak),
    ];

    let mut out = String::new();
    out.push_str(&format!("╔══ STATS {}╗\n", "═".repeat(INNER_WIDTH - 8)));
    for row in rows {
        out.push_str(&format!("║ {:<width$} ║\n", row, width = INNER_WIDTH - 2));
    }
    out.push_str(&format!("╚{}╝", "═".repeat(INNER_WIDTH)));
    out
}
