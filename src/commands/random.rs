use crate::error::LeetError;
use crate::problems::selector::{pick_problem, time_seeded_rng, ProblemFilter};
use crate::store::history::{HistoryEntry, MAX_HISTORY};
use crate::store::DataStore;
use super::print_problem;

pub async fn run(store: &DataStore, filter: &ProblemFilter) -> Result<(), LeetError> {
    let catalog = store.load_catalog().await?;
    if catalog.is_empty() {
        println!("No problems found in problems.json");
        return Ok(());
    }

    let mut rng = time_seeded_rng();
    let Some(problem) = pick_problem(&catalog, filter, &mut rng) else {
        println!("No candidate problems found for the given filters.");
        return Ok(());
    };

    print_problem("🎲 Random Problem:", problem);

    let entry = HistoryEntry::today(problem.id.as_str(), problem.title.as_str());
    if let Err(e) = store.append_history(entry, MAX_HISTORY).await {
        eprintln!("⚠️ Failed to update history: {}", e.message);
        tracing::warn!(error = %e, "History append failed");
    }
    Ok(())
}
