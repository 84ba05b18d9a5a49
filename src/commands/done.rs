use crate::error::LeetError;
use crate::problems::problem::find_by_id;
use crate::store::solved::MarkOutcome;
use crate::store::DataStore;

pub async fn run(store: &DataStore, problem_id: &str) -> Result<(), LeetError> {
    let problem_id = problem_id.trim();
    let catalog = store.load_catalog().await?;

    let Some(problem) = find_by_id(&catalog, problem_id) else {
        eprintln!("⚠️ Problem ID not found: {}", problem_id);
        tracing::warn!(id = %problem_id, catalog_size = catalog.len(), "Unknown problem id");
        return Ok(());
    };

    match store.mark_solved(&problem.id, &problem.title).await? {
        MarkOutcome::Added => tracing::info!(id = %problem.id, "Marked solved"),
        MarkOutcome::Updated => tracing::info!(id = %problem.id, "Refreshed solve date"),
    }
    println!("✅ Marked as solved: {} ({})", problem.title, problem.id);
    Ok(())
}
