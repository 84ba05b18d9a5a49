use crate::config::settings::Config;
use crate::error::LeetError;
use crate::pipelines::gemini::GeminiClient;
use crate::pipelines::perf::PerfTimer;
use crate::pipelines::suggest::{suggest_with_retry, RetryOptions, SuggestOutcome, MAX_ATTEMPTS};
use crate::store::history::{HistoryEntry, MAX_HISTORY};
use crate::store::DataStore;
use super::{or_reset, print_problem};

pub async fn run(store: &DataStore) -> Result<(), LeetError> {
    let _timer = PerfTimer::new("suggest");

    let config = Config::load(&store.config_path()).await?;
    let client = GeminiClient::new(&config)?;

    let catalog = store.load_catalog().await?;
    let solved = or_reset(store.load_solved().await)?;
    let history = or_reset(store.load_history().await)?;

    let options = RetryOptions::default();
    let outcome = suggest_with_retry(&client, &solved, &history, &catalog, options).await?;

    match outcome {
        SuggestOutcome::Chosen { problem, attempt, .. } => {
            tracing::debug!(attempt = attempt, "Suggestion accepted");
            print_problem("🧠 Today's Suggested Problem:", &problem);

            let entry = HistoryEntry::today(problem.id.as_str(), problem.title.as_str());
            if let Err(e) = store.append_history(entry, MAX_HISTORY).await {
                eprintln!("⚠️ Failed to update history: {}", e.message);
                tracing::warn!(error = %e, "History append failed");
            }
        }
        SuggestOutcome::Exhausted { last_error } => {
            match last_error {
                Some(e) => eprintln!(
                    "⚠️ No new suggestion after {} attempts (last error: {})",
                    MAX_ATTEMPTS, e.message
                ),
                None => eprintln!(
                    "⚠️ No new suggestion after {} attempts; try again later",
                    MAX_ATTEMPTS
                ),
            }
        }
    }
    Ok(())
}
