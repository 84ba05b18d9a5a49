use std::collections::HashSet;
use crate::backoff::ExponentialBackoff;
use crate::error::LeetError;
use crate::pipelines::extract::AiSuggestion;
use crate::pipelines::gemini::SuggestionSource;
use crate::pipelines::prompt::{build_prompt, MAX_SERIOUSNESS};
use crate::problems::problem::Problem;
use crate::spinner::Spinner;
use crate::store::history::HistoryEntry;
use crate::store::solved::SolvedEntry;

/// Attempts before the suggestion flow gives up
pub const MAX_ATTEMPTS: u32 = 3;

/// Drop suggestions already solved, already suggested, or absent from the
/// catalog. Order is preserved.
pub fn filter_suggestions(
    suggestions: Vec<AiSuggestion>,
    solved: &[SolvedEntry],
    history: &[HistoryEntry],
    catalog: &[Problem],
) -> Vec<AiSuggestion> {
    let seen: HashSet<&str> = solved
        .iter()
        .map(|s| s.id.as_str())
        .chain(history.iter().map(|h| h.id.as_str()))
        .collect();
    let known: HashSet<&str> = catalog.iter().map(|p| p.id.as_str()).collect();

    suggestions
        .into_iter()
        .filter(|s| {
            let id = s.id();
            !seen.contains(id.as_str()) && known.contains(id.as_str())
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct RetryOptions {
    pub backoff: ExponentialBackoff,
    pub show_spinner: bool,
}

impl Default for RetryOptions {
    fn default() -> Self {
        RetryOptions {
            backoff: ExponentialBackoff::default(),
            show_spinner: true,
        }
    }
}

#[derive(Debug)]
pub enum SuggestOutcome {
    /// First surviving suggestion, resolved against the catalog
    Chosen {
        problem: Problem,
        suggestion: AiSuggestion,
        attempt: u32,
    },
    /// Every attempt failed or filtered down to nothing
    Exhausted { last_error: Option<LeetError> },
}

/// Ask `source` for suggestions, escalating seriousness on each attempt.
///
/// Transport, upstream and parse failures, as well as responses that filter
/// to nothing, move on to the next attempt. Anything else (a missing API key)
/// is returned immediately.
pub async fn suggest_with_retry<S: SuggestionSource>(
    source: &S,
    solved: &[SolvedEntry],
    history: &[HistoryEntry],
    catalog: &[Problem],
    options: RetryOptions,
) -> Result<SuggestOutcome, LeetError> {
    let mut last_error = None;

    for attempt in 1..=MAX_ATTEMPTS {
        let seriousness = attempt.min(MAX_SERIOUSNESS);
        let prompt = build_prompt(solved, history, catalog, seriousness);
        tracing::debug!(
            attempt = attempt,
            seriousness = seriousness,
            prompt = %prompt,
            "Built prompt"
        );

        let spinner = options.show_spinner.then(|| Spinner::start("🤖 thinking"));
        let result = source.get_suggestions(&prompt).await;
        if let Some(spinner) = spinner {
            spinner.stop().await;
        }

        match result {
            Ok(suggestions) => {
                tracing::debug!(attempt = attempt, candidates = ?suggestions, "Model suggestions");
                let survivors = filter_suggestions(suggestions, solved, history, catalog);
                if let Some(suggestion) = survivors.into_iter().next() {
                    let problem = catalog
                        .iter()
                        .find(|p| p.id == suggestion.id())
                        .cloned()
                        .ok_or_else(|| {
                            LeetError::parse("Filtered suggestion missing from catalog", "suggest")
                        })?;
                    tracing::info!(attempt = attempt, id = %problem.id, "Suggestion chosen");
                    return Ok(SuggestOutcome::Chosen { problem, suggestion, attempt });
                }
                eprintln!(
                    "⚠️ Attempt {}/{}: no new problems in the response, asking more strictly",
                    attempt, MAX_ATTEMPTS
                );
                tracing::warn!(attempt = attempt, "All suggestions filtered out");
            }
            Err(e) if e.is_retryable() => {
                eprintln!("⚠️ Attempt {}/{} failed: {}", attempt, MAX_ATTEMPTS, e.message);
                tracing::warn!(attempt = attempt, error = %e, "Suggestion attempt failed");
                last_error = Some(e);
            }
            Err(e) => return Err(e),
        }

        if attempt < MAX_ATTEMPTS {
            let delay_ms = options.backoff.delay_for_attempt(attempt - 1);
            if delay_ms > 0 {
                tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
            }
        }
    }

    Ok(SuggestOutcome::Exhausted { last_error })
}
