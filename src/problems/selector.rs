use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use crate::problems::problem::Problem;

/// Optional filters for the random suggestion path
#[derive(Debug, Clone, Default)]
pub struct ProblemFilter {
    pub difficulty: Option<String>,
    pub topic: Option<String>,
}

impl ProblemFilter {
    pub fn matches(&self, problem: &Problem) -> bool {
        if let Some(difficulty) = non_empty(&self.difficulty) {
            if !problem.difficulty.matches(difficulty) {
                return false;
            }
        }
        if let Some(topic) = non_empty(&self.topic) {
            if !problem.has_topic(topic) {
                return false;
            }
        }
        true
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

pub fn filter_problems<'a>(problems: &'a [Problem], filter: &ProblemFilter) -> Vec<&'a Problem> {
    let filtered: Vec<&Problem> = problems.iter().filter(|p| filter.matches(p)).collect();

    tracing::debug!(
        difficulty = ?filter.difficulty,
        topic = ?filter.topic,
        filtered_count = filtered.len(),
        total_count = problems.len(),
        "Filtered catalog"
    );

    filtered
}

/// Uniform pick among the filtered problems, or None when nothing matches
pub fn pick_problem<'a, R: Rng + ?Sized>(
    problems: &'a [Problem],
    filter: &ProblemFilter,
    rng: &mut R,
) -> Option<&'a Problem> {
    filter_problems(problems, filter).choose(rng).copied()
}

/// RNG seeded from the wall clock
pub fn time_seeded_rng() -> StdRng {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    StdRng::seed_from_u64(nanos)
}
