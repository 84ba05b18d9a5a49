pub mod streak;
pub mod topics;

use std::collections::HashMap;
use chrono::NaiveDate;
use crate::problems::problem::{Difficulty, Problem};
use crate::store::solved::SolvedEntry;
use streak::{streak_summary, Streak};
use topics::{weakest_topics, WEAK_TOPIC_COUNT};

#[derive(Debug, Clone, PartialEq)]
pub struct SolveSummary {
    pub total: usize,
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
    pub streak: Streak,
    pub weak_topics: Vec<String>,
}

/// Everything the `stats` command shows. Solved ids missing from the catalog
/// count toward `total` but toward no difficulty bucket.
pub fn summarize(catalog: &[Problem], solved: &[SolvedEntry], today: NaiveDate) -> SolveSummary {
    let by_id: HashMap<&str, Difficulty> = catalog
        .iter()
        .map(|p| (p.id.as_str(), p.difficulty))
        .collect();

    let (mut easy, mut medium, mut hard) = (0, 0, 0);
    for entry in solved {
        match by_id.get(entry.id.as_str()) {
            Some(Difficulty::Easy) => easy += 1,
            Some(Difficulty::Medium) => medium += 1,
            Some(Difficulty::Hard) => hard += 1,
            None => {}
        }
    }

    SolveSummary {
        total: solved.len(),
        easy,
        medium,
        hard,
        streak: streak_summary(solved, today),
        weak_topics: weakest_topics(catalog, solved, WEAK_TOPIC_COUNT),
    }
}
