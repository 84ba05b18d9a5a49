use std::collections::{HashMap, HashSet};
use crate::problems::problem::Problem;
use crate::store::solved::SolvedEntry;

/// Number of weak topics reported to the user and the prompt
pub const WEAK_TOPIC_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct TopicScore {
    pub topic: String,
    pub solved: usize,
    pub total: usize,
}

impl TopicScore {
    /// solved / total; lower is weaker
    pub fn ratio(&self) -> f64 {
        self.solved as f64 / self.total as f64
    }
}

/// Score every topic tag in the catalog, weakest first.
/// Ties are broken by topic name so the output is stable.
pub fn topic_scores(catalog: &[Problem], solved: &[SolvedEntry]) -> Vec<TopicScore> {
    let solved_ids: HashSet<&str> = solved.iter().map(|s| s.id.as_str()).collect();

    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for problem in catalog {
        let is_solved = solved_ids.contains(problem.id.as_str());
        for tag in &problem.topics {
            let (total, done) = counts.entry(tag.name.as_str()).or_insert((0, 0));
            *total += 1;
            if is_solved {
                *done += 1;
            }
        }
    }

    // total >= 1 for every key, so ratio() never divides by zero
    let mut scores: Vec<TopicScore> = counts
        .into_iter()
        .map(|(topic, (total, solved))| TopicScore {
            topic: topic.to_string(),
            solved,
            total,
        })
        .collect();

    scores.sort_by(|a, b| {
        a.ratio()
            .partial_cmp(&b.ratio())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.topic.cmp(&b.topic))
    });
    scores
}

/// The `n` topics with the lowest solved/available ratio
pub fn weakest_topics(catalog: &[Problem], solved: &[SolvedEntry], n: usize) -> Vec<String> {
    topic_scores(catalog, solved)
        .into_iter()
        .take(n)
        .map(|s| s.topic)
        .collect()
}
