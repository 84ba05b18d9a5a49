use serde::{Deserialize, Serialize, Deserializer};
use std::fmt;
use std::path::Path;
use crate::error::LeetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Case-insensitive exact match against a user-supplied label
    pub fn matches(&self, label: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(label.trim())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicTag {
    pub name: String,
}

/// One catalog entry, in the shape of the LeetCode problem list export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    #[serde(rename = "frontendQuestionId", deserialize_with = "deserialize_problem_id")]
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    #[serde(rename = "titleSlug")]
    pub slug: String,
    #[serde(rename = "topicTags", default)]
    pub topics: Vec<TopicTag>,
}

// Exports disagree on whether the id is "42" or 42; keep it as a string either way
fn deserialize_problem_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct ProblemIdVisitor;

    impl<'de> Visitor<'de> for ProblemIdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a problem id as a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.trim().to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(ProblemIdVisitor)
}

impl Problem {
    pub fn topic_names(&self) -> Vec<&str> {
        self.topics.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn has_topic(&self, topic: &str) -> bool {
        let topic = topic.trim();
        self.topics.iter().any(|t| t.name.eq_ignore_ascii_case(topic))
    }

    pub fn url(&self) -> String {
        format!("https://leetcode.com/problems/{}/", self.slug)
    }

    /// Load the catalog. Unlike the solved and history logs, the catalog must
    /// already exist: a missing file is an I/O error, not an empty catalog.
    pub async fn load_all(path: &Path) -> Result<Vec<Problem>, LeetError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| LeetError::io(
                format!("Failed to read problem catalog: {}", e),
                "catalog"
            ).with_context(format!("path: {:?}", path)))?;

        let problems: Vec<Problem> = serde_json::from_str(&content)
            .map_err(|e| LeetError::parse(
                format!("Failed to parse problem catalog: {}", e),
                "catalog"
            ).with_context(format!("path: {:?}", path)))?;

        tracing::debug!(path = ?path, count = problems.len(), "Loaded problem catalog");
        Ok(problems)
    }
}

pub fn find_by_id<'a>(problems: &'a [Problem], id: &str) -> Option<&'a Problem> {
    let id = id.trim();
    problems.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_catalog_entry() {
        let raw = r#"{
            "frontendQuestionId": "1",
            "title": "Two Sum",
            "difficulty": "Easy",
            "titleSlug": "two-sum",
            "topicTags": [{"name": "Array"}, {"name": "Hash Table"}]
        }"#;
        let problem: Problem = serde_json::from_str(raw).unwrap();
        assert_eq!(problem.id, "1");
        assert_eq!(problem.difficulty, Difficulty::Easy);
        assert_eq!(problem.topic_names(), vec!["Array", "Hash Table"]);
        assert_eq!(problem.url(), "https://leetcode.com/problems/two-sum/");
    }

    #[test]
    fn test_numeric_id_is_accepted() {
        let raw = r#"{"frontendQuestionId": 42, "title": "Trapping Rain Water",
            "difficulty": "Hard", "titleSlug": "trapping-rain-water"}"#;
        let problem: Problem = serde_json::from_str(raw).unwrap();
        assert_eq!(problem.id, "42");
        assert!(problem.topics.is_empty());
    }

    #[test]
    fn test_topic_and_difficulty_matching_ignores_case() {
        let raw = r#"{"frontendQuestionId": "3", "title": "Longest Substring",
            "difficulty": "Medium", "titleSlug": "longest-substring",
            "topicTags": [{"name": "Sliding Window"}]}"#;
        let problem: Problem = serde_json::from_str(raw).unwrap();
        assert!(problem.has_topic("sliding window"));
        assert!(!problem.has_topic("sliding"));
        assert!(problem.difficulty.matches("mEdIuM"));
        assert!(!problem.difficulty.matches("Hard"));
    }
}
