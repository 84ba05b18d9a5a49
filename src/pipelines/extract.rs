//! Utility functions for pulling structured data out of free-form model output

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use crate::error::LeetError;

/// One problem proposed by the model. Ephemeral: filtered, and the survivor
/// becomes a history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiSuggestion {
    /// 0 when missing or null; filtering drops it since no catalog id is 0
    #[serde(default, deserialize_with = "deserialize_number")]
    pub number: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub topics: Vec<String>,
}

impl AiSuggestion {
    /// Catalog id this suggestion refers to
    pub fn id(&self) -> String {
        self.number.to_string()
    }
}

// Models sometimes quote the number ("number": "42")
fn deserialize_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct NumberVisitor;

    impl<'de> Visitor<'de> for NumberVisitor {
        type Value = u64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a non-negative problem number or numeric string")
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            u64::try_from(value)
                .map_err(|_| E::custom(format!("negative problem number {}", value)))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(0)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            value
                .trim()
                .parse::<u64>()
                .map_err(|_| E::custom(format!("invalid problem number {:?}", value)))
        }
    }

    deserializer.deserialize_any(NumberVisitor)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Isolate the JSON array in model output: everything from the first `[` to
/// the last `]`, inclusive.
pub fn extract_json_array(raw: &str) -> Result<&str, LeetError> {
    match (raw.find('['), raw.rfind(']')) {
        (Some(start), Some(end)) if start < end => Ok(&raw[start..=end]),
        _ => Err(LeetError::parse("Model output does not contain a JSON array", "extract")
            .with_context(format!("raw: {}", preview(raw)))),
    }
}

/// Extract and parse the suggestion array. No validation beyond the parse.
pub fn parse_suggestions(raw: &str) -> Result<Vec<AiSuggestion>, LeetError> {
    let clean = extract_json_array(raw)?;
    serde_json::from_str::<Vec<AiSuggestion>>(clean).map_err(|e| {
        LeetError::parse(format!("Model output JSON parse error: {}", e), "extract")
            .with_context(format!("cleaned: {}", preview(clean)))
    })
}

fn preview(text: &str) -> String {
    text.chars().take(300).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_array_from_chatter() {
        let raw = "Sure! [ {\"a\":1} ] thanks";
        assert_eq!(extract_json_array(raw).unwrap(), "[ {\"a\":1} ]");
    }

    #[test]
    fn test_extract_fails_without_closing_bracket() {
        assert!(extract_json_array("Sure! [ {\"a\":1} thanks").is_err());
        assert!(extract_json_array("no brackets at all").is_err());
    }

    #[test]
    fn test_extract_fails_when_brackets_reversed() {
        assert!(extract_json_array("] backwards [").is_err());
    }

    #[test]
    fn test_extract_spans_first_to_last() {
        let raw = "```json\n[{\"number\": 1, \"title\": \"Two Sum\", \"topics\": [\"Array\"]}]\n```";
        let extracted = extract_json_array(raw).unwrap();
        assert!(extracted.starts_with("[{"));
        assert!(extracted.ends_with("}]"));
    }

    #[test]
    fn test_parse_suggestions() {
        let raw = r#"Here you go:
        [
          {"title": "Two Sum", "number": 1, "topics": ["Array", "Hash Table"]},
          {"title": "Valid Parentheses", "number": "20", "topics": ["Stack"]}
        ]"#;
        let parsed = parse_suggestions(raw).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].number, 1);
        assert_eq!(parsed[1].id(), "20");
        assert_eq!(parsed[1].topics, vec!["Stack"]);
    }

    #[test]
    fn test_parse_suggestions_tolerates_missing_fields() {
        let raw = r#"[
          {"title": "Mystery", "topics": []},
          {"title": null, "number": null, "topics": null},
          {"title": "Three", "number": 3, "topics": ["Array"]}
        ]"#;
        let parsed = parse_suggestions(raw).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].number, 0);
        assert_eq!(parsed[1].title, "");
        assert!(parsed[1].topics.is_empty());
        assert_eq!(parsed[2].id(), "3");
    }

    #[test]
    fn test_parse_suggestions_rejects_bad_json() {
        let err = parse_suggestions("[ {title: Two Sum} ]").unwrap_err();
        assert!(err.is(crate::error::ErrorKind::Parse));
    }
}
