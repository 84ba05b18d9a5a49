use crate::problems::problem::Problem;
use crate::stats::streak::prompt_streak;
use crate::stats::topics::{weakest_topics, WEAK_TOPIC_COUNT};
use crate::store::history::HistoryEntry;
use crate::store::solved::SolvedEntry;

/// Highest seriousness level the prompt describes
pub const MAX_SERIOUSNESS: u32 = 3;

/// Difficulty guidance chosen from the prompt streak
pub fn difficulty_guidance(streak: u32) -> &'static str {
    match streak {
        0..=2 => "User is early in streak. Prefer EASY problems (some MEDIUM allowed).",
        3..=9 => "User is mid-streak. Suggest a balanced mix of EASY and MEDIUM.",
        _ => "User is on a strong streak. Suggest MEDIUM and MEDIUM-HARD challenges.",
    }
}

/// Build the instruction text for the suggestion model.
///
/// The wording is a contract with the model only; nothing in this crate parses it.
pub fn build_prompt(
    solved: &[SolvedEntry],
    history: &[HistoryEntry],
    catalog: &[Problem],
    seriousness: u32,
) -> String {
    let streak = prompt_streak(solved);
    let weak_topics = weakest_topics(catalog, solved, WEAK_TOPIC_COUNT);

    let solved_lines = solved
        .iter()
        .map(|s| format!("{} | {}", s.id, s.title))
        .collect::<Vec<_>>()
        .join("\n");

    let history_ids = history
        .iter()
        .map(|h| h.id.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let guidance = difficulty_guidance(streak);
    let weak = weak_topics.join(", ");

    format!(
        r#"You are a coding-interview practice coach. Suggest exactly 3 new LeetCode problems in JSON ONLY.

USER_SOLVED (never repeat):
{solved_lines}

RECENT_SUGGESTIONS (avoid repeating):
{history_ids}

USER_STATS:
Current_Streak: {streak} days
Weak_Topics: {weak}

STREAK_BASED_DIFFICULTY_GUIDANCE:
{guidance}

GOAL:
- Suggest 3 UNSOLVED, NEW problems.
- Follow difficulty guidance above.
- Prefer weak topics moderately.
- Ensure variety (avoid repeating topics too much).
- Avoid all solved and history items.
- NO explanations. NO text outside JSON.

STRICT JSON OUTPUT FORMAT:
[
  {{"title": "", "number": 0, "topics": ["",""]}},
  {{"title": "", "number": 0, "topics": ["",""]}},
  {{"title": "", "number": 0, "topics": ["",""]}}
]

SERIOUSNESS_MODE: {seriousness}
(1 = normal, 2 = stronger diversity, 3 = strict filtering)

Return ONLY the JSON array.
"#
    )
}
