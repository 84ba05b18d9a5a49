//! Streak calculations over the solved log.
//!
//! There are two definitions here and they do not agree:
//!
//! * [`streak_summary`] backs the `stats` command. It works on distinct dates,
//!   tracks the longest run, and drops the current streak to zero once the
//!   last solve is older than yesterday.
//! * [`prompt_streak`] backs the suggestion prompt. It walks entries newest
//!   first, counts duplicate dates, and never looks at today.
//!
//! Each consumer depends on its own semantics, so they are kept separate.

use std::collections::BTreeSet;
use chrono::{Duration, NaiveDate};
use crate::dates::parse_date;
use crate::store::solved::SolvedEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Streak {
    pub current: u32,
    pub longest: u32,
}

/// Current and longest runs of consecutive solve days, as of `today`.
pub fn streak_summary(solved: &[SolvedEntry], today: NaiveDate) -> Streak {
    // Set collapses same-day solves and sorts ascending
    let dates: BTreeSet<NaiveDate> = solved.iter().filter_map(|s| parse_date(&s.date)).collect();

    let mut iter = dates.iter();
    let Some(first) = iter.next() else {
        return Streak::default();
    };

    let mut current = 1u32;
    let mut longest = 1u32;
    let mut prev = *first;
    for &date in iter {
        if date - prev == Duration::days(1) {
            current += 1;
        } else {
            longest = longest.max(current);
            current = 1;
        }
        prev = date;
    }
    longest = longest.max(current);

    // `prev` is now the most recent solve
    if prev < today - Duration::days(1) {
        current = 0;
    }

    Streak { current, longest }
}

/// Simplified streak fed to the suggestion prompt. Not the same number as
/// `streak_summary(..).current`; see the module docs.
pub fn prompt_streak(solved: &[SolvedEntry]) -> u32 {
    if solved.is_empty() {
        return 0;
    }

    let mut sorted: Vec<&SolvedEntry> = solved.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let Some(mut last) = parse_date(&sorted[0].date) else {
        return 1;
    };

    let mut streak = 1u32;
    for entry in &sorted[1..] {
        let Some(current) = parse_date(&entry.date) else {
            continue;
        };
        let gap = last - current;
        if gap >= Duration::zero() && gap <= Duration::hours(24) {
            streak += 1;
            last = current;
        } else {
            break;
        }
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solved(dates: &[&str]) -> Vec<SolvedEntry> {
        dates
            .iter()
            .enumerate()
            .map(|(i, d)| SolvedEntry {
                id: (i + 1).to_string(),
                title: format!("Problem {}", i + 1),
                date: d.to_string(),
            })
            .collect()
    }

    fn day(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_three_day_run_ending_today() {
        let log = solved(&["2024-01-01", "2024-01-02", "2024-01-03"]);
        assert_eq!(streak_summary(&log, day("2024-01-03")), Streak { current: 3, longest: 3 });
    }

    #[test]
    fn test_gap_to_today_resets_current_only() {
        let log = solved(&["2024-01-01", "2024-01-02", "2024-01-03"]);
        assert_eq!(streak_summary(&log, day("2024-01-10")), Streak { current: 0, longest: 3 });
    }

    #[test]
    fn test_last_solve_yesterday_keeps_streak() {
        let log = solved(&["2024-01-02", "2024-01-03"]);
        assert_eq!(streak_summary(&log, day("2024-01-04")).current, 2);
    }

    #[test]
    fn test_duplicate_dates_collapse() {
        let log = solved(&["2024-01-01", "2024-01-01", "2024-01-02"]);
        assert_eq!(streak_summary(&log, day("2024-01-02")), Streak { current: 2, longest: 2 });
    }

    #[test]
    fn test_longest_survives_later_short_run() {
        let log = solved(&[
            "2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04",
            "2024-01-10", "2024-01-11",
        ]);
        assert_eq!(streak_summary(&log, day("2024-01-11")), Streak { current: 2, longest: 4 });
    }

    #[test]
    fn test_empty_and_unparsable() {
        assert_eq!(streak_summary(&[], day("2024-01-01")), Streak::default());
        assert_eq!(streak_summary(&solved(&["garbage"]), day("2024-01-01")), Streak::default());
    }

    #[test]
    fn test_prompt_streak_counts_back_from_newest() {
        let log = solved(&["2024-01-01", "2024-01-03", "2024-01-04", "2024-01-05"]);
        assert_eq!(prompt_streak(&log), 3);
    }

    #[test]
    fn test_prompt_streak_counts_same_day_entries() {
        // Differs from streak_summary, which would report 2 here
        let log = solved(&["2024-01-02", "2024-01-02", "2024-01-01"]);
        assert_eq!(prompt_streak(&log), 3);
        assert_eq!(streak_summary(&log, day("2024-01-02")).current, 2);
    }

    #[test]
    fn test_prompt_streak_ignores_today() {
        let log = solved(&["2020-05-01", "2020-05-02"]);
        assert_eq!(prompt_streak(&log), 2);
    }

    #[test]
    fn test_prompt_streak_edge_cases() {
        assert_eq!(prompt_streak(&[]), 0);
        assert_eq!(prompt_streak(&solved(&["bad-date", "2024-01-01"])), 1);
        assert_eq!(prompt_streak(&solved(&["2024-01-02", "2024-01-01x", "2024-01-01"])), 2);
    }
}
