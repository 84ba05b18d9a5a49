use crate::dates;
use crate::error::LeetError;
use crate::store::history::MAX_HISTORY;
use crate::store::DataStore;
use super::or_reset;

/// Number of entries `prev` should show. `None` means the input was zero or
/// negative and must be rejected. Missing or non-numeric input means 1.
pub fn resolve_count(raw: Option<&str>) -> Option<usize> {
    let Some(raw) = raw else {
        return Some(1);
    };
    match raw.trim().parse::<i64>() {
        Ok(n) if n <= 0 => None,
        Ok(n) => Some((n as u64).min(MAX_HISTORY as u64) as usize),
        Err(_) => Some(1),
    }
}

pub async fn run(store: &DataStore, raw: Option<&str>) -> Result<(), LeetError> {
    let Some(count) = resolve_count(raw) else {
        eprintln!("⚠️ Please provide a positive number");
        return Ok(());
    };

    let history = or_reset(store.load_history().await)?;
    if history.is_empty() {
        println!("No previously suggested problems found. Try running: leetlog suggest");
        return Ok(());
    }

    let today = dates::today();
    println!("Recent Suggested Problems:");
    for (i, entry) in history.iter().rev().take(count).enumerate() {
        println!("{}. {} ({})", i + 1, entry.title, dates::relative_label(&entry.date, today));
    }
    Ok(())
}
