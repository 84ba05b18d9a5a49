use chrono::{Local, NaiveDate};

/// On-disk date format for solved and history entries
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's calendar date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// "Today", "Yesterday", otherwise "DD Mon YYYY". Unparsable input is
/// returned unchanged.
pub fn relative_label(raw: &str, today: NaiveDate) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let Some(date) = parse_date(raw) else {
        return raw.to_string();
    };
    match (today - date).num_days() {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        _ => date.format("%d %b %Y").to_string(),
    }
}
