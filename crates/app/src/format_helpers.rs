/// Shared formatting utilities for the view layer.
use chrono::NaiveDate;

/// Format an ISO date string as "Jan 22, 2024".
///
/// Falls back to the input unchanged if it is not a `YYYY-MM-DD` date.
pub fn format_date_human(date_str: &str) -> String {
    match NaiveDate::parse_from_str(date_str.get(..10).unwrap_or(date_str), "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Header date, e.g. "Mon, Jan 22, 2024".
pub fn format_header_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

/// One decimal place with a percent sign: `94.7` → "94.7%".
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Today in the viewer's local timezone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
