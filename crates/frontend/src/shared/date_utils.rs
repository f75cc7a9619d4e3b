/// Utilities for date and time formatting
///
/// Dates are shown day-first (`DD/MM/YYYY`), as the shop reads them.
use chrono::{NaiveDate, NaiveDateTime};

/// Format a timestamp as `DD/MM/YYYY HH:MM`
pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%d/%m/%Y %H:%M").to_string()
}

/// Format a date as `DD/MM/YYYY`
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Parse the value of an `<input type="date">` (`YYYY-MM-DD`); empty means no date
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Render a date back into `<input type="date">` format
pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
