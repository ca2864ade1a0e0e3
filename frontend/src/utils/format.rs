use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::DashboardError;

/// `"2024-12-15"` -> `"Dec 15, 2024"`. Date-time strings are accepted too and
/// only their date part is shown.
pub fn format_date(input: &str) -> Result<String, DashboardError> {
    let trimmed = input.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M").map(|dt| dt.date()))
        .map_err(|_| DashboardError::InvalidDate(input.to_string()))?;
    Ok(date.format("%b %-d, %Y").to_string())
}

/// `"14:00"` -> `"2:00 PM"`.
pub fn format_time(input: &str) -> Result<String, DashboardError> {
    let trimmed = input.trim();
    let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| DashboardError::InvalidTime(input.to_string()))?;
    Ok(time.format("%-I:%M %p").to_string())
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turns a slug like `room-utilization` into `Room Utilization`. Only the first
/// dash becomes a space; every letter that starts a word is upper-cased.
pub fn title_case_words(slug: &str) -> String {
    let spaced = slug.replacen('-', " ", 1);
    let mut out = String::with_capacity(spaced.len());
    let mut at_boundary = true;
    for ch in spaced.chars() {
        let is_word = ch.is_ascii_alphanumeric() || ch == '_';
        if is_word && at_boundary {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_boundary = !is_word;
    }
    out
}

/// Human-readable description of a filter range, falling back to the raw text
/// when a side is not a valid date.
pub fn describe_date_range(start: &str, end: &str) -> String {
    let side = |raw: &str| {
        if raw.trim().is_empty() {
            "any".to_string()
        } else {
            format_date(raw).unwrap_or_else(|_| raw.to_string())
        }
    };
    format!("{} - {}", side(start), side(end))
}
