//! Display formatting for scores, timestamps, and schedule times.
//!
//! Backend timestamps arrive as SQL-style (`2026-10-01 09:15:00`), ISO
//! without zone (`2026-10-01T09:15:00.123456`), or RFC 3339. Dates are shown
//! in the `ru-RU` shape; anything unparsable is shown verbatim.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Score with one decimal place.
#[must_use]
pub fn format_score(score: f64) -> String {
    format!("{score:.1}")
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `DD.MM.YYYY`.
#[must_use]
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_owned(), |dt| dt.format("%d.%m.%Y").to_string())
}

/// `DD.MM.YYYY, HH:MM:SS`.
#[must_use]
pub fn format_date_time(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_owned(), |dt| dt.format("%d.%m.%Y, %H:%M:%S").to_string())
}

/// Zero-padded `HH:MM` preview for a schedule row.
#[must_use]
pub fn schedule_preview(hour: u32, minute: u32) -> String {
    format!("{hour:02}:{minute:02}")
}
