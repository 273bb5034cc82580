//! Lenient date coercion for spreadsheet-exported cells.
//!
//! Any cell that cannot be read as a date becomes `None`. Callers decide what
//! a missing date means: the resolver sorts it before every real date, the
//! timeline drops the row.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Cell contents that spreadsheet exports use for "no value". Matched
/// case-sensitively, so a status spelled `none` or `Na` is still a label.
const MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "NaT", "None", "n/a", "nan", "null",
];

/// True for blank cells and the usual missing-value markers.
pub fn is_missing_cell(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || MISSING_MARKERS.contains(&trimmed)
}

/// Parses a date or timestamp cell. Date-only values land at midnight.
/// RFC 3339 timestamps keep their local wall-clock value; the offset is dropped.
pub fn parse_record_date(raw: &str) -> Option<NaiveDateTime> {
    if is_missing_cell(raw) {
        return None;
    }
    let trimmed = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_local());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// `YYYY-MM-DD`, the only date shape that leaves the engine.
pub fn format_day(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// Calendar month bucket (`YYYY-MM`).
pub fn period_key(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m").to_string()
}
