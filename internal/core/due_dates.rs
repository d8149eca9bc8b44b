// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/*!
Due-date arithmetic and classification for loan status badges.

The math is done on millisecond timestamps with the same rounding the
browser applies (`Math.ceil` over a float division), so a loan due in 36
hours counts as "2 days remaining".
*/

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// One day in milliseconds.
pub const MS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Cadence of the periodic overdue refresh on loan-related pages.
pub const REFRESH_INTERVAL: core::time::Duration = core::time::Duration::from_secs(5 * 60);

/// Number of whole days between `now_ms` and `due_ms`, rounded up.
///
/// Negative when the due date has passed.
pub fn days_remaining(due_ms: i64, now_ms: i64) -> i64 {
    (((due_ms - now_ms) as f64) / MS_PER_DAY).ceil() as i64
}

/// Status of a loan relative to its due date.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DueStatus {
    /// The due date has passed.
    Overdue,
    /// Due within the next two days.
    DueSoon,
    /// More than two days left.
    OnTime,
}

impl DueStatus {
    /// Classify a remaining-days count.
    pub fn classify(days: i64) -> Self {
        if days < 0 {
            Self::Overdue
        } else if days <= 2 {
            Self::DueSoon
        } else {
            Self::OnTime
        }
    }

    /// The Bootstrap text color class for this status.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Overdue => "text-danger",
            Self::DueSoon => "text-warning",
            Self::OnTime => "text-success",
        }
    }

    /// All classes a badge may carry; removed before the current one is applied.
    pub const CSS_CLASSES: [&'static str; 3] = ["text-success", "text-warning", "text-danger"];

    /// The user-visible badge text for a remaining-days count.
    pub fn label(days: i64) -> String {
        if days < 0 {
            "Vencido".into()
        } else {
            format!("{days} días restantes")
        }
    }
}

/// Parse a `data-due-date` attribute value into a UTC millisecond timestamp.
///
/// Accepted shapes: RFC 3339, `YYYY-MM-DDTHH:MM:SS[.f]`,
/// `YYYY-MM-DD HH:MM:SS[.f]` (what the server renders for datetimes) and
/// `YYYY-MM-DD`. Timestamps without an offset are taken as UTC. Returns
/// `None` for anything else; callers skip the element in that case.
pub fn parse_due_date(value: &str) -> Option<i64> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.timestamp_millis());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis());
    }
    None
}

/// Format a calendar date the way the application displays dates (es-ES
/// short form, `dd/mm/yyyy`). `month` is 1-based.
pub fn format_date(day: u32, month: u32, year: i32) -> String {
    if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
        return date.format("%d/%m/%Y").to_string();
    }

    // Don't panic on an out-of-range date coming from the JS side
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries() {
        assert_eq!(DueStatus::classify(-1), DueStatus::Overdue);
        assert_eq!(DueStatus::classify(0), DueStatus::DueSoon);
        assert_eq!(DueStatus::classify(1), DueStatus::DueSoon);
        assert_eq!(DueStatus::classify(2), DueStatus::DueSoon);
        assert_eq!(DueStatus::classify(3), DueStatus::OnTime);
    }

    #[test]
    fn thirty_six_hours_counts_as_two_days() {
        let now = 1_700_000_000_000;
        let due = now + (36.0 * 60.0 * 60.0 * 1000.0) as i64;
        assert_eq!(days_remaining(due, now), 2);
        assert_eq!(DueStatus::classify(2), DueStatus::DueSoon);
        assert_eq!(DueStatus::label(2), "2 días restantes");
    }

    #[test]
    fn past_due_is_negative_and_expired() {
        let now = 1_700_000_000_000;
        // one millisecond late still ceils to 0 ("due today"), a full day late is overdue
        assert_eq!(days_remaining(now - 1, now), 0);
        assert_eq!(days_remaining(now - (MS_PER_DAY as i64) - 1, now), -1);
        assert_eq!(DueStatus::label(-1), "Vencido");
        assert_eq!(DueStatus::classify(-1).css_class(), "text-danger");
    }

    #[test]
    fn exact_due_instant_is_zero_days() {
        let now = 1_700_000_000_000;
        assert_eq!(days_remaining(now, now), 0);
        assert_eq!(DueStatus::label(0), "0 días restantes");
    }

    #[test]
    fn parses_the_server_rendered_shapes() {
        assert_eq!(parse_due_date("1970-01-02"), Some(MS_PER_DAY as i64));
        assert_eq!(parse_due_date("1970-01-01T00:00:01"), Some(1_000));
        assert_eq!(parse_due_date("1970-01-01 00:00:01"), Some(1_000));
        assert_eq!(parse_due_date("1970-01-01 00:00:01.500"), Some(1_500));
        assert_eq!(parse_due_date("1970-01-01T01:00:00+01:00"), Some(0));
        assert_eq!(parse_due_date(" 1970-01-02 "), Some(MS_PER_DAY as i64));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_due_date(""), None);
        assert_eq!(parse_due_date("soon"), None);
        assert_eq!(parse_due_date("13/01/2026"), None);
        assert_eq!(parse_due_date("2026-13-40"), None);
    }

    #[test]
    fn formats_es_es_short_dates() {
        assert_eq!(format_date(6, 8, 2026), "06/08/2026");
        assert_eq!(format_date(1, 1, 1999), "01/01/1999");
        assert_eq!(format_date(31, 2, 2026), "");
    }
}
