//! Weekly mood trend: per-day mean and count of mood scores over a trailing window.
//!
//! Dates are UTC calendar dates. The result is sorted ascending by date, days
//! without check-ins are omitted, and input order never affects the output.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::mood::MoodSample;

pub const TREND_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodTrendPoint {
    pub date: NaiveDate,
    /// Mean score for the day, rounded half away from zero to 2 dp.
    pub average_score: f64,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodTrendResponse {
    pub trend: Vec<MoodTrendPoint>,
}

/// Start of the window ending at `now`.
pub fn window_start(now: DateTime<Utc>, window_days: i64) -> DateTime<Utc> {
    now - Duration::days(window_days)
}

/// Aggregates samples created at or after `now - window_days` into one point per UTC date.
pub fn weekly_trend(
    samples: &[MoodSample],
    now: DateTime<Utc>,
    window_days: i64,
) -> Vec<MoodTrendPoint> {
    let since = window_start(now, window_days);

    // BTreeMap keeps dates ordered; (sum, count) per date
    let mut by_date: BTreeMap<NaiveDate, (i64, u32)> = BTreeMap::new();
    for sample in samples.iter().filter(|s| s.created_at >= since) {
        let slot = by_date.entry(sample.created_at.date_naive()).or_insert((0, 0));
        slot.0 += i64::from(sample.mood_score);
        slot.1 += 1;
    }

    by_date
        .into_iter()
        .map(|(date, (sum, count))| MoodTrendPoint {
            date,
            average_score: round2(sum as f64 / f64::from(count)),
            count,
        })
        .collect()
}

/// Parses an ISO-8601 timestamp as UTC. A trailing literal `Z` is rewritten
/// to `+00:00` first; explicit offsets are converted to UTC.
pub fn parse_utc_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    let normalized = match raw.strip_suffix('Z').or_else(|| raw.strip_suffix('z')) {
        Some(base) => format!("{base}+00:00"),
        None => restore_plus_offset(raw),
    };
    DateTime::parse_from_rfc3339(&normalized)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

/// An unencoded `+hh:mm` in a query string arrives as ` hh:mm`.
fn restore_plus_offset(raw: &str) -> String {
    let Some((base, offset)) = raw.len().checked_sub(6).and_then(|i| {
        Some((raw.get(..i)?, raw.get(i..)?.as_bytes()))
    }) else {
        return raw.to_string();
    };
    let is_offset = offset[0] == b' '
        && offset[3] == b':'
        && [1, 2, 4, 5].iter().all(|&i| offset[i].is_ascii_digit());
    if is_offset {
        format!("{base}+{}", &raw[base.len() + 1..])
    } else {
        raw.to_string()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
