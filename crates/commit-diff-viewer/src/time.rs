//! Relative commit times ("three hours ago", "2 days ago")
//!
//! A presentation heuristic, not calendar math: months are 30 days and
//! years are 365 days, counted from whole elapsed days.

use chrono::{DateTime, Utc};

const MS_PER_HOUR: i64 = 60 * 60 * 1000;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

const HOUR_WORDS: [&str; 13] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve",
];

/// Format the time elapsed from `then` until `now`
///
/// - under 24 hours: `"<N> hours ago"`, N spelled out when 0..=12
/// - under 30 days: `"<days> days ago"`
/// - under 365 days: `"<days / 30> months ago"`
/// - otherwise: `"<days / 365> years ago"`
///
/// All divisions floor. A `then` in the future gives a negative hour count
/// which is rendered as a numeral.
pub fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed_ms = (now - then).num_milliseconds();
    let hours = elapsed_ms.div_euclid(MS_PER_HOUR);
    let days = elapsed_ms.div_euclid(MS_PER_DAY);

    if hours < 24 {
        format!("{} hours ago", hour_label(hours))
    } else if days < 30 {
        format!("{} days ago", days)
    } else if days < 365 {
        format!("{} months ago", days.div_euclid(30))
    } else {
        format!("{} years ago", days.div_euclid(365))
    }
}

fn hour_label(hours: i64) -> String {
    usize::try_from(hours)
        .ok()
        .and_then(|h| HOUR_WORDS.get(h))
        .map(|w| w.to_string())
        .unwrap_or_else(|| hours.to_string())
}
