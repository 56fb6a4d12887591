use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::errors::{HoursError, HoursResult};

/// Parses a 12-hour clock token like `10:30 am` or `11 pm`.
///
/// The meridiem is case-insensitive and the space before it is
/// optional. Anything that matches neither the `%I %p` nor the
/// `%I:%M %p` shape is rejected.
pub fn parse_clock_time(token: &str) -> HoursResult<NaiveTime> {
    let token = token.trim();
    normalize_clock_token(token)
        .and_then(|normalized| NaiveTime::parse_from_str(&normalized, "%I:%M %p").ok())
        .ok_or_else(|| HoursError::InvalidTimeFormat(token.to_string()))
}

/// Rewrites a clock token into the one shape chrono parses: `10:30am`
/// gains a space, `11 pm` gains the `:00` minutes chrono insists on.
fn normalize_clock_token(token: &str) -> Option<String> {
    let lower = token.to_lowercase();
    let (head, meridiem) = if let Some(head) = lower.strip_suffix("am") {
        (head, "am")
    } else if let Some(head) = lower.strip_suffix("pm") {
        (head, "pm")
    } else {
        return None;
    };

    let head = head.trim_end();
    if head.contains(':') {
        Some(format!("{head} {meridiem}"))
    } else {
        Some(format!("{head}:00 {meridiem}"))
    }
}

/// A time-of-day interval, date independent. The interval is closed on
/// both ends and may cross midnight (`start > end`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeInterval {
    /// Parses an interval string like `11:30 am - 11 pm`.
    ///
    /// The two clock times must be separated by a literal `" - "`.
    pub fn parse(interval_str: &str) -> HoursResult<Self> {
        let parts: Vec<&str> = interval_str.split(" - ").collect();
        let [start, end] = parts[..] else {
            return Err(HoursError::InvalidInterval(interval_str.to_string()));
        };
        Ok(TimeInterval {
            start: parse_clock_time(start)
                .map_err(|_| HoursError::InvalidInterval(interval_str.to_string()))?,
            end: parse_clock_time(end)
                .map_err(|_| HoursError::InvalidInterval(interval_str.to_string()))?,
        })
    }

    /// Tests whether a clock time falls inside the interval.
    ///
    /// When `start > end` the interval crosses midnight, and a moment
    /// matches if it lies after the start on one day or before the end
    /// on the next. This lets one entry represent overnight hours
    /// without splitting it across two calendar days.
    pub fn contains(&self, moment: NaiveTime) -> bool {
        if self.start <= self.end {
            self.start <= moment && moment <= self.end
        } else {
            moment >= self.start || moment <= self.end
        }
    }
}
