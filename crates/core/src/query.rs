use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::warn;

use crate::errors::{HoursError, HoursResult};
use crate::interval::TimeInterval;
use crate::schedule::Schedule;

/// Date-time shapes accepted by [`parse_datetime`], tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Permissively parses a free-form date-time string.
///
/// A bare date resolves to midnight. Out-of-range components (an hour
/// of 24, a 13th month) fail every format and are rejected.
pub fn parse_datetime(datetime_str: &str) -> HoursResult<NaiveDateTime> {
    let input = datetime_str.trim();
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(dt);
        }
    }
    for format in &["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Ok(date.and_time(NaiveTime::MIN));
        }
    }
    Err(HoursError::InvalidDateTime(input.to_string()))
}

/// Answers "which restaurants are open at time T?" against a schedule
/// built once at startup.
///
/// The service owns its schedule; queries only read it, so a shared
/// instance is safe to hit from concurrent requests.
#[derive(Debug, Clone)]
pub struct QueryService {
    schedule: Schedule,
}

impl QueryService {
    pub fn new(schedule: Schedule) -> Self {
        QueryService { schedule }
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Parses the query string and returns the names of restaurants
    /// open at that moment, or `InvalidDateTime` for unparseable input.
    pub fn query(&self, datetime_str: &str) -> HoursResult<Vec<String>> {
        let dt = parse_datetime(datetime_str)?;
        Ok(self.open_at(dt))
    }

    /// Names of restaurants open at the given moment, in data-file row
    /// order, without duplicates.
    ///
    /// An entry whose interval string fails to parse is skipped with a
    /// warning rather than failing the whole query.
    pub fn open_at(&self, dt: NaiveDateTime) -> Vec<String> {
        let weekday = dt.weekday().num_days_from_monday() as u8;
        let moment = dt.time();

        let mut open = Vec::new();
        for (name, entries) in self.schedule.iter() {
            let matched = entries.iter().any(|entry| {
                if !entry.days.contains(weekday) {
                    return false;
                }
                match TimeInterval::parse(&entry.hours) {
                    Ok(interval) => interval.contains(moment),
                    Err(err) => {
                        warn!(restaurant = name, error = %err, "skipping malformed schedule entry");
                        false
                    }
                }
            });
            if matched {
                open.push(name.to_string());
            }
        }
        open
    }
}
