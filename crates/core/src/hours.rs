use regex::Regex;

use crate::errors::HoursResult;
use crate::schedule::ScheduleEntry;
use crate::weekday::weekday_set;

/// Lenient extractor for free-text opening-hours cells.
///
/// A cell like `"Mon-Fri 9 am - 5 pm, Sat 10 am - 2 pm"` holds one or
/// more day-group/interval pairs. The extractor pattern-matches every
/// pair it can find and ignores residual text; this is deliberately
/// best-effort rather than a validation pass.
pub struct HoursParser {
    pattern: Regex,
}

impl Default for HoursParser {
    fn default() -> Self {
        Self::new()
    }
}

impl HoursParser {
    pub fn new() -> Self {
        // A lazy run of day names, commas, spaces and hyphens, followed
        // by an "H[:MM] am - H[:MM] pm" shaped interval.
        let pattern = Regex::new(
            r"(?i)([A-Za-z,\s-]+?)\s+(\d{1,2}(?::\d{2})?\s*[ap]m\s*-\s*\d{1,2}(?::\d{2})?\s*[ap]m)",
        )
        .expect("hours pattern is valid");
        HoursParser { pattern }
    }

    /// Extracts every `(day-spec, interval)` string pair from one cell.
    ///
    /// An unmatched cell yields an empty list, never an error.
    pub fn extract<'a>(&self, hours_cell: &'a str) -> Vec<(&'a str, &'a str)> {
        self.pattern
            .captures_iter(hours_cell)
            .map(|caps| {
                let (_, [days, interval]) = caps.extract();
                // A day run that follows an earlier group starts with
                // the separating comma; strip it along with whitespace.
                (
                    days.trim_matches(|c: char| c.is_whitespace() || c == ','),
                    interval,
                )
            })
            .collect()
    }

    /// Parses one cell into schedule entries, resolving each day spec
    /// to a weekday set and keeping the interval string raw.
    ///
    /// An unresolvable day token fails the whole cell; ingestion is a
    /// one-time startup step and a malformed data file should surface
    /// there, not at query time.
    pub fn parse_cell(&self, hours_cell: &str) -> HoursResult<Vec<ScheduleEntry>> {
        self.extract(hours_cell)
            .into_iter()
            .map(|(days, interval)| {
                Ok(ScheduleEntry {
                    days: weekday_set(days)?,
                    hours: interval.to_string(),
                })
            })
            .collect()
    }
}
