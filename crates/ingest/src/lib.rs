//! # OpenHours Ingest
//!
//! One-time CSV ingestion for the OpenHours service. The data file has
//! two columns: restaurant name and a free-text opening-hours
//! description. Ingestion runs once at startup, before the HTTP
//! surface accepts any request, and produces the immutable
//! [`Schedule`] the query service reads from.
//!
//! Ingestion is fail-fast: a data file whose day tokens cannot be
//! resolved aborts startup, since the service is useless without valid
//! data. Rows that are merely incomplete (fewer than two columns) are
//! skipped with a warning.

use std::path::Path;

use eyre::{Result, WrapErr};
use openhours_core::{hours::HoursParser, schedule::Schedule};
use tracing::{info, warn};

/// Rows whose first cell contains this text are treated as a header
/// and skipped.
const HEADER_MARKER: &str = "Restaurant Name";

/// Loads and parses the restaurant hours data file into a [`Schedule`].
///
/// The file is assumed small enough to ingest and hold in memory on a
/// single node. Column values are stripped of surrounding double
/// quotes and whitespace. A duplicate restaurant name overwrites the
/// earlier row's entries.
///
/// # Errors
///
/// Fails if the file cannot be opened or read, or if an hours cell
/// contains a day token that cannot be resolved to a weekday.
pub fn load_schedule(path: impl AsRef<Path>) -> Result<Schedule> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .wrap_err_with(|| format!("Failed to open restaurants data file {}", path.display()))?;

    let parser = HoursParser::new();
    let mut schedule = Schedule::new();
    let mut rows = 0usize;

    for record in reader.records() {
        let record = record.wrap_err("Failed to read CSV record")?;
        rows += 1;
        if record.iter().any(|cell| cell.contains(HEADER_MARKER)) {
            continue;
        }
        let (Some(name), Some(hours)) = (record.get(0), record.get(1)) else {
            warn!(row = rows, "skipping row with fewer than two columns");
            continue;
        };
        let name = strip_cell(name);
        let hours = strip_cell(hours);

        let entries = parser
            .parse_cell(hours)
            .wrap_err_with(|| format!("Failed to parse hours for restaurant '{name}'"))?;
        schedule.put(name, entries);
    }

    info!(
        rows,
        restaurants = schedule.len(),
        "loaded restaurant hours data"
    );
    Ok(schedule)
}

/// Strips surrounding double quotes and whitespace from a cell value.
fn strip_cell(cell: &str) -> &str {
    cell.trim().trim_matches('"').trim()
}
