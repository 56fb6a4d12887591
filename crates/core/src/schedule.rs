use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::weekday::WeekdaySet;

/// One span of opening hours: the weekdays it applies to and the raw
/// interval string, e.g. `11:30 am - 11 pm`.
///
/// The interval is kept as text and parsed during matching; a string
/// that later fails to parse costs that entry a match, never the whole
/// query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub days: WeekdaySet,
    pub hours: String,
}

/// The full mapping from restaurant name to its opening-hours entries.
///
/// Built once during startup ingestion and read-only afterward.
/// Iteration follows insertion order, i.e. the data file's row order.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    order: Vec<String>,
    entries: HashMap<String, Vec<ScheduleEntry>>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a restaurant's entries, replacing any prior entries
    /// under the same name. The last row for a duplicate name wins and
    /// the name keeps its original position.
    pub fn put(&mut self, name: impl Into<String>, entries: Vec<ScheduleEntry>) {
        let name = name.into();
        if !self.entries.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.entries.insert(name, entries);
    }

    pub fn get(&self, name: &str) -> Option<&[ScheduleEntry]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// Read-only iteration in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ScheduleEntry])> {
        self.order
            .iter()
            .map(|name| (name.as_str(), self.entries[name].as_slice()))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
