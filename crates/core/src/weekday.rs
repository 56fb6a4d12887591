use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::errors::{HoursError, HoursResult};

/// Fixed alias table mapping lowercased day tokens to weekday indices
/// (0 = Monday .. 6 = Sunday). More aliases can be added as needed.
const DAY_ALIASES: &[(&str, u8)] = &[
    ("mon", 0),
    ("monday", 0),
    ("tue", 1),
    ("tues", 1),
    ("tuesday", 1),
    ("wed", 2),
    ("wednesday", 2),
    ("thu", 3),
    ("thurs", 3),
    ("thursday", 3),
    ("fri", 4),
    ("friday", 4),
    ("sat", 5),
    ("saturday", 5),
    ("sun", 6),
    ("sunday", 6),
];

/// Resolves a single day token ("Mon", "tuesday", ...) to its weekday
/// index, 0 for Monday through 6 for Sunday.
pub fn weekday_from_name(token: &str) -> HoursResult<u8> {
    let key = token.trim().to_lowercase();
    DAY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, ord)| *ord)
        .ok_or_else(|| HoursError::InvalidWeekday(token.trim().to_string()))
}

/// A set of weekday indices in `0..=6`, stored as a bitmask.
///
/// Duplicates collapse and insertion order is irrelevant; the set only
/// answers membership questions during query matching.
#[derive(Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    pub const fn empty() -> Self {
        WeekdaySet(0)
    }

    pub fn insert(&mut self, weekday: u8) {
        debug_assert!(weekday < 7);
        self.0 |= 1 << weekday;
    }

    pub fn contains(&self, weekday: u8) -> bool {
        weekday < 7 && self.0 & (1 << weekday) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Weekday indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..7).filter(move |d| self.contains(*d))
    }
}

impl FromIterator<u8> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = WeekdaySet::empty();
        for d in iter {
            set.insert(d);
        }
        set
    }
}

impl fmt::Debug for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Resolves a comma-separated day specification into a [`WeekdaySet`].
///
/// Each token is either an inclusive range like `Mon-Wed` or a single
/// day name. A reversed range wraps around the week, so `Fri-Mon`
/// yields {Fri, Sat, Sun, Mon}. Single tokens that are not in the
/// alias table fall back to chrono's weekday parser, which keeps
/// loosely formatted tokens working.
pub fn weekday_set(days_str: &str) -> HoursResult<WeekdaySet> {
    let mut set = WeekdaySet::empty();
    for token in days_str.split(',') {
        if token.trim().is_empty() {
            continue;
        }
        match token.split_once('-') {
            Some((start, end)) => {
                let start = weekday_from_name(start)?;
                let end = weekday_from_name(end)?;
                let mut day = start;
                loop {
                    set.insert(day);
                    if day == end {
                        break;
                    }
                    day = (day + 1) % 7;
                }
            }
            None => set.insert(single_weekday(token)?),
        }
    }
    Ok(set)
}

fn single_weekday(token: &str) -> HoursResult<u8> {
    weekday_from_name(token).or_else(|err| {
        token
            .trim()
            .parse::<Weekday>()
            .map(|w| w.num_days_from_monday() as u8)
            .map_err(|_| err)
    })
}
