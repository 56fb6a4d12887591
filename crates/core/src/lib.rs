//! # OpenHours Core
//!
//! Domain logic for the OpenHours restaurant-hours service: parsing
//! free-text opening-hours descriptions into structured schedules and
//! answering "which restaurants are open at time T?".
//!
//! ## Architecture
//!
//! - **weekday**: day-name aliases, day ranges and weekday sets
//! - **interval**: 12-hour clock parsing and interval membership,
//!   including intervals that cross midnight
//! - **hours**: lenient pattern extraction of (days, interval) pairs
//!   from one free-text hours cell
//! - **schedule**: the immutable name-to-entries mapping built at
//!   startup
//! - **query**: date-time validation and the open-at-T scan
//!
//! This crate does no I/O; ingestion and the HTTP surface live in the
//! `openhours-ingest` and `openhours-api` crates.

/// Error taxonomy shared across parsing and querying
pub mod errors;
/// Free-text hours-cell extraction
pub mod hours;
/// Clock-time parsing and interval membership
pub mod interval;
/// The query service answering open-at-T questions
pub mod query;
/// Schedule storage keyed by restaurant name
pub mod schedule;
/// Weekday aliases and weekday sets
pub mod weekday;
