//! # Restaurant Handlers
//!
//! This module contains the handler answering the service's one real
//! question: which restaurants are open at a given date-time?
//!
//! The date-time arrives as a free-form URL path segment (e.g.
//! `2025-05-19 09:14`, URL-encoded by the client). The handler
//! validates it, then scans the in-memory schedule that was built once
//! at startup. Matching is pure in-memory computation, so the handler
//! never blocks on I/O.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::{middleware::error_handling::AppError, ApiState};

/// Returns the names of restaurants open at the supplied date-time
///
/// # Endpoint
///
/// ```text
/// GET /restaurants/{datetimeinput}
/// ```
///
/// # Parameters
///
/// * `state` - Application state holding the query service
/// * `datetimeinput` - Free-form date-time string path segment
///
/// # Returns
///
/// * `Result<Json<Vec<String>>, AppError>` - JSON array of restaurant
///   names open at that moment (possibly empty), in data-file row
///   order with no duplicates
///
/// # Errors
///
/// * `HoursError::InvalidDateTime` - the path segment is not a
///   parseable date-time; surfaces as HTTP 400
#[axum::debug_handler]
pub async fn open_restaurants(
    State(state): State<Arc<ApiState>>,
    Path(datetimeinput): Path<String>,
) -> Result<Json<Vec<String>>, AppError> {
    let open = state.query.query(&datetimeinput)?;
    debug!(input = %datetimeinput, matches = open.len(), "answered open-restaurants query");
    Ok(Json(open))
}
