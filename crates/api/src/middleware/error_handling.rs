//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the
//! OpenHours API. It maps domain-specific errors to appropriate HTTP
//! status codes and JSON error responses, ensuring a consistent error
//! handling experience across the entire API.
//!
//! The implementation is based on Axum's error handling mechanisms and
//! integrates with the core crate's error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use openhours_core::errors::HoursError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific `HoursError` instances and
/// implements `IntoResponse` to convert them into HTTP responses with
/// appropriate status codes and JSON payloads.
///
/// # Example
///
/// ```
/// use axum::Json;
/// use openhours_api::middleware::error_handling::AppError;
/// use openhours_core::errors::HoursError;
///
/// fn handler(input: &str) -> Result<Json<Vec<String>>, AppError> {
///     if input.is_empty() {
///         return Err(AppError(HoursError::InvalidDateTime(input.to_string())));
///     }
///     Ok(Json(vec![]))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub HoursError);

/// Converts application errors to HTTP responses
///
/// This implementation maps each error type to the appropriate HTTP
/// status code and formats the error message into a JSON response body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes. A bad query date-time
        // is the caller's fault; anything else that escapes to the
        // surface is a server-side failure.
        let status = match &self.0 {
            HoursError::InvalidDateTime(_) => StatusCode::BAD_REQUEST,
            HoursError::InvalidWeekday(_)
            | HoursError::InvalidTimeFormat(_)
            | HoursError::InvalidInterval(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from HoursError to AppError
///
/// This implementation allows using `?` operator with functions that
/// return `Result<T, HoursError>` in handler functions that return
/// `Result<T, AppError>`.
impl From<HoursError> for AppError {
    fn from(err: HoursError) -> Self {
        AppError(err)
    }
}
