//! # OpenHours API
//!
//! The API crate provides the web server implementation for the
//! OpenHours restaurant-hours service. It exposes a single data
//! endpoint answering which restaurants are open at a supplied
//! date-time, plus health and version endpoints.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Map domain errors to HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework. All request processing is
//! read-only against a schedule built once at startup, so concurrent
//! requests need no locking.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use openhours_core::query::QueryService;
use tokio::net::TcpListener;
use tracing::info;

/// Shared application state that is accessible to all request handlers
///
/// The state owns the query service, which in turn owns the immutable
/// schedule built during startup ingestion. Sharing it behind an `Arc`
/// is safe because queries only read.
pub struct ApiState {
    /// The open-at-T query service backed by the ingested schedule
    pub query: QueryService,
}

/// Builds the application router over the given state
///
/// Exposed separately from [`start_server`] so tests can drive the
/// full routing stack without binding a listener.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Restaurant query endpoint
        .merge(routes::restaurants::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration and schedule
///
/// This function configures routes, applies CORS, tracing and timeout
/// layers, and starts the HTTP server. The query service
/// must already be loaded; startup ingestion happens before this is
/// called, so the server never accepts a request against an empty or
/// half-built schedule.
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and other settings
/// * `query` - Query service over the ingested schedule
///
/// # Returns
///
/// * `Result<()>` - Success or error result
pub async fn start_server(config: config::ApiConfig, query: QueryService) -> Result<()> {
    // Create shared state with dependencies
    let state = Arc::new(ApiState { query });

    // Build the application router with all routes
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse::<axum::http::HeaderValue>())
            .collect::<Result<Vec<_>, _>>()?;
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins);

        app.layer(cors)
    } else {
        app
    };

    // Add request tracing and timeout middleware
    let app = app
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(tower_http::timeout::TimeoutLayer::new(
            std::time::Duration::from_secs(config.request_timeout),
        ));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
