//! HTTP surface of the Sunrise submission intake service
//!
//! Routes (all JSON):
//! - `POST /api/contact`, `GET /api/contacts`
//! - `POST /api/booking`, `GET /api/bookings`
//! - `POST /api/calculator`, `GET /api/calculator`
//! - `POST /api/calculator/estimate`
//! - `GET /api/health`
//!
//! Every response passes through the CORS and request-tracing middleware.
//! Unknown paths (404), unrouted methods (405) and oversized bodies (413)
//! answer with the standard error envelope.

#![warn(clippy::all)]

pub mod config;
pub mod convert;
pub mod handlers;
pub mod middleware;
pub mod response;

pub use config::{ConfigError, ServerArgs, ServerConfig};
pub use convert::ApiError;
pub use response::ApiResponse;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use sunrise_primitives::Intake;
use sunrise_storage::SubmissionStore;

/// Default request body limit (1 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    /// Validated logs over the process-wide store
    pub intake: Intake,
    /// Largest accepted request body
    pub max_body_bytes: usize,
}

impl AppState {
    /// State over `store` with the default body limit
    pub fn new(store: Arc<SubmissionStore>) -> Self {
        Self {
            intake: Intake::new(store),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    /// Override the request body limit
    #[must_use]
    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<SubmissionStore> {
        self.intake.store()
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health::health_handler))
        .route("/api/contact", post(handlers::contact::create_contact))
        .route("/api/contacts", get(handlers::contact::list_contacts))
        .route("/api/booking", post(handlers::booking::create_booking))
        .route("/api/bookings", get(handlers::booking::list_bookings))
        .route(
            "/api/calculator",
            post(handlers::calculator::create_calculator)
                .get(handlers::calculator::list_calculators),
        )
        .route(
            "/api/calculator/estimate",
            post(handlers::calculator::estimate_savings),
        )
        .fallback(handlers::not_found_handler)
        .method_not_allowed_fallback(handlers::method_not_allowed_handler)
        .layer(DefaultBodyLimit::max(state.max_body_bytes))
        .layer(axum::middleware::from_fn(middleware::cors))
        .layer(axum::middleware::from_fn(middleware::request_tracing))
        .with_state(state)
}
