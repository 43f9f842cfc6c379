//! Error conversion from intake errors to HTTP responses
//!
//! Clients only ever see a fixed message per entity and operation. The
//! underlying error is logged, never echoed.

use crate::response::failure;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sunrise_core::{EntityKind, IntakeError};

/// HTTP-facing error: a status plus a fixed client message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    /// 400 for a payload that failed validation
    pub fn invalid(kind: EntityKind) -> Self {
        let message = match kind {
            EntityKind::Contact => "Invalid contact data",
            EntityKind::Booking => "Invalid booking data",
            EntityKind::Calculator => "Invalid calculator data",
        };
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// 500 for a create the store refused
    pub fn save_failed(kind: EntityKind) -> Self {
        let message = match kind {
            EntityKind::Contact => "Failed to save contact",
            EntityKind::Booking => "Failed to save booking",
            EntityKind::Calculator => "Failed to save calculator submission",
        };
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// 500 for a list the store could not serve
    pub fn fetch_failed(kind: EntityKind) -> Self {
        let message = match kind {
            EntityKind::Contact => "Failed to fetch contacts",
            EntityKind::Booking => "Failed to fetch bookings",
            EntityKind::Calculator => "Failed to fetch calculator submissions",
        };
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// 404 for unknown paths
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not found")
    }

    /// 405 for a known path with an unrouted method
    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    }

    /// 413 for a body over the configured limit
    pub fn payload_too_large() -> Self {
        Self::new(StatusCode::PAYLOAD_TOO_LARGE, "Payload too large")
    }

    /// Map a failed create of `kind`
    pub fn on_create(kind: EntityKind, err: &IntakeError) -> Self {
        match err {
            IntakeError::Validation { .. } => Self::invalid(kind),
            IntakeError::Storage(source) => {
                tracing::error!(entity = %kind, error = %source, "create failed");
                Self::save_failed(kind)
            }
        }
    }

    /// Map a failed list of `kind`
    pub fn on_list(kind: EntityKind, err: &IntakeError) -> Self {
        tracing::error!(entity = %kind, error = %err, "list failed");
        Self::fetch_failed(kind)
    }

    /// HTTP status
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Client-facing message
    pub fn message(&self) -> &'static str {
        self.message
    }

    fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        failure(self.status, self.message)
    }
}
