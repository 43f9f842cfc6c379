//! Route handlers, one module per entity

pub mod booking;
pub mod calculator;
pub mod contact;
pub mod health;

use crate::convert::ApiError;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use serde_json::Value;
use sunrise_core::EntityKind;

/// Body as handed to create handlers; buffering failures arrive as `Err`
pub(crate) type RawBody = Result<Bytes, BytesRejection>;

/// Parse a request body as JSON
///
/// Bodies over the configured limit are a 413. Empty, unreadable or
/// malformed bodies are the entity's validation failure.
pub(crate) fn parse_payload(kind: EntityKind, body: RawBody) -> Result<Value, ApiError> {
    let body = body.map_err(|rejection| {
        tracing::debug!(entity = %kind, error = %rejection, "body rejected");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::payload_too_large()
        } else {
            ApiError::invalid(kind)
        }
    })?;
    serde_json::from_slice(&body).map_err(|err| {
        tracing::debug!(entity = %kind, error = %err, "body is not JSON");
        ApiError::invalid(kind)
    })
}

/// Fallback for unknown paths
pub async fn not_found_handler() -> ApiError {
    ApiError::not_found()
}

/// Fallback for known paths hit with an unrouted method
pub async fn method_not_allowed_handler() -> ApiError {
    ApiError::method_not_allowed()
}
