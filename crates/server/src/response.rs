//! Response envelope
//!
//! Success: `{"success": true, "data": ...}`.
//! Failure: `{"success": false, "error": "..."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Envelope<'a, T: Serialize> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

/// 200 response wrapping `data` in the success envelope
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T>(pub T);

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let body = Envelope {
            success: true,
            data: Some(&self.0),
            error: None,
        };
        (StatusCode::OK, Json(body)).into_response()
    }
}

/// Error envelope with the given status
pub(crate) fn failure(status: StatusCode, message: &str) -> Response {
    let body: Envelope<'_, ()> = Envelope {
        success: false,
        data: None,
        error: Some(message),
    };
    (status, Json(body)).into_response()
}
