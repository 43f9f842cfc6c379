use axum::Json;
use serde::Serialize;
use sunrise_core::Timestamp;

#[derive(Debug, Serialize)]
pub struct HealthBody {
    status: &'static str,
    timestamp: Timestamp,
}

/// `GET /api/health`
///
/// Not wrapped in the envelope.
pub async fn health_handler() -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok",
        timestamp: Timestamp::now(),
    })
}
