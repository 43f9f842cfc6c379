use crate::convert::ApiError;
use crate::handlers::{parse_payload, RawBody};
use crate::response::ApiResponse;
use crate::AppState;
use axum::extract::State;
use sunrise_core::{Booking, EntityKind};

/// `POST /api/booking`
pub async fn create_booking(
    State(state): State<AppState>,
    body: RawBody,
) -> Result<ApiResponse<Booking>, ApiError> {
    let payload = parse_payload(EntityKind::Booking, body)?;
    state
        .intake
        .bookings
        .submit(&payload)
        .map(ApiResponse)
        .map_err(|err| ApiError::on_create(EntityKind::Booking, &err))
}

/// `GET /api/bookings`
pub async fn list_bookings(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<Booking>>, ApiError> {
    state
        .intake
        .bookings
        .list()
        .map(ApiResponse)
        .map_err(|err| ApiError::on_list(EntityKind::Booking, &err))
}
