use crate::convert::ApiError;
use crate::handlers::{parse_payload, RawBody};
use crate::response::ApiResponse;
use crate::AppState;
use axum::extract::State;
use sunrise_core::{Contact, EntityKind};

/// `POST /api/contact`
pub async fn create_contact(
    State(state): State<AppState>,
    body: RawBody,
) -> Result<ApiResponse<Contact>, ApiError> {
    let payload = parse_payload(EntityKind::Contact, body)?;
    state
        .intake
        .contacts
        .submit(&payload)
        .map(ApiResponse)
        .map_err(|err| ApiError::on_create(EntityKind::Contact, &err))
}

/// `GET /api/contacts`
pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<Contact>>, ApiError> {
    state
        .intake
        .contacts
        .list()
        .map(ApiResponse)
        .map_err(|err| ApiError::on_list(EntityKind::Contact, &err))
}
