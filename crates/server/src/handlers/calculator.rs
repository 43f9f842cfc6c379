use crate::convert::ApiError;
use crate::handlers::{parse_payload, RawBody};
use crate::response::ApiResponse;
use crate::AppState;
use axum::extract::State;
use serde::Serialize;
use sunrise_core::{CalculatorSubmission, EntityKind, SavingsEstimate};

/// `POST /api/calculator`
pub async fn create_calculator(
    State(state): State<AppState>,
    body: RawBody,
) -> Result<ApiResponse<CalculatorSubmission>, ApiError> {
    let payload = parse_payload(EntityKind::Calculator, body)?;
    state
        .intake
        .calculators
        .submit(&payload)
        .map(ApiResponse)
        .map_err(|err| ApiError::on_create(EntityKind::Calculator, &err))
}

/// `GET /api/calculator`
pub async fn list_calculators(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<CalculatorSubmission>>, ApiError> {
    state
        .intake
        .calculators
        .list()
        .map(ApiResponse)
        .map_err(|err| ApiError::on_list(EntityKind::Calculator, &err))
}

/// Estimate figures, plus the stored submission when `save` was set
#[derive(Debug, Serialize)]
pub struct EstimateBody {
    #[serde(flatten)]
    estimate: SavingsEstimate,
    #[serde(skip_serializing_if = "Option::is_none")]
    submission: Option<CalculatorSubmission>,
}

/// `POST /api/calculator/estimate`
pub async fn estimate_savings(
    State(state): State<AppState>,
    body: RawBody,
) -> Result<ApiResponse<EstimateBody>, ApiError> {
    let payload = parse_payload(EntityKind::Calculator, body)?;
    let (estimate, submission) = state
        .intake
        .calculators
        .estimate(&payload)
        .map_err(|err| ApiError::on_create(EntityKind::Calculator, &err))?;
    Ok(ApiResponse(EstimateBody {
        estimate,
        submission,
    }))
}
