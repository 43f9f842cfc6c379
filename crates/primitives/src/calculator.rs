//! Savings calculator log
//!
//! Stores calculator submissions and computes savings estimates. An estimate
//! can optionally be recorded as the submission the website would auto-save.

use serde_json::Value;
use std::sync::Arc;
use sunrise_core::{
    validate_calculator, CalculatorSubmission, EstimateRequest, IntakeResult,
    NewCalculatorSubmission, SavingsEstimate,
};
use sunrise_storage::SubmissionStore;

/// Savings calculator log
#[derive(Clone)]
pub struct CalculatorLog {
    store: Arc<SubmissionStore>,
}

impl CalculatorLog {
    /// Create a facade over `store`
    pub fn new(store: Arc<SubmissionStore>) -> Self {
        Self { store }
    }

    /// Validate a raw payload and store it
    ///
    /// Numbers are stored as given; negative and zero values are accepted.
    pub fn submit(&self, payload: &Value) -> IntakeResult<CalculatorSubmission> {
        let input = validate_calculator(payload)?;
        self.record(input)
    }

    /// Store an already validated submission
    pub fn record(&self, input: NewCalculatorSubmission) -> IntakeResult<CalculatorSubmission> {
        let submission = self.store.calculators().create(input).map_err(|err| {
            tracing::warn!(entity = "calculator", error = %err, "create failed");
            err
        })?;
        tracing::info!(entity = "calculator", id = %submission.id, "submission accepted");
        Ok(submission)
    }

    /// Every stored calculator submission
    pub fn list(&self) -> IntakeResult<Vec<CalculatorSubmission>> {
        Ok(self.store.calculators().list_all())
    }

    /// Compute a savings estimate from a raw payload
    ///
    /// When the request sets `save`, the derived submission is stored and
    /// returned alongside the estimate.
    pub fn estimate(
        &self,
        payload: &Value,
    ) -> IntakeResult<(SavingsEstimate, Option<CalculatorSubmission>)> {
        let request = EstimateRequest::from_payload(payload)?;
        let estimate = request.input.estimate();
        tracing::debug!(
            process = estimate.process.as_str(),
            monthly_savings = estimate.monthly_savings,
            "estimate computed"
        );

        let saved = if request.save {
            Some(self.record(estimate.to_submission())?)
        } else {
            None
        };
        Ok((estimate, saved))
    }
}
