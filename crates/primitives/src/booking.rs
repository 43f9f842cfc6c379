//! Consultation booking log
//!
//! Stateless facade over the shared [`SubmissionStore`] for the booking
//! table. Date and time are stored as the free text the client sent.

use serde_json::Value;
use std::sync::Arc;
use sunrise_core::{validate_booking, Booking, IntakeResult, NewBooking};
use sunrise_storage::SubmissionStore;

/// Consultation booking log
#[derive(Clone)]
pub struct BookingLog {
    store: Arc<SubmissionStore>,
}

impl BookingLog {
    /// Create a facade over `store`
    pub fn new(store: Arc<SubmissionStore>) -> Self {
        Self { store }
    }

    /// Validate a raw payload and store it
    pub fn submit(&self, payload: &Value) -> IntakeResult<Booking> {
        let input = validate_booking(payload)?;
        self.record(input)
    }

    /// Store an already validated booking
    pub fn record(&self, input: NewBooking) -> IntakeResult<Booking> {
        let booking = self.store.bookings().create(input).map_err(|err| {
            tracing::warn!(entity = "booking", error = %err, "create failed");
            err
        })?;
        tracing::info!(
            entity = "booking",
            id = %booking.id,
            date = %booking.date,
            time = %booking.time,
            "submission accepted"
        );
        Ok(booking)
    }

    /// Every stored booking
    pub fn list(&self) -> IntakeResult<Vec<Booking>> {
        Ok(self.store.bookings().list_all())
    }
}
