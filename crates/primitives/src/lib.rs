//! Submission logs for the Sunrise intake service
//!
//! This crate implements the three intake primitives:
//! - ContactLog: contact-form submissions
//! - BookingLog: consultation bookings
//! - CalculatorLog: savings calculator submissions and estimates
//!
//! All logs are stateless facades over one shared `SubmissionStore`.
//! Each pairs validation with the matching table so callers never insert an
//! unvalidated record.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod booking;
pub mod calculator;
pub mod contact;

pub use booking::BookingLog;
pub use calculator::CalculatorLog;
pub use contact::ContactLog;

use std::sync::Arc;
use sunrise_storage::SubmissionStore;

/// The three logs over one store
#[derive(Clone)]
pub struct Intake {
    /// Contact-form submissions
    pub contacts: ContactLog,
    /// Consultation bookings
    pub bookings: BookingLog,
    /// Savings calculator submissions
    pub calculators: CalculatorLog,
    store: Arc<SubmissionStore>,
}

impl Intake {
    /// Build all logs over `store`
    pub fn new(store: Arc<SubmissionStore>) -> Self {
        Self {
            contacts: ContactLog::new(store.clone()),
            bookings: BookingLog::new(store.clone()),
            calculators: CalculatorLog::new(store.clone()),
            store,
        }
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<SubmissionStore> {
        &self.store
    }
}
