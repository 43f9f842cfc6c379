//! Core types for the Sunrise submission intake service
//!
//! This crate defines everything the other layers share:
//! - RecordId / Timestamp: identity and creation time assigned by the store
//! - EntityKind: the three independent submission tables
//! - Record types: Contact, Booking, CalculatorSubmission and their inputs
//! - Validation: structural contract for each entity kind
//! - Savings: the calculator's estimate arithmetic
//! - Errors: IntakeError and StorageError
//!
//! Nothing here performs I/O. Validation and estimation are pure functions
//! of their input.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod record;
pub mod savings;
pub mod types;
pub mod validation;

pub use error::{IntakeError, IntakeResult, StorageError};
pub use record::{
    Booking, CalculatorSubmission, Contact, NewBooking, NewCalculatorSubmission, NewContact,
    StoredRecord, Submission, ValidatedRecord,
};
pub use savings::{EstimateRequest, ProcessKind, ProcessProfile, SavingsEstimate, SavingsInput};
pub use types::{EntityKind, RecordId, Timestamp};
pub use validation::{validate, validate_booking, validate_calculator, validate_contact};
