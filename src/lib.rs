//! Sunrise: submission intake for the Sunrise AI website
//!
//! The website posts three kinds of submissions (contact messages,
//! consultation bookings and savings-calculator results). Each is
//! validated, stamped with an id and creation time, and kept in an
//! in-process table that lives as long as the process.
//!
//! # Quick Start
//!
//! ```ignore
//! use sunrise::{Intake, SubmissionStore};
//! use std::sync::Arc;
//!
//! let intake = Intake::new(Arc::new(SubmissionStore::new()));
//! let booking = intake.bookings.submit(&payload)?;
//! assert!(intake.bookings.list()?.contains(&booking));
//! ```
//!
//! # Crates
//!
//! | Crate | Purpose |
//! |-------|---------|
//! | `sunrise-core` | ids, timestamps, records, validation, savings estimator |
//! | `sunrise-storage` | per-entity tables and the shared store |
//! | `sunrise-primitives` | validated logs over the store |
//! | `sunrise-server` | axum HTTP API |

// Core value types
pub use sunrise_core::{EntityKind, RecordId, Timestamp};

// Records
pub use sunrise_core::{
    Booking, CalculatorSubmission, Contact, NewBooking, NewCalculatorSubmission, NewContact,
    StoredRecord, Submission, ValidatedRecord,
};

// Validation and estimation
pub use sunrise_core::{
    validate, validate_booking, validate_calculator, validate_contact, EstimateRequest,
    ProcessKind, SavingsEstimate, SavingsInput,
};

// Errors
pub use sunrise_core::{IntakeError, IntakeResult, StorageError};

// Storage
pub use sunrise_storage::{StoreOptions, SubmissionStore, Table};

// Primitives
pub use sunrise_primitives::{BookingLog, CalculatorLog, ContactLog, Intake};

// HTTP
pub use sunrise_server::{build_router, AppState, ServerConfig};
