//! Error types for the intake service
//!
//! Two failure classes exist:
//! - Validation: the payload broke its entity's structural contract (client fault)
//! - Storage: the store could not accept or read records (server fault)
//!
//! Validation errors deliberately carry no field detail. Callers only learn
//! which entity kind was rejected.

use crate::types::EntityKind;
use thiserror::Error;

/// Failure inside the submission store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The table already holds its configured maximum number of records
    #[error("{kind} table is full ({limit} records)")]
    CapacityExceeded {
        /// Table that rejected the insert
        kind: EntityKind,
        /// Configured record limit
        limit: usize,
    },
}

/// Error returned by intake operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// Payload failed validation for this entity kind
    #[error("invalid {kind} data")]
    Validation {
        /// Entity kind whose contract was violated
        kind: EntityKind,
    },

    /// Store failure while creating or listing
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl IntakeError {
    /// Validation failure for `kind`
    pub fn validation(kind: EntityKind) -> Self {
        IntakeError::Validation { kind }
    }

    /// True if the client is at fault
    pub fn is_validation(&self) -> bool {
        matches!(self, IntakeError::Validation { .. })
    }
}

/// Result alias for intake operations
pub type IntakeResult<T> = Result<T, IntakeError>;
