//! Submission record types
//!
//! Each entity kind has two shapes:
//! - `New*`: a validated input, produced by [`crate::validation`]
//! - the stored record: the input plus the store-assigned `id` and `createdAt`
//!
//! Optional inputs are already normalized to `""` in the `New*` shape, so a
//! stored record never omits a field. All records serialize in camelCase.

use crate::types::{EntityKind, RecordId, Timestamp};
use serde::{Deserialize, Serialize};

// ============================================================================
// Submission trait
// ============================================================================

/// A validated input that the store can turn into a stored record
///
/// Implemented by the three `New*` types. The store is generic over this
/// trait so each table only ever holds records of one kind.
pub trait Submission: Clone + Send + Sync + 'static {
    /// Table this input belongs to
    const KIND: EntityKind;

    /// Stored shape, with id and creation time
    type Record: Clone + Send + Sync + Serialize + Into<StoredRecord> + 'static;

    /// Attach the store-assigned identity
    fn into_record(self, id: RecordId, created_at: Timestamp) -> Self::Record;
}

// ============================================================================
// Contact
// ============================================================================

/// Validated contact-form input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    /// Sender name (non-empty)
    pub name: String,
    /// Sender email address
    pub email: String,
    /// Company, `""` when not given
    pub company: String,
    /// Phone, `""` when not given
    pub phone: String,
    /// Message body (non-empty)
    pub message: String,
}

/// Stored contact-form submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Store-assigned id
    pub id: RecordId,
    /// Sender name
    pub name: String,
    /// Sender email address
    pub email: String,
    /// Company, `""` when not given
    pub company: String,
    /// Phone, `""` when not given
    pub phone: String,
    /// Message body
    pub message: String,
    /// Time the store accepted the record
    pub created_at: Timestamp,
}

impl Submission for NewContact {
    const KIND: EntityKind = EntityKind::Contact;
    type Record = Contact;

    fn into_record(self, id: RecordId, created_at: Timestamp) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            company: self.company,
            phone: self.phone,
            message: self.message,
            created_at,
        }
    }
}

// ============================================================================
// Booking
// ============================================================================

/// Validated consultation booking input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    /// Attendee name (non-empty)
    pub name: String,
    /// Attendee email address
    pub email: String,
    /// Phone, `""` when not given
    pub phone: String,
    /// Requested date, free text (non-empty)
    pub date: String,
    /// Requested time slot, free text (non-empty)
    pub time: String,
}

/// Stored consultation booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Store-assigned id
    pub id: RecordId,
    /// Attendee name
    pub name: String,
    /// Attendee email address
    pub email: String,
    /// Phone, `""` when not given
    pub phone: String,
    /// Requested date
    pub date: String,
    /// Requested time slot
    pub time: String,
    /// Time the store accepted the record
    pub created_at: Timestamp,
}

impl Submission for NewBooking {
    const KIND: EntityKind = EntityKind::Booking;
    type Record = Booking;

    fn into_record(self, id: RecordId, created_at: Timestamp) -> Booking {
        Booking {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            date: self.date,
            time: self.time,
            created_at,
        }
    }
}

// ============================================================================
// CalculatorSubmission
// ============================================================================

/// Validated savings calculator input
///
/// No range checks: negative and zero values are stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCalculatorSubmission {
    /// Monthly labor cost
    #[serde(serialize_with = "number::serialize")]
    pub labor_cost: f64,
    /// Operational cost (the client sends tasks per day here)
    #[serde(serialize_with = "number::serialize")]
    pub operational_cost: f64,
    /// Working days per month
    #[serde(serialize_with = "number::serialize")]
    pub working_days: f64,
    /// Estimated monthly savings
    #[serde(serialize_with = "number::serialize")]
    pub monthly_savings: f64,
    /// Estimated annual savings
    #[serde(serialize_with = "number::serialize")]
    pub annual_savings: f64,
}

/// Stored savings calculator submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorSubmission {
    /// Store-assigned id
    pub id: RecordId,
    /// Monthly labor cost
    #[serde(serialize_with = "number::serialize")]
    pub labor_cost: f64,
    /// Operational cost
    #[serde(serialize_with = "number::serialize")]
    pub operational_cost: f64,
    /// Working days per month
    #[serde(serialize_with = "number::serialize")]
    pub working_days: f64,
    /// Estimated monthly savings
    #[serde(serialize_with = "number::serialize")]
    pub monthly_savings: f64,
    /// Estimated annual savings
    #[serde(serialize_with = "number::serialize")]
    pub annual_savings: f64,
    /// Time the store accepted the record
    pub created_at: Timestamp,
}

impl Submission for NewCalculatorSubmission {
    const KIND: EntityKind = EntityKind::Calculator;
    type Record = CalculatorSubmission;

    fn into_record(self, id: RecordId, created_at: Timestamp) -> CalculatorSubmission {
        CalculatorSubmission {
            id,
            labor_cost: self.labor_cost,
            operational_cost: self.operational_cost,
            working_days: self.working_days,
            monthly_savings: self.monthly_savings,
            annual_savings: self.annual_savings,
            created_at,
        }
    }
}

// ============================================================================
// Kind-erased wrappers
// ============================================================================

/// Output of [`crate::validation::validate`], one variant per entity kind
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedRecord {
    /// Validated contact input
    Contact(NewContact),
    /// Validated booking input
    Booking(NewBooking),
    /// Validated calculator input
    Calculator(NewCalculatorSubmission),
}

impl ValidatedRecord {
    /// Entity kind of the wrapped input
    pub fn kind(&self) -> EntityKind {
        match self {
            ValidatedRecord::Contact(_) => EntityKind::Contact,
            ValidatedRecord::Booking(_) => EntityKind::Booking,
            ValidatedRecord::Calculator(_) => EntityKind::Calculator,
        }
    }
}

/// A stored record of any kind
///
/// Serializes as the inner record with no tag, so a list of these renders
/// exactly like a list of the concrete type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StoredRecord {
    /// Stored contact
    Contact(Contact),
    /// Stored booking
    Booking(Booking),
    /// Stored calculator submission
    Calculator(CalculatorSubmission),
}

impl StoredRecord {
    /// Entity kind of the wrapped record
    pub fn kind(&self) -> EntityKind {
        match self {
            StoredRecord::Contact(_) => EntityKind::Contact,
            StoredRecord::Booking(_) => EntityKind::Booking,
            StoredRecord::Calculator(_) => EntityKind::Calculator,
        }
    }

    /// Store-assigned id
    pub fn id(&self) -> RecordId {
        match self {
            StoredRecord::Contact(r) => r.id,
            StoredRecord::Booking(r) => r.id,
            StoredRecord::Calculator(r) => r.id,
        }
    }

    /// Store-assigned creation time
    pub fn created_at(&self) -> Timestamp {
        match self {
            StoredRecord::Contact(r) => r.created_at,
            StoredRecord::Booking(r) => r.created_at,
            StoredRecord::Calculator(r) => r.created_at,
        }
    }
}

impl From<Contact> for StoredRecord {
    fn from(r: Contact) -> Self {
        StoredRecord::Contact(r)
    }
}

impl From<Booking> for StoredRecord {
    fn from(r: Booking) -> Self {
        StoredRecord::Booking(r)
    }
}

impl From<CalculatorSubmission> for StoredRecord {
    fn from(r: CalculatorSubmission) -> Self {
        StoredRecord::Calculator(r)
    }
}

/// Number rendering for calculator fields
///
/// Integral values go out as JSON integers so `22` is echoed back as `22`,
/// not `22.0`.
pub(crate) mod number {
    use serde::Serializer;

    // 2^53: largest range where every integer is exactly representable
    const EXACT_INT_LIMIT: f64 = 9_007_199_254_740_992.0;

    pub(crate) fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.fract() == 0.0 && value.abs() <= EXACT_INT_LIMIT {
            serializer.serialize_i64(*value as i64)
        } else {
            serializer.serialize_f64(*value)
        }
    }
}
