//! Identity and time types assigned by the store
//!
//! - RecordId: UUID v4 newtype, unique within a table
//! - Timestamp: UTC instant, rendered as RFC 3339 with millisecond precision
//! - EntityKind: which table a record belongs to

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// RecordId
// ============================================================================

/// Unique identifier of a stored submission
///
/// Generated by the store at creation time and never reassigned.
/// Serializes as the hyphenated UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        RecordId(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        RecordId(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(RecordId)
    }
}

// ============================================================================
// Timestamp
// ============================================================================

/// Creation time of a stored submission
///
/// Held at microsecond resolution; serialized the way browsers print
/// `Date.toISOString()` (`2025-09-15T10:00:00.000Z`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Current wall-clock time
    pub fn now() -> Self {
        Timestamp(Utc::now())
    }

    /// Build from microseconds since the Unix epoch
    ///
    /// Returns None if the value is outside chrono's representable range.
    pub fn from_micros(micros: i64) -> Option<Self> {
        Utc.timestamp_micros(micros).single().map(Timestamp)
    }

    /// Microseconds since the Unix epoch
    pub fn as_micros(&self) -> i64 {
        self.0.timestamp_micros()
    }

    /// Get the underlying chrono value
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// RFC 3339 rendering with millisecond precision and `Z` suffix
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp(dt)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| Timestamp(dt.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// EntityKind
// ============================================================================

/// The three independent submission tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Contact-form submissions
    Contact,
    /// Consultation bookings
    Booking,
    /// Savings calculator submissions
    Calculator,
}

impl EntityKind {
    /// All kinds, in table order
    pub const ALL: [EntityKind; 3] = [
        EntityKind::Contact,
        EntityKind::Booking,
        EntityKind::Calculator,
    ];

    /// Short lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Contact => "contact",
            EntityKind::Booking => "booking",
            EntityKind::Calculator => "calculator",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
