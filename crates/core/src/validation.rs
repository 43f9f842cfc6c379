//! Structural validation of raw submission payloads
//!
//! One small validator per entity kind turns a raw JSON payload into its
//! `New*` input or rejects it with [`IntakeError::Validation`].
//!
//! Rules:
//! - Payload must be a JSON object; unknown keys are ignored
//! - Required strings must be present, strings, and at least one character
//! - Optional strings may be absent, `null`, or a string; absent/`null` become `""`
//! - Emails must have a conventional `local@domain.tld` shape
//! - Numbers must be finite JSON numbers; strings and booleans are rejected
//!
//! The error returned to callers names only the entity kind. The failing
//! field is logged at debug level and then dropped.

use crate::error::{IntakeError, IntakeResult};
use crate::record::{NewBooking, NewCalculatorSubmission, NewContact, ValidatedRecord};
use crate::types::EntityKind;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use std::fmt;

// Local part allows the usual atext subset and must end on a non-dot
// character; domain is one or more labels plus an alphabetic TLD.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern must compile")
});

// ============================================================================
// Field-level problems (internal only)
// ============================================================================

/// Why a single field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Problem {
    NotAnObject,
    Missing,
    NotAString,
    Empty,
    BadEmail,
    NotANumber,
    NotFinite,
    NotABool,
    UnknownValue,
}

/// A rejected field, kept only for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldIssue {
    pub(crate) field: &'static str,
    pub(crate) problem: Problem,
}

impl FieldIssue {
    fn new(field: &'static str, problem: Problem) -> Self {
        FieldIssue { field, problem }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.problem {
            Problem::NotAnObject => "payload is not an object",
            Problem::Missing => "missing",
            Problem::NotAString => "not a string",
            Problem::Empty => "empty",
            Problem::BadEmail => "not an email address",
            Problem::NotANumber => "not a number",
            Problem::NotFinite => "not finite",
            Problem::NotABool => "not a boolean",
            Problem::UnknownValue => "not a recognised value",
        };
        write!(f, "{}: {}", self.field, what)
    }
}

/// Log the field-level detail and collapse it to the generic error
pub(crate) fn reject(kind: EntityKind, issue: FieldIssue) -> IntakeError {
    tracing::debug!(entity = %kind, issue = %issue, "payload rejected");
    IntakeError::validation(kind)
}

// ============================================================================
// Field readers
// ============================================================================

pub(crate) fn as_object(payload: &Value) -> Result<&Map<String, Value>, FieldIssue> {
    payload
        .as_object()
        .ok_or(FieldIssue::new("<payload>", Problem::NotAnObject))
}

pub(crate) fn required_string(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<String, FieldIssue> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(FieldIssue::new(field, Problem::Missing)),
        Some(Value::String(s)) if s.is_empty() => Err(FieldIssue::new(field, Problem::Empty)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(FieldIssue::new(field, Problem::NotAString)),
    }
}

pub(crate) fn optional_string(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<String, FieldIssue> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(FieldIssue::new(field, Problem::NotAString)),
    }
}

pub(crate) fn email(obj: &Map<String, Value>, field: &'static str) -> Result<String, FieldIssue> {
    let value = required_string(obj, field)?;
    if is_email(&value) {
        Ok(value)
    } else {
        Err(FieldIssue::new(field, Problem::BadEmail))
    }
}

pub(crate) fn number(obj: &Map<String, Value>, field: &'static str) -> Result<f64, FieldIssue> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(FieldIssue::new(field, Problem::Missing)),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) if v.is_finite() => Ok(v),
            _ => Err(FieldIssue::new(field, Problem::NotFinite)),
        },
        Some(_) => Err(FieldIssue::new(field, Problem::NotANumber)),
    }
}

pub(crate) fn optional_bool(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<bool, FieldIssue> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(FieldIssue::new(field, Problem::NotABool)),
    }
}

/// Check the conventional email shape
///
/// Leading dots and consecutive dots in the local part are rejected on top
/// of the pattern.
pub fn is_email(candidate: &str) -> bool {
    let Some((local, _)) = candidate.split_once('@') else {
        return false;
    };
    !local.starts_with('.') && !local.contains("..") && EMAIL_RE.is_match(candidate)
}

// ============================================================================
// Entity validators
// ============================================================================

/// Validate a contact-form payload
pub fn validate_contact(payload: &Value) -> IntakeResult<NewContact> {
    contact_fields(payload).map_err(|issue| reject(EntityKind::Contact, issue))
}

fn contact_fields(payload: &Value) -> Result<NewContact, FieldIssue> {
    let obj = as_object(payload)?;
    Ok(NewContact {
        name: required_string(obj, "name")?,
        email: email(obj, "email")?,
        company: optional_string(obj, "company")?,
        phone: optional_string(obj, "phone")?,
        message: required_string(obj, "message")?,
    })
}

/// Validate a booking payload
pub fn validate_booking(payload: &Value) -> IntakeResult<NewBooking> {
    booking_fields(payload).map_err(|issue| reject(EntityKind::Booking, issue))
}

fn booking_fields(payload: &Value) -> Result<NewBooking, FieldIssue> {
    let obj = as_object(payload)?;
    Ok(NewBooking {
        name: required_string(obj, "name")?,
        email: email(obj, "email")?,
        phone: optional_string(obj, "phone")?,
        date: required_string(obj, "date")?,
        time: required_string(obj, "time")?,
    })
}

/// Validate a savings calculator payload
pub fn validate_calculator(payload: &Value) -> IntakeResult<NewCalculatorSubmission> {
    calculator_fields(payload).map_err(|issue| reject(EntityKind::Calculator, issue))
}

fn calculator_fields(payload: &Value) -> Result<NewCalculatorSubmission, FieldIssue> {
    let obj = as_object(payload)?;
    Ok(NewCalculatorSubmission {
        labor_cost: number(obj, "laborCost")?,
        operational_cost: number(obj, "operationalCost")?,
        working_days: number(obj, "workingDays")?,
        monthly_savings: number(obj, "monthlySavings")?,
        annual_savings: number(obj, "annualSavings")?,
    })
}

/// Validate a payload for any entity kind
pub fn validate(kind: EntityKind, payload: &Value) -> IntakeResult<ValidatedRecord> {
    match kind {
        EntityKind::Contact => validate_contact(payload).map(ValidatedRecord::Contact),
        EntityKind::Booking => validate_booking(payload).map(ValidatedRecord::Booking),
        EntityKind::Calculator => validate_calculator(payload).map(ValidatedRecord::Calculator),
    }
}
