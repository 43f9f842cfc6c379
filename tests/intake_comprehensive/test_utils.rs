//! Shared fixtures for the intake conformance suite

use serde_json::{json, Value};
use std::sync::Arc;
use sunrise::{Intake, SubmissionStore};

pub fn fresh_intake() -> Intake {
    Intake::new(Arc::new(SubmissionStore::new()))
}

pub fn contact_payload() -> Value {
    json!({
        "name": "Ann Lee",
        "email": "ann@example.com",
        "company": "Acme",
        "phone": "555-0100",
        "message": "We would like a demo"
    })
}

pub fn booking_payload() -> Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@x.com",
        "date": "2025-09-15",
        "time": "10:00"
    })
}

pub fn calculator_payload() -> Value {
    json!({
        "laborCost": 4000,
        "operationalCost": 250,
        "workingDays": 22,
        "monthlySavings": 3670,
        "annualSavings": 44040
    })
}

/// Copy of `payload` with `field` removed
pub fn without(payload: &Value, field: &str) -> Value {
    let mut copy = payload.clone();
    if let Some(obj) = copy.as_object_mut() {
        obj.remove(field);
    }
    copy
}

/// Copy of `payload` with `field` set to `value`
pub fn with(payload: &Value, field: &str, value: Value) -> Value {
    let mut copy = payload.clone();
    if let Some(obj) = copy.as_object_mut() {
        obj.insert(field.to_string(), value);
    }
    copy
}
