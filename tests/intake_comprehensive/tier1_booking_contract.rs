//! Tier 1: Booking validation contract

use crate::test_utils::*;
use serde_json::json;
use sunrise::{validate_booking, EntityKind, IntakeError};

#[test]
fn booking_without_phone_is_accepted() {
    let booking = validate_booking(&booking_payload()).unwrap();
    assert_eq!(booking.phone, "");
    assert_eq!(booking.date, "2025-09-15");
    assert_eq!(booking.time, "10:00");
}

#[test]
fn date_and_time_are_free_text() {
    let payload = with(
        &with(&booking_payload(), "date", json!("15")),
        "time",
        json!("2:00 PM - 3:00 PM"),
    );
    let booking = validate_booking(&payload).unwrap();
    assert_eq!(booking.date, "15");
    assert_eq!(booking.time, "2:00 PM - 3:00 PM");
}

#[test]
fn each_required_field_is_enforced() {
    for field in ["name", "email", "date", "time"] {
        let err = validate_booking(&without(&booking_payload(), field)).unwrap_err();
        assert_eq!(err, IntakeError::validation(EntityKind::Booking), "{field}");
    }
}

#[test]
fn bad_email_inserts_nothing() {
    let intake = fresh_intake();
    let payload = with(&booking_payload(), "email", json!("jane-at-x.com"));
    assert!(intake.bookings.submit(&payload).is_err());
    assert!(intake.bookings.list().unwrap().is_empty());
}
