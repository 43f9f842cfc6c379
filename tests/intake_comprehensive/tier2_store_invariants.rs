//! Tier 2: Store invariants

use crate::test_utils::*;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use sunrise::{
    validate, EntityKind, Intake, IntakeError, StorageError, StoreOptions, SubmissionStore,
    Timestamp,
};

#[test]
fn created_at_is_not_before_call() {
    let intake = fresh_intake();
    let before = Timestamp::now();
    let booking = intake.bookings.submit(&booking_payload()).unwrap();
    let after = Timestamp::now();
    assert!(booking.created_at >= before);
    assert!(booking.created_at <= after);
}

#[test]
fn identical_payloads_get_distinct_ids() {
    let intake = fresh_intake();
    let a = intake.contacts.submit(&contact_payload()).unwrap();
    let b = intake.contacts.submit(&contact_payload()).unwrap();
    assert_ne!(a.id, b.id);

    let listed = intake.contacts.list().unwrap();
    assert!(listed.contains(&a));
    assert!(listed.contains(&b));
}

#[test]
fn listing_twice_returns_same_set() {
    let intake = fresh_intake();
    for _ in 0..5 {
        intake.calculators.submit(&calculator_payload()).unwrap();
    }
    assert_eq!(intake.calculators.list().unwrap(), intake.calculators.list().unwrap());
}

#[test]
fn kind_dispatch_matches_typed_logs() {
    let store = Arc::new(SubmissionStore::new());
    let intake = Intake::new(store.clone());

    let validated = validate(EntityKind::Contact, &contact_payload()).unwrap();
    let stored = store.create(validated).unwrap();
    assert_eq!(stored.kind(), EntityKind::Contact);

    let typed = intake.contacts.list().unwrap();
    assert_eq!(typed.len(), 1);
    assert_eq!(typed[0].id, stored.id());
    assert_eq!(store.list_all(EntityKind::Contact).unwrap(), vec![stored]);
}

#[test]
fn concurrent_submissions_all_land() {
    let intake = fresh_intake();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let intake = intake.clone();
            thread::spawn(move || {
                (0..50)
                    .map(|_| intake.bookings.submit(&booking_payload()).unwrap().id)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id));
        }
    }
    assert_eq!(ids.len(), 400);
    assert_eq!(intake.bookings.list().unwrap().len(), 400);
}

#[test]
fn capacity_limit_is_per_table() {
    let store = Arc::new(SubmissionStore::with_options(
        StoreOptions::new().max_records_per_table(2),
    ));
    let intake = Intake::new(store.clone());
    intake.bookings.submit(&booking_payload()).unwrap();
    intake.bookings.submit(&booking_payload()).unwrap();

    let err = intake.bookings.submit(&booking_payload()).unwrap_err();
    assert_eq!(
        err,
        IntakeError::Storage(StorageError::CapacityExceeded {
            kind: EntityKind::Booking,
            limit: 2
        })
    );
    assert!(intake.contacts.submit(&contact_payload()).is_ok());
    assert_eq!(store.total_records(), 3);
}
