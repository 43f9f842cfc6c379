//! Tier 1: Contact validation contract

use crate::test_utils::*;
use serde_json::json;
use sunrise::{validate_contact, EntityKind, IntakeError};

#[test]
fn full_contact_is_accepted() {
    let contact = validate_contact(&contact_payload()).unwrap();
    assert_eq!(contact.name, "Ann Lee");
    assert_eq!(contact.company, "Acme");
    assert_eq!(contact.phone, "555-0100");
}

#[test]
fn optional_fields_default_to_empty() {
    let payload = without(&without(&contact_payload(), "company"), "phone");
    let contact = validate_contact(&payload).unwrap();
    assert_eq!(contact.company, "");
    assert_eq!(contact.phone, "");

    let nulled = with(&contact_payload(), "company", json!(null));
    assert_eq!(validate_contact(&nulled).unwrap().company, "");
}

#[test]
fn each_required_field_is_enforced() {
    for field in ["name", "email", "message"] {
        let err = validate_contact(&without(&contact_payload(), field)).unwrap_err();
        assert_eq!(err, IntakeError::validation(EntityKind::Contact), "{field}");

        let empty = with(&contact_payload(), field, json!(""));
        assert!(validate_contact(&empty).is_err(), "{field} empty");
    }
}

#[test]
fn malformed_emails_are_rejected() {
    for email in ["plain", "a@", "@b.com", "a@b", "a b@c.com", "a..b@c.com", ".a@c.com"] {
        let payload = with(&contact_payload(), "email", json!(email));
        assert!(validate_contact(&payload).is_err(), "{email}");
    }
}

#[test]
fn wrong_types_are_rejected() {
    assert!(validate_contact(&with(&contact_payload(), "name", json!(42))).is_err());
    assert!(validate_contact(&with(&contact_payload(), "phone", json!(5550100))).is_err());
    assert!(validate_contact(&json!(["not", "an", "object"])).is_err());
}

#[test]
fn submitted_contact_is_listed() {
    let intake = fresh_intake();
    let contact = intake.contacts.submit(&contact_payload()).unwrap();
    assert_eq!(intake.contacts.list().unwrap(), vec![contact]);
}
