//! Tier 1: Calculator validation contract

use crate::test_utils::*;
use serde_json::json;
use sunrise::{validate_calculator, EntityKind, IntakeError};

#[test]
fn numbers_are_stored_as_given() {
    let payload = json!({
        "laborCost": -5,
        "operationalCost": 0,
        "workingDays": 22,
        "monthlySavings": 100,
        "annualSavings": 1200
    });
    let calc = validate_calculator(&payload).unwrap();
    assert_eq!(calc.labor_cost, -5.0);
    assert_eq!(calc.operational_cost, 0.0);
    assert_eq!(calc.working_days, 22.0);
    assert_eq!(calc.monthly_savings, 100.0);
    assert_eq!(calc.annual_savings, 1200.0);
}

#[test]
fn fractional_values_survive() {
    let payload = with(&calculator_payload(), "monthlySavings", json!(3670.5));
    assert_eq!(validate_calculator(&payload).unwrap().monthly_savings, 3670.5);
}

#[test]
fn each_numeric_field_is_required() {
    for field in [
        "laborCost",
        "operationalCost",
        "workingDays",
        "monthlySavings",
        "annualSavings",
    ] {
        let err = validate_calculator(&without(&calculator_payload(), field)).unwrap_err();
        assert_eq!(err, IntakeError::validation(EntityKind::Calculator), "{field}");

        let stringly = with(&calculator_payload(), field, json!("100"));
        assert!(validate_calculator(&stringly).is_err(), "{field} as string");
    }
}

#[test]
fn integral_values_serialize_as_integers() {
    let intake = fresh_intake();
    let stored = intake.calculators.submit(&calculator_payload()).unwrap();
    let value = serde_json::to_value(&stored).unwrap();
    assert_eq!(value["laborCost"], json!(4000));
    assert_eq!(value["annualSavings"], json!(44040));
    assert!(value["id"].is_string());
    assert!(value["createdAt"].is_string());
}
