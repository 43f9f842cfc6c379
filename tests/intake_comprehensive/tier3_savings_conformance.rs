//! Tier 3: Savings estimator conformance

use crate::test_utils::*;
use serde_json::json;
use sunrise::{EstimateRequest, ProcessKind, SavingsInput};

fn estimate(process: ProcessKind, labor: f64, tasks: f64, days: f64) -> sunrise::SavingsEstimate {
    SavingsInput {
        process,
        labor_cost: labor,
        tasks_per_day: tasks,
        working_days: days,
    }
    .estimate()
}

#[test]
fn profiles_match_published_pricing() {
    let expected = [
        (ProcessKind::Workflow, "Workflow Automation", 330.0, 0.84),
        (ProcessKind::Document, "Document/Data Processing", 264.0, 0.87),
        (ProcessKind::Customer, "Customer Support Automation", 396.0, 0.80),
        (ProcessKind::Sales, "Sales/Lead Automation", 495.0, 0.75),
        (ProcessKind::Custom, "Custom Project", 450.0, 0.78),
    ];
    for (kind, name, ai_cost, efficiency) in expected {
        let profile = kind.profile();
        assert_eq!(profile.name, name);
        assert_eq!(profile.ai_cost, ai_cost);
        assert_eq!(profile.efficiency, efficiency);
    }
}

#[test]
fn workflow_reference_figures() {
    let est = estimate(ProcessKind::Workflow, 2000.0, 250.0, 22.0);
    assert_eq!(est.current_cost, 4750.0);
    assert_eq!(est.monthly_savings, 4420.0);
    assert_eq!(est.percentage_savings, 93.0);
    assert_eq!(est.annual_savings, 53040.0);
}

#[test]
fn zero_cost_gives_zero_percent() {
    let est = estimate(ProcessKind::Custom, 0.0, 0.0, 22.0);
    assert_eq!(est.percentage_savings, 0.0);
    assert_eq!(est.monthly_savings, -450.0);
}

#[test]
fn negative_half_percent_rounds_up() {
    // (240 - 330) / 240 = -37.5%
    let est = estimate(ProcessKind::Workflow, 240.0, 0.0, 22.0);
    assert_eq!(est.monthly_savings, -90.0);
    assert_eq!(est.percentage_savings, -37.0);

    // (880 - 330) / 880 = 62.5%
    let est = estimate(ProcessKind::Workflow, 880.0, 0.0, 22.0);
    assert_eq!(est.percentage_savings, 63.0);
}

#[test]
fn request_defaults() {
    let req = EstimateRequest::from_payload(&json!({
        "laborCost": 100,
        "tasksPerDay": 1,
        "workingDays": 1
    }))
    .unwrap();
    assert_eq!(req.input.process, ProcessKind::Workflow);
    assert!(!req.save);
}

#[test]
fn saved_estimate_becomes_calculator_row() {
    let intake = fresh_intake();
    let (est, saved) = intake
        .calculators
        .estimate(&json!({
            "process": "customer",
            "laborCost": 3000,
            "tasksPerDay": 40,
            "workingDays": 20,
            "save": true
        }))
        .unwrap();

    // 3000 + 40 * 20 * 0.5 = 3400, minus 396
    assert_eq!(est.monthly_savings, 3004.0);
    let saved = saved.unwrap();
    assert_eq!(saved.labor_cost, 3000.0);
    assert_eq!(saved.operational_cost, 40.0);
    assert_eq!(saved.working_days, 20.0);
    assert_eq!(saved.annual_savings, 36048.0);
    assert_eq!(intake.calculators.list().unwrap(), vec![saved]);
}
