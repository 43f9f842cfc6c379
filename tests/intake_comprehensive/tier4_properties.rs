//! Tier 4: Property-based tests

use crate::test_utils::*;
use proptest::prelude::*;
use serde_json::json;
use sunrise::{validate_booking, validate_calculator};

proptest! {
    #[test]
    fn any_finite_numbers_are_accepted(
        labor in -1.0e9f64..1.0e9,
        ops in -1.0e9f64..1.0e9,
        days in -366.0f64..366.0,
        monthly in -1.0e9f64..1.0e9,
        annual in -1.0e10f64..1.0e10,
    ) {
        let payload = json!({
            "laborCost": labor,
            "operationalCost": ops,
            "workingDays": days,
            "monthlySavings": monthly,
            "annualSavings": annual
        });
        let calc = validate_calculator(&payload).unwrap();
        prop_assert_eq!(calc.labor_cost, labor);
        prop_assert_eq!(calc.annual_savings, annual);
    }

    #[test]
    fn free_text_dates_pass_through(date in "[ -~]{1,40}", time in "[ -~]{1,40}") {
        let payload = with(&with(&booking_payload(), "date", json!(date)), "time", json!(time));
        let booking = validate_booking(&payload).unwrap();
        prop_assert_eq!(booking.date, date);
        prop_assert_eq!(booking.time, time);
    }

    #[test]
    fn every_submission_gets_a_fresh_id(count in 1usize..40) {
        let intake = fresh_intake();
        let mut ids = std::collections::HashSet::new();
        for _ in 0..count {
            let booking = intake.bookings.submit(&booking_payload()).unwrap();
            prop_assert!(ids.insert(booking.id));
        }
        prop_assert_eq!(intake.bookings.list().unwrap().len(), count);
    }
}
