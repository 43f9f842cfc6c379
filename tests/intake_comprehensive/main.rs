//! Intake Comprehensive Test Suite
//!
//! Conformance tests for the public `sunrise` facade.
//!
//! ## Test Tiers
//!
//! - **Tier 1**: Per-entity validation contracts
//! - **Tier 2**: Store invariants (identity, creation time, listing)
//! - **Tier 3**: Savings estimator conformance
//! - **Tier 4**: Property-based tests
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test intake_comprehensive
//! ```

// Test modules
mod test_utils;

// Tier 1: Validation Contracts
mod tier1_booking_contract;
mod tier1_calculator_contract;
mod tier1_contact_contract;

// Tier 2: Store Invariants
mod tier2_store_invariants;

// Tier 3: Savings Estimator
mod tier3_savings_conformance;

// Tier 4: Property Tests
mod tier4_properties;
