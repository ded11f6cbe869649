//! # Residual Violations
//!
//! Violations and infractions claimed by no statute-driven family.
//! Convictions are eligible under 137.225(5)(d).

use expunge_core::{ChargeRecord, TypeEligibility};

use crate::classifier::MatchConfidence;
use crate::evaluation;
use crate::registry::Registry;

/// Conviction outcome.
pub const TYPE_ELIGIBLE: &str = "Eligible under 137.225(5)(d)";

pub(crate) fn matches(record: &ChargeRecord, _registry: &Registry) -> Option<MatchConfidence> {
    record
        .level
        .is_violation_level()
        .then_some(MatchConfidence::Definite)
}

pub(crate) fn type_eligibility(record: &ChargeRecord) -> TypeEligibility {
    evaluation::standard_rule(&record.disposition, TypeEligibility::eligible(TYPE_ELIGIBLE))
}
