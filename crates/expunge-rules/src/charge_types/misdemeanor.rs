//! # Residual Misdemeanors
//!
//! Misdemeanors claimed by no statute-driven family, split the way the
//! set-aside statute treats them: Class A on its own, Class B/C and
//! unclassified misdemeanors together. Both are eligible under
//! 137.225(5)(b); they remain separate families because downstream
//! analysis (outside this core) applies different waiting periods.

use expunge_core::{ChargeLevel, ChargeRecord, TypeEligibility};

use crate::classifier::MatchConfidence;
use crate::evaluation;
use crate::registry::Registry;

/// Conviction outcome, Class A.
pub const CLASS_A_ELIGIBLE: &str = "Eligible under 137.225(5)(b)";

/// Conviction outcome, Class B/C and unclassified.
pub const CLASS_BC_ELIGIBLE: &str = "Eligible under 137.225(5)(b)";

pub(crate) fn class_a_matches(
    record: &ChargeRecord,
    _registry: &Registry,
) -> Option<MatchConfidence> {
    (record.level == ChargeLevel::MisdemeanorClassA).then_some(MatchConfidence::Definite)
}

pub(crate) fn class_bc_matches(
    record: &ChargeRecord,
    _registry: &Registry,
) -> Option<MatchConfidence> {
    matches!(
        record.level,
        ChargeLevel::MisdemeanorClassB
            | ChargeLevel::MisdemeanorClassC
            | ChargeLevel::MisdemeanorUnclassified
    )
    .then_some(MatchConfidence::Definite)
}

pub(crate) fn class_a_type_eligibility(record: &ChargeRecord) -> TypeEligibility {
    evaluation::standard_rule(
        &record.disposition,
        TypeEligibility::eligible(CLASS_A_ELIGIBLE),
    )
}

pub(crate) fn class_bc_type_eligibility(record: &ChargeRecord) -> TypeEligibility {
    evaluation::standard_rule(
        &record.disposition,
        TypeEligibility::eligible(CLASS_BC_ELIGIBLE),
    )
}
