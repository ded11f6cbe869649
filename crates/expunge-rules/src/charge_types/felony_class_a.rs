//! # Residual Class A Felonies
//!
//! Class A felonies claimed by no statute-driven family. The set-aside
//! statute's eligibility lists stop at Class B: a Class A conviction is
//! ineligible by omission.

use expunge_core::{ChargeLevel, ChargeRecord, TypeEligibility};

use crate::classifier::MatchConfidence;
use crate::evaluation;
use crate::registry::Registry;

/// Conviction outcome.
pub const TYPE_INELIGIBLE: &str = "Ineligible by omission from statute";

pub(crate) fn matches(record: &ChargeRecord, _registry: &Registry) -> Option<MatchConfidence> {
    (record.level == ChargeLevel::FelonyClassA).then_some(MatchConfidence::Definite)
}

pub(crate) fn type_eligibility(record: &ChargeRecord) -> TypeEligibility {
    evaluation::standard_rule(
        &record.disposition,
        TypeEligibility::ineligible(TYPE_INELIGIBLE),
    )
}
