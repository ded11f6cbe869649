//! # Criminal Forfeiture
//!
//! Forfeiture proceedings attached to a criminal case. Not an offense
//! the set-aside statute reaches: ineligible by omission.

use expunge_core::{ChargeRecord, TypeEligibility};

use crate::classifier::MatchConfidence;
use crate::evaluation;
use crate::registry::{Registry, SetMatch};

pub const STATUTES: &[&str] = &[
    "131550", // Criminal Forfeiture, definitions
    "131558", // Property Subject to Forfeiture
    "131582", // Criminal Forfeiture Proceedings
];

/// Conviction outcome.
pub const TYPE_INELIGIBLE: &str = "Ineligible by omission from statute";

pub(crate) fn matches(record: &ChargeRecord, registry: &Registry) -> Option<MatchConfidence> {
    match registry.criminal_forfeiture.lookup(&record.statute) {
        SetMatch::Exact => Some(MatchConfidence::Definite),
        SetMatch::MissingSubsection => Some(MatchConfidence::MissingSubsection),
        SetMatch::None => None,
    }
}

pub(crate) fn type_eligibility(record: &ChargeRecord) -> TypeEligibility {
    evaluation::standard_rule(
        &record.disposition,
        TypeEligibility::ineligible(TYPE_INELIGIBLE),
    )
}
