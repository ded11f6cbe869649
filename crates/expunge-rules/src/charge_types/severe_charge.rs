//! # Severe Charges
//!
//! Murder and treason. Excluded from relief under 137.225(5); listed
//! ahead of the sex-crime and person-crime families so these statutes
//! never resolve elsewhere.

use expunge_core::{ChargeRecord, TypeEligibility};

use crate::classifier::MatchConfidence;
use crate::evaluation;
use crate::registry::{Registry, SetMatch};

pub const STATUTES: &[&str] = &[
    "163095", // Aggravated Murder
    "163107", // Murder I
    "163115", // Murder II
    "166005", // Treason
];

/// Conviction outcome.
pub const TYPE_INELIGIBLE: &str = "Ineligible under 137.225(5)";

pub(crate) fn matches(record: &ChargeRecord, registry: &Registry) -> Option<MatchConfidence> {
    match registry.severe_charge.lookup(&record.statute) {
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
