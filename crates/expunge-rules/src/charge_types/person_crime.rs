//! # Enumerated Person Crimes
//!
//! Offenses the set-aside statute names as person crimes at any level.
//! Convictions are ineligible under 137.225(5).
//!
//! These entries take precedence over the Class B person-felony family:
//! a statute listed here classifies here even when the record's level is
//! Felony Class B.

use expunge_core::{ChargeRecord, TypeEligibility};

use crate::classifier::MatchConfidence;
use crate::evaluation;
use crate::registry::{Registry, SetMatch};

pub const STATUTES: &[&str] = &[
    "162165", // Escape I
    "162185", // Supplying Contraband
    "163118", // Manslaughter I
    "163125", // Manslaughter II
    "163145", // Criminally Negligent Homicide
    "163149", // Aggravated Vehicular Homicide
    "163175", // Assault II
    "163185", // Assault I
    "163225", // Kidnapping II
    "163235", // Kidnapping I
    "163275", // Coercion
    "163525", // Incest
    "163535", // Abandonment of a Child
    "164395", // Robbery III
    "164405", // Robbery II
    "164415", // Robbery I
    "166165", // Bias Crime I
    "166220", // Unlawful Use of a Weapon
];

/// Conviction outcome.
pub const TYPE_INELIGIBLE: &str = "Ineligible under 137.225(5)";

pub(crate) fn matches(record: &ChargeRecord, registry: &Registry) -> Option<MatchConfidence> {
    match registry.person_crime.lookup(&record.statute) {
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
