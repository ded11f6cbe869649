//! # Fare Violations
//!
//! Transit fare evasion cited at violation level. These arrive under
//! local ordinance numbers rather than a stable statute code, so the
//! predicate matches on the charge name.

use expunge_core::{ChargeRecord, TypeEligibility};

use crate::classifier::MatchConfidence;
use crate::evaluation;
use crate::registry::Registry;

/// Name fragments that identify a fare citation.
const NAME_MARKERS: &[&str] = &["fare violation", "fare evasion"];

/// Conviction outcome.
pub const TYPE_ELIGIBLE: &str = "Eligible under 137.225(5)(d)";

pub(crate) fn matches(record: &ChargeRecord, _registry: &Registry) -> Option<MatchConfidence> {
    if !record.level.is_violation_level() {
        return None;
    }
    let name = record.name.to_lowercase();
    if NAME_MARKERS.iter().any(|marker| name.contains(marker)) {
        Some(MatchConfidence::Definite)
    } else {
        None
    }
}

pub(crate) fn type_eligibility(record: &ChargeRecord) -> TypeEligibility {
    evaluation::standard_rule(&record.disposition, TypeEligibility::eligible(TYPE_ELIGIBLE))
}
