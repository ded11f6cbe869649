//! # Residual Class B Felonies
//!
//! Class B felonies claimed by no statute-driven family. Convictions
//! are eligible only under the conditioned Class B rule, whose
//! conditions (conviction age, subsequent record) live outside a single
//! charge record, so the type-level outcome is a review.

use expunge_core::{ChargeLevel, ChargeRecord, TypeEligibility};

use crate::classifier::MatchConfidence;
use crate::evaluation;
use crate::registry::Registry;

/// Conviction outcome.
pub const TYPE_NEEDS_ANALYSIS: &str = "Convictions that fulfill the conditions of \
137.225(5)(a) are eligible. Further analysis needed";

pub(crate) fn matches(record: &ChargeRecord, _registry: &Registry) -> Option<MatchConfidence> {
    (record.level == ChargeLevel::FelonyClassB).then_some(MatchConfidence::Definite)
}

pub(crate) fn type_eligibility(record: &ChargeRecord) -> TypeEligibility {
    evaluation::standard_rule(
        &record.disposition,
        TypeEligibility::needs_more_analysis(TYPE_NEEDS_ANALYSIS),
    )
}
