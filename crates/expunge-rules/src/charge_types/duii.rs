//! # Driving Under the Influence of Intoxicants
//!
//! DUII carries its own non-conviction law: a dismissal that resulted
//! from completing diversion is ineligible, and the record alone cannot
//! distinguish a diversion dismissal from an ordinary one. Dismissed
//! DUII charges therefore go to review instead of the common dismissal
//! rule.
//!
//! Listed ahead of the traffic families so the vehicle-code chapter
//! check never claims these statutes.

use expunge_core::{ChargeRecord, DispositionStatus, TypeEligibility};

use crate::classifier::MatchConfidence;
use crate::evaluation;
use crate::registry::{Registry, SetMatch};

pub const STATUTES: &[&str] = &[
    "813010", // Driving Under the Influence of Intoxicants
    "813011", // Felony Driving Under the Influence of Intoxicants
];

/// Conviction outcome.
pub const TYPE_INELIGIBLE: &str = "Ineligible under 137.225(7)(a)";

/// Diversion outcome.
pub const DIVERSION_INELIGIBLE: &str = "Ineligible under 137.225(8)(b)";

/// Dismissal outcome. The register does not say whether the dismissal
/// followed diversion, so the common dismissal rule cannot apply.
pub const DISMISSAL_NEEDS_ANALYSIS: &str = "Dismissals are generally eligible under \
137.225(1)(b). However, if the dismissal resulted from successful completion of DUII \
diversion, the charge is ineligible under 137.225(8)(b)";

pub(crate) fn matches(record: &ChargeRecord, registry: &Registry) -> Option<MatchConfidence> {
    match registry.duii.lookup(&record.statute) {
        SetMatch::Exact => Some(MatchConfidence::Definite),
        SetMatch::MissingSubsection => Some(MatchConfidence::MissingSubsection),
        SetMatch::None => None,
    }
}

pub(crate) fn type_eligibility(record: &ChargeRecord) -> TypeEligibility {
    match record.disposition.status {
        DispositionStatus::Convicted => TypeEligibility::ineligible(TYPE_INELIGIBLE),
        DispositionStatus::Diverted => TypeEligibility::ineligible(DIVERSION_INELIGIBLE),
        DispositionStatus::Dismissed | DispositionStatus::NoComplaint => {
            TypeEligibility::needs_more_analysis(DISMISSAL_NEEDS_ANALYSIS)
        }
        DispositionStatus::Unrecognized => {
            TypeEligibility::needs_more_analysis(evaluation::DISPOSITION_UNRECOGNIZED)
        }
        DispositionStatus::Unknown => {
            TypeEligibility::needs_more_analysis(evaluation::DISPOSITION_UNKNOWN)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expunge_core::{ChargeLevel, Disposition, EligibilityStatus, StatuteCode};

    fn record(statute: &str, ruling: &str) -> ChargeRecord {
        ChargeRecord::new(
            "Driving Under the Influence of Intoxicants",
            StatuteCode::new(statute).unwrap(),
            ChargeLevel::MisdemeanorClassA,
            Disposition::from_ruling(ruling, None),
        )
    }

    #[test]
    fn test_matches_base_and_qualified_codes() {
        for statute in ["813010", "8130105", "813011"] {
            let r = record(statute, "Convicted");
            assert_eq!(
                matches(&r, Registry::shared()),
                Some(MatchConfidence::Definite),
                "statute {statute}"
            );
        }
    }

    #[test]
    fn test_conviction_is_ineligible() {
        let te = type_eligibility(&record("813010", "Convicted"));
        assert_eq!(te.status, EligibilityStatus::Ineligible);
        assert_eq!(te.reason, "Ineligible under 137.225(7)(a)");
    }

    #[test]
    fn test_diversion_is_ineligible() {
        let te = type_eligibility(&record("813010", "Diverted"));
        assert_eq!(te.status, EligibilityStatus::Ineligible);
        assert_eq!(te.reason, "Ineligible under 137.225(8)(b)");
    }

    #[test]
    fn test_dismissal_needs_review() {
        let te = type_eligibility(&record("813010", "Dismissed"));
        assert_eq!(te.status, EligibilityStatus::NeedsMoreAnalysis);
        assert_eq!(te.reason, DISMISSAL_NEEDS_ANALYSIS);
    }
}
