//! # Contempt of Court
//!
//! Contempt findings are neither convictions of a crime nor violations
//! in the set-aside statute's lists; they are ineligible by omission.
//! First in the precedence order: the contempt statutes are short codes
//! that no other family should ever see.

use expunge_core::{ChargeRecord, TypeEligibility};

use crate::classifier::MatchConfidence;
use crate::evaluation;
use crate::registry::{Registry, SetMatch};

pub const STATUTES: &[&str] = &[
    "33015", // Contempt of Court, definitions
    "33055", // Contempt of Court, remedial sanctions
    "33065", // Contempt of Court, punitive sanctions
];

/// Conviction outcome.
pub const TYPE_INELIGIBLE: &str = "Ineligible by omission from statute";

pub(crate) fn matches(record: &ChargeRecord, registry: &Registry) -> Option<MatchConfidence> {
    match registry.contempt_of_court.lookup(&record.statute) {
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

#[cfg(test)]
mod tests {
    use super::*;
    use expunge_core::{ChargeLevel, Disposition, EligibilityStatus, StatuteCode};

    fn record(statute: &str, ruling: &str) -> ChargeRecord {
        ChargeRecord::new(
            "Contempt of Court",
            StatuteCode::new(statute).unwrap(),
            ChargeLevel::MisdemeanorUnclassified,
            Disposition::from_ruling(ruling, None),
        )
    }

    #[test]
    fn test_every_listed_statute_matches() {
        for statute in STATUTES {
            let r = record(statute, "Convicted");
            assert_eq!(
                matches(&r, Registry::shared()),
                Some(MatchConfidence::Definite),
                "statute {statute}"
            );
        }
    }

    #[test]
    fn test_finding_of_contempt_is_ineligible() {
        let te = type_eligibility(&record("33065", "Convicted"));
        assert_eq!(te.status, EligibilityStatus::Ineligible);
        assert_eq!(te.reason, "Ineligible by omission from statute");
    }

    #[test]
    fn test_dismissal_is_eligible() {
        let te = type_eligibility(&record("33065", "Dismissed"));
        assert_eq!(te.status, EligibilityStatus::Eligible);
    }
}
