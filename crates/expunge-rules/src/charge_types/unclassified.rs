//! # Unclassified Charges
//!
//! The fallback when no family matches: a defined outcome, never an
//! error. Convictions go to review; dismissals keep the common
//! dismissal rule (a dismissal is eligible whatever the charge was).

use expunge_core::{ChargeRecord, TypeEligibility};

use crate::evaluation;

/// Conviction outcome.
pub const TYPE_NEEDS_ANALYSIS: &str = "Unrecognized charge type. Further analysis needed";

pub(crate) fn type_eligibility(record: &ChargeRecord) -> TypeEligibility {
    evaluation::standard_rule(
        &record.disposition,
        TypeEligibility::needs_more_analysis(TYPE_NEEDS_ANALYSIS),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use expunge_core::{ChargeLevel, Disposition, EligibilityStatus, StatuteCode};

    fn record(ruling: &str) -> ChargeRecord {
        ChargeRecord::new(
            "Generic",
            StatuteCode::new("164885").unwrap(),
            ChargeLevel::FelonyUnclassified,
            Disposition::from_ruling(ruling, None),
        )
    }

    #[test]
    fn test_conviction_needs_review() {
        let te = type_eligibility(&record("Convicted"));
        assert_eq!(te.status, EligibilityStatus::NeedsMoreAnalysis);
        assert_eq!(te.reason, "Unrecognized charge type. Further analysis needed");
    }

    #[test]
    fn test_dismissal_is_eligible() {
        let te = type_eligibility(&record("Dismissed"));
        assert_eq!(te.status, EligibilityStatus::Eligible);
        assert_eq!(te.reason, evaluation::DISMISSALS_ELIGIBLE);
    }
}
