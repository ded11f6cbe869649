//! # Marijuana Families
//!
//! Two families share this module: marijuana offenses with their own
//! eligibility rule under 137.226, and the delivery-to-minor offenses
//! excluded from that rule.
//!
//! The ineligible family carries a subsection-qualified entry: delivery
//! of marijuana is excluded only under the cited subsection, so a bare
//! base code from the export is an ambiguous match and goes to review.

use expunge_core::{ChargeRecord, TypeEligibility};

use crate::classifier::MatchConfidence;
use crate::evaluation;
use crate::registry::{Registry, SetMatch};

/// Marijuana offenses excluded from the set-aside rule.
pub const INELIGIBLE_STATUTES: &[&str] = &[
    "475B359", // Arson Incident to Manufacture of Cannabinoid Extract I
    "475B367", // Causing Another Person to Ingest Marijuana
    "475B371", // Administration to Another Person Under 18 Years of Age
];

/// Excluded only under the cited subsection.
pub const INELIGIBLE_STATUTES_WITH_SUBSECTION: &[&str] = &[
    "475B3493", // Delivery of Marijuana to a Person Under 18, 475B.349(3)
];

/// Marijuana offenses eligible under the marijuana set-aside rule.
pub const ELIGIBLE_STATUTES: &[&str] = &[
    "475854",  // Unlawful Possession of Marijuana
    "475856",  // Unlawful Manufacture of Marijuana
    "475860",  // Unlawful Delivery of Marijuana
    "475864",  // Unlawful Possession of Marijuana (current numbering)
    "475B337", // Possession of Marijuana by a Person Under 21
    "475B346", // Unlawful Possession of a Marijuana Item in a Public Place
];

/// Conviction outcome for the excluded family.
pub const INELIGIBLE: &str = "Ineligible under 137.226";

/// Missing-subsection outcome for the excluded family.
pub const MISSING_SUBSECTION: &str = "OECI may be missing a statute subsection which would make \
this charge ineligible under 137.226";

/// Conviction outcome for the eligible family.
pub const ELIGIBLE: &str = "Eligible under 137.226";

pub(crate) fn ineligible_matches(
    record: &ChargeRecord,
    registry: &Registry,
) -> Option<MatchConfidence> {
    match registry.marijuana_ineligible.lookup(&record.statute) {
        SetMatch::Exact => Some(MatchConfidence::Definite),
        SetMatch::MissingSubsection => Some(MatchConfidence::MissingSubsection),
        SetMatch::None => None,
    }
}

pub(crate) fn eligible_matches(
    record: &ChargeRecord,
    registry: &Registry,
) -> Option<MatchConfidence> {
    match registry.marijuana_eligible.lookup(&record.statute) {
        SetMatch::Exact => Some(MatchConfidence::Definite),
        SetMatch::MissingSubsection => Some(MatchConfidence::MissingSubsection),
        SetMatch::None => None,
    }
}

pub(crate) fn ineligible_type_eligibility(
    record: &ChargeRecord,
    confidence: MatchConfidence,
) -> TypeEligibility {
    if confidence == MatchConfidence::MissingSubsection {
        return TypeEligibility::needs_more_analysis(MISSING_SUBSECTION);
    }
    evaluation::standard_rule(
        &record.disposition,
        TypeEligibility::ineligible(INELIGIBLE),
    )
}

pub(crate) fn eligible_type_eligibility(record: &ChargeRecord) -> TypeEligibility {
    evaluation::standard_rule(&record.disposition, TypeEligibility::eligible(ELIGIBLE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use expunge_core::{ChargeLevel, Disposition, EligibilityStatus, StatuteCode};

    fn record(statute: &str, ruling: &str) -> ChargeRecord {
        ChargeRecord::new(
            "Generic",
            StatuteCode::new(statute).unwrap(),
            ChargeLevel::FelonyClassB,
            Disposition::from_ruling(ruling, None),
        )
    }

    #[test]
    fn test_excluded_statutes_match_ineligible_family() {
        for statute in INELIGIBLE_STATUTES {
            let r = record(statute, "Convicted");
            assert_eq!(
                ineligible_matches(&r, Registry::shared()),
                Some(MatchConfidence::Definite),
                "statute {statute}"
            );
        }
    }

    #[test]
    fn test_truncated_delivery_statute_is_ambiguous() {
        let r = record("475B349", "Convicted");
        assert_eq!(
            ineligible_matches(&r, Registry::shared()),
            Some(MatchConfidence::MissingSubsection)
        );
        let te = ineligible_type_eligibility(&r, MatchConfidence::MissingSubsection);
        assert_eq!(te.status, EligibilityStatus::NeedsMoreAnalysis);
        assert_eq!(
            te.reason,
            "OECI may be missing a statute subsection which would make this charge ineligible \
             under 137.226"
        );
    }

    #[test]
    fn test_other_delivery_subsection_is_not_excluded() {
        let r = record("475B3491", "Convicted");
        assert_eq!(ineligible_matches(&r, Registry::shared()), None);
    }

    #[test]
    fn test_excluded_conviction_is_ineligible() {
        let te = ineligible_type_eligibility(&record("475B367", "Convicted"), MatchConfidence::Definite);
        assert_eq!(te.status, EligibilityStatus::Ineligible);
        assert_eq!(te.reason, "Ineligible under 137.226");
    }

    #[test]
    fn test_eligible_conviction_is_eligible() {
        let te = eligible_type_eligibility(&record("475864", "Convicted"));
        assert_eq!(te.status, EligibilityStatus::Eligible);
        assert_eq!(te.reason, "Eligible under 137.226");
    }

    #[test]
    fn test_families_do_not_overlap() {
        for statute in INELIGIBLE_STATUTES {
            let r = record(statute, "Convicted");
            assert_eq!(eligible_matches(&r, Registry::shared()), None);
        }
        for statute in ELIGIBLE_STATUTES {
            let r = record(statute, "Convicted");
            assert_eq!(ineligible_matches(&r, Registry::shared()), None);
        }
    }
}
