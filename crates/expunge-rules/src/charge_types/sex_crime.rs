//! # Sex Crimes
//!
//! Offenses excluded from set-aside relief under 137.225(6)(a).
//! Convictions are ineligible regardless of level.

use expunge_core::{ChargeRecord, TypeEligibility};

use crate::classifier::MatchConfidence;
use crate::evaluation;
use crate::registry::{Registry, SetMatch};

pub const STATUTES: &[&str] = &[
    "163365", // Rape II
    "163375", // Rape I
    "163385", // Sodomy III
    "163395", // Sodomy II
    "163405", // Sodomy I
    "163408", // Unlawful Sexual Penetration II
    "163411", // Unlawful Sexual Penetration I
    "163425", // Sexual Abuse II
    "163427", // Sexual Abuse I
    "163432", // Online Sexual Corruption of a Child II
    "163433", // Online Sexual Corruption of a Child I
    "163670", // Using a Child in a Display of Sexually Explicit Conduct
    "163684", // Encouraging Child Sexual Abuse I
    "163686", // Encouraging Child Sexual Abuse II
    "163687", // Encouraging Child Sexual Abuse III
    "167017", // Compelling Prostitution
];

/// Conviction outcome.
pub const TYPE_INELIGIBLE: &str = "Ineligible under 137.225(6)(a)";

pub(crate) fn matches(record: &ChargeRecord, registry: &Registry) -> Option<MatchConfidence> {
    match registry.sex_crime.lookup(&record.statute) {
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
            "Generic",
            StatuteCode::new(statute).unwrap(),
            ChargeLevel::FelonyClassA,
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
    fn test_conviction_is_ineligible() {
        let te = type_eligibility(&record("163375", "Convicted"));
        assert_eq!(te.status, EligibilityStatus::Ineligible);
        assert_eq!(te.reason, "Ineligible under 137.225(6)(a)");
    }

    #[test]
    fn test_dismissal_is_eligible() {
        let te = type_eligibility(&record("163375", "Dismissed"));
        assert_eq!(te.status, EligibilityStatus::Eligible);
    }
}
