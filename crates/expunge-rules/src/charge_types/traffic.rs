//! # Vehicle-Code Families
//!
//! Offenses under the vehicle code (chapters 801 through 826), split by
//! level: crimes keep the common dismissal rule, while violations are
//! outside the set-aside statute entirely and stay ineligible whatever
//! their disposition.
//!
//! Membership is a chapter-range test on the statute code rather than an
//! enumerated set. DUII and the parking provisions sit earlier in the
//! precedence order and never reach these predicates.

use expunge_core::{ChargeRecord, TypeEligibility};

use crate::classifier::MatchConfidence;
use crate::evaluation;
use crate::registry::Registry;

/// First vehicle-code chapter.
const CHAPTER_LOW: u32 = 801;

/// Last vehicle-code chapter.
const CHAPTER_HIGH: u32 = 826;

/// Outcome for vehicle-code crimes (convictions) and all vehicle-code
/// violations.
pub const TYPE_INELIGIBLE: &str = "Ineligible under 137.225(7)(a)";

/// Whether the statute falls in the vehicle code.
///
/// Statute codes for these chapters are all-numeric with a three-digit
/// chapter prefix; codes too short for a prefix, or with a non-numeric
/// one, are not vehicle-code statutes.
fn is_vehicle_code(record: &ChargeRecord) -> bool {
    let code = record.statute.as_str();
    if code.len() < 6 {
        return false;
    }
    match code[..3].parse::<u32>() {
        Ok(chapter) => (CHAPTER_LOW..=CHAPTER_HIGH).contains(&chapter),
        Err(_) => false,
    }
}

pub(crate) fn violation_matches(
    record: &ChargeRecord,
    _registry: &Registry,
) -> Option<MatchConfidence> {
    if record.level.is_violation_level() && is_vehicle_code(record) {
        Some(MatchConfidence::Definite)
    } else {
        None
    }
}

pub(crate) fn offense_matches(
    record: &ChargeRecord,
    _registry: &Registry,
) -> Option<MatchConfidence> {
    if record.level.is_crime() && is_vehicle_code(record) {
        Some(MatchConfidence::Definite)
    } else {
        None
    }
}

/// Vehicle-code violations are ineligible regardless of disposition.
pub(crate) fn violation_type_eligibility(_record: &ChargeRecord) -> TypeEligibility {
    TypeEligibility::ineligible(TYPE_INELIGIBLE)
}

pub(crate) fn offense_type_eligibility(record: &ChargeRecord) -> TypeEligibility {
    evaluation::standard_rule(
        &record.disposition,
        TypeEligibility::ineligible(TYPE_INELIGIBLE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use expunge_core::{ChargeLevel, Disposition, EligibilityStatus, StatuteCode};

    fn record(statute: &str, level: ChargeLevel, ruling: &str) -> ChargeRecord {
        ChargeRecord::new(
            "Generic",
            StatuteCode::new(statute).unwrap(),
            level,
            Disposition::from_ruling(ruling, None),
        )
    }

    #[test]
    fn test_hit_and_run_is_a_traffic_offense() {
        let r = record("811705", ChargeLevel::FelonyClassC, "Convicted");
        assert_eq!(
            offense_matches(&r, Registry::shared()),
            Some(MatchConfidence::Definite)
        );
        assert_eq!(violation_matches(&r, Registry::shared()), None);
    }

    #[test]
    fn test_speeding_is_a_traffic_violation() {
        let r = record("811111", ChargeLevel::Violation, "Convicted");
        assert_eq!(
            violation_matches(&r, Registry::shared()),
            Some(MatchConfidence::Definite)
        );
        assert_eq!(offense_matches(&r, Registry::shared()), None);
    }

    #[test]
    fn test_non_vehicle_chapter_does_not_match() {
        let r = record("163225", ChargeLevel::FelonyClassB, "Convicted");
        assert_eq!(offense_matches(&r, Registry::shared()), None);
        // A short code whose chapter cannot be read is not vehicle code.
        let short = record("33015", ChargeLevel::Violation, "Convicted");
        assert_eq!(violation_matches(&short, Registry::shared()), None);
    }

    #[test]
    fn test_alphanumeric_code_does_not_match() {
        let r = record("475B359", ChargeLevel::FelonyClassB, "Convicted");
        assert_eq!(offense_matches(&r, Registry::shared()), None);
    }

    #[test]
    fn test_offense_conviction_is_ineligible() {
        let te = offense_type_eligibility(&record("811705", ChargeLevel::FelonyClassC, "Convicted"));
        assert_eq!(te.status, EligibilityStatus::Ineligible);
        assert_eq!(te.reason, "Ineligible under 137.225(7)(a)");
    }

    #[test]
    fn test_offense_dismissal_is_eligible() {
        let te = offense_type_eligibility(&record("811705", ChargeLevel::FelonyClassC, "Dismissed"));
        assert_eq!(te.status, EligibilityStatus::Eligible);
    }

    #[test]
    fn test_violation_is_ineligible_even_when_dismissed() {
        let te =
            violation_type_eligibility(&record("811111", ChargeLevel::Violation, "Dismissed"));
        assert_eq!(te.status, EligibilityStatus::Ineligible);
        assert_eq!(te.reason, "Ineligible under 137.225(7)(a)");
    }
}
