//! # Parking Tickets
//!
//! Stopping, standing, and parking provisions at violation level.
//! Outside the set-aside statute entirely: ineligible regardless of
//! disposition, like the other vehicle-code violations.

use expunge_core::{ChargeRecord, TypeEligibility};

use crate::classifier::MatchConfidence;
use crate::registry::{Registry, SetMatch};

pub const STATUTES: &[&str] = &[
    "811550", // Places Where Stopping, Standing and Parking Prohibited
    "811555", // Illegal Stopping, Standing or Parking
    "811560", // Exemptions From Prohibitions on Stopping, Standing and Parking
    "811570", // Winter Recreation Parking Violations
];

/// Outcome for every disposition.
pub const TYPE_INELIGIBLE: &str = "Ineligible by omission from statute";

pub(crate) fn matches(record: &ChargeRecord, registry: &Registry) -> Option<MatchConfidence> {
    if !record.level.is_violation_level() {
        return None;
    }
    match registry.parking_ticket.lookup(&record.statute) {
        SetMatch::Exact => Some(MatchConfidence::Definite),
        SetMatch::MissingSubsection => Some(MatchConfidence::MissingSubsection),
        SetMatch::None => None,
    }
}

/// Parking tickets are ineligible regardless of disposition.
pub(crate) fn type_eligibility(_record: &ChargeRecord) -> TypeEligibility {
    TypeEligibility::ineligible(TYPE_INELIGIBLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use expunge_core::{ChargeLevel, Disposition, EligibilityStatus, StatuteCode};

    fn record(statute: &str, level: ChargeLevel, ruling: &str) -> ChargeRecord {
        ChargeRecord::new(
            "Illegal Parking",
            StatuteCode::new(statute).unwrap(),
            level,
            Disposition::from_ruling(ruling, None),
        )
    }

    #[test]
    fn test_matches_at_violation_level_only() {
        let v = record("811555", ChargeLevel::Violation, "Convicted");
        assert_eq!(
            matches(&v, Registry::shared()),
            Some(MatchConfidence::Definite)
        );
        let m = record("811555", ChargeLevel::MisdemeanorClassA, "Convicted");
        assert_eq!(matches(&m, Registry::shared()), None);
    }

    #[test]
    fn test_ineligible_regardless_of_disposition() {
        for ruling in ["Convicted", "Dismissed"] {
            let te = type_eligibility(&record("811555", ChargeLevel::Violation, ruling));
            assert_eq!(te.status, EligibilityStatus::Ineligible);
            assert_eq!(te.reason, "Ineligible by omission from statute");
        }
    }
}
