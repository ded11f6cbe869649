//! # Charge-Type Classifier
//!
//! Decides which charge-type family a record belongs to.
//!
//! ## Precedence
//!
//! Families are tried in the fixed order of [`PRECEDENCE`], most specific
//! first, so a statute appearing in more than one family's sets resolves
//! to exactly one variant. The order is the canonical variant order from
//! `expunge-core`; a test pins the two against each other so neither can
//! drift.
//!
//! Classification is a pure function of the record and the static
//! registry: no side effects, deterministic, idempotent.

use serde::{Deserialize, Serialize};

use expunge_core::{ChargeRecord, ChargeTypeVariant};

use crate::charge_types::{
    contempt_of_court, criminal_forfeiture, duii, fare_violation, felony_class_a, felony_class_b,
    felony_class_c, marijuana, misdemeanor, parking_ticket, person_crime, person_felony,
    severe_charge, sex_crime, traffic, violation,
};
use crate::registry::Registry;

/// How confidently a family matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchConfidence {
    /// The statute is an unambiguous member of the family's sets.
    Definite,
    /// The statute equals a subsection-qualified entry's base code; the
    /// export may have dropped the qualifying digit. The record is still
    /// an instance of the family, but eligibility needs human review.
    MissingSubsection,
}

/// The classifier's output: the single best-matching variant and the
/// confidence of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    /// The matched charge-type variant.
    pub variant: ChargeTypeVariant,
    /// Match confidence. Always `Definite` for `Unclassified`.
    pub confidence: MatchConfidence,
}

type MatchFn = fn(&ChargeRecord, &Registry) -> Option<MatchConfidence>;

/// The classification order. Most specific families first; the residual
/// level families last; `Unclassified` is the fallback when no entry
/// matches.
const PRECEDENCE: &[(ChargeTypeVariant, MatchFn)] = &[
    (ChargeTypeVariant::ContemptOfCourt, contempt_of_court::matches),
    (ChargeTypeVariant::ParkingTicket, parking_ticket::matches),
    (ChargeTypeVariant::FareViolation, fare_violation::matches),
    (ChargeTypeVariant::CriminalForfeiture, criminal_forfeiture::matches),
    (ChargeTypeVariant::Duii, duii::matches),
    (ChargeTypeVariant::TrafficViolation, traffic::violation_matches),
    (ChargeTypeVariant::TrafficOffense, traffic::offense_matches),
    (ChargeTypeVariant::MarijuanaIneligible, marijuana::ineligible_matches),
    (ChargeTypeVariant::MarijuanaEligible, marijuana::eligible_matches),
    (ChargeTypeVariant::SevereCharge, severe_charge::matches),
    (ChargeTypeVariant::SexCrime, sex_crime::matches),
    (ChargeTypeVariant::PersonCrime, person_crime::matches),
    (ChargeTypeVariant::PersonFelonyClassB, person_felony::matches),
    (ChargeTypeVariant::FelonyClassA, felony_class_a::matches),
    (ChargeTypeVariant::FelonyClassB, felony_class_b::matches),
    (ChargeTypeVariant::FelonyClassC, felony_class_c::matches),
    (ChargeTypeVariant::MisdemeanorClassA, misdemeanor::class_a_matches),
    (ChargeTypeVariant::MisdemeanorClassBC, misdemeanor::class_bc_matches),
    (ChargeTypeVariant::Violation, violation::matches),
];

/// Classifies charge records against the statute registry.
#[derive(Debug, Clone, Copy)]
pub struct ChargeClassifier {
    registry: &'static Registry,
}

impl ChargeClassifier {
    /// A classifier over the given registry.
    pub fn new(registry: &'static Registry) -> Self {
        Self { registry }
    }

    /// A classifier over the process-wide registry.
    pub fn shared() -> Self {
        Self::new(Registry::shared())
    }

    /// Classify a record into exactly one variant.
    ///
    /// Walks [`PRECEDENCE`] and returns the first family whose predicate
    /// matches; records matching no family are `Unclassified`.
    pub fn classify(&self, record: &ChargeRecord) -> Classification {
        for (variant, matches) in PRECEDENCE {
            if let Some(confidence) = matches(record, self.registry) {
                match confidence {
                    MatchConfidence::Definite => tracing::debug!(
                        statute = %record.statute,
                        level = %record.level,
                        variant = %variant,
                        "classified charge"
                    ),
                    MatchConfidence::MissingSubsection => tracing::warn!(
                        statute = %record.statute,
                        level = %record.level,
                        variant = %variant,
                        "statute may be missing its subsection digit, classification needs review"
                    ),
                }
                return Classification {
                    variant: *variant,
                    confidence,
                };
            }
        }
        tracing::warn!(
            statute = %record.statute,
            level = %record.level,
            "charge matched no family, falling back to unclassified"
        );
        Classification {
            variant: ChargeTypeVariant::Unclassified,
            confidence: MatchConfidence::Definite,
        }
    }

    /// Whether the record classifies as the given variant.
    ///
    /// This is the membership query for consumers that only care about
    /// one family: precedence still applies, so a record whose statute
    /// belongs to `variant`'s sets answers `false` when a more specific
    /// family claims it first.
    pub fn is_type(&self, record: &ChargeRecord, variant: ChargeTypeVariant) -> bool {
        self.classify(record).variant == variant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expunge_core::{ChargeLevel, Disposition, StatuteCode};

    fn record(statute: &str, level: ChargeLevel) -> ChargeRecord {
        ChargeRecord::new(
            "Generic",
            StatuteCode::new(statute).unwrap(),
            level,
            Disposition::from_ruling("Convicted", None),
        )
    }

    #[test]
    fn test_precedence_mirrors_variant_order() {
        let walked: Vec<ChargeTypeVariant> = PRECEDENCE.iter().map(|(v, _)| *v).collect();
        let canonical: Vec<ChargeTypeVariant> = ChargeTypeVariant::all_variants()
            .iter()
            .copied()
            .filter(|v| *v != ChargeTypeVariant::Unclassified)
            .collect();
        assert_eq!(walked, canonical);
    }

    #[test]
    fn test_no_family_is_unclassified() {
        // A felony with no class designation belongs to no residual family.
        let c = ChargeClassifier::shared().classify(&record("164885", ChargeLevel::FelonyUnclassified));
        assert_eq!(c.variant, ChargeTypeVariant::Unclassified);
        assert_eq!(c.confidence, MatchConfidence::Definite);
    }

    #[test]
    fn test_overlap_resolves_to_higher_precedence_family() {
        // Kidnapping II is an enumerated person crime; at Felony Class B
        // it must not fall through to the person-felony family.
        let c = ChargeClassifier::shared().classify(&record("163225", ChargeLevel::FelonyClassB));
        assert_eq!(c.variant, ChargeTypeVariant::PersonCrime);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let classifier = ChargeClassifier::shared();
        let r = record("1631874", ChargeLevel::FelonyClassB);
        assert_eq!(classifier.classify(&r), classifier.classify(&r));
    }

    #[test]
    fn test_is_type() {
        let classifier = ChargeClassifier::shared();
        let r = record("163225", ChargeLevel::FelonyClassB);
        assert!(classifier.is_type(&r, ChargeTypeVariant::PersonCrime));
        assert!(!classifier.is_type(&r, ChargeTypeVariant::PersonFelonyClassB));
    }

    #[test]
    fn test_classification_serde_roundtrip() {
        let c = ChargeClassifier::shared().classify(&record("163187", ChargeLevel::FelonyClassB));
        let json = serde_json::to_string(&c).unwrap();
        let parsed: Classification = serde_json::from_str(&json).unwrap();
        assert_eq!(c, parsed);
    }
}
