//! # Eligibility Evaluation
//!
//! Maps a classification plus the record's disposition to a
//! [`TypeEligibility`]. The dispatch match is exhaustive over
//! [`ChargeTypeVariant`]: adding a variant is a compile error until an
//! eligibility rule exists for it.
//!
//! ## Shared disposition layer
//!
//! Most families share the same treatment of non-conviction dispositions:
//! dismissals are eligible, diverted and unrecognized outcomes need
//! review, and a missing disposition needs review. Families with their
//! own non-conviction law (DUII diversion dismissals, parking and
//! traffic violations) bypass [`standard_rule`] and match the
//! disposition themselves.
//!
//! An ambiguous classification is resolved before any disposition rule:
//! a charge whose statute may be missing its subsection digit goes to a
//! human reviewer even when its disposition alone would have been
//! decisive.

use expunge_core::{ChargeRecord, ChargeTypeVariant, Disposition, DispositionStatus, TypeEligibility};

use crate::charge_types::{
    contempt_of_court, criminal_forfeiture, duii, fare_violation, felony_class_a, felony_class_b,
    felony_class_c, marijuana, misdemeanor, parking_ticket, person_crime, person_felony,
    severe_charge, sex_crime, traffic, unclassified, violation,
};
use crate::classifier::Classification;

/// Dismissed and no-complaint outcomes are eligible for every family
/// that does not override them.
pub const DISMISSALS_ELIGIBLE: &str = "Dismissals are generally eligible under 137.225(1)(b)";

/// The charge has no disposition row.
pub const DISPOSITION_UNKNOWN: &str = "Disposition not found. Needs further analysis";

/// The charge's ruling text matched no known disposition.
pub const DISPOSITION_UNRECOGNIZED: &str =
    "Disposition was not recognized. Needs further analysis";

/// Diversion outcomes are charge-specific; families without their own
/// diversion rule surface them for review.
pub const DIVERSION_NEEDS_ANALYSIS: &str = "Diverted charges need further analysis";

/// The shared disposition rule: apply the family's conviction outcome,
/// the common dismissal rule, and the needs-review fallbacks.
pub(crate) fn standard_rule(
    disposition: &Disposition,
    on_conviction: TypeEligibility,
) -> TypeEligibility {
    match disposition.status {
        DispositionStatus::Convicted => on_conviction,
        DispositionStatus::Dismissed | DispositionStatus::NoComplaint => {
            TypeEligibility::eligible(DISMISSALS_ELIGIBLE)
        }
        DispositionStatus::Diverted => {
            TypeEligibility::needs_more_analysis(DIVERSION_NEEDS_ANALYSIS)
        }
        DispositionStatus::Unrecognized => {
            TypeEligibility::needs_more_analysis(DISPOSITION_UNRECOGNIZED)
        }
        DispositionStatus::Unknown => TypeEligibility::needs_more_analysis(DISPOSITION_UNKNOWN),
    }
}

/// Compute the type eligibility for a classified charge.
///
/// Pure function of the classification and the record; calling it twice
/// with the same inputs yields the same status and reason.
pub fn type_eligibility(
    classification: Classification,
    record: &ChargeRecord,
) -> TypeEligibility {
    let confidence = classification.confidence;
    match classification.variant {
        ChargeTypeVariant::ContemptOfCourt => contempt_of_court::type_eligibility(record),
        ChargeTypeVariant::ParkingTicket => parking_ticket::type_eligibility(record),
        ChargeTypeVariant::FareViolation => fare_violation::type_eligibility(record),
        ChargeTypeVariant::CriminalForfeiture => criminal_forfeiture::type_eligibility(record),
        ChargeTypeVariant::Duii => duii::type_eligibility(record),
        ChargeTypeVariant::TrafficViolation => traffic::violation_type_eligibility(record),
        ChargeTypeVariant::TrafficOffense => traffic::offense_type_eligibility(record),
        ChargeTypeVariant::MarijuanaIneligible => {
            marijuana::ineligible_type_eligibility(record, confidence)
        }
        ChargeTypeVariant::MarijuanaEligible => marijuana::eligible_type_eligibility(record),
        ChargeTypeVariant::SevereCharge => severe_charge::type_eligibility(record),
        ChargeTypeVariant::SexCrime => sex_crime::type_eligibility(record),
        ChargeTypeVariant::PersonCrime => person_crime::type_eligibility(record),
        ChargeTypeVariant::PersonFelonyClassB => {
            person_felony::type_eligibility(record, confidence)
        }
        ChargeTypeVariant::FelonyClassA => felony_class_a::type_eligibility(record),
        ChargeTypeVariant::FelonyClassB => felony_class_b::type_eligibility(record),
        ChargeTypeVariant::FelonyClassC => felony_class_c::type_eligibility(record),
        ChargeTypeVariant::MisdemeanorClassA => misdemeanor::class_a_type_eligibility(record),
        ChargeTypeVariant::MisdemeanorClassBC => misdemeanor::class_bc_type_eligibility(record),
        ChargeTypeVariant::Violation => violation::type_eligibility(record),
        ChargeTypeVariant::Unclassified => unclassified::type_eligibility(record),
    }
}
