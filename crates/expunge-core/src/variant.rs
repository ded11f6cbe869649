//! # Charge-Type Variants — Single Source of Truth
//!
//! Defines the `ChargeTypeVariant` enum: the closed set of classification
//! outcomes. This is the ONE definition used across the stack. Every
//! `match` on `ChargeTypeVariant` must be exhaustive; adding a charge
//! type forces every consumer to handle it at compile time.
//!
//! ## Design
//!
//! Classification is a tagged variant, not a type hierarchy. A charge
//! record classifies into exactly one variant (or `Unclassified`), and
//! the precedence that resolves overlapping statute sets is an explicit
//! ordered list in the classification crate, not an artifact of
//! declaration order.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// All charge-type classification outcomes.
///
/// Variants are listed in classification precedence order: where a
/// statute could satisfy more than one family's membership test, the
/// earlier family wins. The classifier walks this order explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeTypeVariant {
    /// Contempt of court findings.
    ContemptOfCourt,
    /// Parking and stopping violations.
    ParkingTicket,
    /// Transit fare violations.
    FareViolation,
    /// Criminal forfeiture proceedings.
    CriminalForfeiture,
    /// Driving under the influence of intoxicants.
    Duii,
    /// Vehicle-code offenses at violation level.
    TrafficViolation,
    /// Vehicle-code offenses at crime level.
    TrafficOffense,
    /// Marijuana offenses excluded from set-aside relief.
    MarijuanaIneligible,
    /// Marijuana offenses with their own eligibility rule.
    MarijuanaEligible,
    /// Offenses excluded from relief at any level (murder, treason).
    SevereCharge,
    /// Sex offenses excluded from relief.
    SexCrime,
    /// Enumerated person crimes.
    PersonCrime,
    /// Class B felonies that are person crimes under the sentencing
    /// guidelines but are not otherwise specially classified.
    PersonFelonyClassB,
    /// Residual Class A felonies.
    FelonyClassA,
    /// Residual Class B felonies.
    FelonyClassB,
    /// Residual Class C and unclassified felonies.
    FelonyClassC,
    /// Residual Class A misdemeanors.
    MisdemeanorClassA,
    /// Residual Class B/C and unclassified misdemeanors.
    MisdemeanorClassBC,
    /// Residual violations and infractions.
    Violation,
    /// No family matched.
    Unclassified,
}

/// Total number of charge-type variants. Used for exhaustiveness assertions.
pub const CHARGE_TYPE_COUNT: usize = 20;

impl ChargeTypeVariant {
    /// Returns all variants in classification precedence order.
    pub fn all_variants() -> &'static [ChargeTypeVariant] {
        &[
            Self::ContemptOfCourt,
            Self::ParkingTicket,
            Self::FareViolation,
            Self::CriminalForfeiture,
            Self::Duii,
            Self::TrafficViolation,
            Self::TrafficOffense,
            Self::MarijuanaIneligible,
            Self::MarijuanaEligible,
            Self::SevereCharge,
            Self::SexCrime,
            Self::PersonCrime,
            Self::PersonFelonyClassB,
            Self::FelonyClassA,
            Self::FelonyClassB,
            Self::FelonyClassC,
            Self::MisdemeanorClassA,
            Self::MisdemeanorClassBC,
            Self::Violation,
            Self::Unclassified,
        ]
    }

    /// Returns the snake_case string identifier for this variant.
    ///
    /// This matches the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContemptOfCourt => "contempt_of_court",
            Self::ParkingTicket => "parking_ticket",
            Self::FareViolation => "fare_violation",
            Self::CriminalForfeiture => "criminal_forfeiture",
            Self::Duii => "duii",
            Self::TrafficViolation => "traffic_violation",
            Self::TrafficOffense => "traffic_offense",
            Self::MarijuanaIneligible => "marijuana_ineligible",
            Self::MarijuanaEligible => "marijuana_eligible",
            Self::SevereCharge => "severe_charge",
            Self::SexCrime => "sex_crime",
            Self::PersonCrime => "person_crime",
            Self::PersonFelonyClassB => "person_felony_class_b",
            Self::FelonyClassA => "felony_class_a",
            Self::FelonyClassB => "felony_class_b",
            Self::FelonyClassC => "felony_class_c",
            Self::MisdemeanorClassA => "misdemeanor_class_a",
            Self::MisdemeanorClassBC => "misdemeanor_class_bc",
            Self::Violation => "violation",
            Self::Unclassified => "unclassified",
        }
    }
}

impl std::fmt::Display for ChargeTypeVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`ChargeTypeVariant`] identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown charge type: {0:?}")]
pub struct UnknownChargeType(pub String);

impl FromStr for ChargeTypeVariant {
    type Err = UnknownChargeType;

    /// Parse a variant from its snake_case identifier.
    ///
    /// Accepts the same identifiers produced by
    /// [`ChargeTypeVariant::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChargeTypeVariant::all_variants()
            .iter()
            .find(|v| v.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownChargeType(s.to_string()))
    }
}
