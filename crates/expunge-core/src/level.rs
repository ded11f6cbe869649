//! # Charge Levels — Closed Severity Vocabulary
//!
//! Defines the `ChargeLevel` enum covering every severity label the
//! case-management export produces. This is the one definition used
//! across the stack; match predicates in the classification crate match
//! on it exhaustively.
//!
//! A label outside the vocabulary fails parsing at the record boundary.
//! There is no catch-all variant: an unrecognized level can therefore
//! never satisfy a level predicate downstream.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::InvalidRecordError;

/// Severity classification of a charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeLevel {
    /// Class A felony.
    FelonyClassA,
    /// Class B felony.
    FelonyClassB,
    /// Class C felony.
    FelonyClassC,
    /// Felony with no class designation in the export.
    FelonyUnclassified,
    /// Class A misdemeanor.
    MisdemeanorClassA,
    /// Class B misdemeanor.
    MisdemeanorClassB,
    /// Class C misdemeanor.
    MisdemeanorClassC,
    /// Misdemeanor with no class designation in the export.
    MisdemeanorUnclassified,
    /// Violation (non-criminal offense).
    Violation,
    /// Infraction (non-criminal offense).
    Infraction,
}

/// Total number of charge levels. Used for exhaustiveness assertions.
pub const CHARGE_LEVEL_COUNT: usize = 10;

impl ChargeLevel {
    /// Returns all charge levels in canonical order.
    pub fn all_levels() -> &'static [ChargeLevel] {
        &[
            Self::FelonyClassA,
            Self::FelonyClassB,
            Self::FelonyClassC,
            Self::FelonyUnclassified,
            Self::MisdemeanorClassA,
            Self::MisdemeanorClassB,
            Self::MisdemeanorClassC,
            Self::MisdemeanorUnclassified,
            Self::Violation,
            Self::Infraction,
        ]
    }

    /// The export label for this level.
    ///
    /// These match the severity strings produced by the case-management
    /// export and accepted by [`ChargeLevel::from_str()`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FelonyClassA => "Felony Class A",
            Self::FelonyClassB => "Felony Class B",
            Self::FelonyClassC => "Felony Class C",
            Self::FelonyUnclassified => "Felony Unclassified",
            Self::MisdemeanorClassA => "Misdemeanor Class A",
            Self::MisdemeanorClassB => "Misdemeanor Class B",
            Self::MisdemeanorClassC => "Misdemeanor Class C",
            Self::MisdemeanorUnclassified => "Misdemeanor",
            Self::Violation => "Violation",
            Self::Infraction => "Infraction",
        }
    }

    /// Whether this level is any felony class.
    pub fn is_felony(&self) -> bool {
        matches!(
            self,
            Self::FelonyClassA
                | Self::FelonyClassB
                | Self::FelonyClassC
                | Self::FelonyUnclassified
        )
    }

    /// Whether this level is any misdemeanor class.
    pub fn is_misdemeanor(&self) -> bool {
        matches!(
            self,
            Self::MisdemeanorClassA
                | Self::MisdemeanorClassB
                | Self::MisdemeanorClassC
                | Self::MisdemeanorUnclassified
        )
    }

    /// Whether this level is a non-criminal offense level.
    pub fn is_violation_level(&self) -> bool {
        matches!(self, Self::Violation | Self::Infraction)
    }

    /// Whether this level designates a crime rather than a violation.
    pub fn is_crime(&self) -> bool {
        self.is_felony() || self.is_misdemeanor()
    }
}

impl std::fmt::Display for ChargeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChargeLevel {
    type Err = InvalidRecordError;

    /// Parse a charge level from its export label.
    ///
    /// Accepts the same labels produced by [`ChargeLevel::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Felony Class A" => Ok(Self::FelonyClassA),
            "Felony Class B" => Ok(Self::FelonyClassB),
            "Felony Class C" => Ok(Self::FelonyClassC),
            "Felony Unclassified" => Ok(Self::FelonyUnclassified),
            "Misdemeanor Class A" => Ok(Self::MisdemeanorClassA),
            "Misdemeanor Class B" => Ok(Self::MisdemeanorClassB),
            "Misdemeanor Class C" => Ok(Self::MisdemeanorClassC),
            "Misdemeanor" => Ok(Self::MisdemeanorUnclassified),
            "Violation" => Ok(Self::Violation),
            "Infraction" => Ok(Self::Infraction),
            other => Err(InvalidRecordError::Level {
                raw: other.to_string(),
            }),
        }
    }
}
