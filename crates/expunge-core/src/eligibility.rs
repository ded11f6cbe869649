//! # Eligibility Result Types
//!
//! The output side of the core: an eligibility status, the exact
//! justification text that accompanies it, and the result wrapper that
//! downstream reporting consumes.
//!
//! Reason strings are stable display text. They are defined as named
//! constants next to each charge-type rule, never assembled by general
//! templating, and downstream tests assert on them byte for byte.

use serde::{Deserialize, Serialize};

/// The eligibility determination for a charge-type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityStatus {
    /// The charge type is eligible for expungement.
    Eligible,
    /// The charge type is ineligible for expungement.
    Ineligible,
    /// Eligibility cannot be determined from the record alone; a human
    /// reviewer must resolve it.
    NeedsMoreAnalysis,
}

impl EligibilityStatus {
    /// Whether this status is a definitive determination.
    ///
    /// `NeedsMoreAnalysis` is not definitive: it is the designed outcome
    /// for ambiguous classifications and unrecognized dispositions.
    pub fn is_definitive(&self) -> bool {
        matches!(self, Self::Eligible | Self::Ineligible)
    }
}

impl std::fmt::Display for EligibilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Eligible => "Eligible",
            Self::Ineligible => "Ineligible",
            Self::NeedsMoreAnalysis => "Needs More Analysis",
        };
        f.write_str(s)
    }
}

/// An eligibility status paired with its exact justification text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEligibility {
    /// The determination.
    pub status: EligibilityStatus,
    /// Exact justification citing the controlling statute.
    pub reason: String,
}

impl TypeEligibility {
    /// An `Eligible` determination with the given justification.
    pub fn eligible(reason: &str) -> Self {
        Self {
            status: EligibilityStatus::Eligible,
            reason: reason.to_string(),
        }
    }

    /// An `Ineligible` determination with the given justification.
    pub fn ineligible(reason: &str) -> Self {
        Self {
            status: EligibilityStatus::Ineligible,
            reason: reason.to_string(),
        }
    }

    /// A `NeedsMoreAnalysis` determination with the given justification.
    pub fn needs_more_analysis(reason: &str) -> Self {
        Self {
            status: EligibilityStatus::NeedsMoreAnalysis,
            reason: reason.to_string(),
        }
    }
}

/// The expungement result for a single charge.
///
/// Wraps the type-eligibility dimension. Further dimensions (time-based
/// eligibility, case-level aggregation) are computed by downstream
/// collaborators and are not part of this core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpungementResult {
    /// Eligibility as determined by charge-type classification.
    pub type_eligibility: TypeEligibility,
}

impl ExpungementResult {
    /// Wrap a type-eligibility determination.
    pub fn new(type_eligibility: TypeEligibility) -> Self {
        Self { type_eligibility }
    }
}
