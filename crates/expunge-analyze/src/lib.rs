//! # expunge-analyze — Charge Analysis Entry Point
//!
//! Connects the rule core to its callers. This crate provides:
//!
//! - [`ClassifiedCharge`]: a charge record together with its variant tag
//!   and assembled expungement result. Pure composition, no business
//!   logic of its own.
//!
//! - [`analyze()`]: the primary entry point. Classifies a record against
//!   the shared registry, evaluates its type eligibility, and assembles
//!   the result.
//!
//! ## Architecture
//!
//! ```text
//! expunge-core (types)  -->  expunge-rules (law)  -->  expunge-analyze (assembly)
//!   ChargeRecord               ChargeClassifier           ClassifiedCharge
//!   TypeEligibility            type_eligibility()         analyze()
//! ```

use serde::{Deserialize, Serialize};

use expunge_core::{
    ChargeRecord, ChargeTypeVariant, Disposition, ExpungeError, ExpungementResult,
    TypeEligibility,
};
use expunge_rules::{type_eligibility, ChargeClassifier, MatchConfidence};

/// A charge record with its classification and expungement result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedCharge {
    /// The input record.
    pub record: ChargeRecord,
    /// The charge-type family the record belongs to.
    pub variant: ChargeTypeVariant,
    /// Confidence of the classification.
    pub confidence: MatchConfidence,
    /// The assembled result.
    pub expungement_result: ExpungementResult,
}

impl ClassifiedCharge {
    /// The type-eligibility determination.
    pub fn type_eligibility(&self) -> &TypeEligibility {
        &self.expungement_result.type_eligibility
    }

    /// Whether this charge classified as the given variant.
    pub fn is_type(&self, variant: ChargeTypeVariant) -> bool {
        self.variant == variant
    }
}

/// Classify a charge record and assemble its expungement result.
///
/// Pure function of the record and the compiled-in statute registry:
/// analyzing the same record twice yields identical results, and
/// concurrent callers share the registry without locking.
pub fn analyze(record: ChargeRecord) -> ClassifiedCharge {
    let classification = ChargeClassifier::shared().classify(&record);
    let eligibility = type_eligibility(classification, &record);
    ClassifiedCharge {
        record,
        variant: classification.variant,
        confidence: classification.confidence,
        expungement_result: ExpungementResult::new(eligibility),
    }
}

/// Analyze a charge arriving as raw export strings.
///
/// Validates the statute code and level label before classification.
///
/// # Errors
///
/// Returns [`ExpungeError::InvalidRecord`] when the statute is malformed
/// or the level label is outside the closed vocabulary.
pub fn analyze_export(
    name: &str,
    statute: &str,
    level: &str,
    disposition: Disposition,
) -> Result<ClassifiedCharge, ExpungeError> {
    let record = ChargeRecord::from_export(name, statute, level, disposition).map_err(|e| {
        tracing::debug!(statute, level, error = %e, "rejected malformed charge record");
        e
    })?;
    Ok(analyze(record))
}
