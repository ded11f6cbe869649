//! # Charge Records
//!
//! The immutable input to classification: one charge as it appears in a
//! case-management export, already reduced to typed fields.

use serde::{Deserialize, Serialize};

use crate::disposition::Disposition;
use crate::error::InvalidRecordError;
use crate::level::ChargeLevel;
use crate::statute::StatuteCode;

/// A single charge from a case-management export.
///
/// Records are immutable once constructed: classification is a pure
/// function of a record and the static statute registry, so the same
/// record always classifies identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeRecord {
    /// Charge name as exported (e.g. "Kidnapping in the Second Degree").
    pub name: String,
    /// Normalized statute code.
    pub statute: StatuteCode,
    /// Severity level.
    pub level: ChargeLevel,
    /// Legal outcome.
    pub disposition: Disposition,
}

impl ChargeRecord {
    /// Construct a record from already-typed parts.
    pub fn new(
        name: impl Into<String>,
        statute: StatuteCode,
        level: ChargeLevel,
        disposition: Disposition,
    ) -> Self {
        Self {
            name: name.into(),
            statute,
            level,
            disposition,
        }
    }

    /// Construct a record from raw export strings, validating the
    /// statute code and level label.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRecordError`] if the statute is malformed or the
    /// level label is outside the closed vocabulary. The ruling string is
    /// never an error; unknown rulings classify as
    /// [`crate::DispositionStatus::Unrecognized`].
    pub fn from_export(
        name: &str,
        statute: &str,
        level: &str,
        disposition: Disposition,
    ) -> Result<Self, InvalidRecordError> {
        Ok(Self {
            name: name.to_string(),
            statute: StatuteCode::new(statute)?,
            level: level.parse()?,
            disposition,
        })
    }
}
