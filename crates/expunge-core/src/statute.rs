//! # Statute Codes
//!
//! Defines `StatuteCode`, a validated newtype for statute identifiers as
//! they appear in case-management exports.
//!
//! Exports write statutes with punctuation (`163.225`, `475B.359`,
//! `813.010(5)`). A `StatuteCode` holds the normalized form: punctuation
//! stripped, uppercased, between five and eight alphanumeric characters.
//! The first six characters are the *section*, the portion that statute
//! set membership is tested against; a trailing digit beyond the base
//! code is a subsection.
//!
//! Malformed inputs are **rejected at construction**. There is no lenient
//! constructor that could let an unparseable statute reach the classifier.

use serde::{Deserialize, Serialize};

use crate::error::InvalidRecordError;

/// Minimum length of a normalized statute code.
const MIN_LEN: usize = 5;

/// Maximum length of a normalized statute code (seven-character base code
/// plus a one-digit subsection).
const MAX_LEN: usize = 8;

/// A normalized statute identifier.
///
/// # Construction
///
/// - [`StatuteCode::new()`] — from a raw export string, normalizing and
///   validating.
///
/// # Examples
///
/// ```
/// use expunge_core::StatuteCode;
///
/// let code = StatuteCode::new("163.225").unwrap();
/// assert_eq!(code.as_str(), "163225");
/// assert_eq!(code.section(), "163225");
///
/// let qualified = StatuteCode::new("813.010(5)").unwrap();
/// assert_eq!(qualified.as_str(), "8130105");
/// assert_eq!(qualified.section(), "813010");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatuteCode(String);

impl StatuteCode {
    /// Normalize and validate a raw statute string.
    ///
    /// Strips every non-alphanumeric character and uppercases the rest.
    /// The normalized code must be 5–8 alphanumeric characters.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRecordError::Statute`] if the normalized code is
    /// empty, too short, or too long.
    pub fn new(raw: &str) -> Result<Self, InvalidRecordError> {
        let normalized: String = raw
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if normalized.len() < MIN_LEN || normalized.len() > MAX_LEN {
            return Err(InvalidRecordError::Statute {
                raw: raw.to_string(),
                reason: format!(
                    "normalized code {normalized:?} must be {MIN_LEN}-{MAX_LEN} characters"
                ),
            });
        }

        Ok(Self(normalized))
    }

    /// The full normalized code.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The section: the first six characters of the code, or the whole
    /// code when it is shorter than six characters.
    ///
    /// Statute set membership for six-character base codes is tested
    /// against the section, so a qualified code such as `8130105` still
    /// matches a set containing `813010`.
    pub fn section(&self) -> &str {
        if self.0.len() > 6 {
            &self.0[..6]
        } else {
            &self.0
        }
    }

}

impl std::fmt::Display for StatuteCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation_and_uppercases() {
        let code = StatuteCode::new("475b.359").unwrap();
        assert_eq!(code.as_str(), "475B359");
    }

    #[test]
    fn test_subsection_in_parentheses() {
        let code = StatuteCode::new("813.010(5)").unwrap();
        assert_eq!(code.as_str(), "8130105");
        assert_eq!(code.section(), "813010");
    }

    #[test]
    fn test_section_of_short_code() {
        let code = StatuteCode::new("33.015").unwrap();
        assert_eq!(code.section(), "33015");
    }

    #[test]
    fn test_rejects_too_short() {
        assert!(StatuteCode::new("1.60").is_err());
        assert!(StatuteCode::new("").is_err());
    }

    #[test]
    fn test_rejects_too_long() {
        assert!(StatuteCode::new("163225000").is_err());
    }

    #[test]
    fn test_rejects_punctuation_only() {
        assert!(StatuteCode::new("...-()").is_err());
    }

    #[test]
    fn test_display_matches_as_str() {
        let code = StatuteCode::new("163.225").unwrap();
        assert_eq!(code.to_string(), code.as_str());
    }

    #[test]
    fn test_serde_roundtrip() {
        let code = StatuteCode::new("475B.359").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        let parsed: StatuteCode = serde_json::from_str(&json).unwrap();
        assert_eq!(code, parsed);
    }
}
