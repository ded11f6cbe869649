//! # Error Types
//!
//! Defines the error types used throughout the expungement stack. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Record validation errors carry the offending raw input so the
//!   case-management boundary can report exactly what it rejected.
//! - Classification and evaluation are total over well-formed records;
//!   they produce no errors of their own. A charge that matches no
//!   family is the `Unclassified` outcome, not a failure.

use thiserror::Error;

/// A charge record field that failed boundary validation.
///
/// These are rejected before classification. The classifier itself never
/// sees a malformed record, so it cannot silently misclassify one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidRecordError {
    /// The statute code is not a well-formed statute identifier.
    #[error("invalid statute code {raw:?}: {reason}")]
    Statute {
        /// The raw statute string as received.
        raw: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The severity label is not in the closed level vocabulary.
    #[error("unrecognized charge level {raw:?}")]
    Level {
        /// The raw level label as received.
        raw: String,
    },

    /// A disposition identifier outside the closed vocabulary.
    ///
    /// Only raised by the strict parser. Free-text rulings from the
    /// register go through the lenient keyword classifier instead, which
    /// maps the unmatched remainder to a needs-review status.
    #[error("unrecognized disposition {raw:?}")]
    Disposition {
        /// The raw disposition identifier as received.
        raw: String,
    },
}

/// Top-level error type for the expungement stack.
#[derive(Error, Debug)]
pub enum ExpungeError {
    /// A charge record failed boundary validation.
    #[error("invalid charge record: {0}")]
    InvalidRecord(#[from] InvalidRecordError),
}
