//! # Dispositions
//!
//! Defines the disposition of a charge: the legal outcome recorded in the
//! case register, plus the ruling date where one exists.
//!
//! Unlike statute codes and levels, an unrecognized ruling is **not** a
//! boundary error. Case registers contain free-text rulings that no closed
//! vocabulary can anticipate, so the unmatched remainder maps to
//! [`DispositionStatus::Unrecognized`] and flows through eligibility
//! evaluation as a needs-review outcome rather than being dropped.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::InvalidRecordError;

/// The legal outcome of a charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispositionStatus {
    /// Found or pleaded guilty.
    Convicted,
    /// Dismissed or acquitted.
    Dismissed,
    /// No complaint filed.
    NoComplaint,
    /// Resolved through a diversion program.
    Diverted,
    /// A ruling was recorded but is not in the known vocabulary.
    Unrecognized,
    /// No disposition row exists for the charge.
    Unknown,
}

impl DispositionStatus {
    /// Whether the charge was resolved without a conviction being entered.
    ///
    /// Diverted charges are excluded: diversion outcomes carry their own
    /// eligibility rules per charge type.
    pub fn is_dismissal(&self) -> bool {
        matches!(self, Self::Dismissed | Self::NoComplaint)
    }

    /// The canonical identifier for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Convicted => "CONVICTED",
            Self::Dismissed => "DISMISSED",
            Self::NoComplaint => "NO_COMPLAINT",
            Self::Diverted => "DIVERTED",
            Self::Unrecognized => "UNRECOGNIZED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for DispositionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DispositionStatus {
    type Err = InvalidRecordError;

    /// Strict parse from the canonical identifier.
    ///
    /// For collaborators that hold already-normalized disposition values
    /// and want outside-vocabulary input rejected rather than classified.
    /// Accepts the identifiers produced by
    /// [`DispositionStatus::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CONVICTED" => Ok(Self::Convicted),
            "DISMISSED" => Ok(Self::Dismissed),
            "NO_COMPLAINT" => Ok(Self::NoComplaint),
            "DIVERTED" => Ok(Self::Diverted),
            "UNRECOGNIZED" => Ok(Self::Unrecognized),
            "UNKNOWN" => Ok(Self::Unknown),
            other => Err(InvalidRecordError::Disposition {
                raw: other.to_string(),
            }),
        }
    }
}

/// A charge's disposition: status, ruling date, and the raw ruling text
/// it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disposition {
    /// The classified outcome.
    pub status: DispositionStatus,
    /// Date of the ruling, when the register records one.
    pub date: Option<NaiveDate>,
    /// The ruling text as exported. Empty for [`DispositionStatus::Unknown`].
    pub ruling: String,
}

impl Disposition {
    /// Construct a disposition from an already-classified status.
    pub fn new(status: DispositionStatus, date: Option<NaiveDate>) -> Self {
        Self {
            status,
            date,
            ruling: String::new(),
        }
    }

    /// Classify a raw ruling string from the case register.
    ///
    /// Matching is case-insensitive and keyword-based. Rulings that match
    /// no keyword become [`DispositionStatus::Unrecognized`]; an empty
    /// ruling becomes [`DispositionStatus::Unknown`].
    pub fn from_ruling(ruling: &str, date: Option<NaiveDate>) -> Self {
        let status = Self::classify_ruling(ruling);
        Self {
            status,
            date,
            ruling: ruling.to_string(),
        }
    }

    /// A disposition for a charge with no disposition row.
    pub fn unknown() -> Self {
        Self::new(DispositionStatus::Unknown, None)
    }

    fn classify_ruling(ruling: &str) -> DispositionStatus {
        let lowered = ruling.trim().to_lowercase();
        if lowered.is_empty() {
            DispositionStatus::Unknown
        } else if lowered.contains("convicted") || lowered.contains("guilty") {
            DispositionStatus::Convicted
        } else if lowered.contains("dismissed")
            || lowered.contains("dismissal")
            || lowered.contains("acquitted")
        {
            DispositionStatus::Dismissed
        } else if lowered.contains("no complaint") {
            DispositionStatus::NoComplaint
        } else if lowered.contains("diverted") || lowered.contains("diversion") {
            DispositionStatus::Diverted
        } else {
            DispositionStatus::Unrecognized
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convicted_rulings() {
        for ruling in ["Convicted", "Convicted - Failure to Appear", "Finding - Guilty"] {
            let d = Disposition::from_ruling(ruling, None);
            assert_eq!(d.status, DispositionStatus::Convicted, "ruling {ruling:?}");
        }
    }

    #[test]
    fn test_dismissed_rulings() {
        for ruling in ["Dismissed", "Acquitted", "Dismissal - Motion to Dismiss"] {
            let d = Disposition::from_ruling(ruling, None);
            assert_eq!(d.status, DispositionStatus::Dismissed, "ruling {ruling:?}");
        }
    }

    #[test]
    fn test_no_complaint_ruling() {
        let d = Disposition::from_ruling("No Complaint", None);
        assert_eq!(d.status, DispositionStatus::NoComplaint);
    }

    #[test]
    fn test_diverted_ruling() {
        let d = Disposition::from_ruling("Diverted", None);
        assert_eq!(d.status, DispositionStatus::Diverted);
    }

    #[test]
    fn test_unrecognized_ruling_is_preserved() {
        let d = Disposition::from_ruling("Transferred to Municipal Court", None);
        assert_eq!(d.status, DispositionStatus::Unrecognized);
        assert_eq!(d.ruling, "Transferred to Municipal Court");
    }

    #[test]
    fn test_empty_ruling_is_unknown() {
        let d = Disposition::from_ruling("   ", None);
        assert_eq!(d.status, DispositionStatus::Unknown);
    }

    #[test]
    fn test_is_dismissal() {
        assert!(DispositionStatus::Dismissed.is_dismissal());
        assert!(DispositionStatus::NoComplaint.is_dismissal());
        assert!(!DispositionStatus::Diverted.is_dismissal());
        assert!(!DispositionStatus::Convicted.is_dismissal());
    }

    #[test]
    fn test_ruling_date_is_kept() {
        let date = NaiveDate::from_ymd_opt(2019, 3, 14);
        let d = Disposition::from_ruling("Convicted", date);
        assert_eq!(d.date, date);
    }

    #[test]
    fn test_strict_parse_roundtrip() {
        for status in [
            DispositionStatus::Convicted,
            DispositionStatus::Dismissed,
            DispositionStatus::NoComplaint,
            DispositionStatus::Diverted,
            DispositionStatus::Unrecognized,
            DispositionStatus::Unknown,
        ] {
            let parsed: DispositionStatus = status.as_str().parse().unwrap();
            assert_eq!(status, parsed);
        }
    }

    #[test]
    fn test_strict_parse_rejects_unknown_identifier() {
        assert!("Convicted".parse::<DispositionStatus>().is_err());
        assert!("".parse::<DispositionStatus>().is_err());
    }
}
