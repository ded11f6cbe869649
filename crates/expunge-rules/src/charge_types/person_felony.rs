//! # Person Felony, Class B
//!
//! Class B felonies that the sentencing guidelines list as person
//! crimes but that no more specific family claims. Convictions are
//! ineligible under 137.225(5)(a).
//!
//! This family carries the subsection-qualified entries that drive the
//! missing-subsection review path: several offenses are person crimes
//! only under one subsection of their statute, and the case register
//! sometimes exports the bare base code. Such a record is still an
//! instance of this family, but its eligibility cannot be decided
//! without the subsection, so it is surfaced for review.
//!
//! Set membership mirrors the person-crime listing of the sentencing
//! guidelines; enumerated person crimes with their own family (for
//! example Kidnapping II or Robbery II) are deliberately absent here.

use expunge_core::{ChargeLevel, ChargeRecord, TypeEligibility};

use crate::classifier::MatchConfidence;
use crate::evaluation;
use crate::registry::{Registry, SetMatch};

/// Class B person felonies with complete statute codes.
pub const STATUTES: &[&str] = &[
    "97981",  // Purchase or Sale of a Body Part for Transplantation or Therapy
    "97982",  // Alteration of a Document of Gift
    "163207", // Female Genital Mutilation
    "163264", // Subjecting Another Person to Involuntary Servitude I
    "163266", // Trafficking in Persons
    "163537", // Buying or Selling a Person Under 18 Years of Age
    "164075", // Theft by Extortion
    "166087", // Abuse of Corpse I
    "166275", // Inmate in Possession of Weapon
    "167057", // Luring a Minor
];

/// Person felonies only under the cited subsection. A bare base code is
/// an ambiguous match.
pub const STATUTES_WITH_SUBSECTION: &[&str] = &[
    "1631603", // Assault in the Fourth Degree, felony under 163.160(3)
    "1631874", // Strangulation, felony under 163.187(4)
];

/// Conviction outcome.
pub const TYPE_INELIGIBLE: &str = "Ineligible under 137.225(5)(a)";

/// Missing-subsection outcome.
pub const MISSING_SUBSECTION: &str = "OECI may be missing a statute subsection which would make \
this charge a person crime, and thus ineligible under 137.225(5)(a)";

/// The level filter is a hard filter: only Class B felonies can belong
/// to this family, whatever their statute.
pub(crate) fn matches(record: &ChargeRecord, registry: &Registry) -> Option<MatchConfidence> {
    if record.level != ChargeLevel::FelonyClassB {
        return None;
    }
    match registry.person_felony_class_b.lookup(&record.statute) {
        SetMatch::Exact => Some(MatchConfidence::Definite),
        SetMatch::MissingSubsection => Some(MatchConfidence::MissingSubsection),
        SetMatch::None => None,
    }
}

pub(crate) fn type_eligibility(
    record: &ChargeRecord,
    confidence: MatchConfidence,
) -> TypeEligibility {
    if confidence == MatchConfidence::MissingSubsection {
        return TypeEligibility::needs_more_analysis(MISSING_SUBSECTION);
    }
    evaluation::standard_rule(
        &record.disposition,
        TypeEligibility::ineligible(TYPE_INELIGIBLE),
    )
}
