//! # Statute Set Registry
//!
//! Holds, per charge-type family, the canonical set of statute codes that
//! define membership, plus the subset that is only a true match when a
//! specific subsection digit is present.
//!
//! The registry is compiled-in domain data. It is constructed once and
//! never mutated; lookups are average O(1) set-membership tests, so the
//! registry can be shared across threads without synchronization.
//!
//! ## Subsection disambiguation
//!
//! Case-management exports sometimes drop the subsection digit from a
//! qualified code: `1631874` arrives as `163187`. A bare code equal to a
//! qualified entry's base cannot be confirmed or ruled out, so the lookup
//! reports [`SetMatch::MissingSubsection`] and the eligibility layer
//! surfaces the charge for human review. A code carrying a *different*
//! subsection digit on the same base is affirmatively not the qualifying
//! offense and does not match at all.

use std::collections::HashSet;
use std::sync::OnceLock;

use expunge_core::StatuteCode;

use crate::charge_types::{
    contempt_of_court, criminal_forfeiture, duii, marijuana, parking_ticket, person_crime,
    person_felony, severe_charge, sex_crime,
};

/// Outcome of a statute set membership test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetMatch {
    /// The code (or its six-character section) is a member.
    Exact,
    /// The code equals a subsection-qualified entry's base. The export
    /// may have truncated the qualifying digit; membership cannot be
    /// confirmed.
    MissingSubsection,
    /// Not a member.
    None,
}

/// An immutable set of statute codes defining one family's membership.
#[derive(Debug, Clone)]
pub struct StatuteSet {
    /// Complete codes. Membership is tested against the full code and
    /// against its six-character section.
    statutes: HashSet<&'static str>,
    /// Subsection-qualified entries: base code plus the qualifying digit.
    qualified: HashSet<&'static str>,
    /// The qualified entries with their final digit removed.
    qualified_bases: HashSet<String>,
}

impl StatuteSet {
    /// Build a set from static statute tables.
    pub fn new(
        statutes: &'static [&'static str],
        statutes_with_subsection: &'static [&'static str],
    ) -> Self {
        let qualified: HashSet<&'static str> =
            statutes_with_subsection.iter().copied().collect();
        let qualified_bases = qualified
            .iter()
            .map(|entry| entry[..entry.len() - 1].to_string())
            .collect();
        Self {
            statutes: statutes.iter().copied().collect(),
            qualified,
            qualified_bases,
        }
    }

    /// A set with no subsection-qualified entries.
    pub fn plain(statutes: &'static [&'static str]) -> Self {
        Self::new(statutes, &[])
    }

    /// Test a code for membership.
    pub fn lookup(&self, code: &StatuteCode) -> SetMatch {
        let full = code.as_str();
        if self.statutes.contains(full)
            || self.statutes.contains(code.section())
            || self.qualified.contains(full)
        {
            SetMatch::Exact
        } else if self.qualified_bases.contains(full) {
            SetMatch::MissingSubsection
        } else {
            SetMatch::None
        }
    }

    /// Whether the code is a member, exactly or ambiguously.
    pub fn contains(&self, code: &StatuteCode) -> bool {
        self.lookup(code) != SetMatch::None
    }
}

/// The statute sets for every statute-driven charge-type family.
///
/// Residual families (classification by level alone) and chapter-range
/// families (the vehicle code) have no entry here; their predicates live
/// entirely in their family modules.
#[derive(Debug, Clone)]
pub struct Registry {
    pub contempt_of_court: StatuteSet,
    pub parking_ticket: StatuteSet,
    pub criminal_forfeiture: StatuteSet,
    pub duii: StatuteSet,
    pub marijuana_ineligible: StatuteSet,
    pub marijuana_eligible: StatuteSet,
    pub severe_charge: StatuteSet,
    pub sex_crime: StatuteSet,
    pub person_crime: StatuteSet,
    pub person_felony_class_b: StatuteSet,
}

impl Registry {
    /// Build the registry from the family statute tables.
    pub fn new() -> Self {
        Self {
            contempt_of_court: StatuteSet::plain(contempt_of_court::STATUTES),
            parking_ticket: StatuteSet::plain(parking_ticket::STATUTES),
            criminal_forfeiture: StatuteSet::plain(criminal_forfeiture::STATUTES),
            duii: StatuteSet::plain(duii::STATUTES),
            marijuana_ineligible: StatuteSet::new(
                marijuana::INELIGIBLE_STATUTES,
                marijuana::INELIGIBLE_STATUTES_WITH_SUBSECTION,
            ),
            marijuana_eligible: StatuteSet::plain(marijuana::ELIGIBLE_STATUTES),
            severe_charge: StatuteSet::plain(severe_charge::STATUTES),
            sex_crime: StatuteSet::plain(sex_crime::STATUTES),
            person_crime: StatuteSet::plain(person_crime::STATUTES),
            person_felony_class_b: StatuteSet::new(
                person_felony::STATUTES,
                person_felony::STATUTES_WITH_SUBSECTION,
            ),
        }
    }

    /// The process-wide registry instance.
    ///
    /// Built on first use; read-only thereafter, so concurrent readers
    /// need no locking.
    pub fn shared() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(Registry::new)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
