//! # Charge-Type Families
//!
//! One module per charge-type family. Each module owns its statute
//! tables, its match predicate, its reason-string constants, and its
//! eligibility rule, so the whole of a family's law lives in one file.
//!
//! Match predicates apply the family's level filter before any statute
//! set lookup: a record whose level fails the filter does not match the
//! family even when its statute is a member of the family's sets.

pub mod contempt_of_court;
pub mod criminal_forfeiture;
pub mod duii;
pub mod fare_violation;
pub mod felony_class_a;
pub mod felony_class_b;
pub mod felony_class_c;
pub mod marijuana;
pub mod misdemeanor;
pub mod parking_ticket;
pub mod person_crime;
pub mod person_felony;
pub mod severe_charge;
pub mod sex_crime;
pub mod traffic;
pub mod unclassified;
pub mod violation;
