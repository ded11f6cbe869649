//! # expunge-core — Foundational Types for the Expungement Stack
//!
//! This crate is the bedrock of the expungement analysis stack. It defines
//! the domain primitives that the classification and eligibility crates
//! operate on. Every other crate in the workspace depends on `expunge-core`;
//! it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `StatuteCode` is a
//!    validated newtype with normalization at construction. No bare strings
//!    for statute identifiers.
//!
//! 2. **Single `ChargeTypeVariant` enum.** One definition of the closed
//!    classification outcome set, exhaustive `match` everywhere. Adding a
//!    charge type forces every consumer to handle it.
//!
//! 3. **Closed vocabularies reject at the boundary.** `ChargeLevel` parsing
//!    fails on unrecognized labels; there is no "unknown level" value that
//!    could silently slip past a match predicate.
//!
//! 4. **Immutable inputs.** A `ChargeRecord` cannot be mutated after
//!    construction, so reclassifying the same record always yields the
//!    same result.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `expunge-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod charge;
pub mod disposition;
pub mod eligibility;
pub mod error;
pub mod level;
pub mod statute;
pub mod variant;

// Re-export primary types for ergonomic imports.
pub use charge::ChargeRecord;
pub use disposition::{Disposition, DispositionStatus};
pub use eligibility::{EligibilityStatus, ExpungementResult, TypeEligibility};
pub use error::{ExpungeError, InvalidRecordError};
pub use level::ChargeLevel;
pub use statute::StatuteCode;
pub use variant::{ChargeTypeVariant, UnknownChargeType, CHARGE_TYPE_COUNT};
