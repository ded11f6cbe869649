//! # expunge-rules — Classification & Type Eligibility
//!
//! Implements the rule core of the expungement stack:
//!
//! - **Registry** (`registry.rs`): per-family statute sets, including the
//!   subsection-qualified entries used to detect ambiguously truncated
//!   codes. Built once, read-only thereafter.
//!
//! - **Charge-type families** (`charge_types/`): one module per family
//!   carrying its statute tables, match predicate, reason-string
//!   constants, and eligibility rule.
//!
//! - **Classifier** (`classifier.rs`): walks the explicit precedence
//!   list and returns the single variant a record belongs to, with a
//!   confidence flag for subsection-ambiguous matches.
//!
//! - **Evaluation** (`evaluation.rs`): maps a classification plus the
//!   record's disposition to a `TypeEligibility`, dispatching to the
//!   family rules with an exhaustive match.
//!
//! ## Crate Policy
//!
//! - Classification and evaluation are pure functions over an immutable
//!   record and the static registry. No I/O, no interior mutability.
//! - Reason strings are named constants. Nothing in this crate formats
//!   a statute citation at runtime.

pub mod charge_types;
pub mod classifier;
pub mod evaluation;
pub mod registry;

pub use classifier::{ChargeClassifier, Classification, MatchConfidence};
pub use evaluation::type_eligibility;
pub use registry::{Registry, SetMatch, StatuteSet};
