//! Determinism properties over arbitrary well-formed records: analyzing
//! the same record twice yields the identical classification, status,
//! and reason, and every analysis produces a justification.

use proptest::prelude::*;

use expunge_analyze::analyze;
use expunge_core::{ChargeLevel, ChargeRecord, Disposition, StatuteCode};

/// Statute codes in the shapes the export produces: six-digit bases,
/// subsection-qualified codes, and alphanumeric chapters.
fn arb_statute() -> impl Strategy<Value = String> {
    prop_oneof![
        "[1-8][0-9]{5}",
        "[1-8][0-9]{5}[0-9]",
        "475B3[0-9]{2}",
    ]
}

fn arb_level() -> impl Strategy<Value = ChargeLevel> {
    prop::sample::select(ChargeLevel::all_levels().to_vec())
}

fn arb_ruling() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "Convicted",
        "Dismissed",
        "No Complaint",
        "Diverted",
        "Removed from Docket",
        "",
    ])
}

proptest! {
    /// Reclassifying the same record yields the same variant, status,
    /// and reason.
    #[test]
    fn analysis_is_idempotent(
        statute in arb_statute(),
        level in arb_level(),
        ruling in arb_ruling(),
    ) {
        let record = ChargeRecord::new(
            "Generic",
            StatuteCode::new(&statute).unwrap(),
            level,
            Disposition::from_ruling(ruling, None),
        );
        let first = analyze(record.clone());
        let second = analyze(record);
        prop_assert_eq!(first, second);
    }

    /// Every record gets a defined outcome with a non-empty
    /// justification; no input panics or produces an empty reason.
    #[test]
    fn every_analysis_is_justified(
        statute in arb_statute(),
        level in arb_level(),
        ruling in arb_ruling(),
    ) {
        let record = ChargeRecord::new(
            "Generic",
            StatuteCode::new(&statute).unwrap(),
            level,
            Disposition::from_ruling(ruling, None),
        );
        let charge = analyze(record);
        prop_assert!(!charge.expungement_result.type_eligibility.reason.is_empty());
    }
}
