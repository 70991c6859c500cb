//! Split Calculator tests
//!
//! The sum invariant (shares sum exactly to the total), the three split
//! modes, the deterministic rounding anchor, and every validation failure.

use splitledger_core::{compute_split, Money, RemainderStrategy, SplitError, SplitSpec};

// ============================================================================
// Test Helpers
// ============================================================================

fn money(s: &str) -> Money {
    s.parse().unwrap()
}

fn share_sum(shares: &[splitledger_core::ExpenseShare]) -> Money {
    shares.iter().map(|s| s.amount).sum()
}

// ============================================================================
// Equal mode
// ============================================================================

#[test]
fn test_equal_split_of_100_among_three() {
    let shares = compute_split(
        money("100.00"),
        &SplitSpec::equal(["A", "B", "C"]),
        RemainderStrategy::FirstEntry,
    )
    .unwrap();

    // Remainder cent goes to the first entry in input order.
    assert_eq!(shares[0].participant_id, "A");
    assert_eq!(shares[0].amount, money("33.34"));
    assert_eq!(shares[1].amount, money("33.33"));
    assert_eq!(shares[2].amount, money("33.33"));
    assert_eq!(share_sum(&shares), money("100.00"));
}

#[test]
fn test_equal_split_exact_division_needs_no_correction() {
    let shares = compute_split(
        money("90.00"),
        &SplitSpec::equal(["A", "B", "C"]),
        RemainderStrategy::FirstEntry,
    )
    .unwrap();
    assert!(shares.iter().all(|s| s.amount == money("30.00")));
}

#[test]
fn test_equal_split_single_participant_gets_everything() {
    let shares = compute_split(
        money("42.37"),
        &SplitSpec::equal(["A"]),
        RemainderStrategy::FirstEntry,
    )
    .unwrap();
    assert_eq!(shares.len(), 1);
    assert_eq!(shares[0].amount, money("42.37"));
}

#[test]
fn test_equal_split_anchor_is_input_order_not_id_order() {
    let shares = compute_split(
        money("100.00"),
        &SplitSpec::equal(["zoe", "amy", "bea"]),
        RemainderStrategy::FirstEntry,
    )
    .unwrap();
    // "zoe" is first in input order and gets the extra cent.
    assert_eq!(shares[0].participant_id, "zoe");
    assert_eq!(shares[0].amount, money("33.34"));
}

// ============================================================================
// Percentage mode
// ============================================================================

#[test]
fn test_percentage_split_60_40() {
    let shares = compute_split(
        money("500.00"),
        &SplitSpec::percentage([("A", 60.0), ("B", 40.0)]),
        RemainderStrategy::FirstEntry,
    )
    .unwrap();
    assert_eq!(shares[0].amount, money("300.00"));
    assert_eq!(shares[1].amount, money("200.00"));
}

#[test]
fn test_percentage_rounding_lands_on_first_entry() {
    // 33.33% of 100.00 = 33.33 each, leaving one cent for the anchor.
    let shares = compute_split(
        money("100.00"),
        &SplitSpec::percentage([("A", 33.33), ("B", 33.33), ("C", 33.34)]),
        RemainderStrategy::FirstEntry,
    )
    .unwrap();
    assert_eq!(share_sum(&shares), money("100.00"));
    assert_eq!(shares[2].amount, money("33.34"));
}

#[test]
fn test_percentage_sum_within_half_percent_accepted() {
    let shares = compute_split(
        money("100.00"),
        &SplitSpec::percentage([("A", 50.2), ("B", 50.1)]),
        RemainderStrategy::FirstEntry,
    )
    .unwrap();
    assert_eq!(share_sum(&shares), money("100.00"));
}

#[test]
fn test_percentage_sum_outside_tolerance_rejected() {
    let err = compute_split(
        money("100.00"),
        &SplitSpec::percentage([("A", 60.0), ("B", 30.0)]),
        RemainderStrategy::FirstEntry,
    )
    .unwrap_err();
    assert_eq!(err, SplitError::PercentageSum { sum: 90.0 });
}

#[test]
fn test_percentage_rejects_negative_and_non_finite() {
    for percent in [-5.0, f64::NAN, f64::INFINITY, 150.0] {
        let result = compute_split(
            money("100.00"),
            &SplitSpec::percentage([("A", percent), ("B", 100.0 - percent)]),
            RemainderStrategy::FirstEntry,
        );
        assert!(
            matches!(result, Err(SplitError::InvalidPercent { .. })),
            "accepted percent {percent}"
        );
    }
}

// ============================================================================
// Custom mode
// ============================================================================

#[test]
fn test_custom_split_exact_amounts() {
    let shares = compute_split(
        money("75.50"),
        &SplitSpec::custom([("A", money("50.00")), ("B", money("25.50"))]),
        RemainderStrategy::FirstEntry,
    )
    .unwrap();
    assert_eq!(shares[0].amount, money("50.00"));
    assert_eq!(shares[1].amount, money("25.50"));
}

#[test]
fn test_custom_small_deviation_redistributed_to_anchor() {
    // Off by 40 cents: inside tolerance, anchor absorbs it.
    let shares = compute_split(
        money("100.00"),
        &SplitSpec::custom([("A", money("50.00")), ("B", money("49.60"))]),
        RemainderStrategy::FirstEntry,
    )
    .unwrap();
    assert_eq!(shares[0].amount, money("50.40"));
    assert_eq!(share_sum(&shares), money("100.00"));
}

#[test]
fn test_custom_deviation_beyond_one_unit_rejected() {
    let err = compute_split(
        money("100.00"),
        &SplitSpec::custom([("A", money("50.00")), ("B", money("48.00"))]),
        RemainderStrategy::FirstEntry,
    )
    .unwrap_err();
    assert_eq!(
        err,
        SplitError::CustomSum {
            expected: money("100.00"),
            actual: money("98.00"),
        }
    );
}

#[test]
fn test_custom_deviation_of_exactly_one_unit_accepted() {
    let shares = compute_split(
        money("100.00"),
        &SplitSpec::custom([("A", money("50.00")), ("B", money("49.00"))]),
        RemainderStrategy::FirstEntry,
    )
    .unwrap();
    assert_eq!(shares[0].amount, money("51.00"));
}

// ============================================================================
// Remainder strategies
// ============================================================================

#[test]
fn test_striped_strategy_spreads_cents_across_leading_entries() {
    // 100.00 / 7 = 14.29 rounded, raw sum 100.03, difference -0.03.
    let shares = compute_split(
        money("100.00"),
        &SplitSpec::equal(["A", "B", "C", "D", "E", "F", "G"]),
        RemainderStrategy::Striped,
    )
    .unwrap();
    assert_eq!(share_sum(&shares), money("100.00"));
    assert_eq!(shares[0].amount, money("14.28"));
    assert_eq!(shares[1].amount, money("14.28"));
    assert_eq!(shares[2].amount, money("14.28"));
    assert_eq!(shares[3].amount, money("14.29"));
}

#[test]
fn test_strategies_agree_when_no_correction_needed() {
    let spec = SplitSpec::equal(["A", "B"]);
    let anchored =
        compute_split(money("50.00"), &spec, RemainderStrategy::FirstEntry).unwrap();
    let striped = compute_split(money("50.00"), &spec, RemainderStrategy::Striped).unwrap();
    assert_eq!(anchored, striped);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_empty_entry_list_rejected() {
    let err = compute_split(
        money("10.00"),
        &SplitSpec::equal(Vec::<String>::new()),
        RemainderStrategy::FirstEntry,
    )
    .unwrap_err();
    assert_eq!(err, SplitError::NoParticipants);
}

#[test]
fn test_non_positive_total_rejected() {
    for cents in [0, -100] {
        let err = compute_split(
            Money::from_cents(cents),
            &SplitSpec::equal(["A", "B"]),
            RemainderStrategy::FirstEntry,
        )
        .unwrap_err();
        assert!(matches!(err, SplitError::NonPositiveTotal { .. }));
    }
}

#[test]
fn test_duplicate_participant_rejected() {
    let err = compute_split(
        money("10.00"),
        &SplitSpec::equal(["A", "B", "A"]),
        RemainderStrategy::FirstEntry,
    )
    .unwrap_err();
    assert_eq!(
        err,
        SplitError::DuplicateParticipant {
            participant_id: "A".to_string()
        }
    );
}
