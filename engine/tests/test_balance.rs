//! Balance Aggregator tests
//!
//! Credits payers, debits split participants, never fails, and keeps the
//! group zero-sum for calculator-produced histories.

use chrono::Utc;
use splitledger_core::{
    aggregate_balances, compute_split, Expense, ExpenseSplit, Money, RemainderStrategy, SplitSpec,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn expense(id: &str, cents: i64, payer: &str) -> Expense {
    Expense::from_parts(
        id.to_string(),
        "group".to_string(),
        "test expense".to_string(),
        Money::from_cents(cents),
        payer.to_string(),
        Utc::now(),
    )
}

fn split(expense_id: &str, participant: &str, cents: i64) -> ExpenseSplit {
    ExpenseSplit::new(
        expense_id.to_string(),
        participant.to_string(),
        Money::from_cents(cents),
    )
}

// ============================================================================
// Aggregation
// ============================================================================

#[test]
fn test_payer_credited_participants_debited() {
    let expenses = vec![expense("e1", 9_000, "alice")];
    let splits = vec![
        split("e1", "alice", 3_000),
        split("e1", "bob", 3_000),
        split("e1", "carol", 3_000),
    ];

    let balances = aggregate_balances(&expenses, &splits);
    assert_eq!(balances["alice"], Money::from_cents(6_000));
    assert_eq!(balances["bob"], Money::from_cents(-3_000));
    assert_eq!(balances["carol"], Money::from_cents(-3_000));
}

#[test]
fn test_multiple_expenses_accumulate() {
    let expenses = vec![expense("e1", 6_000, "alice"), expense("e2", 4_000, "bob")];
    let splits = vec![
        split("e1", "alice", 3_000),
        split("e1", "bob", 3_000),
        split("e2", "alice", 2_000),
        split("e2", "bob", 2_000),
    ];

    let balances = aggregate_balances(&expenses, &splits);
    // alice: +6000 -3000 -2000 = +1000; bob: +4000 -3000 -2000 = -1000
    assert_eq!(balances["alice"], Money::from_cents(1_000));
    assert_eq!(balances["bob"], Money::from_cents(-1_000));
}

#[test]
fn test_participant_appearing_only_in_splits_is_included() {
    let expenses = vec![expense("e1", 1_000, "alice")];
    let splits = vec![split("e1", "dave", 1_000)];

    let balances = aggregate_balances(&expenses, &splits);
    assert_eq!(balances["dave"], Money::from_cents(-1_000));
}

#[test]
fn test_expense_without_splits_is_not_an_error() {
    // Transient state between expense creation and split persistence.
    let balances = aggregate_balances(&[expense("e1", 2_500, "alice")], &[]);
    assert_eq!(balances["alice"], Money::from_cents(2_500));
    assert_eq!(balances.len(), 1);
}

#[test]
fn test_empty_input_yields_empty_map() {
    assert!(aggregate_balances(&[], &[]).is_empty());
}

// ============================================================================
// Invariants
// ============================================================================

#[test]
fn test_idempotence_same_input_same_output() {
    let expenses = vec![expense("e1", 7_777, "alice"), expense("e2", 1_234, "bob")];
    let splits = vec![
        split("e1", "alice", 3_889),
        split("e1", "bob", 3_888),
        split("e2", "carol", 1_234),
    ];

    let first = aggregate_balances(&expenses, &splits);
    let second = aggregate_balances(&expenses, &splits);
    assert_eq!(first, second);
}

#[test]
fn test_calculator_produced_history_sums_to_zero() {
    let exp = expense("e1", 10_000, "alice");
    let shares = compute_split(
        exp.amount(),
        &SplitSpec::equal(["alice", "bob", "carol"]),
        RemainderStrategy::FirstEntry,
    )
    .unwrap();
    let splits: Vec<ExpenseSplit> = shares
        .into_iter()
        .map(|s| ExpenseSplit::new("e1".to_string(), s.participant_id, s.amount))
        .collect();

    let balances = aggregate_balances(&[exp], &splits);
    let total: Money = balances.values().copied().sum();
    assert!(total.is_settled(), "group should be zero-sum, got {total}");
}

#[test]
fn test_output_iterates_in_id_order() {
    let expenses = vec![
        expense("e1", 100, "zoe"),
        expense("e2", 100, "amy"),
        expense("e3", 100, "bea"),
    ];
    let balances = aggregate_balances(&expenses, &[]);
    let ids: Vec<&String> = balances.keys().collect();
    assert_eq!(ids, ["amy", "bea", "zoe"]);
}
