//! Balance Aggregator
//!
//! Reduces a group's full expense history to one net balance per participant:
//! positive means the participant is owed money, negative means they owe.
//!
//! Balances are always recomputed from the full history; there is no
//! incremental ledger. Output is a `BTreeMap` so iteration order is the stable
//! participant-id order, which the settlement planner relies on for
//! reproducible plans.

use crate::models::expense::{Expense, ExpenseSplit, ParticipantId};
use crate::models::money::Money;
use std::collections::BTreeMap;

/// Net balance per participant, id-sorted
pub type BalanceMap = BTreeMap<ParticipantId, Money>;

/// Compute net balances from expenses and their splits.
///
/// Credits each expense amount to its payer and debits each share from its
/// participant. Every ID that appears as a payer or split participant is
/// present in the output. Total function: never fails on well-formed input.
/// An expense with no matching splits simply credits the payer — a legitimate
/// transient state between expense creation and split persistence.
///
/// # Example
/// ```
/// use splitledger_core::{aggregate_balances, Expense, ExpenseSplit, Money};
///
/// let expense = Expense::new(
///     "trip".into(),
///     "taxi".into(),
///     Money::from_cents(3_000),
///     "alice".into(),
/// );
/// let splits = vec![
///     ExpenseSplit::new(expense.id().into(), "alice".into(), Money::from_cents(1_500)),
///     ExpenseSplit::new(expense.id().into(), "bob".into(), Money::from_cents(1_500)),
/// ];
///
/// let balances = aggregate_balances(&[expense], &splits);
/// assert_eq!(balances["alice"], Money::from_cents(1_500));
/// assert_eq!(balances["bob"], Money::from_cents(-1_500));
/// ```
pub fn aggregate_balances(expenses: &[Expense], splits: &[ExpenseSplit]) -> BalanceMap {
    let mut balances = BalanceMap::new();

    for expense in expenses {
        *balances
            .entry(expense.payer_id().to_string())
            .or_insert(Money::ZERO) += expense.amount();
    }

    for split in splits {
        *balances
            .entry(split.participant_id.clone())
            .or_insert(Money::ZERO) -= split.share_amount;
    }

    balances
}
