//! Settlement Planner
//!
//! Reduces a net-balance map to a list of point-to-point payments that, once
//! all applied, drive every balance to zero within tolerance.
//!
//! # Critical Invariants
//!
//! 1. **Zero-sum**: for a balance map summing to zero within tolerance,
//!    applying the full plan settles every participant
//! 2. **Determinism**: creditors and debtors are taken in the map's stable
//!    id-sorted order, never hash or insertion order
//! 3. **Positive amounts**: every emitted payment has `amount > 0`
//!
//! # Matching order
//!
//! The baseline contract matches the *first* remaining creditor with the
//! *first* remaining debtor ([`MatchStrategy::Fifo`]). That is simple and
//! deterministic but not guaranteed to hit the theoretical minimum transaction
//! count; [`MatchStrategy::LargestFirst`] repeatedly matches the largest
//! remaining pair instead, a drop-in variant with the same interface and the
//! same zero-sum guarantee.

use crate::balance::BalanceMap;
use crate::models::expense::ParticipantId;
use crate::models::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One proposed payment from a debtor to a creditor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementTransaction {
    /// Paying participant (negative net balance)
    pub from: ParticipantId,

    /// Receiving participant (positive net balance)
    pub to: ParticipantId,

    /// Payment amount, always positive (i64 cents)
    pub amount: Money,
}

/// Which creditor/debtor pair to match on each step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Match the first remaining creditor and debtor in id order
    #[default]
    Fifo,

    /// Match the largest remaining creditor and debtor (ties go to the
    /// smaller id); tends to produce fewer transactions
    LargestFirst,
}

/// Open position while the planner runs: a participant and what remains of
/// their absolute balance
#[derive(Debug, Clone)]
struct OpenPosition {
    id: ParticipantId,
    remaining: Money,
}

/// Plan settlement payments for a group.
///
/// Participants with a balance above tolerance become creditors, below
/// negative tolerance debtors; everyone else is already settled. Greedy
/// matching per `strategy` then pays debts down pairwise until one side is
/// exhausted. Residual entries (possible only when the input does not sum to
/// zero) are dropped, not reported: the aggregator's zero-sum invariant
/// guarantees both sides empty together.
///
/// Empty or all-settled input yields an empty plan.
///
/// # Example
/// ```
/// use splitledger_core::{plan_settlements, MatchStrategy, Money};
/// use std::collections::BTreeMap;
///
/// let balances = BTreeMap::from([
///     ("alice".to_string(), Money::from_cents(10_000)),
///     ("bob".to_string(), Money::from_cents(-6_000)),
///     ("carol".to_string(), Money::from_cents(-4_000)),
/// ]);
///
/// let plan = plan_settlements(&balances, MatchStrategy::Fifo);
/// assert_eq!(plan.len(), 2);
/// assert_eq!(plan[0].from, "bob");
/// assert_eq!(plan[0].to, "alice");
/// assert_eq!(plan[0].amount, Money::from_cents(6_000));
/// ```
pub fn plan_settlements(balances: &BalanceMap, strategy: MatchStrategy) -> Vec<SettlementTransaction> {
    let mut creditors: VecDeque<OpenPosition> = VecDeque::new();
    let mut debtors: VecDeque<OpenPosition> = VecDeque::new();

    // BTreeMap iteration is id-sorted, so both lists start in stable order.
    for (id, balance) in balances {
        if *balance > Money::TOLERANCE {
            creditors.push_back(OpenPosition {
                id: id.clone(),
                remaining: *balance,
            });
        } else if *balance < -Money::TOLERANCE {
            debtors.push_back(OpenPosition {
                id: id.clone(),
                remaining: balance.abs(),
            });
        }
    }

    let mut plan = Vec::new();

    while !creditors.is_empty() && !debtors.is_empty() {
        let (ci, di) = match strategy {
            MatchStrategy::Fifo => (0, 0),
            MatchStrategy::LargestFirst => (largest(&creditors), largest(&debtors)),
        };

        let payment = creditors[ci].remaining.min(debtors[di].remaining);
        plan.push(SettlementTransaction {
            from: debtors[di].id.clone(),
            to: creditors[ci].id.clone(),
            amount: payment,
        });

        creditors[ci].remaining -= payment;
        debtors[di].remaining -= payment;

        if creditors[ci].remaining < Money::TOLERANCE {
            let _ = creditors.remove(ci);
        }
        if debtors[di].remaining < Money::TOLERANCE {
            let _ = debtors.remove(di);
        }
    }

    plan
}

/// Index of the largest remaining position; the first (smallest-id) entry
/// wins ties because the scan uses a strict comparison.
fn largest(positions: &VecDeque<OpenPosition>) -> usize {
    let mut best = 0;
    for (idx, position) in positions.iter().enumerate().skip(1) {
        if position.remaining > positions[best].remaining {
            best = idx;
        }
    }
    best
}

/// Apply a settlement plan to a balance map.
///
/// Each payment raises the payer's balance and lowers the receiver's. Used by
/// tests and callers to verify that a plan settles the group.
pub fn apply_settlements(balances: &BalanceMap, plan: &[SettlementTransaction]) -> BalanceMap {
    let mut result = balances.clone();
    for tx in plan {
        *result.entry(tx.from.clone()).or_insert(Money::ZERO) += tx.amount;
        *result.entry(tx.to.clone()).or_insert(Money::ZERO) -= tx.amount;
    }
    result
}
