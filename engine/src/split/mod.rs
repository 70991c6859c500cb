//! Split Calculator
//!
//! Turns `(total, split spec)` into per-participant shares that sum exactly to
//! the total, in cents.
//!
//! # Critical Invariants
//!
//! 1. **Sum invariant**: the returned shares always sum exactly to the total
//! 2. **Determinism**: identical input yields identical shares; the rounding
//!    remainder goes to a fixed anchor, never a random or max-value entry
//! 3. **Purity**: no side effects; validation failures leave nothing applied
//!
//! # Rounding correction
//!
//! Raw shares are rounded to the nearest cent independently, so their sum can
//! drift from the total by a few cents (equal/percentage modes) or up to the
//! accepted input tolerance (custom mode). The difference is reconciled per
//! [`RemainderStrategy`]:
//!
//! - [`RemainderStrategy::FirstEntry`] (default): the whole difference lands
//!   on the first entry in input order. Known edge case: when the difference
//!   exceeds that entry's raw share, the corrected share goes negative. This
//!   is intentional, documented behavior, not guarded against.
//! - [`RemainderStrategy::Striped`]: the difference is spread one cent at a
//!   time across the leading entries, cycling if needed.

use crate::models::expense::ParticipantId;
use crate::models::money::Money;
use crate::models::split::SplitSpec;
use std::collections::HashSet;
use thiserror::Error;

/// Percentage entries must sum to 100 within this tolerance
const PERCENT_SUM_TOLERANCE: f64 = 0.5;

/// Custom entries must sum to the total within this many cents (1.00)
const CUSTOM_SUM_TOLERANCE: Money = Money::from_cents(100);

/// Errors that can occur when computing a split
#[derive(Debug, Error, PartialEq)]
pub enum SplitError {
    #[error("split has no participants")]
    NoParticipants,

    #[error("total amount must be positive, got {total}")]
    NonPositiveTotal { total: Money },

    #[error("participant {participant_id} listed more than once")]
    DuplicateParticipant { participant_id: ParticipantId },

    #[error("invalid percent {percent} for participant {participant_id}")]
    InvalidPercent {
        participant_id: ParticipantId,
        percent: f64,
    },

    #[error("percentages sum to {sum}, expected 100")]
    PercentageSum { sum: f64 },

    #[error("custom shares sum to {actual}, expected {expected}")]
    CustomSum { expected: Money, actual: Money },
}

/// Where the rounding difference between the raw shares and the total lands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RemainderStrategy {
    /// Assign the whole difference to the first entry (original behavior)
    #[default]
    FirstEntry,

    /// Stripe the difference one cent at a time across the leading entries
    Striped,
}

/// One computed share, before it is attached to a persisted expense
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseShare {
    pub participant_id: ParticipantId,
    pub amount: Money,
}

/// Compute per-participant shares for one expense.
///
/// Pure function: validates the spec, computes raw per-entry shares, then
/// reconciles the rounding difference so the shares sum exactly to `total`.
/// Output order matches spec entry order.
///
/// # Errors
///
/// - [`SplitError::NoParticipants`] for an empty entry list
/// - [`SplitError::NonPositiveTotal`] when `total <= 0`
/// - [`SplitError::DuplicateParticipant`] when an ID appears twice
/// - [`SplitError::InvalidPercent`] for a non-finite or out-of-range percent
/// - [`SplitError::PercentageSum`] when percents miss 100 by more than 0.5
/// - [`SplitError::CustomSum`] when custom shares miss the total by more
///   than 1.00
///
/// # Example
/// ```
/// use splitledger_core::{compute_split, Money, RemainderStrategy, SplitSpec};
///
/// let shares = compute_split(
///     Money::from_cents(10_000),
///     &SplitSpec::equal(["alice", "bob", "carol"]),
///     RemainderStrategy::FirstEntry,
/// )
/// .unwrap();
///
/// // 100.00 / 3 = 33.33 each; the leftover cent goes to the first entry.
/// assert_eq!(shares[0].amount, Money::from_cents(3334));
/// assert_eq!(shares[1].amount, Money::from_cents(3333));
/// assert_eq!(shares[2].amount, Money::from_cents(3333));
/// ```
pub fn compute_split(
    total: Money,
    spec: &SplitSpec,
    strategy: RemainderStrategy,
) -> Result<Vec<ExpenseShare>, SplitError> {
    if spec.is_empty() {
        return Err(SplitError::NoParticipants);
    }
    if !total.is_positive() {
        return Err(SplitError::NonPositiveTotal { total });
    }

    let mut seen = HashSet::new();
    for id in spec.participant_ids() {
        if !seen.insert(id.as_str()) {
            return Err(SplitError::DuplicateParticipant {
                participant_id: id.clone(),
            });
        }
    }

    let mut shares = raw_shares(total, spec)?;

    let raw_sum: Money = shares.iter().map(|s| s.amount).sum();
    let difference = total - raw_sum;
    if !difference.is_zero() {
        apply_remainder(&mut shares, difference, strategy);
    }

    debug_assert_eq!(shares.iter().map(|s| s.amount).sum::<Money>(), total);
    Ok(shares)
}

/// Raw per-entry shares, rounded to the nearest cent, before reconciliation
fn raw_shares(total: Money, spec: &SplitSpec) -> Result<Vec<ExpenseShare>, SplitError> {
    match spec {
        SplitSpec::Equal { participants } => {
            let share = total.divided_by(participants.len() as i64);
            Ok(participants
                .iter()
                .map(|id| ExpenseShare {
                    participant_id: id.clone(),
                    amount: share,
                })
                .collect())
        }

        SplitSpec::Percentage { entries } => {
            for entry in entries {
                if !entry.percent.is_finite() || entry.percent < 0.0 || entry.percent > 100.0 {
                    return Err(SplitError::InvalidPercent {
                        participant_id: entry.participant_id.clone(),
                        percent: entry.percent,
                    });
                }
            }
            let sum: f64 = entries.iter().map(|e| e.percent).sum();
            if (sum - 100.0).abs() > PERCENT_SUM_TOLERANCE {
                return Err(SplitError::PercentageSum { sum });
            }
            Ok(entries
                .iter()
                .map(|e| ExpenseShare {
                    participant_id: e.participant_id.clone(),
                    amount: total.percent_of(e.percent),
                })
                .collect())
        }

        SplitSpec::Custom { entries } => {
            let actual: Money = entries.iter().map(|e| e.amount).sum();
            if (actual - total).abs() > CUSTOM_SUM_TOLERANCE {
                return Err(SplitError::CustomSum {
                    expected: total,
                    actual,
                });
            }
            Ok(entries
                .iter()
                .map(|e| ExpenseShare {
                    participant_id: e.participant_id.clone(),
                    amount: e.amount,
                })
                .collect())
        }
    }
}

/// Reconcile the rounding difference onto the computed shares
fn apply_remainder(shares: &mut [ExpenseShare], difference: Money, strategy: RemainderStrategy) {
    match strategy {
        RemainderStrategy::FirstEntry => {
            shares[0].amount += difference;
        }
        RemainderStrategy::Striped => {
            let step = Money::from_cents(difference.signum());
            let mut remaining = difference;
            let mut idx = 0;
            while !remaining.is_zero() {
                shares[idx % shares.len()].amount += step;
                remaining -= step;
                idx += 1;
            }
        }
    }
}
