//! Expense and split records
//!
//! An `Expense` is one recorded payment made on behalf of a group; an
//! `ExpenseSplit` attributes a portion of that payment to one participant.
//! Both are immutable input records once created: the persistence layer owns
//! their lifecycle, the engine only reads them back when aggregating balances.
//!
//! CRITICAL: All money values are i64 cents ([`Money`]).

use crate::models::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Participant identifier, assigned by the surrounding application
pub type ParticipantId = String;

/// Group identifier, assigned by the surrounding application
pub type GroupId = String;

/// Expense identifier (UUID v4, assigned at creation)
pub type ExpenseId = String;

/// One recorded group expense
///
/// # Example
/// ```
/// use splitledger_core::{Expense, Money};
///
/// let expense = Expense::new(
///     "trip".to_string(),
///     "dinner".to_string(),
///     Money::from_cents(10_000),
///     "alice".to_string(),
/// );
/// assert_eq!(expense.amount(), Money::from_cents(10_000));
/// assert_eq!(expense.payer_id(), "alice");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique expense identifier (UUID v4)
    id: ExpenseId,

    /// Group this expense belongs to
    group_id: GroupId,

    /// Free-form description ("dinner", "Settlement: bob to alice", ...)
    description: String,

    /// Total amount paid (i64 cents)
    amount: Money,

    /// Participant who fronted the payment
    payer_id: ParticipantId,

    /// Creation timestamp (UTC)
    created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense with a fresh UUID and the current timestamp
    pub fn new(
        group_id: GroupId,
        description: String,
        amount: Money,
        payer_id: ParticipantId,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            group_id,
            description,
            amount,
            payer_id,
            created_at: Utc::now(),
        }
    }

    /// Rebuild an expense from stored fields (snapshot restoration, fixtures)
    pub fn from_parts(
        id: ExpenseId,
        group_id: GroupId,
        description: String,
        amount: Money,
        payer_id: ParticipantId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            group_id,
            description,
            amount,
            payer_id,
            created_at,
        }
    }

    /// Expense ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Group ID
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Total amount (i64 cents)
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Payer participant ID
    pub fn payer_id(&self) -> &str {
        &self.payer_id
    }

    /// Creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Apply an edit: replace amount and description, keep identity.
    ///
    /// Used by the store when an expense is updated; the caller is expected to
    /// regenerate the splits afterwards so the sum invariant holds again.
    pub(crate) fn apply_update(&mut self, amount: Money, description: String) {
        self.amount = amount;
        self.description = description;
    }
}

/// One participant's share of one expense
///
/// Invariant (guaranteed by the split calculator, checked by tests): the
/// shares of an expense sum exactly to the expense amount, in cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSplit {
    /// Expense this share belongs to
    pub expense_id: ExpenseId,

    /// Participant owing this share
    pub participant_id: ParticipantId,

    /// Share amount (i64 cents; can be negative in a documented rounding
    /// edge case, see the split calculator)
    pub share_amount: Money,
}

impl ExpenseSplit {
    pub fn new(expense_id: ExpenseId, participant_id: ParticipantId, share_amount: Money) -> Self {
        Self {
            expense_id,
            participant_id,
            share_amount,
        }
    }
}
