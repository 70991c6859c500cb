//! Group ledger service
//!
//! Composes the three pure components over an [`ExpenseStore`]: the split
//! calculator turns a recorded expense into persisted shares, and a summary
//! request replays the group's full history through the balance aggregator
//! and the settlement planner. Nothing is cached; balances are recomputed
//! from scratch on every request.
//!
//! Validation always runs before persistence: a rejected split leaves the
//! store untouched. Store failures propagate unchanged.

use crate::balance::{aggregate_balances, BalanceMap};
use crate::models::expense::{Expense, ExpenseId, ExpenseSplit};
use crate::models::money::Money;
use crate::models::split::SplitSpec;
use crate::settlement::{plan_settlements, MatchStrategy, SettlementTransaction};
use crate::split::{compute_split, ExpenseShare, RemainderStrategy, SplitError};
use crate::store::{ExpenseStore, StoreError};
use thiserror::Error;
use tracing::{debug, info};

/// Errors surfaced by ledger operations
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Split(#[from] SplitError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Derived view of a group: net balances plus the payments that would settle
/// them
#[derive(Debug, Clone)]
pub struct GroupSummary {
    pub balances: BalanceMap,
    pub settlements: Vec<SettlementTransaction>,
}

/// Expense ledger for a set of groups, generic over the storage backend
#[derive(Debug)]
pub struct GroupLedger<S: ExpenseStore> {
    store: S,
    remainder: RemainderStrategy,
    matching: MatchStrategy,
}

impl<S: ExpenseStore> GroupLedger<S> {
    /// Ledger with default strategies (first-entry remainder, FIFO matching)
    pub fn new(store: S) -> Self {
        Self::with_strategies(store, RemainderStrategy::default(), MatchStrategy::default())
    }

    pub fn with_strategies(
        store: S,
        remainder: RemainderStrategy,
        matching: MatchStrategy,
    ) -> Self {
        Self {
            store,
            remainder,
            matching,
        }
    }

    /// Storage backend (read access, e.g. for snapshots)
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the ledger and return the backend
    pub fn into_store(self) -> S {
        self.store
    }

    /// Record a new expense and its computed splits.
    ///
    /// Runs the split calculator first; a validation failure aborts before
    /// anything is persisted. Returns the stored expense.
    pub fn add_expense(
        &mut self,
        group_id: &str,
        description: &str,
        total: Money,
        payer_id: &str,
        spec: &SplitSpec,
    ) -> Result<Expense, LedgerError> {
        let shares = compute_split(total, spec, self.remainder)?;

        let expense = Expense::new(
            group_id.to_string(),
            description.to_string(),
            total,
            payer_id.to_string(),
        );
        let splits = attach_shares(expense.id(), shares);

        info!(
            expense_id = expense.id(),
            group_id,
            payer_id,
            amount = %total,
            participants = splits.len(),
            "expense recorded"
        );

        self.store
            .persist_expense_and_splits(expense.clone(), splits)?;
        Ok(expense)
    }

    /// Edit an expense's amount and description, regenerating its splits.
    pub fn update_expense(
        &mut self,
        expense_id: &str,
        new_total: Money,
        new_description: &str,
        spec: &SplitSpec,
    ) -> Result<(), LedgerError> {
        let shares = compute_split(new_total, spec, self.remainder)?;

        self.store
            .update_expense(expense_id, new_total, new_description)?;
        self.store
            .replace_splits(expense_id, attach_shares(expense_id, shares))?;

        info!(expense_id, amount = %new_total, "expense reshuffled");
        Ok(())
    }

    /// Remove an expense and its splits.
    pub fn delete_expense(&mut self, expense_id: &str) -> Result<(), LedgerError> {
        self.store.delete_expense(expense_id)?;
        info!(expense_id, "expense deleted");
        Ok(())
    }

    /// Record a settle-up payment between two participants.
    ///
    /// Stored as a regular expense paid by `from` whose single share is
    /// assigned entirely to `to`, so the next aggregation nets it out against
    /// the outstanding balances. Rejects non-positive amounts.
    pub fn record_settlement(
        &mut self,
        group_id: &str,
        from: &str,
        to: &str,
        amount: Money,
    ) -> Result<Expense, LedgerError> {
        let description = format!("Settlement: {from} to {to}");
        let spec = SplitSpec::custom([(to, amount)]);
        self.add_expense(group_id, &description, amount, from, &spec)
    }

    /// Net balances and settlement plan for a group, recomputed from the full
    /// expense history.
    pub fn group_summary(&self, group_id: &str) -> Result<GroupSummary, LedgerError> {
        let expenses = self.store.fetch_expenses(group_id)?;
        let expense_ids: Vec<ExpenseId> = expenses.iter().map(|e| e.id().to_string()).collect();
        let splits = self.store.fetch_splits(&expense_ids)?;

        let balances = aggregate_balances(&expenses, &splits);
        let settlements = plan_settlements(&balances, self.matching);

        debug!(
            group_id,
            expenses = expenses.len(),
            splits = splits.len(),
            participants = balances.len(),
            settlements = settlements.len(),
            "group summary recomputed"
        );

        Ok(GroupSummary {
            balances,
            settlements,
        })
    }
}

/// Turn calculator output into split records for a persisted expense
fn attach_shares(expense_id: &str, shares: Vec<ExpenseShare>) -> Vec<ExpenseSplit> {
    shares
        .into_iter()
        .map(|share| ExpenseSplit::new(expense_id.to_string(), share.participant_id, share.amount))
        .collect()
}
