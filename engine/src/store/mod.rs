//! Collaborator seam to the persistence layer
//!
//! The engine itself never does I/O. Whatever stores expenses — a database, a
//! remote API, the in-memory reference store — implements [`ExpenseStore`] and
//! hands the engine already-resolved records. Backend failures pass through
//! unchanged ([`StoreError::Backend`]); the engine never catches or retries
//! them.
//!
//! The store must keep "create expense" and "create its splits" atomic from
//! the engine's point of view: either both are visible or neither is. The
//! in-memory store gets this for free; real backends need a transaction or a
//! compensating action, which is their concern, not the engine's.

pub mod memory;
pub mod snapshot;

use crate::models::expense::{Expense, ExpenseId, ExpenseSplit};
use crate::models::money::Money;
use thiserror::Error;

pub use memory::MemoryStore;
pub use snapshot::{LedgerSnapshot, SnapshotError};

/// Errors that can occur at the persistence seam
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("expense {expense_id} not found")]
    ExpenseNotFound { expense_id: ExpenseId },

    #[error("expense {expense_id} already exists")]
    DuplicateExpense { expense_id: ExpenseId },

    /// Opaque backend failure, passed through to the caller unchanged
    #[error("storage backend error: {0}")]
    Backend(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Storage collaborator consumed by the ledger service.
///
/// Implementations own record lifecycle; the engine only ever reads full
/// histories back and writes calculator output.
pub trait ExpenseStore {
    /// All expenses of a group
    fn fetch_expenses(&self, group_id: &str) -> Result<Vec<Expense>, StoreError>;

    /// All splits belonging to the given expenses
    fn fetch_splits(&self, expense_ids: &[ExpenseId]) -> Result<Vec<ExpenseSplit>, StoreError>;

    /// Persist an expense together with its splits (atomic: both or neither)
    fn persist_expense_and_splits(
        &mut self,
        expense: Expense,
        splits: Vec<ExpenseSplit>,
    ) -> Result<(), StoreError>;

    /// Remove an expense and all of its splits
    fn delete_expense(&mut self, expense_id: &str) -> Result<(), StoreError>;

    /// Replace amount and description of an existing expense.
    ///
    /// Leaves the old splits in place; callers regenerate them via
    /// [`replace_splits`](ExpenseStore::replace_splits) so the sum invariant
    /// holds again.
    fn update_expense(
        &mut self,
        expense_id: &str,
        new_amount: Money,
        new_description: &str,
    ) -> Result<(), StoreError>;

    /// Drop an expense's splits and store freshly computed ones
    fn replace_splits(
        &mut self,
        expense_id: &str,
        splits: Vec<ExpenseSplit>,
    ) -> Result<(), StoreError>;
}
