//! In-memory reference store
//!
//! Backs the tests and the CLI. Keeps records in insertion order; the engine
//! does not depend on that order for correctness, but it keeps snapshots and
//! debug output stable.

use crate::models::expense::{Expense, ExpenseId, ExpenseSplit};
use crate::models::money::Money;
use crate::store::{ExpenseStore, StoreError};
use std::collections::HashSet;

/// Reference [`ExpenseStore`] holding everything in two vectors
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    expenses: Vec<Expense>,
    splits: Vec<ExpenseSplit>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All stored expenses, insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// All stored splits, insertion order
    pub fn splits(&self) -> &[ExpenseSplit] {
        &self.splits
    }

    /// Group IDs present in the store, first-seen order
    pub fn group_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut ids = Vec::new();
        for expense in &self.expenses {
            if seen.insert(expense.group_id()) {
                ids.push(expense.group_id().to_string());
            }
        }
        ids
    }

    pub(crate) fn from_records(expenses: Vec<Expense>, splits: Vec<ExpenseSplit>) -> Self {
        Self { expenses, splits }
    }

    fn position_of(&self, expense_id: &str) -> Result<usize, StoreError> {
        self.expenses
            .iter()
            .position(|e| e.id() == expense_id)
            .ok_or_else(|| StoreError::ExpenseNotFound {
                expense_id: expense_id.to_string(),
            })
    }
}

impl ExpenseStore for MemoryStore {
    fn fetch_expenses(&self, group_id: &str) -> Result<Vec<Expense>, StoreError> {
        Ok(self
            .expenses
            .iter()
            .filter(|e| e.group_id() == group_id)
            .cloned()
            .collect())
    }

    fn fetch_splits(&self, expense_ids: &[ExpenseId]) -> Result<Vec<ExpenseSplit>, StoreError> {
        let wanted: HashSet<&str> = expense_ids.iter().map(String::as_str).collect();
        Ok(self
            .splits
            .iter()
            .filter(|s| wanted.contains(s.expense_id.as_str()))
            .cloned()
            .collect())
    }

    fn persist_expense_and_splits(
        &mut self,
        expense: Expense,
        splits: Vec<ExpenseSplit>,
    ) -> Result<(), StoreError> {
        if self.expenses.iter().any(|e| e.id() == expense.id()) {
            return Err(StoreError::DuplicateExpense {
                expense_id: expense.id().to_string(),
            });
        }
        self.expenses.push(expense);
        self.splits.extend(splits);
        Ok(())
    }

    fn delete_expense(&mut self, expense_id: &str) -> Result<(), StoreError> {
        let position = self.position_of(expense_id)?;
        self.expenses.remove(position);
        self.splits.retain(|s| s.expense_id != expense_id);
        Ok(())
    }

    fn update_expense(
        &mut self,
        expense_id: &str,
        new_amount: Money,
        new_description: &str,
    ) -> Result<(), StoreError> {
        let position = self.position_of(expense_id)?;
        self.expenses[position].apply_update(new_amount, new_description.to_string());
        Ok(())
    }

    fn replace_splits(
        &mut self,
        expense_id: &str,
        splits: Vec<ExpenseSplit>,
    ) -> Result<(), StoreError> {
        // Fail before mutating if the expense is unknown.
        self.position_of(expense_id)?;
        self.splits.retain(|s| s.expense_id != expense_id);
        self.splits.extend(splits);
        Ok(())
    }
}
