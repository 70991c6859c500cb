//! Ledger snapshot - save/load store contents
//!
//! Serializes the full record set of a [`MemoryStore`] to JSON and restores
//! it, validating referential integrity on the way back in: an expense without
//! splits is a legitimate transient state, but a split pointing at an unknown
//! expense means the snapshot is corrupt.

use crate::models::expense::{Expense, ExpenseSplit};
use crate::store::memory::MemoryStore;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors that can occur when encoding or restoring a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot encoding failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("split references unknown expense {expense_id}")]
    DanglingSplit { expense_id: String },
}

/// Complete store contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub expenses: Vec<Expense>,
    pub splits: Vec<ExpenseSplit>,
}

impl LedgerSnapshot {
    /// Capture the current contents of a store
    pub fn capture(store: &MemoryStore) -> Self {
        Self {
            expenses: store.expenses().to_vec(),
            splits: store.splits().to_vec(),
        }
    }

    /// An empty snapshot (fresh ledger file)
    pub fn empty() -> Self {
        Self {
            expenses: Vec::new(),
            splits: Vec::new(),
        }
    }

    /// Rebuild a store, checking that every split has its expense
    pub fn restore(self) -> Result<MemoryStore, SnapshotError> {
        let known: HashSet<&str> = self.expenses.iter().map(|e| e.id()).collect();
        for split in &self.splits {
            if !known.contains(split.expense_id.as_str()) {
                return Err(SnapshotError::DanglingSplit {
                    expense_id: split.expense_id.clone(),
                });
            }
        }
        Ok(MemoryStore::from_records(self.expenses, self.splits))
    }

    /// Encode as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode from JSON
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}
