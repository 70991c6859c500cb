//! Split Ledger Core - Split & Settlement Engine
//!
//! Records shared group expenses and determines who owes whom.
//!
//! # Architecture
//!
//! - **models**: Domain types (Money, Expense, ExpenseSplit, SplitSpec)
//! - **split**: Split Calculator - total + split spec -> exact shares
//! - **balance**: Balance Aggregator - expense history -> net balances
//! - **settlement**: Settlement Planner - net balances -> settle-up payments
//! - **store**: Persistence seam (trait + in-memory reference store)
//! - **ledger**: Service composing calculator -> store -> aggregator -> planner
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 cents ([`Money`]); shares of an expense sum
//!    exactly to its amount
//! 2. Net balances of a group sum to zero within one cent
//! 3. Applying a settlement plan drives every balance to zero within one cent
//! 4. The three core components are pure: deterministic output, no I/O
//!
//! # Example
//!
//! ```rust
//! use splitledger_core::{GroupLedger, MemoryStore, Money, SplitSpec};
//!
//! let mut ledger = GroupLedger::new(MemoryStore::new());
//! ledger
//!     .add_expense(
//!         "trip",
//!         "dinner",
//!         Money::from_cents(10_000),
//!         "alice",
//!         &SplitSpec::equal(["alice", "bob", "carol"]),
//!     )
//!     .unwrap();
//!
//! let summary = ledger.group_summary("trip").unwrap();
//! assert_eq!(summary.balances["alice"], Money::from_cents(6_666));
//! assert_eq!(summary.settlements.len(), 2);
//! ```

pub mod balance;
pub mod ledger;
pub mod models;
pub mod settlement;
pub mod split;
pub mod store;

// Re-exports for convenience
pub use balance::{aggregate_balances, BalanceMap};
pub use ledger::{GroupLedger, GroupSummary, LedgerError};
pub use models::{
    expense::{Expense, ExpenseId, ExpenseSplit, GroupId, ParticipantId},
    money::{Money, ParseMoneyError},
    split::{AmountEntry, PercentEntry, SplitSpec},
};
pub use settlement::{apply_settlements, plan_settlements, MatchStrategy, SettlementTransaction};
pub use split::{compute_split, ExpenseShare, RemainderStrategy, SplitError};
pub use store::{ExpenseStore, LedgerSnapshot, MemoryStore, SnapshotError, StoreError};
