//! Domain types for the split and settlement engine

pub mod expense;
pub mod money;
pub mod split;

pub use expense::{Expense, ExpenseId, ExpenseSplit, GroupId, ParticipantId};
pub use money::{Money, ParseMoneyError};
pub use split::{AmountEntry, PercentEntry, SplitSpec};
