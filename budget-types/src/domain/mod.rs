//! Domain models for the budget tracker.

pub mod summary;
pub mod transaction;

pub use summary::{BudgetStatus, CategoryTotal, SpendingTrend, TransactionSummary};
pub use transaction::{Transaction, TransactionId};
