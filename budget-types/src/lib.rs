//! # Budget Types
//!
//! Domain types and port traits for the budget tracker service.
//! This crate has no IO dependencies: only data structures, the summary
//! computation, and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Pure domain types (Transaction, TransactionSummary)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Repository and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    BudgetStatus, CategoryTotal, SpendingTrend, Transaction, TransactionId, TransactionSummary,
};
pub use dto::*;
pub use error::{AppError, RepoError};
pub use ports::TransactionRepository;
