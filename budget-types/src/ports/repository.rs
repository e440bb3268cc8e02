//! Repository port trait.
//!
//! This is the only port in the hexagon. Adapters (SQLite, Postgres, or any
//! key-value store) implement it.

use crate::domain::{Transaction, TransactionId};
use crate::dto::TransactionRequest;
use crate::error::RepoError;

/// Storage for transaction records.
///
/// `update_transaction` MUST check existence and write in one atomic step;
/// callers never read-then-write.
#[async_trait::async_trait]
pub trait TransactionRepository: Send + Sync + 'static {
    /// Lists every stored transaction, in ascending id order.
    async fn list_transactions(&self) -> Result<Vec<Transaction>, RepoError>;

    /// Inserts a new record and returns it with its generated id.
    async fn insert_transaction(&self, req: TransactionRequest) -> Result<Transaction, RepoError>;

    /// Gets a transaction by ID.
    async fn get_transaction(&self, id: TransactionId) -> Result<Option<Transaction>, RepoError>;

    /// Replaces the mutable fields of an existing record.
    ///
    /// Returns `None` without writing anything when `id` is unknown.
    async fn update_transaction(
        &self,
        id: TransactionId,
        req: TransactionRequest,
    ) -> Result<Option<Transaction>, RepoError>;

    /// Deletes a record. Returns whether a row was removed; an unknown id
    /// is not an error.
    async fn delete_transaction(&self, id: TransactionId) -> Result<bool, RepoError>;
}
