//! Transaction Application Service
//!
//! Orchestrates the CRUD operations through the repository port.
//! Contains NO infrastructure logic.

use chrono::{NaiveDate, Utc};

use budget_types::{
    AppError, Transaction, TransactionId, TransactionRepository, TransactionRequest,
    TransactionSummary,
};

/// Application service for transaction operations.
///
/// Generic over `R: TransactionRepository`; the storage handle is passed in
/// at construction and owned by the service.
pub struct TransactionService<R: TransactionRepository> {
    repo: R,
    monthly_budget: Option<f64>,
}

impl<R: TransactionRepository> TransactionService<R> {
    /// Creates a new transaction service with the given repository.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            monthly_budget: None,
        }
    }

    /// Sets the monthly expense limit reported by [`Self::summary`].
    pub fn with_monthly_budget(mut self, limit: Option<f64>) -> Self {
        self.monthly_budget = limit;
        self
    }

    /// Lists every stored transaction.
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, AppError> {
        self.repo.list_transactions().await.map_err(Into::into)
    }

    /// Persists a new transaction and returns it with its assigned id.
    pub async fn create_transaction(
        &self,
        req: TransactionRequest,
    ) -> Result<Transaction, AppError> {
        self.repo.insert_transaction(req).await.map_err(Into::into)
    }

    /// Gets a transaction by ID; unknown ids are [`AppError::NotFound`].
    pub async fn get_transaction(&self, id: TransactionId) -> Result<Transaction, AppError> {
        self.repo
            .get_transaction(id)
            .await
            .map_err(Into::into)
            .and_then(|opt| opt.ok_or(AppError::NotFound(id)))
    }

    /// Replaces type, category, amount, date and description of an
    /// existing transaction.
    pub async fn update_transaction(
        &self,
        id: TransactionId,
        req: TransactionRequest,
    ) -> Result<Transaction, AppError> {
        self.repo
            .update_transaction(id, req)
            .await
            .map_err(Into::into)
            .and_then(|opt| opt.ok_or(AppError::NotFound(id)))
    }

    /// Deletes a transaction. Unknown ids are not an error.
    pub async fn delete_transaction(&self, id: TransactionId) -> Result<(), AppError> {
        let removed = self.repo.delete_transaction(id).await?;
        if !removed {
            tracing::debug!(%id, "delete of unknown transaction ignored");
        }
        Ok(())
    }

    /// Aggregates all transactions, evaluating the budget for today (UTC).
    pub async fn summary(&self) -> Result<TransactionSummary, AppError> {
        self.summary_on(Utc::now().date_naive()).await
    }

    /// Aggregates all transactions, evaluating the budget for `today`'s month.
    pub async fn summary_on(&self, today: NaiveDate) -> Result<TransactionSummary, AppError> {
        let transactions = self.list_transactions().await?;
        let summary = TransactionSummary::compute(&transactions, self.monthly_budget, today);
        if !summary.is_finite() {
            return Err(AppError::Internal(
                "summary totals exceed the representable range".to_string(),
            ));
        }
        Ok(summary)
    }
}
