//! SQLite repository adapter.
#![allow(clippy::collapsible_if)]

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

use budget_types::{RepoError, Transaction, TransactionId, TransactionRepository, TransactionRequest};

use crate::types::DbTransaction;

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                if let Some(parent) = std::path::Path::new(path).parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let repo = Self { pool };
        repo.create_schema().await?;
        tracing::debug!("SQLite schema ready");

        Ok(repo)
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the database schema (idempotent).
    pub async fn create_schema(&self) -> Result<(), RepoError> {
        let ddl = include_str!("../migrations/0001_create_transactions.sql");
        sqlx::query(ddl)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl TransactionRepository for SqliteRepo {
    async fn list_transactions(&self) -> Result<Vec<Transaction>, RepoError> {
        let rows: Vec<DbTransaction> = sqlx::query_as(
            r#"SELECT id, type, category, amount, date, description FROM transactions ORDER BY id ASC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(DbTransaction::into_domain).collect())
    }

    async fn insert_transaction(&self, req: TransactionRequest) -> Result<Transaction, RepoError> {
        let row: DbTransaction = sqlx::query_as(
            r#"INSERT INTO transactions (type, category, amount, date, description)
               VALUES (?, ?, ?, ?, ?)
               RETURNING id, type, category, amount, date, description"#,
        )
        .bind(&req.kind)
        .bind(&req.category)
        .bind(req.amount)
        .bind(req.date)
        .bind(&req.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row.into_domain())
    }

    async fn get_transaction(&self, id: TransactionId) -> Result<Option<Transaction>, RepoError> {
        let row: Option<DbTransaction> = sqlx::query_as(
            r#"SELECT id, type, category, amount, date, description FROM transactions WHERE id = ?"#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row.map(DbTransaction::into_domain))
    }

    async fn update_transaction(
        &self,
        id: TransactionId,
        req: TransactionRequest,
    ) -> Result<Option<Transaction>, RepoError> {
        // Single statement: the existence check and the write cannot interleave
        // with another writer.
        let row: Option<DbTransaction> = sqlx::query_as(
            r#"UPDATE transactions
               SET type = ?, category = ?, amount = ?, date = ?, description = ?
               WHERE id = ?
               RETURNING id, type, category, amount, date, description"#,
        )
        .bind(&req.kind)
        .bind(&req.category)
        .bind(req.amount)
        .bind(req.date)
        .bind(&req.description)
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row.map(DbTransaction::into_domain))
    }

    async fn delete_transaction(&self, id: TransactionId) -> Result<bool, RepoError> {
        let result = sqlx::query(r#"DELETE FROM transactions WHERE id = ?"#)
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
