//! PostgreSQL repository adapter.

use async_trait::async_trait;
use sqlx::PgPool;

use budget_types::{RepoError, Transaction, TransactionId, TransactionRepository, TransactionRequest};

use crate::types::DbTransaction;

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL repository implementation.
pub struct PostgresRepo {
    pool: PgPool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
    }
    Ok(())
}

/// Runs all database migrations.
async fn run_migrations(pool: &PgPool) -> Result<(), anyhow::Error> {
    execute_migration(
        pool,
        include_str!("../migrations/0001_create_transactions_pg.sql"),
        "0001",
    )
    .await
}

impl PostgresRepo {
    /// Creates a new PostgreSQL repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        run_migrations(&pool).await?;
        tracing::debug!("PostgreSQL schema ready");
        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Creates the database schema (for testing with existing pool).
    pub async fn create_schema(&self) -> Result<(), RepoError> {
        run_migrations(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl TransactionRepository for PostgresRepo {
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
               VALUES ($1, $2, $3, $4, $5)
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
            r#"SELECT id, type, category, amount, date, description FROM transactions WHERE id = $1"#,
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
        // Row lock is taken by the UPDATE itself; no separate read.
        let row: Option<DbTransaction> = sqlx::query_as(
            r#"UPDATE transactions
               SET type = $1, category = $2, amount = $3, date = $4, description = $5
               WHERE id = $6
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
        let result = sqlx::query(r#"DELETE FROM transactions WHERE id = $1"#)
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
