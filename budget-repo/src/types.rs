//! Database row types shared by the SQLite and PostgreSQL adapters.

use chrono::NaiveDate;
use sqlx::FromRow;

use budget_types::{Transaction, TransactionId};

/// Transaction row from database.
#[derive(Debug, FromRow)]
pub struct DbTransaction {
    pub id: i64,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub description: Option<String>,
}

impl DbTransaction {
    pub fn into_domain(self) -> Transaction {
        Transaction::from_parts(
            TransactionId::new(self.id),
            self.kind,
            self.category,
            self.amount,
            self.date,
            self.description,
        )
    }
}
