//! Data Transfer Objects (DTOs) for requests and responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Transaction;

/// Body of a create or full-replacement update.
///
/// Any `id` sent by the caller is ignored; identifiers come from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransactionRequest {
    /// Conventionally "income" or "expense"
    #[serde(rename = "type")]
    #[schema(example = "expense")]
    pub kind: String,
    #[schema(example = "food")]
    pub category: String,
    #[schema(example = 12.5)]
    pub amount: f64,
    #[schema(value_type = String, format = Date, example = "2024-01-01")]
    pub date: NaiveDate,
    #[serde(default)]
    #[schema(example = "lunch")]
    pub description: Option<String>,
}

impl From<TransactionRequest> for Transaction {
    fn from(req: TransactionRequest) -> Self {
        Transaction::new(req.kind, req.category, req.amount, req.date, req.description)
    }
}

impl From<&Transaction> for TransactionRequest {
    fn from(tx: &Transaction) -> Self {
        Self {
            kind: tx.kind().to_string(),
            category: tx.category().to_string(),
            amount: tx.amount(),
            date: tx.date(),
            description: tx.description().map(String::from),
        }
    }
}
