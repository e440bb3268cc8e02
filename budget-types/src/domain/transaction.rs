//! Transaction domain model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::TransactionRequest;

/// Unique identifier for a Transaction.
///
/// Assigned by storage on insert and never changed afterwards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct TransactionId(i64);

impl TransactionId {
    /// Wraps a storage-assigned identifier.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for TransactionId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TransactionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A single income or expense entry.
///
/// No field is validated: `kind` is conventionally `"income"` or
/// `"expense"` but any string is kept as given, and `amount` may carry
/// any sign.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    /// Storage-assigned identifier, absent until persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>, example = 1)]
    id: Option<TransactionId>,
    /// Conventionally "income" or "expense"
    #[serde(rename = "type")]
    #[schema(example = "expense")]
    kind: String,
    #[schema(example = "food")]
    category: String,
    #[schema(example = 12.5)]
    amount: f64,
    #[schema(value_type = String, format = Date, example = "2024-01-01")]
    date: NaiveDate,
    #[serde(default)]
    #[schema(example = "lunch")]
    description: Option<String>,
}

impl Transaction {
    /// Creates an unsaved transaction with every field but the identifier.
    pub fn new(
        kind: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        description: Option<String>,
    ) -> Self {
        Self {
            id: None,
            kind: kind.into(),
            category: category.into(),
            amount,
            date,
            description,
        }
    }

    /// Reconstructs a persisted transaction from storage fields.
    pub fn from_parts(
        id: TransactionId,
        kind: String,
        category: String,
        amount: f64,
        date: NaiveDate,
        description: Option<String>,
    ) -> Self {
        Self {
            id: Some(id),
            kind,
            category,
            amount,
            date,
            description,
        }
    }

    pub fn id(&self) -> Option<TransactionId> {
        self.id
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn set_kind(&mut self, kind: impl Into<String>) {
        self.kind = kind.into();
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn set_amount(&mut self, amount: f64) {
        self.amount = amount;
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Overwrites the five mutable fields, keeping the identifier.
    pub fn apply(&mut self, req: TransactionRequest) {
        self.kind = req.kind;
        self.category = req.category;
        self.amount = req.amount;
        self.date = req.date;
        self.description = req.description;
    }

    /// Whether this entry counts as income (exact `"income"` match).
    pub fn is_income(&self) -> bool {
        self.kind == "income"
    }

    /// Whether this entry counts as an expense (exact `"expense"` match).
    pub fn is_expense(&self) -> bool {
        self.kind == "expense"
    }
}
