//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use budget_types::{
    BudgetStatus, CategoryTotal, SpendingTrend, Transaction, TransactionId, TransactionRequest,
    TransactionSummary,
};
use utoipa::OpenApi;

// Dummy functions to generate path documentation.
// The real handlers are generic over the repository and live in `inbound`.

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// List all transactions
#[utoipa::path(
    get,
    path = "/api/transactions",
    tag = "transactions",
    responses(
        (status = 200, description = "Every stored transaction, ascending id", body = Vec<Transaction>)
    )
)]
async fn list_transactions() {}

/// Create a transaction
#[utoipa::path(
    post,
    path = "/api/transactions",
    tag = "transactions",
    request_body = TransactionRequest,
    responses(
        (status = 200, description = "Created transaction with its assigned id", body = Transaction)
    )
)]
async fn create_transaction() {}

/// Get a transaction by ID
#[utoipa::path(
    get,
    path = "/api/transactions/{id}",
    tag = "transactions",
    params(
        ("id" = i64, Path, description = "Transaction ID")
    ),
    responses(
        (status = 200, description = "Stored transaction", body = Transaction),
        (status = 500, description = "Transaction not found or storage failure")
    )
)]
async fn get_transaction() {}

/// Replace every field of a transaction except its id
#[utoipa::path(
    put,
    path = "/api/transactions/{id}",
    tag = "transactions",
    request_body = TransactionRequest,
    params(
        ("id" = i64, Path, description = "Transaction ID")
    ),
    responses(
        (status = 200, description = "Updated transaction", body = Transaction),
        (status = 500, description = "Transaction not found or storage failure")
    )
)]
async fn update_transaction() {}

/// Delete a transaction
#[utoipa::path(
    delete,
    path = "/api/transactions/{id}",
    tag = "transactions",
    params(
        ("id" = i64, Path, description = "Transaction ID")
    ),
    responses(
        (status = 200, description = "Deleted, or nothing to delete")
    )
)]
async fn delete_transaction() {}

/// Totals over all transactions
#[utoipa::path(
    get,
    path = "/api/transactions/summary",
    tag = "transactions",
    responses(
        (status = 200, description = "Income, expense, category and monthly totals", body = TransactionSummary)
    )
)]
async fn summary() {}

/// OpenAPI documentation for the Budget API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Budget Tracker API",
        version = "1.0.0",
        description = "CRUD over personal income and expense transactions.",
        license(name = "MIT"),
    ),
    paths(
        health,
        list_transactions,
        create_transaction,
        get_transaction,
        update_transaction,
        delete_transaction,
        summary,
    ),
    components(
        schemas(
            Transaction,
            TransactionId,
            TransactionRequest,
            TransactionSummary,
            BudgetStatus,
            CategoryTotal,
            SpendingTrend,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "transactions", description = "Transaction CRUD and totals"),
    )
)]
pub struct ApiDoc;
