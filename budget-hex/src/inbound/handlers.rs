//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use budget_types::{AppError, TransactionId, TransactionRepository, TransactionRequest};

use crate::TransactionService;

/// Application state shared across handlers.
pub struct AppState<R: TransactionRepository> {
    pub service: TransactionService<R>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // An unknown id on update is reported as a plain server failure;
        // only the message tells it apart.
        let status = match &self.0 {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match &self.0 {
            AppError::Internal(msg) => tracing::error!("request failed: {}", msg),
            other => tracing::warn!("request failed: {}", other),
        }

        let body = serde_json::json!({
            "error": self.0.to_string(),
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

fn parse_id(id: &str) -> Result<TransactionId, ApiError> {
    id.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid transaction ID: {}", id)).into())
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// List all transactions.
#[tracing::instrument(skip(state))]
pub async fn list_transactions<R: TransactionRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<impl IntoResponse, ApiError> {
    let transactions = state.service.list_transactions().await?;
    Ok(Json(transactions))
}

/// Create a transaction.
#[tracing::instrument(skip(state), fields(kind = %req.kind, category = %req.category, amount = req.amount))]
pub async fn create_transaction<R: TransactionRepository>(
    State(state): State<Arc<AppState<R>>>,
    Json(req): Json<TransactionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let tx = state.service.create_transaction(req).await?;
    tracing::info!(id = ?tx.id(), "transaction created");
    Ok(Json(tx))
}

/// Get a transaction by ID.
#[tracing::instrument(skip(state), fields(transaction_id = %id))]
pub async fn get_transaction<R: TransactionRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let tx = state.service.get_transaction(id).await?;
    Ok(Json(tx))
}

/// Replace the fields of an existing transaction.
#[tracing::instrument(skip(state, req), fields(transaction_id = %id))]
pub async fn update_transaction<R: TransactionRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
    Json(req): Json<TransactionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let tx = state.service.update_transaction(id, req).await?;
    Ok(Json(tx))
}

/// Delete a transaction. Responds 200 with an empty body even for unknown ids.
#[tracing::instrument(skip(state), fields(transaction_id = %id))]
pub async fn delete_transaction<R: TransactionRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    state.service.delete_transaction(id).await?;
    Ok(StatusCode::OK)
}

/// Income, expense, per-category and per-month totals.
#[tracing::instrument(skip(state))]
pub async fn summary<R: TransactionRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<impl IntoResponse, ApiError> {
    let summary = state.service.summary().await?;
    Ok(Json(summary))
}
