//! # Budget Client SDK
//!
//! A typed Rust client for the Budget Tracker API.

use budget_types::{Transaction, TransactionId, TransactionRequest, TransactionSummary};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Budget API client.
pub struct BudgetClient {
    base_url: String,
    http: Client,
}

impl BudgetClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Lists every transaction.
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, ClientError> {
        self.send_json(self.request(Method::GET, "/api/transactions"))
            .await
    }

    /// Creates a transaction; the response carries the assigned id.
    pub async fn create_transaction(
        &self,
        req: &TransactionRequest,
    ) -> Result<Transaction, ClientError> {
        self.send_json(self.request(Method::POST, "/api/transactions").json(req))
            .await
    }

    /// Fetches one transaction by id.
    pub async fn get_transaction(&self, id: TransactionId) -> Result<Transaction, ClientError> {
        let path = format!("/api/transactions/{}", id);
        self.send_json(self.request(Method::GET, &path)).await
    }

    /// Replaces every field of an existing transaction except its id.
    pub async fn update_transaction(
        &self,
        id: TransactionId,
        req: &TransactionRequest,
    ) -> Result<Transaction, ClientError> {
        let path = format!("/api/transactions/{}", id);
        self.send_json(self.request(Method::PUT, &path).json(req))
            .await
    }

    /// Deletes a transaction. Succeeds for unknown ids too.
    pub async fn delete_transaction(&self, id: TransactionId) -> Result<(), ClientError> {
        let path = format!("/api/transactions/{}", id);
        let resp = self.request(Method::DELETE, &path).send().await?;
        Self::check_status(resp).await.map(|_| ())
    }

    /// Fetches income, expense and per-category totals.
    pub async fn summary(&self) -> Result<TransactionSummary, ClientError> {
        self.send_json(self.request(Method::GET, "/api/transactions/summary"))
            .await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
    }

    async fn send_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ClientError> {
        let resp = Self::check_status(req.send().await?).await?;
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or(body);
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = BudgetClient::new("http://localhost:8080");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = BudgetClient::new("http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
