//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Json, Router,
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use budget_types::TransactionRepository;

use super::handlers::{self, AppState};
use crate::TransactionService;
use crate::openapi::ApiDoc;

/// HTTP Server for the Budget API.
pub struct HttpServer<R: TransactionRepository> {
    state: Arc<AppState<R>>,
}

impl<R: TransactionRepository> HttpServer<R> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: TransactionService<R>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        // Cross-origin requests are accepted from anywhere.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/health", get(handlers::health))
            .route(
                "/api-docs/openapi.json",
                get(|| async { Json(ApiDoc::openapi()) }),
            )
            .route(
                "/api/transactions",
                get(handlers::list_transactions::<R>).post(handlers::create_transaction::<R>),
            )
            .route(
                "/api/transactions/summary",
                get(handlers::summary::<R>),
            )
            .route(
                "/api/transactions/{id}",
                get(handlers::get_transaction::<R>)
                    .put(handlers::update_transaction::<R>)
                    .delete(handlers::delete_transaction::<R>),
            )
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        self.serve(listener).await
    }

    /// Serves on an already-bound listener with graceful shutdown.
    pub async fn serve(self, listener: tokio::net::TcpListener) -> anyhow::Result<()> {
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
