//! # Budget Hex
//!
//! Application service layer and HTTP adapter for the budget tracker.
//!
//! ## Architecture
//!
//! - `service/` - Application service (delegates to the repository port)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document served at `/api-docs/openapi.json`
//!
//! The service is generic over `R: TransactionRepository`, allowing
//! different repository implementations to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::TransactionService;
