// crates/model-registry-service/src/lib.rs
// ============================================================================
// Module: Model Registry Service Library
// Description: Contract-compliant model registration service over HTTP.
// Purpose: Serve the registration API with an in-memory record store.
// Dependencies: model-registry-contract, axum, tokio
// ============================================================================

//! ## Overview
//! This crate implements the model registration API contract as a
//! self-contained HTTP service: an axum router over an in-memory record
//! store, with env-backed configuration and a JSON-lines audit sink. The
//! service reproduces the deployed contract verbatim, including the HTTP 500
//! `record not found` response for missing records; compatibility takes
//! precedence over conventional status-code choices.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod config;
pub mod server;
pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::NoopAuditSink;
pub use audit::RegistryAuditEvent;
pub use audit::RegistryAuditSink;
pub use audit::RegistryOperation;
pub use audit::StderrAuditSink;
pub use config::ConfigError;
pub use config::ServiceConfig;
pub use server::RegistryServer;
pub use server::RegistryServerError;
pub use store::InMemoryRegistryStore;
pub use store::RegistryStore;
pub use store::SharedRegistryStore;
pub use store::StoreError;
