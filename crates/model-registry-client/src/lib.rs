// crates/model-registry-client/src/lib.rs
// ============================================================================
// Module: Model Registry Client Library
// Description: Typed HTTP client for the model registration API.
// Purpose: Provide register, retrieve, and delete calls over the contract.
// Dependencies: model-registry-contract, reqwest
// ============================================================================

//! ## Overview
//! Typed client for the model registration API. The client maps the observed
//! wire contract into Rust results: a 201 registration yields the assigned
//! id, a 200 retrieval yields the record, and the service's HTTP 500
//! `record not found` response surfaces as [`RegistryClientError::NotFound`]
//! rather than a generic status error.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod client;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use client::RegistryClient;
pub use client::RegistryClientError;
