// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for model registry system-tests.
// Purpose: Provide service harnesses, HTTP clients, and scenario payloads.
// Dependencies: system-tests, model-registry-service, model-registry-contract
// ============================================================================

//! ## Overview
//! Shared helpers for model registry system-tests.
//! Purpose: Provide service harnesses, HTTP clients, and scenario payloads.
//! Invariants:
//! - System-test execution is deterministic and fail-closed.
//! - Scenarios use distinct model name and version pairs so suites stay
//!   order-independent against a shared live instance.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test suites.")]

pub mod harness;
pub mod timeouts;
