// system-tests/src/lib.rs
// ============================================================================
// Module: Model Registry System Tests Library
// Description: Shared configuration for system test scenarios.
// Purpose: Provide common utilities for the system-test binaries.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts shared configuration utilities used by the system-test
//! binaries in `system-tests/tests`. The suites drive the registration API
//! over HTTP, either against an in-process service or, when a base URL
//! override is set, against a live deployment.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::SystemTestConfig;
pub use config::SystemTestEnv;
