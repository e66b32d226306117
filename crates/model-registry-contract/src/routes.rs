// crates/model-registry-contract/src/routes.rs
// ============================================================================
// Module: Contract Routes
// Description: Route paths and fixed wire strings for the registration API.
// Purpose: Keep URL construction identical across service, client, and tests.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Fixed strings of the registration API surface. The base path follows the
//! R1-AP naming used by the upstream deployment, and the not-found message is
//! part of the observed contract rather than a free-form diagnostic.

/// Base path for model registration resources, without a trailing slash.
pub const MODEL_REGISTRATIONS_PATH: &str = "/ai-ml-model-registration/v1/model-registrations";

/// Error message returned when a registration record does not exist.
///
/// The deployed service surfaces this with HTTP 500 rather than 404. That
/// status is part of the compatibility contract and must not be corrected.
pub const RECORD_NOT_FOUND_MESSAGE: &str = "record not found";

/// Returns the collection URL for registration submissions.
///
/// The deployed service accepts submissions on the trailing-slash form of the
/// collection path, so that form is canonical here.
#[must_use]
pub fn registrations_url(base_url: &str) -> String {
    format!("{}{MODEL_REGISTRATIONS_PATH}/", base_url.trim_end_matches('/'))
}

/// Returns the record URL for a registration id.
#[must_use]
pub fn registration_url(base_url: &str, id: &str) -> String {
    format!("{}{MODEL_REGISTRATIONS_PATH}/{id}", base_url.trim_end_matches('/'))
}
