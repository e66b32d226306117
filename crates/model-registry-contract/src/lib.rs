// crates/model-registry-contract/src/lib.rs
// ============================================================================
// Module: Model Registry Contract Library
// Description: Canonical wire contract for the model registration API.
// Purpose: Provide the shared request, record, and error shapes for the
//          registration service, client, and system tests.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! The contract library defines the canonical JSON shapes exchanged with the
//! model registration API. It is the single source of truth for route paths,
//! payload field names, and the observed error body, and carries no I/O of
//! its own. The service, client, and system-test crates all build on these
//! types so the wire contract cannot drift between them.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod routes;
pub mod types;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use routes::MODEL_REGISTRATIONS_PATH;
pub use routes::RECORD_NOT_FOUND_MESSAGE;
pub use types::ErrorBody;
pub use types::Metadata;
pub use types::ModelId;
pub use types::ModelInformation;
pub use types::ModelRelatedInformation;
pub use types::RegistrationEnvelope;
pub use types::TargetEnvironment;
