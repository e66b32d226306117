// crates/model-registry-contract/src/types.rs
// ============================================================================
// Module: Contract Types
// Description: Shared data models for model registration payloads.
// Purpose: Provide canonical shapes for requests, records, and error bodies.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the typed payload shapes for the model registration
//! API. Field names follow the deployed wire format exactly (camelCase JSON),
//! including the asymmetric response envelopes: creation wraps the record
//! under `modelInfo`, retrieval returns the record flattened at top level.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::routes::RECORD_NOT_FOUND_MESSAGE;

// ============================================================================
// SECTION: Identity Types
// ============================================================================

/// Human-facing identity of a model registration.
///
/// # Invariants
/// - `model_name` and `model_version` together identify a registration; the
///   server-assigned record id is a separate, opaque identifier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelId {
    /// Model name.
    pub model_name: String,
    /// Model version.
    pub model_version: String,
    /// Artifact version, managed by the service for uploaded artifacts.
    #[serde(default)]
    pub artifact_version: String,
}

// ============================================================================
// SECTION: Model Information
// ============================================================================

/// Free-form descriptive metadata attached to a registration.
pub type Metadata = BTreeMap<String, String>;

/// Target environment descriptor for a registered model.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetEnvironment {
    /// Platform name for the environment.
    pub platform_name: String,
    /// Environment type label.
    pub environment_type: String,
    /// Comma-separated dependency list.
    pub dependency_list: String,
}

/// Model information block carried by a registration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInformation {
    /// Free-form string-to-string metadata.
    pub metadata: Metadata,
    /// Comma-separated input data type tags.
    pub input_data_type: String,
    /// Comma-separated output data type tags.
    pub output_data_type: String,
    /// Ordered target environment descriptors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_environment: Vec<TargetEnvironment>,
}

// ============================================================================
// SECTION: Registration Record
// ============================================================================

/// Model registration record.
///
/// Doubles as the submission payload (with an empty `id`) and the stored
/// record (with the server-assigned `id`).
///
/// # Invariants
/// - A stored record always carries a non-empty `id`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRelatedInformation {
    /// Server-assigned opaque record id; empty on submission.
    #[serde(default)]
    pub id: String,
    /// Human-facing model identity.
    pub model_id: ModelId,
    /// Registration description.
    pub description: String,
    /// Model information block.
    pub model_information: ModelInformation,
    /// Storage location for uploaded model artifacts.
    #[serde(default)]
    pub model_location: String,
}

/// Creation response envelope wrapping the stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationEnvelope {
    /// Stored record, including the assigned id.
    pub model_info: ModelRelatedInformation,
}

// ============================================================================
// SECTION: Error Body
// ============================================================================

/// Error body returned by the registration API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Failure reason.
    pub message: String,
}

impl ErrorBody {
    /// Returns the canonical not-found error body.
    #[must_use]
    pub fn record_not_found() -> Self {
        Self {
            message: RECORD_NOT_FOUND_MESSAGE.to_string(),
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
