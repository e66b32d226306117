// crates/model-registry-client/src/client.rs
// ============================================================================
// Module: Registry Client
// Description: reqwest-based client for the model registration API.
// Purpose: Issue contract-exact requests and classify responses.
// Dependencies: model-registry-contract, reqwest, url
// ============================================================================

//! ## Overview
//! The client issues the three registration API operations and enforces the
//! observed status contract: anything other than the documented success and
//! not-found responses is surfaced as an unexpected-status error carrying a
//! body excerpt for diagnostics.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use model_registry_contract::ErrorBody;
use model_registry_contract::ModelRelatedInformation;
use model_registry_contract::RECORD_NOT_FOUND_MESSAGE;
use model_registry_contract::RegistrationEnvelope;
use model_registry_contract::routes::registration_url;
use model_registry_contract::routes::registrations_url;
use reqwest::Client;
use reqwest::Response;
use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum body excerpt length carried in unexpected-status errors.
const MAX_BODY_EXCERPT_CHARS: usize = 256;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Registry client errors.
#[derive(Debug, Error)]
pub enum RegistryClientError {
    /// The base URL failed to parse.
    #[error("invalid base url: {0}")]
    BaseUrl(String),
    /// HTTP transport failure.
    #[error("http transport error: {0}")]
    Http(String),
    /// The service answered with a status outside the documented contract.
    #[error("unexpected status {status} from {operation}: {body}")]
    UnexpectedStatus {
        /// Operation that observed the status.
        operation: &'static str,
        /// HTTP status received.
        status: u16,
        /// Response body excerpt.
        body: String,
    },
    /// The requested record does not exist.
    #[error("record not found")]
    NotFound,
    /// Response body failed to decode.
    #[error("response decode error: {0}")]
    Decode(String),
}

// ============================================================================
// SECTION: Registry Client
// ============================================================================

/// Typed client for the model registration API.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    /// Base URL of the service, without a trailing slash.
    base_url: String,
    /// Underlying HTTP client.
    client: Client,
}

impl RegistryClient {
    /// Creates a new registry client with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryClientError`] when the base URL does not parse or
    /// the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RegistryClientError> {
        Url::parse(base_url)
            .map_err(|err| RegistryClientError::BaseUrl(format!("{base_url}: {err}")))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| RegistryClientError::Http(format!("failed to build http client: {err}")))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submits a registration and returns the server-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryClientError`] on transport failure, on any status
    /// other than 201, or when the response envelope carries an empty id.
    pub async fn register(
        &self,
        record: &ModelRelatedInformation,
    ) -> Result<String, RegistryClientError> {
        let url = registrations_url(&self.base_url);
        let response = self
            .client
            .post(url)
            .json(record)
            .send()
            .await
            .map_err(|err| RegistryClientError::Http(err.to_string()))?;
        if response.status() != StatusCode::CREATED {
            return Err(unexpected_status("register", response).await);
        }
        let envelope: RegistrationEnvelope = response
            .json()
            .await
            .map_err(|err| RegistryClientError::Decode(err.to_string()))?;
        if envelope.model_info.id.is_empty() {
            return Err(RegistryClientError::Decode(
                "registration response carried an empty id".to_string(),
            ));
        }
        Ok(envelope.model_info.id)
    }

    /// Retrieves the registration record for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryClientError::NotFound`] when the service answers
    /// with its not-found response, and other [`RegistryClientError`]
    /// variants on transport, status, or decode failures.
    pub async fn retrieve(
        &self,
        id: &str,
    ) -> Result<ModelRelatedInformation, RegistryClientError> {
        let url = registration_url(&self.base_url, id);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| RegistryClientError::Http(err.to_string()))?;
        match response.status() {
            StatusCode::OK => response
                .json()
                .await
                .map_err(|err| RegistryClientError::Decode(err.to_string())),
            // The deployed service signals an absent record with HTTP 500.
            StatusCode::INTERNAL_SERVER_ERROR => {
                let status = response.status().as_u16();
                let body = response
                    .text()
                    .await
                    .map_err(|err| RegistryClientError::Http(err.to_string()))?;
                Err(classify_server_error("retrieve", status, &body))
            }
            _ => Err(unexpected_status("retrieve", response).await),
        }
    }

    /// Deletes the registration record for `id`.
    ///
    /// Deletion is idempotent on the service side; deleting an absent record
    /// also succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryClientError`] on transport failure or any status
    /// other than 204.
    pub async fn delete(&self, id: &str) -> Result<(), RegistryClientError> {
        let url = registration_url(&self.base_url, id);
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|err| RegistryClientError::Http(err.to_string()))?;
        if response.status() != StatusCode::NO_CONTENT {
            return Err(unexpected_status("delete", response).await);
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Response Classification
// ============================================================================

/// Classifies an HTTP 500 body as not-found or an unexpected status.
fn classify_server_error(operation: &'static str, status: u16, body: &str) -> RegistryClientError {
    if let Ok(error_body) = serde_json::from_str::<ErrorBody>(body)
        && error_body.message == RECORD_NOT_FOUND_MESSAGE
    {
        return RegistryClientError::NotFound;
    }
    RegistryClientError::UnexpectedStatus {
        operation,
        status,
        body: excerpt(body),
    }
}

/// Builds an unexpected-status error from a response, consuming its body.
async fn unexpected_status(operation: &'static str, response: Response) -> RegistryClientError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    RegistryClientError::UnexpectedStatus {
        operation,
        status,
        body: excerpt(&body),
    }
}

/// Truncates a body to the diagnostic excerpt length.
fn excerpt(body: &str) -> String {
    body.chars().take(MAX_BODY_EXCERPT_CHARS).collect()
}

// ============================================================================
// SECTION: Tests
// ============================================================================
