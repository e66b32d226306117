// system-tests/tests/suites/client.rs
// ============================================================================
// Module: Typed Client Tests
// Description: End-to-end coverage of the typed registry client.
// Purpose: Validate the client's result mapping against a live service.
// Dependencies: system-tests helpers, model-registry-client
// ============================================================================

//! ## Overview
//! Drives the registration lifecycle through the typed client crate,
//! including the mapping of the service's HTTP 500 not-found response to
//! [`RegistryClientError::NotFound`].

use model_registry_client::RegistryClient;
use model_registry_client::RegistryClientError;

use crate::helpers;
use helpers::harness::spawn_registry_service;
use helpers::scenarios::registration_record;
use helpers::timeouts::DEFAULT_HTTP_TIMEOUT;
use helpers::timeouts::resolve_timeout;

#[tokio::test(flavor = "multi_thread")]
async fn client_registration_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let service = spawn_registry_service().await?;
    let client = RegistryClient::new(service.base_url(), resolve_timeout(DEFAULT_HTTP_TIMEOUT))?;

    let record = registration_record("test-model-client", "10010");
    let model_id = client.register(&record).await?;
    if model_id.is_empty() {
        return Err("client returned an empty registration id".into());
    }

    let retrieved = client.retrieve(&model_id).await?;
    if retrieved.id != model_id {
        return Err("retrieved id does not match the assigned id".into());
    }
    if retrieved.model_id != record.model_id {
        return Err("retrieved model identity does not match the submission".into());
    }

    client.delete(&model_id).await?;
    match client.retrieve(&model_id).await {
        Err(RegistryClientError::NotFound) => {}
        Ok(_) => return Err("record still retrievable after deletion".into()),
        Err(other) => return Err(format!("unexpected error after deletion: {other}").into()),
    }

    service.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn client_maps_unknown_id_to_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let service = spawn_registry_service().await?;
    let client = RegistryClient::new(service.base_url(), resolve_timeout(DEFAULT_HTTP_TIMEOUT))?;

    match client.retrieve("invalid").await {
        Err(RegistryClientError::NotFound) => {}
        Ok(_) => return Err("retrieval of unknown id unexpectedly succeeded".into()),
        Err(other) => return Err(format!("unexpected error for unknown id: {other}").into()),
    }

    service.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn client_delete_of_unknown_id_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let service = spawn_registry_service().await?;
    let client = RegistryClient::new(service.base_url(), resolve_timeout(DEFAULT_HTTP_TIMEOUT))?;

    client.delete("invalid").await?;

    service.shutdown().await;
    Ok(())
}
