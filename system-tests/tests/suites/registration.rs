// system-tests/tests/suites/registration.rs
// ============================================================================
// Module: Registration Contract Tests
// Description: End-to-end coverage of the model registration API contract.
// Purpose: Pin status codes and body fields to the observed wire contract.
// Dependencies: system-tests helpers
// ============================================================================

//! ## Overview
//! End-to-end scenarios for the registration API: registration with
//! retrieval, retrieval of an unknown id, deletion of a registered record,
//! and deletion of an unknown id. Each scenario uses a distinct model name
//! and version pair so the suite stays order-independent against a shared
//! live instance.

use reqwest::StatusCode;

use crate::helpers;
use helpers::harness::spawn_registry_service;
use helpers::scenarios::registration_payload;
use helpers::timeouts::DEFAULT_HTTP_TIMEOUT;

#[tokio::test(flavor = "multi_thread")]
async fn model_registration_and_retrieval() -> Result<(), Box<dyn std::error::Error>> {
    let service = spawn_registry_service().await?;
    let client = service.client(DEFAULT_HTTP_TIMEOUT)?;

    let payload = registration_payload("test-model", "10003");
    let (status, body) = client.register(&payload).await?;
    if status != StatusCode::CREATED {
        return Err(format!("registration returned {status}, expected 201").into());
    }
    let Some(model_id) = body["modelInfo"]["id"].as_str() else {
        return Err("registration response missing modelInfo.id".into());
    };
    if model_id.is_empty() {
        return Err("registration response carried an empty modelInfo.id".into());
    }

    let (status, body) = client.retrieve(model_id).await?;
    if status != StatusCode::OK {
        return Err(format!("retrieval returned {status}, expected 200").into());
    }
    if body["id"].as_str() != Some(model_id) {
        return Err("retrieved id does not match the submitted registration".into());
    }

    service.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn retrieval_of_unknown_model_reports_record_not_found()
-> Result<(), Box<dyn std::error::Error>> {
    let service = spawn_registry_service().await?;
    let client = service.client(DEFAULT_HTTP_TIMEOUT)?;

    let (status, body) = client.retrieve("invalid").await?;
    if status != StatusCode::INTERNAL_SERVER_ERROR {
        return Err(format!("retrieval of unknown id returned {status}, expected 500").into());
    }
    if body["message"].as_str() != Some("record not found") {
        return Err(format!("unexpected not-found body: {body}").into());
    }

    service.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn registered_model_deletion() -> Result<(), Box<dyn std::error::Error>> {
    let service = spawn_registry_service().await?;
    let client = service.client(DEFAULT_HTTP_TIMEOUT)?;

    let payload = registration_payload("test-model-deletion", "10006");
    let (status, body) = client.register(&payload).await?;
    if status != StatusCode::CREATED {
        return Err(format!("registration returned {status}, expected 201").into());
    }
    let Some(model_id) = body["modelInfo"]["id"].as_str() else {
        return Err("registration response missing modelInfo.id".into());
    };
    let model_id = model_id.to_string();

    let (status, body) = client.retrieve(&model_id).await?;
    if status != StatusCode::OK {
        return Err(format!("retrieval returned {status}, expected 200").into());
    }
    if body["id"].as_str() != Some(model_id.as_str()) {
        return Err("retrieved id does not match the submitted registration".into());
    }

    let status = client.delete(&model_id).await?;
    if status != StatusCode::NO_CONTENT {
        return Err(format!("deletion returned {status}, expected 204").into());
    }

    // After deletion, retrieval behaves as if the record never existed.
    let (status, body) = client.retrieve(&model_id).await?;
    if status != StatusCode::INTERNAL_SERVER_ERROR {
        return Err(format!("retrieval after deletion returned {status}, expected 500").into());
    }
    if body["message"].as_str() != Some("record not found") {
        return Err(format!("unexpected body after deletion: {body}").into());
    }

    service.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn deletion_of_unknown_model_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let service = spawn_registry_service().await?;
    let client = service.client(DEFAULT_HTTP_TIMEOUT)?;

    let status = client.delete("invalid").await?;
    if status != StatusCode::NO_CONTENT {
        return Err(format!("deletion of unknown id returned {status}, expected 204").into());
    }

    service.shutdown().await;
    Ok(())
}
