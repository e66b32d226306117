// crates/model-registry-service/src/server.rs
// ============================================================================
// Module: Registry HTTP Server
// Description: axum HTTP server for the model registration API.
// Purpose: Serve register, retrieve, and delete with contract-exact responses.
// Dependencies: model-registry-contract, axum, tokio
// ============================================================================

//! ## Overview
//! The registry server exposes the three registration API operations over
//! HTTP. Response shapes reproduce the deployed contract exactly:
//! registration answers 201 with the record wrapped under `modelInfo`,
//! retrieval answers 200 with the record flattened at top level or 500 with
//! `{"message": "record not found"}`, and deletion always answers 204. The
//! 500-for-absent-record status is an observed compatibility quirk and is
//! reproduced verbatim.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use axum::routing::post;
use model_registry_contract::ErrorBody;
use model_registry_contract::MODEL_REGISTRATIONS_PATH;
use model_registry_contract::ModelRelatedInformation;
use model_registry_contract::RegistrationEnvelope;

use crate::audit::RegistryAuditEvent;
use crate::audit::RegistryAuditSink;
use crate::audit::RegistryOperation;
use crate::audit::StderrAuditSink;
use crate::config::ServiceConfig;
use crate::store::InMemoryRegistryStore;
use crate::store::RegistryStore;
use crate::store::SharedRegistryStore;

// ============================================================================
// SECTION: Registry Server
// ============================================================================

/// Registry server instance.
pub struct RegistryServer {
    /// Server configuration.
    config: ServiceConfig,
    /// Record store backing the API.
    store: SharedRegistryStore,
    /// Audit sink for handled requests.
    audit: Arc<dyn RegistryAuditSink>,
}

impl RegistryServer {
    /// Builds a new registry server from configuration, with an in-memory
    /// store and the stderr audit sink.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServerError`] when the configuration is invalid.
    pub fn from_config(config: ServiceConfig) -> Result<Self, RegistryServerError> {
        config.validate().map_err(|err| RegistryServerError::Config(err.to_string()))?;
        Ok(Self {
            config,
            store: SharedRegistryStore::from_store(InMemoryRegistryStore::new()),
            audit: Arc::new(StderrAuditSink),
        })
    }

    /// Replaces the record store.
    #[must_use]
    pub fn with_store(mut self, store: SharedRegistryStore) -> Self {
        self.store = store;
        self
    }

    /// Replaces the audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Arc<dyn RegistryAuditSink>) -> Self {
        self.audit = audit;
        self
    }

    /// Serves the registration API until the task is cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServerError`] when the bind address is invalid or
    /// the server fails.
    pub async fn serve(self) -> Result<(), RegistryServerError> {
        let addr: SocketAddr = self
            .config
            .bind
            .parse()
            .map_err(|_| RegistryServerError::Config("invalid bind address".to_string()))?;
        let state = Arc::new(ServerState {
            store: self.store,
            audit: self.audit,
        });
        let app = build_router(state, self.config.max_body_bytes);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|_| RegistryServerError::Transport("http bind failed".to_string()))?;
        axum::serve(listener, app)
            .await
            .map_err(|_| RegistryServerError::Transport("http server failed".to_string()))
    }
}

/// Shared state for request handlers.
struct ServerState {
    /// Record store backing the API.
    store: SharedRegistryStore,
    /// Audit sink for handled requests.
    audit: Arc<dyn RegistryAuditSink>,
}

/// Builds the axum router for the registration API.
fn build_router(state: Arc<ServerState>, max_body_bytes: usize) -> Router {
    // Registration submissions use the trailing-slash collection form.
    let collection = format!("{MODEL_REGISTRATIONS_PATH}/");
    let record = format!("{MODEL_REGISTRATIONS_PATH}/{{id}}");
    Router::new()
        .route(&collection, post(register_model))
        .route(&record, get(retrieve_model).delete(delete_model))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Handles registration submissions.
async fn register_model(
    State(state): State<Arc<ServerState>>,
    Json(record): Json<ModelRelatedInformation>,
) -> Response {
    match state.store.insert(record) {
        Ok(stored) => {
            record_audit(&state, RegistryOperation::Register, Some(&stored.id), StatusCode::CREATED);
            (
                StatusCode::CREATED,
                Json(RegistrationEnvelope {
                    model_info: stored,
                }),
            )
                .into_response()
        }
        Err(err) => {
            record_audit(&state, RegistryOperation::Register, None, StatusCode::INTERNAL_SERVER_ERROR);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    message: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Handles record retrieval by id.
async fn retrieve_model(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Response {
    match state.store.get(&id) {
        Ok(Some(stored)) => {
            record_audit(&state, RegistryOperation::Retrieve, Some(&id), StatusCode::OK);
            (StatusCode::OK, Json(stored)).into_response()
        }
        Ok(None) => {
            record_audit(
                &state,
                RegistryOperation::Retrieve,
                Some(&id),
                StatusCode::INTERNAL_SERVER_ERROR,
            );
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::record_not_found())).into_response()
        }
        Err(err) => {
            record_audit(
                &state,
                RegistryOperation::Retrieve,
                Some(&id),
                StatusCode::INTERNAL_SERVER_ERROR,
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    message: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Handles record deletion by id. Always answers 204; deleting an absent
/// record is a no-op.
async fn delete_model(State(state): State<Arc<ServerState>>, Path(id): Path<String>) -> Response {
    let _removed = state.store.remove(&id).unwrap_or(false);
    record_audit(&state, RegistryOperation::Delete, Some(&id), StatusCode::NO_CONTENT);
    StatusCode::NO_CONTENT.into_response()
}

/// Records an audit event for a handled request.
fn record_audit(
    state: &ServerState,
    operation: RegistryOperation,
    record_id: Option<&str>,
    status: StatusCode,
) {
    state.audit.record(&RegistryAuditEvent {
        operation,
        record_id: record_id.map(ToString::to_string),
        status: status.as_u16(),
    });
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Registry server errors.
#[derive(Debug, thiserror::Error)]
pub enum RegistryServerError {
    /// Configuration errors.
    #[error("config error: {0}")]
    Config(String),
    /// Transport errors.
    #[error("transport error: {0}")]
    Transport(String),
}

// ============================================================================
// SECTION: Tests
// ============================================================================
