// crates/model-registry-service/src/store.rs
// ============================================================================
// Module: Registry Record Store
// Description: In-memory store for model registration records.
// Purpose: Provide a deterministic store implementation without external deps.
// Dependencies: model-registry-contract, uuid
// ============================================================================

//! ## Overview
//! This module provides the record store behind the registration service. The
//! in-memory implementation is sufficient for the contract: records live only
//! for the lifetime of the process, which is all the system tests and any
//! stub deployment require. The [`RegistryStore`] trait keeps the seam open
//! for a persistent backend.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;

use model_registry_contract::ModelRelatedInformation;
use thiserror::Error;
use uuid::Uuid;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Record store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying store failure.
    #[error("store error: {0}")]
    Store(String),
}

// ============================================================================
// SECTION: Store Trait
// ============================================================================

/// Store for model registration records, addressed by server-assigned id.
pub trait RegistryStore: Send + Sync {
    /// Inserts a registration record, assigning a fresh id when the submitted
    /// record carries none, and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store cannot be written.
    fn insert(
        &self,
        record: ModelRelatedInformation,
    ) -> Result<ModelRelatedInformation, StoreError>;

    /// Returns the record for `id`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store cannot be read.
    fn get(&self, id: &str) -> Result<Option<ModelRelatedInformation>, StoreError>;

    /// Removes the record for `id`, returning whether a record was present.
    ///
    /// Removal of an absent id is not an error; deletion is idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store cannot be written.
    fn remove(&self, id: &str) -> Result<bool, StoreError>;
}

// ============================================================================
// SECTION: In-Memory Store
// ============================================================================

/// In-memory registry store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRegistryStore {
    /// Record map protected by a mutex, keyed by record id.
    records: Arc<Mutex<BTreeMap<String, ModelRelatedInformation>>>,
}

impl InMemoryRegistryStore {
    /// Creates a new in-memory registry store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }
}

impl RegistryStore for InMemoryRegistryStore {
    fn insert(
        &self,
        mut record: ModelRelatedInformation,
    ) -> Result<ModelRelatedInformation, StoreError> {
        if record.id.is_empty() {
            record.id = Uuid::new_v4().to_string();
        }
        let mut guard = self
            .records
            .lock()
            .map_err(|_| StoreError::Store("registry store mutex poisoned".to_string()))?;
        guard.insert(record.id.clone(), record.clone());
        drop(guard);
        Ok(record)
    }

    fn get(&self, id: &str) -> Result<Option<ModelRelatedInformation>, StoreError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| StoreError::Store("registry store mutex poisoned".to_string()))?;
        Ok(guard.get(id).cloned())
    }

    fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| StoreError::Store("registry store mutex poisoned".to_string()))?;
        Ok(guard.remove(id).is_some())
    }
}

// ============================================================================
// SECTION: Shared Store Wrapper
// ============================================================================

/// Shared registry store backed by an `Arc` trait object.
#[derive(Clone)]
pub struct SharedRegistryStore {
    /// Inner store implementation.
    inner: Arc<dyn RegistryStore>,
}

impl SharedRegistryStore {
    /// Wraps a registry store in a shared, clonable wrapper.
    #[must_use]
    pub fn from_store(store: impl RegistryStore + 'static) -> Self {
        Self {
            inner: Arc::new(store),
        }
    }

    /// Wraps an existing shared store.
    #[must_use]
    pub const fn new(store: Arc<dyn RegistryStore>) -> Self {
        Self {
            inner: store,
        }
    }
}

impl RegistryStore for SharedRegistryStore {
    fn insert(
        &self,
        record: ModelRelatedInformation,
    ) -> Result<ModelRelatedInformation, StoreError> {
        self.inner.insert(record)
    }

    fn get(&self, id: &str) -> Result<Option<ModelRelatedInformation>, StoreError> {
        self.inner.get(id)
    }

    fn remove(&self, id: &str) -> Result<bool, StoreError> {
        self.inner.remove(id)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
