// crates/model-registry-service/src/audit.rs
// ============================================================================
// Module: Registry Audit
// Description: Audit events and sinks for registration API requests.
// Purpose: Emit one structured line per handled request without hard deps.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! This module provides the audit surface of the registration service: one
//! serializable event per handled request and a sink trait for delivery. The
//! default sink writes JSON lines to stderr; deployments that want a log
//! pipeline or metrics backend plug in their own sink.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;

use serde::Serialize;

// ============================================================================
// SECTION: Event Types
// ============================================================================

/// Registration API operation classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryOperation {
    /// Registration submission.
    Register,
    /// Record retrieval by id.
    Retrieve,
    /// Record deletion by id.
    Delete,
}

impl RegistryOperation {
    /// Returns a stable label for the operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Retrieve => "retrieve",
            Self::Delete => "delete",
        }
    }
}

/// Audit event for a handled registration API request.
#[derive(Debug, Clone, Serialize)]
pub struct RegistryAuditEvent {
    /// Operation that was handled.
    pub operation: RegistryOperation,
    /// Record id involved, when known.
    pub record_id: Option<String>,
    /// HTTP status returned to the caller.
    pub status: u16,
}

// ============================================================================
// SECTION: Sink Trait
// ============================================================================

/// Audit sink for registration API events.
pub trait RegistryAuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: &RegistryAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl RegistryAuditSink for StderrAuditSink {
    fn record(&self, event: &RegistryAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that drops events.
pub struct NoopAuditSink;

impl RegistryAuditSink for NoopAuditSink {
    fn record(&self, _event: &RegistryAuditEvent) {}
}
