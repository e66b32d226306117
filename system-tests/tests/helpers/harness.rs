// system-tests/tests/helpers/harness.rs
// ============================================================================
// Module: Registry Service Harness
// Description: Helpers for spawning the registration service in system-tests.
// Purpose: Provide deterministic service startup and teardown for tests.
// Dependencies: model-registry-service, tokio
// ============================================================================

//! ## Overview
//! Helpers for spawning the registration service in system-tests. By default
//! each harness runs an in-process service on an ephemeral loopback port;
//! when `MODEL_REGISTRY_SYSTEM_TEST_BASE_URL` is set the harness targets that
//! live deployment instead and spawns nothing.

use std::net::SocketAddr;
use std::net::TcpListener;
use std::time::Duration;

use model_registry_service::RegistryServer;
use model_registry_service::RegistryServerError;
use model_registry_service::ServiceConfig;
use system_tests::SystemTestConfig;
use tokio::task::JoinHandle;

use super::http_client::RegistryHttpClient;
use super::readiness::wait_for_server_ready;
use super::timeouts;

/// Handle for a spawned (or external) registration service.
pub struct RegistryServiceHandle {
    base_url: String,
    join: Option<JoinHandle<Result<(), RegistryServerError>>>,
}

impl RegistryServiceHandle {
    /// Returns the service base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds an HTTP client for the service.
    pub fn client(&self, timeout: Duration) -> Result<RegistryHttpClient, String> {
        RegistryHttpClient::new(self.base_url.clone(), timeout)
    }

    /// Shuts down the service task. External services are left running.
    pub async fn shutdown(self) {
        if let Some(join) = self.join {
            join.abort();
            let _ = join.await;
        }
    }
}

// Intentionally no Drop impl: allow runtime shutdown to cleanly tear down servers.

/// Returns a free loopback address for test servers.
pub fn allocate_bind_addr() -> Result<SocketAddr, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("failed to bind loopback: {err}"))?;
    let addr =
        listener.local_addr().map_err(|err| format!("failed to read listener address: {err}"))?;
    drop(listener);
    Ok(addr)
}

/// Spawns a registration service and waits until it answers, or targets the
/// configured live deployment when the base URL override is set.
pub async fn spawn_registry_service() -> Result<RegistryServiceHandle, String> {
    let config = SystemTestConfig::load()?;
    if let Some(base_url) = config.base_url {
        return Ok(RegistryServiceHandle {
            base_url,
            join: None,
        });
    }

    let addr = allocate_bind_addr()?;
    let service_config = ServiceConfig {
        bind: addr.to_string(),
        ..ServiceConfig::default()
    };
    let server = RegistryServer::from_config(service_config)
        .map_err(|err| format!("service init failed: {err}"))?;
    let join = tokio::spawn(server.serve());
    let handle = RegistryServiceHandle {
        base_url: format!("http://{addr}"),
        join: Some(join),
    };

    let client = handle.client(timeouts::DEFAULT_HTTP_TIMEOUT)?;
    wait_for_server_ready(&client, timeouts::resolve_timeout(timeouts::DEFAULT_READY_TIMEOUT))
        .await?;
    Ok(handle)
}
