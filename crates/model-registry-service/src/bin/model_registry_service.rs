// crates/model-registry-service/src/bin/model_registry_service.rs
// ============================================================================
// Module: Model Registry Service Binary
// Description: HTTP server runner for the model registration service.
// Purpose: Provide a standalone binary serving the registration contract.
// Dependencies: model-registry-service, tokio
// ============================================================================

//! Standalone registration service binary.

use model_registry_service::RegistryServer;
use model_registry_service::ServiceConfig;

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("model-registry-service: config load failed: {err}");
            std::process::exit(1);
        }
    };

    let server = match RegistryServer::from_config(config) {
        Ok(server) => server,
        Err(err) => {
            eprintln!("model-registry-service: init failed: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = server.serve().await {
        eprintln!("model-registry-service: server failed: {err}");
        std::process::exit(1);
    }
}
