// crates/model-registry-service/src/config.rs
// ============================================================================
// Module: Service Configuration
// Description: Environment-backed configuration for the registration service.
// Purpose: Centralize bind and body-limit settings with strict parsing.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Service configuration is read from environment variables and mapped into a
//! small typed structure. Values are parsed with strict UTF-8 enforcement and
//! empty values are rejected so misconfiguration fails closed at startup
//! rather than surfacing as odd runtime behavior.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::net::SocketAddr;

use thiserror::Error;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default bind address, matching the observed deployment port.
const DEFAULT_BIND: &str = "127.0.0.1:32007";

/// Default maximum request body size in bytes.
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for service configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceEnv {
    /// Bind address override.
    Bind,
    /// Maximum request body size override in bytes.
    MaxBodyBytes,
}

impl ServiceEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bind => "MODEL_REGISTRY_BIND",
            Self::MaxBodyBytes => "MODEL_REGISTRY_MAX_BODY_BYTES",
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment value failed strict parsing.
    #[error("invalid environment value: {0}")]
    Env(String),
    /// A configuration value failed validation.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Socket address the HTTP server binds to.
    pub bind: String,
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServiceConfig {
    /// Loads configuration from environment variables, falling back to
    /// defaults for unset keys.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an environment value is not valid UTF-8,
    /// is empty, or fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind = read_env_nonempty(ServiceEnv::Bind.as_str())?
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let max_body_bytes = read_env_nonempty(ServiceEnv::MaxBodyBytes.as_str())?
            .map(|value| parse_max_body_bytes(&value))
            .transpose()?
            .unwrap_or(DEFAULT_MAX_BODY_BYTES);
        let config = Self {
            bind,
            max_body_bytes,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the bind address does not parse
    /// or the body limit is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::Invalid(format!("bind address not parseable: {}", self.bind)));
        }
        if self.max_body_bytes == 0 {
            return Err(ConfigError::Invalid("max_body_bytes must be greater than zero".to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable, enforcing UTF-8 validity and rejecting
/// empty values.
fn read_env_nonempty(name: &str) -> Result<Option<String>, ConfigError> {
    let value = std::env::var_os(name)
        .map(|raw| raw.into_string().map_err(|_| ConfigError::Env(format!("{name} must be valid UTF-8"))))
        .transpose()?;
    match value {
        Some(value) if value.trim().is_empty() => {
            Err(ConfigError::Env(format!("{name} must not be empty")))
        }
        other => Ok(other),
    }
}

/// Parses a positive byte count from an environment value.
fn parse_max_body_bytes(raw: &str) -> Result<usize, ConfigError> {
    let bytes: usize = raw.trim().parse().map_err(|_| {
        ConfigError::Env(format!(
            "{} must be a positive integer number of bytes",
            ServiceEnv::MaxBodyBytes.as_str()
        ))
    })?;
    if bytes == 0 {
        return Err(ConfigError::Env(format!(
            "{} must be greater than zero",
            ServiceEnv::MaxBodyBytes.as_str()
        )));
    }
    Ok(bytes)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
