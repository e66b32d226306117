// system-tests/tests/helpers/timeouts.rs
// ============================================================================
// Module: System Test Timeouts
// Description: Centralized timeout configuration with env overrides.
// Purpose: Keep system-test timeouts consistent and configurable across suites.
// ============================================================================

use std::time::Duration;

use system_tests::SystemTestConfig;

/// Default HTTP timeout for system-test requests.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Default readiness timeout for spawned services.
pub const DEFAULT_READY_TIMEOUT: Duration = Duration::from_secs(5);

/// Returns the effective timeout, honoring the environment override when set.
/// The override acts as a minimum to avoid shortening explicitly longer test
/// timeouts.
#[must_use]
pub fn resolve_timeout(requested: Duration) -> Duration {
    SystemTestConfig::load().map_or(requested, |config| {
        config.timeout.map_or(requested, |override_timeout| {
            std::cmp::max(requested, override_timeout)
        })
    })
}
