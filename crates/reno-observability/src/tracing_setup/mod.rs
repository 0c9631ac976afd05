//! Tracing setup — structured logging with span definitions.

pub mod spans;

use reno_core::config::defaults::DEFAULT_LOG_LEVEL;
use reno_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive that beats the config.
pub const LOG_ENV_VAR: &str = "RENO_LOG";

/// Resolve the filter: an explicit `level_override` (the CLI's `--verbose`),
/// then `RENO_LOG`, then the configured level, then `info`.
pub fn build_filter(config: &ObservabilityConfig, level_override: Option<&str>) -> EnvFilter {
    if let Some(filter) = level_override.and_then(|level| EnvFilter::try_new(level).ok()) {
        return filter;
    }
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for command output.
///
/// Returns `false` when a subscriber was already installed.
pub fn init_tracing(config: &ObservabilityConfig, level_override: Option<&str>) -> bool {
    let filter = build_filter(config, level_override);

    let installed = if config.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
    };
    installed.is_ok()
}
