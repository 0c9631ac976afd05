//! Error handling for the proposal scoring workspace.
//! One error enum per subsystem, `thiserror` only.
//!
//! The scoring and milestone functions themselves are total; errors only
//! arise at the edges (configuration, snapshot loading, template lookup).

pub mod config_error;
pub mod reno_error;

pub use config_error::ConfigError;
pub use reno_error::{RenoError, RenoResult};
