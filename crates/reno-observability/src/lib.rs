//! # reno-observability
//!
//! Structured logging for the scoring workspace: subscriber setup driven by
//! [`ObservabilityConfig`](reno_core::config::ObservabilityConfig) and span
//! macros for scoring, milestone derivation and report assembly.

pub mod tracing_setup;

pub use tracing_setup::{build_filter, init_tracing, spans::names, LOG_ENV_VAR};
