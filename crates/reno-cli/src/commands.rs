//! Subcommand handlers. Each returns the pretty-printed JSON to write to stdout.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use reno_core::config::RenoConfig;
use reno_core::models::ProposalSnapshot;
use reno_report::{load_snapshot, ReportBuilder};

fn load(path: &Path) -> Result<ProposalSnapshot> {
    let snapshot = load_snapshot(path)
        .with_context(|| format!("cannot load proposal {}", path.display()))?;
    tracing::debug!(
        proposal_id = %snapshot.id,
        steps = snapshot.steps.len(),
        "proposal snapshot loaded"
    );
    Ok(snapshot)
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output")
}

pub fn score(config: RenoConfig, proposal: &Path) -> Result<String> {
    let snapshot = load(proposal)?;
    let sci = ReportBuilder::new(config).score(&snapshot)?;
    to_json(&sci)
}

pub fn milestones(config: RenoConfig, proposal: &Path) -> Result<String> {
    let snapshot = load(proposal)?;
    let schedule = ReportBuilder::new(config).schedule(&snapshot);
    to_json(&schedule)
}

pub fn report(config: RenoConfig, proposal: &Path) -> Result<String> {
    let snapshot = load(proposal)?;
    let report = ReportBuilder::new(config).build(&snapshot)?;
    to_json(&report)
}

pub fn templates(config: &RenoConfig) -> Result<String> {
    to_json(&config.templates)
}
