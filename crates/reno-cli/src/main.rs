use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use reno_core::config::RenoConfig;

mod commands;

#[derive(Parser)]
#[command(name = "reno")]
#[command(about = "Scope confidence and payment schedules for renovation proposals")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file (defaults apply when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (overrides RENO_LOG and the configured level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the Scope Confidence Index for a proposal snapshot
    Score {
        /// Proposal snapshot (JSON)
        proposal: PathBuf,
    },

    /// Derive the payment milestone schedule for a proposal snapshot
    Milestones {
        /// Proposal snapshot (JSON)
        proposal: PathBuf,
    },

    /// Build the full proposal report (SCI + payment schedule)
    Report {
        /// Proposal snapshot (JSON)
        proposal: PathBuf,
    },

    /// List the configured job templates
    Templates,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = RenoConfig::load(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("failed to load config from {}", path.display()),
        None => "failed to load default config".to_string(),
    })?;
    if cli.json_logs {
        config.observability.json_logs = true;
    }
    reno_observability::init_tracing(&config.observability, cli.verbose.then_some("debug"));

    let output = match cli.command {
        Commands::Score { proposal } => commands::score(config, &proposal)?,
        Commands::Milestones { proposal } => commands::milestones(config, &proposal)?,
        Commands::Report { proposal } => commands::report(config, &proposal)?,
        Commands::Templates => commands::templates(&config)?,
    };
    println!("{output}");
    Ok(())
}
