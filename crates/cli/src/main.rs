//! Sienapipe - Main Entry Point
//! Utility commands for the SIENA structural pipeline: run external tools
//! with uniform diagnostics, extract ligands from ensemble PDB files.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sienapipe_core::application::extract_ligands;
use sienapipe_core::domain::CommandSpec;
use sienapipe_core::port::CommandRunner;
use sienapipe_infra_system::ProcessCommandRunner;

#[derive(Parser)]
#[command(name = "sienapipe", version, about = "Utility layer for the SIENA structural pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract ligand identifiers from a SIENA-produced PDB file
    Ligands {
        /// Path to the ensemble member PDB file
        pdb: PathBuf,

        /// Print the identifiers as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Run an external tool, capturing its output
    Exec {
        /// Step label used in diagnostics
        #[arg(long)]
        step: String,

        /// Working directory for the child process
        #[arg(long)]
        cwd: Option<PathBuf>,

        /// Print the full result (exit code and streams) as JSON
        #[arg(long)]
        json: bool,

        /// Command tokens: executable followed by its arguments
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },
}

fn init_logging() {
    let log_format = std::env::var("SIENAPIPE_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .expect("Failed to create env filter");

    match log_format.as_str() {
        "json" => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            // Development: pretty formatting
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Ligands { pdb, json } => {
            let ligands = extract_ligands(&pdb)?;
            info!(count = ligands.len(), file = %pdb.display(), "Ligands found");
            if json {
                println!("{}", serde_json::to_string_pretty(&ligands)?);
            } else {
                for ligand in &ligands {
                    println!("{ligand}");
                }
            }
        }
        Commands::Exec {
            step,
            cwd,
            json,
            command,
        } => {
            let mut spec = CommandSpec::new(step, command)?;
            if let Some(dir) = cwd {
                spec = spec.with_cwd(dir);
            }

            let runner = ProcessCommandRunner::new();
            let result = runner.run(&spec)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if !result.stdout.is_empty() {
                print!("{}", result.stdout);
            }
        }
    }

    Ok(())
}
