//! aop CLI tool
//!
//! Runs one MIE -> AO query over a pathway network: load the tables named by
//! a TOML configuration, rank up to K causal paths, write the report files.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use aop_core::{config::RunConfig, pipeline};

#[derive(Parser)]
#[command(name = "aop")]
#[command(author, version, about = "Rank causal paths through adverse outcome pathway networks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the query described by a TOML configuration file
    Run {
        /// Path to the run configuration
        #[arg(short, long)]
        config: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, verbose } => {
            if verbose {
                println!("Run configuration: {config:?}");
            }
            let run_config = RunConfig::load(&config)?;
            let summary = pipeline::run(&run_config)?;

            println!("\n=== Run Results ===");
            println!("Paths found: {}", summary.paths_found);
            println!("Relations kept after thresholding: {}", summary.edges_kept);
            for output in &summary.outputs {
                println!("Wrote {}", output.display());
            }
            if summary.paths_found == 0 {
                println!("No causal chain found; outputs contain headers only");
            }
            Ok(())
        }
    }
}
