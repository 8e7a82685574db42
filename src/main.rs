//! Command-line front end for the operation catalog.
//!
//! Builds typed requests and results from JSON bodies offline, printing
//! exactly what the models would put on (or read from) the wire.
//!
//! # Usage
//!
//! ```bash
//! # List known operations
//! svc-models operations
//!
//! # Show the payload a request body produces (unset/unknown keys dropped)
//! echo '{"AppId": "app-123", "Extra": 1}' | svc-models request ExportComponents
//!
//! # Parse a response body into its result model
//! svc-models result TimestreamQuery.CreateScheduledQuery --input response.json
//! ```
//!
//! # Environment Variables
//!
//! See [`svc_models::config`].

use svc_models::catalog::Operation;
use svc_models::config::Config;
use svc_models::wire;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Inspect request and result models without a network.
#[derive(Parser)]
#[command(name = "svc-models")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Render output on a single line
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every known operation
    Operations,

    /// Build a request from a JSON body and print its payload
    Request {
        /// Operation name, bare or service-qualified
        operation: String,

        /// JSON file to read (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Parse a JSON response body into its result model
    Result {
        /// Operation name, bare or service-qualified
        operation: String,

        /// JSON file to read (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    config.apply_overrides(cli.compact);
    config.validate()?;
    init_tracing(&config);
    config.print_summary();

    let pretty = config.is_pretty();

    match cli.command {
        Commands::Operations => list_operations(),
        Commands::Request { operation, input } => {
            let op = resolve(&operation)?;
            let tree = read_tree(input.as_ref())?;
            let payload = op
                .request_payload(&tree)
                .with_context(|| format!("Failed to build {op} request"))?;
            println!("{}", wire::render(&payload, pretty)?);
        }
        Commands::Result { operation, input } => {
            let op = resolve(&operation)?;
            let tree = read_tree(input.as_ref())?;
            let view = op
                .result_view(&tree)
                .with_context(|| format!("Failed to parse {op} result"))?;
            println!("{}", wire::render(&view, pretty)?);
        }
    }

    Ok(())
}

/// Installs the global subscriber; logs go to stderr.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn resolve(name: &str) -> Result<Operation> {
    Operation::from_name(name).with_context(|| {
        let known: Vec<String> = Operation::ALL.iter().map(|op| op.qualified_name()).collect();
        format!("Known operations: {}", known.join(", "))
    })
}

fn read_tree(input: Option<&PathBuf>) -> Result<wire::WireTree> {
    let bytes = match input {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    tracing::debug!(bytes = bytes.len(), "Read input body");

    Ok(wire::parse(&bytes)?)
}

fn list_operations() {
    println!("{}", "Known operations".bright_blue().bold());
    println!();

    for op in Operation::ALL {
        println!(
            "  {}.{}",
            op.service_name().dimmed(),
            op.operation_name().green()
        );
    }
}
