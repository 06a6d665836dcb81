//! # TenChem CLI Library
//!
//! Wires configuration, logging and the subcommands together. `main.rs`
//! only parses arguments and reports the outcome.
//!
//! ## Module Organization
//! ```text
//! tenchem_cli/
//! ├── lib.rs          ◄─── You are here (logging setup & dispatch)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── config.rs       ◄─── AppConfig: defaults → tenchem.toml → environment
//! ├── draft.rs        ◄─── Quote draft files replayed as session messages
//! ├── commands.rs     ◄─── quote / catalog / brochure / card / all / products
//! └── error.rs        ◄─── AppError { code, message }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod draft;
pub mod error;

use std::path::PathBuf;

use chrono::Local;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use commands::Context;
use config::AppConfig;
use error::AppResult;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutput {
    /// Paths of the PDFs written.
    Saved(Vec<PathBuf>),
    /// Lines to print.
    Listing(Vec<String>),
}

/// Runs one CLI invocation.
///
/// ## Flow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Load config ─────── --config or platform dir, then TENCHEM_* env   │
/// │  2. Resolve output dir ─ --out beats [output] directory                │
/// │  3. Dispatch ────────── quote | catalog | brochure | card | all |      │
/// │                          products                                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli) -> AppResult<RunOutput> {
    let config = AppConfig::load(cli.config.as_deref())?;
    let out_dir = cli
        .out
        .clone()
        .unwrap_or_else(|| config.output.directory.clone());

    let ctx = Context {
        config,
        out_dir,
        today: Local::now().date_naive(),
    };
    info!(out_dir = ?ctx.out_dir, "TenChem CLI ready");

    let output = match &cli.command {
        Command::Quote(args) => RunOutput::Saved(vec![commands::quote(&ctx, args)?]),
        Command::Catalog(source) => RunOutput::Saved(vec![commands::catalog(&ctx, source)?]),
        Command::Brochure => RunOutput::Saved(vec![commands::brochure(&ctx)?]),
        Command::Card => RunOutput::Saved(vec![commands::card(&ctx)?]),
        Command::All(args) => RunOutput::Saved(commands::all(&ctx, args)?),
        Command::Products { search, source } => {
            RunOutput::Listing(commands::products(&ctx, source, search.as_deref())?)
        }
    };
    Ok(output)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages from every crate
/// - `RUST_LOG=tenchem_render=trace` - Renderer internals only
/// - Default: INFO, DEBUG for the tenchem crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tenchem=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
