//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "tenchem", version, about = "TenChem quotation builder and document generator")]
pub struct Cli {
    /// Config file (defaults to tenchem.toml in the platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output directory for generated PDFs
    #[arg(long, global = true, value_name = "DIR")]
    pub out: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a quotation PDF from a draft file
    Quote(QuoteArgs),

    /// Generate the product catalog PDF
    Catalog(CatalogSource),

    /// Generate the company brochure PDF
    Brochure,

    /// Generate the business card PDF
    Card,

    /// Generate the quotation and every company document
    All(QuoteArgs),

    /// List catalog products, optionally filtered
    Products {
        /// Case-insensitive match on product name or id
        #[arg(long)]
        search: Option<String>,

        #[command(flatten)]
        source: CatalogSource,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct CatalogSource {
    /// Product catalog CSV (defaults to the built-in TenChem range)
    #[arg(long, value_name = "CSV")]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct QuoteArgs {
    /// Quote draft (TOML with [customer] and [[items]])
    #[arg(long, value_name = "TOML")]
    pub draft: PathBuf,

    /// Use this quote number instead of generating one
    #[arg(long)]
    pub quote_number: Option<String>,

    #[command(flatten)]
    pub source: CatalogSource,
}
