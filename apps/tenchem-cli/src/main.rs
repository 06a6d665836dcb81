//! # tenchem
//!
//! Builds TenChem quotations and company documents as PDF files.
//!
//! ```text
//! tenchem quote --draft quote.toml [--quote-number QT-2025-1001] [--catalog products.csv]
//! tenchem catalog [--catalog products.csv]
//! tenchem brochure
//! tenchem card
//! tenchem all --draft quote.toml
//! tenchem products [--search grout]
//!
//! global: --config <tenchem.toml>  --out <dir>
//! ```

use clap::Parser;
use tenchem_cli::cli::Cli;
use tenchem_cli::RunOutput;

fn main() {
    tenchem_cli::init_tracing();

    match tenchem_cli::run(Cli::parse()) {
        Ok(RunOutput::Saved(paths)) => {
            for path in paths {
                println!("{}", path.display());
            }
        }
        Ok(RunOutput::Listing(lines)) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(err) => {
            eprintln!("error: {}", err.message);
            std::process::exit(err.exit_code());
        }
    }
}
