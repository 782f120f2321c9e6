#![deny(missing_docs)]

//! # Apidoc CLI
//!
//! Command Line Interface for the API documentation generator.
//!
//! Supported Commands:
//! - `generate`: Builds the document model from a route manifest and renders OpenAPI v2 YAML.
//! - `paths`: Prints the canonical, fully-prefixed path list of a manifest.

use apidoc_core::AppResult;
use clap::{Parser, Subcommand};

mod generate;
mod paths;

#[derive(Parser, Debug)]
#[clap(author, version, about = "API documentation generator")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a route manifest as an OpenAPI v2 document.
    Generate(generate::GenerateArgs),
    /// List the canonical paths a route manifest produces.
    Paths(paths::PathsArgs),
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate(args) => generate::execute(args)?,
        Commands::Paths(args) => paths::execute(args)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
