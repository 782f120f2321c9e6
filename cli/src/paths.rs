#![deny(missing_docs)]

//! # Paths Command
//!
//! Prints the canonical, fully-prefixed path list of a route manifest with
//! the verbs registered on each path. Useful for diffing route coverage
//! without rendering a full document.

use apidoc_core::{build_document, load_manifest_file, AppResult};
use std::path::PathBuf;

/// Arguments for the paths command.
#[derive(clap::Args, Debug, Clone)]
pub struct PathsArgs {
    /// Path to the route manifest (YAML).
    #[clap(long)]
    pub manifest: PathBuf,
}

/// Executes the paths listing.
pub fn execute(args: &PathsArgs) -> AppResult<()> {
    let manifest = load_manifest_file(&args.manifest)?;
    let document = build_document(&manifest)?;

    for path in document.path_list() {
        let verbs: Vec<String> = path.methods.keys().map(|v| v.to_string()).collect();
        println!("{}  [{}]", path.pattern, verbs.join(", "));
    }

    Ok(())
}
