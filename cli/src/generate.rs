#![deny(missing_docs)]

//! # Generate Command
//!
//! Implements the pipeline: route manifest -> document model -> OpenAPI v2
//! YAML. The whole run either produces a complete document or aborts; there
//! is no partial output.

use apidoc_core::{build_document, load_manifest_file, AppResult, OapiRenderer};
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the route manifest (YAML).
    #[clap(long)]
    pub manifest: PathBuf,

    /// Output file. Writes to stdout when omitted.
    #[clap(long)]
    pub output: Option<PathBuf>,

    /// OpenAPI output version. Only version 2 is implemented.
    #[clap(long, default_value_t = 2)]
    pub oapi_version: u32,
}

/// Executes the generate pipeline.
pub fn execute(args: &GenerateArgs) -> AppResult<()> {
    // The renderer validates the requested version before any work happens.
    let renderer = OapiRenderer::new(args.oapi_version)?;

    let manifest = load_manifest_file(&args.manifest)?;
    let document = build_document(&manifest)?;
    let rendered = renderer.render(&document, &manifest.info)?;

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            println!("OpenAPI document written to {:?}", path);
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
