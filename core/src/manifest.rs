#![deny(missing_docs)]

//! # Route Manifests
//!
//! Deserializes the YAML manifest that drives a generation run. A manifest
//! groups contributions by mount prefix; each mount carries declarative
//! route definitions (fed through the route loader) and, for endpoints whose
//! behavior cannot be inferred from route metadata, hand-written path
//! literals with explicit verbs, fields and responses.

use crate::document::{Document, HttpMethod, Method, Path, Property, Response};
use crate::error::{AppError, AppResult};
use crate::loader::{build_route, RouteDefinition};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;

/// Top-level manifest structure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Manifest {
    /// Version tag for the rendered document. Defaults to this crate's
    /// version when omitted.
    #[serde(default)]
    pub version: Option<String>,
    /// Document header metadata.
    #[serde(default)]
    pub info: ManifestInfo,
    /// Contributions keyed by mount prefix.
    #[serde(default)]
    pub mounts: IndexMap<String, MountEntry>,
}

/// Title and description rendered into the document header.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ManifestInfo {
    /// Document title.
    #[serde(default)]
    pub title: String,
    /// Document description.
    #[serde(default)]
    pub description: String,
}

/// Everything one mount contributes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MountEntry {
    /// Declarative route definitions, expanded and classified by the loader.
    #[serde(default)]
    pub routes: Vec<RouteDefinition>,
    /// Hand-written path literals, merged as-is.
    #[serde(default)]
    pub paths: Vec<ManualPath>,
}

/// A hand-written path literal.
///
/// These bypass pattern expansion and field inference entirely. Verb keys
/// are validated by the typed [`HttpMethod`] deserialization; beyond that the
/// content is trusted as authored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManualPath {
    /// The concrete path template, without the mount prefix.
    pub pattern: String,
    /// Methods keyed by verb.
    #[serde(default)]
    pub methods: IndexMap<HttpMethod, ManualMethod>,
}

/// A hand-written method.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ManualMethod {
    /// One-line summary.
    #[serde(default)]
    pub summary: String,
    /// Longer description.
    #[serde(default)]
    pub description: String,
    /// Explicit path parameters.
    #[serde(default)]
    pub path_fields: Vec<ManualProperty>,
    /// Explicit body parameters.
    #[serde(default)]
    pub body_fields: Vec<ManualProperty>,
    /// Explicit responses. An omitted description falls back to the status
    /// code stereotype.
    #[serde(default)]
    pub responses: Vec<ManualResponse>,
}

/// A hand-written parameter. The type accepts the combined `"array/string"`
/// token form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManualProperty {
    /// Parameter name.
    pub name: String,
    /// Combined documentation type token.
    #[serde(rename = "type")]
    pub type_: String,
    /// Human description.
    #[serde(default)]
    pub description: String,
}

/// A hand-written response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManualResponse {
    /// HTTP status code.
    pub code: u16,
    /// Human description; stereotype text is substituted when omitted.
    #[serde(default)]
    pub description: Option<String>,
    /// Literal example body.
    #[serde(default)]
    pub example: Option<String>,
}

/// Parses a manifest from YAML text.
pub fn parse_manifest(yaml: &str) -> AppResult<Manifest> {
    serde_yaml::from_str(yaml)
        .map_err(|e| AppError::Manifest(format!("failed to parse route manifest: {}", e)))
}

/// Reads and parses a manifest file.
pub fn load_manifest_file(path: impl AsRef<std::path::Path>) -> AppResult<Manifest> {
    let yaml = fs::read_to_string(path)?;
    parse_manifest(&yaml)
}

/// Builds the complete document for a manifest.
///
/// Generated routes are appended first, hand-written paths after them; both
/// accumulate under the same mount key.
pub fn build_document(manifest: &Manifest) -> AppResult<Document> {
    let version = manifest
        .version
        .clone()
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());
    let mut doc = Document::new(version);

    for (mount, entry) in &manifest.mounts {
        for route in &entry.routes {
            let paths = build_route(route)?;
            doc.add_path(mount, paths);
        }

        let manual: Vec<Path> = entry.paths.iter().map(build_manual_path).collect();
        doc.add_path(mount, manual);
    }

    Ok(doc)
}

fn build_manual_path(manual: &ManualPath) -> Path {
    let mut path = Path::new(&manual.pattern);

    for (verb, def) in &manual.methods {
        let mut method = Method::new(&def.summary);
        method.description = def.description.clone();
        method.path_fields = def.path_fields.iter().map(to_property).collect();
        method.body_fields = def.body_fields.iter().map(to_property).collect();

        for resp in &def.responses {
            let example = resp.example.as_deref().unwrap_or("");
            match &resp.description {
                Some(description) => {
                    method
                        .responses
                        .push(Response::new(resp.code, description, example));
                }
                None => method.add_response(resp.code, example),
            }
        }

        path.add_method(*verb, method);
    }

    path
}

fn to_property(prop: &ManualProperty) -> Property {
    Property::new(&prop.name, &prop.type_, &prop.description)
}
