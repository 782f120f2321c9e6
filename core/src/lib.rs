#![deny(missing_docs)]

//! # Apidoc Core
//!
//! Core library for the API documentation generator: expands declarative
//! route patterns into concrete path templates, classifies route fields into
//! path and body parameters, aggregates everything into a canonical document
//! model and renders it as OpenAPI v2 YAML.

/// Shared error types.
pub mod error;

/// Documentation model and aggregation.
pub mod document;

/// Route pattern expansion.
pub mod expand;

/// Field-type to documentation-type mapping.
pub mod type_mapping;

/// Route definitions and path/body field inference.
pub mod loader;

/// YAML route manifest parsing.
pub mod manifest;

/// OpenAPI v2 rendering.
pub mod render;

pub use document::{path_placeholders, Document, HttpMethod, Method, Path, Property, Response};
pub use error::{AppError, AppResult};
pub use expand::{expand, expand_with_limit, DEFAULT_MAX_VARIANTS};
pub use loader::{
    build_route, load_backend, FieldDef, OperationKind, RouteDefinition, RouteSource,
};
pub use manifest::{
    build_document, load_manifest_file, parse_manifest, Manifest, ManifestInfo, ManualMethod,
    ManualPath, ManualProperty, ManualResponse, MountEntry,
};
pub use render::OapiRenderer;
pub use type_mapping::{convert_type, DocType, FieldType};
