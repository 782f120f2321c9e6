#![deny(missing_docs)]

//! # OpenAPI v2 Rendering
//!
//! Serializes a finished [`Document`] as Swagger 2.0 YAML. Rendering is pure
//! formatting: the canonical path order comes from
//! [`Document::path_list`] and nothing is re-derived or re-ordered here.

use crate::document::{Document, Method, Path, Property};
use crate::error::{AppError, AppResult};
use crate::manifest::ManifestInfo;
use indexmap::IndexMap;
use serde::Serialize;

/// Renders documents as OpenAPI YAML.
pub struct OapiRenderer {
    version: u32,
}

impl OapiRenderer {
    /// Creates a renderer for the requested OpenAPI major version.
    ///
    /// Only version 2 is implemented; any other value fails here, before any
    /// generation work happens.
    pub fn new(version: u32) -> AppResult<Self> {
        if version != 2 {
            return Err(AppError::UnsupportedVersion(version));
        }

        Ok(OapiRenderer { version })
    }

    /// Renders a document to YAML text.
    pub fn render(&self, doc: &Document, info: &ManifestInfo) -> AppResult<String> {
        let shim = OapiDocument::build(self.version, doc, info);
        serde_yaml::to_string(&shim)
            .map_err(|e| AppError::General(format!("failed to serialize document: {}", e)))
    }
}

// Serialization shims mirroring the Swagger 2.0 layout. Field order here is
// the order in the emitted YAML.

#[derive(Serialize)]
struct OapiDocument {
    swagger: String,
    info: OapiInfo,
    paths: IndexMap<String, IndexMap<String, OapiOperation>>,
}

#[derive(Serialize)]
struct OapiInfo {
    title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    description: String,
    version: String,
}

#[derive(Serialize)]
struct OapiOperation {
    #[serde(skip_serializing_if = "String::is_empty")]
    summary: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    description: String,
    produces: Vec<&'static str>,
    tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    parameters: Vec<OapiParameter>,
    responses: IndexMap<String, OapiResponse>,
}

#[derive(Serialize)]
struct OapiParameter {
    name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    description: String,
    #[serde(rename = "in")]
    location: &'static str,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    schema: Option<OapiSchema>,
}

#[derive(Serialize)]
struct OapiSchema {
    #[serde(rename = "type")]
    type_: &'static str,
    properties: IndexMap<String, OapiSchemaProperty>,
}

#[derive(Serialize)]
struct OapiSchemaProperty {
    #[serde(skip_serializing_if = "String::is_empty")]
    description: String,
    #[serde(rename = "type")]
    type_: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<OapiItems>,
}

#[derive(Serialize)]
struct OapiItems {
    #[serde(rename = "type")]
    type_: String,
}

#[derive(Serialize)]
struct OapiResponse {
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    examples: Option<IndexMap<&'static str, String>>,
}

impl OapiDocument {
    fn build(version: u32, doc: &Document, info: &ManifestInfo) -> Self {
        let mut paths = IndexMap::new();
        for path in doc.path_list() {
            paths.insert(path.pattern.clone(), build_operations(&path));
        }

        OapiDocument {
            swagger: format!("{}.0", version),
            info: OapiInfo {
                title: info.title.clone(),
                description: info.description.clone(),
                version: doc.version.clone(),
            },
            paths,
        }
    }
}

fn build_operations(path: &Path) -> IndexMap<String, OapiOperation> {
    let mut operations = IndexMap::new();
    for (verb, method) in &path.methods {
        operations.insert(
            verb.to_string().to_lowercase(),
            build_operation(path, method),
        );
    }

    operations
}

fn build_operation(path: &Path, method: &Method) -> OapiOperation {
    let mut parameters = Vec::new();
    for field in &method.path_fields {
        parameters.push(OapiParameter {
            name: field.name.clone(),
            description: field.description.clone(),
            location: "path",
            type_: Some(field.type_.clone()),
            required: Some(true),
            schema: None,
        });
    }

    if !method.body_fields.is_empty() {
        let mut properties = IndexMap::new();
        for field in &method.body_fields {
            properties.insert(field.name.clone(), build_schema_property(field));
        }
        parameters.push(OapiParameter {
            name: "Data".to_string(),
            description: String::new(),
            location: "body",
            type_: None,
            required: None,
            schema: Some(OapiSchema {
                type_: "object",
                properties,
            }),
        });
    }

    let mut responses = IndexMap::new();
    for resp in &method.responses {
        let examples = if resp.example.is_empty() {
            None
        } else {
            Some(IndexMap::from([("application/json", resp.example.clone())]))
        };
        responses.insert(
            resp.code.to_string(),
            OapiResponse {
                description: resp.description.clone(),
                examples,
            },
        );
    }

    OapiOperation {
        summary: method.summary.clone(),
        description: method.description.clone(),
        produces: vec!["application/json"],
        tags: vec![path.prefix().to_string()],
        parameters,
        responses,
    }
}

fn build_schema_property(field: &Property) -> OapiSchemaProperty {
    OapiSchemaProperty {
        description: field.description.clone(),
        type_: field.type_.clone(),
        items: field.sub_type.clone().map(|sub| OapiItems { type_: sub }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{HttpMethod, Method, Path, Response};
    use crate::error::AppError;

    fn sample_document() -> Document {
        let mut doc = Document::new("0.9.0");

        let mut init = Path::new("init");
        let mut put = Method::new("Initializes the service.");
        put.body_fields = vec![
            Property::new("pgp_keys", "array/string", "PGP public keys."),
            Property::new("secret_shares", "number", "Number of shares."),
        ];
        put.add_response(200, r#"{"keys": ["one", "two"]}"#);
        init.add_method(HttpMethod::Put, put);
        doc.add_path("sys", vec![init]);

        let mut config = Path::new("{name}/config");
        let mut get = Method::new("Reads a config.");
        get.path_fields = vec![Property::new("name", "string", "Config name.")];
        get.responses = vec![Response::ok()];
        config.add_method(HttpMethod::Get, get);
        doc.add_path("aws", vec![config]);

        doc
    }

    fn sample_info() -> ManifestInfo {
        ManifestInfo {
            title: "Example API".into(),
            description: "Example description.".into(),
        }
    }

    #[test]
    fn test_only_version_2_is_supported() {
        assert!(OapiRenderer::new(2).is_ok());
        let res = OapiRenderer::new(3);
        assert!(matches!(res, Err(AppError::UnsupportedVersion(3))));
    }

    #[test]
    fn test_render_basic_structure() {
        let renderer = OapiRenderer::new(2).unwrap();
        let out = renderer.render(&sample_document(), &sample_info()).unwrap();

        assert!(out.starts_with("swagger: '2.0'\n") || out.starts_with("swagger: \"2.0\"\n"));
        assert!(out.contains("title: Example API"));
        assert!(out.contains("version: 0.9.0"));
        assert!(out.contains("/aws/{name}/config:"));
        assert!(out.contains("/sys/init:"));
        assert!(out.contains("put:"));
        assert!(out.contains("in: path"));
        assert!(out.contains("required: true"));
        assert!(out.contains("name: Data"));
        assert!(out.contains("in: body"));
        // array body field carries its element sub-type
        assert!(out.contains("items:"));
        assert!(out.contains("application/json"));
    }

    #[test]
    fn test_render_orders_paths_canonically() {
        let renderer = OapiRenderer::new(2).unwrap();
        let out = renderer.render(&sample_document(), &sample_info()).unwrap();

        let aws = out.find("/aws/{name}/config").unwrap();
        let sys = out.find("/sys/init").unwrap();
        assert!(aws < sys);
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = OapiRenderer::new(2).unwrap();
        let doc = sample_document();
        let info = sample_info();
        assert_eq!(
            renderer.render(&doc, &info).unwrap(),
            renderer.render(&doc, &info).unwrap()
        );
    }
}
