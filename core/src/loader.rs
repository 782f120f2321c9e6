#![deny(missing_docs)]

//! # Route Loading
//!
//! Builds documentation paths from declarative route definitions. Path and
//! body parameters are inferred per expanded template: fields named by a
//! `{placeholder}` in the template become path fields, and for mutating
//! verbs every remaining declared field is assumed to travel in the request
//! body. That exclusion rule is an inference heuristic, not a body-schema
//! declaration, and can misclassify fields a route only reads from the query
//! string; it is kept because the route tables carry no richer information.

use crate::document::{path_placeholders, Document, HttpMethod, Method, Path, Property, Response};
use crate::error::AppResult;
use crate::expand::expand;
use crate::type_mapping::{convert_type, FieldType};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// Operation kinds a route can support.
///
/// The `Ord` derive follows declaration order; [`build_route`] processes
/// kinds in that order, which makes the read/list collapse onto GET
/// deterministic: a route declaring both keeps the list-built method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Create a resource (POST).
    Create,
    /// Update a resource (PUT).
    Update,
    /// Delete a resource (DELETE).
    Delete,
    /// Read a single resource (GET).
    Read,
    /// List resources (GET, same verb as read).
    List,
}

impl OperationKind {
    /// The HTTP verb an operation kind is documented under.
    pub fn http_method(self) -> HttpMethod {
        match self {
            OperationKind::Create => HttpMethod::Post,
            OperationKind::Update => HttpMethod::Put,
            OperationKind::Delete => HttpMethod::Delete,
            OperationKind::Read | OperationKind::List => HttpMethod::Get,
        }
    }

    fn default_response(self) -> Response {
        match self {
            OperationKind::Read | OperationKind::List => Response::ok(),
            _ => Response::no_content(),
        }
    }
}

/// Type and description of one declared field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldDef {
    /// The declared field kind.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Human description.
    #[serde(default)]
    pub description: String,
}

/// Declarative description of one endpoint: its dispatch pattern, supported
/// operations and typed parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteDefinition {
    /// The raw, regex-flavored route pattern.
    pub pattern: String,
    /// Operation kinds the endpoint supports.
    #[serde(default)]
    pub operations: BTreeSet<OperationKind>,
    /// Declared fields by name. A `BTreeMap` keeps iteration deterministic.
    #[serde(default)]
    pub fields: BTreeMap<String, FieldDef>,
    /// One-line summary.
    #[serde(default)]
    pub synopsis: String,
    /// Longer description.
    #[serde(default)]
    pub description: String,
}

/// A backend collaborator that contributes route definitions.
pub trait RouteSource {
    /// The route definitions this backend declares.
    fn routes(&self) -> Vec<RouteDefinition>;
}

/// Builds the documentation paths for one route definition.
///
/// The pattern is expanded into concrete templates; each template gets one
/// method per declared operation kind. Different expansion variants of the
/// same route can carry different path fields, since a field only counts as
/// a path field when its placeholder survives in that variant.
pub fn build_route(route: &RouteDefinition) -> AppResult<Vec<Path>> {
    let mut doc_paths = Vec::new();

    for template in expand(&route.pattern)? {
        let placeholders: BTreeSet<String> =
            path_placeholders(&template).into_iter().collect();

        let mut path = Path::new(&template);
        for op in &route.operations {
            let verb = op.http_method();
            let mut method = Method::new(&route.synopsis);
            method.description = route.description.clone();
            method.responses = vec![op.default_response()];

            for name in &placeholders {
                // Placeholders with no declared field carry no type or
                // description and are left out of the parameter list.
                let Some(field) = route.fields.get(name) else {
                    continue;
                };
                method.path_fields.push(make_property(name, field)?);
            }

            if matches!(verb, HttpMethod::Post | HttpMethod::Put) {
                for (name, field) in &route.fields {
                    if placeholders.contains(name) {
                        continue;
                    }
                    method.body_fields.push(make_property(name, field)?);
                }
            }

            method.path_fields.sort_by(|a, b| a.name.cmp(&b.name));
            method.body_fields.sort_by(|a, b| a.name.cmp(&b.name));

            path.add_method(verb, method);
        }

        if !path.methods.is_empty() {
            doc_paths.push(path);
        }
    }

    Ok(doc_paths)
}

/// Builds every route of a backend and appends the result under a mount.
pub fn load_backend(
    doc: &mut Document,
    mount: &str,
    source: &impl RouteSource,
) -> AppResult<()> {
    for route in source.routes() {
        let paths = build_route(&route)?;
        doc.add_path(mount, paths);
    }

    Ok(())
}

fn make_property(name: &str, field: &FieldDef) -> AppResult<Property> {
    let doc_type = convert_type(field.field_type)?;

    Ok(Property {
        name: name.to_string(),
        type_: doc_type.type_.to_string(),
        sub_type: doc_type.sub_type.map(str::to_string),
        description: field.description.clone(),
    })
}
