#![deny(missing_docs)]

//! # Document Model
//!
//! Intermediate Representation (IR) structures for a set of API
//! documentation. The organization roughly follows OpenAPI but is not rigidly
//! tied to it; it is a format from which OpenAPI or other targets can be
//! rendered. Everything here is built in one generation pass, mutated only by
//! append operations, and discarded after rendering.

use indexmap::IndexMap;
use regex::Regex;
use serde::Deserialize;
use std::fmt;
use std::sync::OnceLock;

/// HTTP verbs a documented method can be registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// GET
    Get,
    /// PUT
    Put,
    /// POST
    Post,
    /// DELETE
    Delete,
    /// HEAD
    Head,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
        };
        write!(f, "{}", name)
    }
}

/// A whole documentation set: a version tag plus the paths collected under
/// each mount prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Version tag reported in the rendered document header.
    pub version: String,
    /// Paths grouped by mount prefix. Contributions to one mount are
    /// cumulative; nothing here ever overwrites an earlier append.
    pub mounts: IndexMap<String, Vec<Path>>,
}

impl Document {
    /// Creates an empty document carrying the given version tag.
    pub fn new(version: impl Into<String>) -> Self {
        Document {
            version: version.into(),
            mounts: IndexMap::new(),
        }
    }

    /// Appends paths to a mount's sequence.
    pub fn add_path(&mut self, mount: &str, paths: impl IntoIterator<Item = Path>) {
        self.mounts.entry(mount.to_string()).or_default().extend(paths);
    }

    /// Returns a flat list of fully prefixed paths.
    ///
    /// Each pattern is prefixed with `/<mount>/` and the combined list is
    /// sorted ascending by the prefixed pattern, so repeated runs over
    /// unchanged input render byte-identically.
    pub fn path_list(&self) -> Vec<Path> {
        let mut paths = Vec::new();
        for (mount, entries) in &self.mounts {
            for entry in entries {
                let mut path = entry.clone();
                path.pattern = format!("/{}/{}", mount, path.pattern);
                paths.push(path);
            }
        }

        paths.sort_by(|a, b| a.pattern.cmp(&b.pattern));
        paths
    }
}

/// A single concrete path template and the methods registered on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// The expanded path template, without the mount prefix.
    pub pattern: String,
    /// Methods keyed by verb. A second registration under one verb replaces
    /// the first (documented last-wins policy).
    pub methods: IndexMap<HttpMethod, Method>,
}

impl Path {
    /// Creates a path with no methods yet.
    pub fn new(pattern: impl Into<String>) -> Self {
        Path {
            pattern: pattern.into(),
            methods: IndexMap::new(),
        }
    }

    /// Registers a method under a verb. Last registration wins.
    pub fn add_method(&mut self, verb: HttpMethod, method: Method) {
        self.methods.insert(verb, method);
    }

    /// First segment of the pattern, used for grouping in rendered output.
    pub fn prefix(&self) -> &str {
        self.pattern
            .trim_start_matches('/')
            .split('/')
            .next()
            .unwrap_or("")
    }
}

/// One documented operation on a path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Method {
    /// One-line summary.
    pub summary: String,
    /// Longer description.
    pub description: String,
    /// Parameters sourced from the URL path, sorted by name.
    pub path_fields: Vec<Property>,
    /// Parameters sourced from the request payload, sorted by name.
    /// Populated only for POST and PUT methods.
    pub body_fields: Vec<Property>,
    /// Documented responses.
    pub responses: Vec<Response>,
}

impl Method {
    /// Creates a method with the given summary and nothing else.
    pub fn new(summary: impl Into<String>) -> Self {
        Method {
            summary: summary.into(),
            ..Method::default()
        }
    }

    /// Appends a response, deriving the stereotype description from the
    /// status code.
    pub fn add_response(&mut self, code: u16, example: &str) {
        let description = match code {
            200 => "OK",
            204 => "empty body",
            _ => "",
        };
        self.responses.push(Response::new(code, description, example));
    }
}

/// A named, typed parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Parameter name.
    pub name: String,
    /// Documentation type name.
    pub type_: String,
    /// Element sub-type, meaningful only when `type_` is "array".
    pub sub_type: Option<String>,
    /// Human description.
    pub description: String,
}

impl Property {
    /// Creates a property from a combined type token.
    ///
    /// Hand-authored paths declare array types as `"array/string"`; the part
    /// after the slash becomes the element sub-type.
    pub fn new(
        name: impl Into<String>,
        type_token: &str,
        description: impl Into<String>,
    ) -> Self {
        let mut parts = type_token.splitn(2, '/');
        let type_ = parts.next().unwrap_or("").to_string();
        let sub_type = match parts.next() {
            Some(sub) if type_ == "array" => Some(sub.to_string()),
            _ => None,
        };

        Property {
            name: name.into(),
            type_,
            sub_type,
            description: description.into(),
        }
    }
}

/// A documented response for one status code.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// HTTP status code.
    pub code: u16,
    /// Human description.
    pub description: String,
    /// Literal example body, empty when absent.
    pub example: String,
}

impl Response {
    /// Creates a response, normalizing the example body (trimmed, tabs
    /// widened to two spaces).
    pub fn new(code: u16, description: impl Into<String>, example: &str) -> Self {
        Response {
            code,
            description: description.into(),
            example: example.trim().replace('\t', "  "),
        }
    }

    /// The standard 200 response.
    pub fn ok() -> Self {
        Response::new(200, "OK", "")
    }

    /// The standard 204 response.
    pub fn no_content() -> Self {
        Response::new(204, "empty body", "")
    }
}

/// Extracts the `{name}` placeholder names appearing in a path template, in
/// order of appearance.
pub fn path_placeholders(pattern: &str) -> Vec<String> {
    static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();
    let re = PLACEHOLDER_RE.get_or_init(|| Regex::new(r"\{(\w+)\}").expect("Invalid regex"));

    re.captures_iter(pattern).map(|caps| caps[1].to_string()).collect()
}
