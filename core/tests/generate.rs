use apidoc_core::{
    build_document, load_manifest_file, parse_manifest, HttpMethod, OapiRenderer,
};
use pretty_assertions::assert_eq;
use std::fs;

const MANIFEST: &str = r#"
version: "0.9.0"
info:
  title: Example API
  description: Full access to the example service over HTTP.
mounts:
  sys:
    routes:
      - pattern: generate-root/attempt
        operations: [read]
        synopsis: Reads the configuration of the current root generation attempt.
      - pattern: '(?P<name>\w+)/config'
        operations: [update]
        synopsis: Updates a named configuration entry.
        fields:
          key:
            type: string
            description: The configuration key.
          value:
            type: string
            description: The configuration value.
    paths:
      - pattern: health
        methods:
          GET:
            summary: Returns the health status.
            responses:
              - code: 200
                description: initialized, unsealed, and active
              - code: 503
                description: sealed
  aws:
    routes:
      - pattern: 'roles(/(?P<name>[^/]+))?'
        operations: [create, read]
        synopsis: Manages named roles.
        fields:
          name:
            type: name-string
            description: Name of the role.
          policy_arns:
            type: comma-string-slice
            description: ARNs of policies to attach.
"#;

#[test]
fn test_end_to_end_document_shape() {
    let manifest = parse_manifest(MANIFEST).unwrap();
    let doc = build_document(&manifest).unwrap();

    let list = doc.path_list();
    let patterns: Vec<&str> = list.iter().map(|p| p.pattern.as_str()).collect();
    assert_eq!(
        patterns,
        vec![
            "/aws/roles",
            "/aws/roles/{name}",
            "/sys/generate-root/attempt",
            "/sys/health",
            "/sys/{name}/config",
        ]
    );

    // Plain read route: one GET, no fields, stock OK response.
    let attempt = &list[2];
    assert_eq!(attempt.methods.len(), 1);
    let get = &attempt.methods[&HttpMethod::Get];
    assert!(get.path_fields.is_empty());
    assert!(get.body_fields.is_empty());
    assert_eq!(get.responses.len(), 1);
    assert_eq!(get.responses[0].code, 200);
    assert_eq!(get.responses[0].description, "OK");

    // Update route with an undeclared placeholder: the placeholder claims no
    // path field and the declared fields land in the body, sorted.
    let config = &list[4];
    let put = &config.methods[&HttpMethod::Put];
    assert!(put.path_fields.is_empty());
    let body: Vec<&str> = put.body_fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(body, vec!["key", "value"]);
    assert_eq!(put.responses[0].code, 204);
    assert_eq!(put.responses[0].description, "empty body");
}

#[test]
fn test_end_to_end_variant_classification() {
    let manifest = parse_manifest(MANIFEST).unwrap();
    let doc = build_document(&manifest).unwrap();
    let list = doc.path_list();

    // /aws/roles: the optional name segment is absent, so name is a body
    // field for POST alongside policy_arns.
    let bare = &list[0];
    let post = &bare.methods[&HttpMethod::Post];
    assert!(post.path_fields.is_empty());
    let body: Vec<&str> = post.body_fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(body, vec!["name", "policy_arns"]);

    let arns = &post.body_fields[1];
    assert_eq!(arns.type_, "array");
    assert_eq!(arns.sub_type.as_deref(), Some("string"));

    // /aws/roles/{name}: name moves to the path, only policy_arns remains in
    // the body. GET never carries body fields.
    let named = &list[1];
    let post = &named.methods[&HttpMethod::Post];
    let path_fields: Vec<&str> = post.path_fields.iter().map(|f| f.name.as_str()).collect();
    let body: Vec<&str> = post.body_fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(path_fields, vec!["name"]);
    assert_eq!(body, vec!["policy_arns"]);

    let get = &named.methods[&HttpMethod::Get];
    assert_eq!(get.path_fields.len(), 1);
    assert!(get.body_fields.is_empty());
}

#[test]
fn test_end_to_end_render() {
    let manifest = parse_manifest(MANIFEST).unwrap();
    let doc = build_document(&manifest).unwrap();
    let renderer = OapiRenderer::new(2).unwrap();

    let first = renderer.render(&doc, &manifest.info).unwrap();
    let second = renderer.render(&doc, &manifest.info).unwrap();
    assert_eq!(first, second);

    assert!(first.contains("title: Example API"));
    assert!(first.contains("version: 0.9.0"));
    assert!(first.contains("/sys/generate-root/attempt:"));
    assert!(first.contains("/aws/roles/{name}:"));
    assert!(first.contains("name: Data"));
    assert!(first.contains("in: body"));

    // Canonical ordering survives rendering.
    let aws = first.find("/aws/roles").unwrap();
    let sys = first.find("/sys/generate-root").unwrap();
    assert!(aws < sys);
}

#[test]
fn test_unmapped_field_type_aborts_run() {
    let yaml = r#"
mounts:
  sys:
    routes:
      - pattern: broken
        operations: [update]
        fields:
          x:
            type: invalid
"#;
    let manifest = parse_manifest(yaml).unwrap();
    let res = build_document(&manifest);
    assert!(res.is_err());
}

#[test]
fn test_load_manifest_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("routes.yml");
    fs::write(&path, MANIFEST).unwrap();

    let manifest = load_manifest_file(&path).unwrap();
    assert_eq!(manifest.info.title, "Example API");
    assert_eq!(manifest.mounts.len(), 2);
}
