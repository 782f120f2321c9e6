#![deny(missing_docs)]

//! # Pattern Expansion
//!
//! Turns one regex-flavored route pattern into the concrete path templates it
//! dispatches to. Exactly two constructs are understood: bounded optional
//! groups (`(...)?`) and named captures (`(?P<name>...)`). Any other regex
//! syntax is not rejected; its metacharacters are stripped along with the
//! handled ones, which can leave a malformed template. That is a documented
//! limitation of the declarative route tables, not something this module
//! papers over.

use crate::error::{AppError, AppResult};
use regex::Regex;
use std::sync::OnceLock;

/// Default bound on the number of expansion variants per pattern.
///
/// Each optional group doubles the variant count, so this allows four groups.
/// Real route tables carry one or two.
pub const DEFAULT_MAX_VARIANTS: usize = 16;

/// Boilerplate fragment emitted by the route tables' generic name regex.
/// Stripping it up front is much easier than compensating for it in the
/// other regexes.
const GENERIC_NAME_FRAGMENT: &str = r"\w(([\w-.]+)?\w)?";

/// Matches the leftmost optional group, non-greedily.
fn opt_re() -> &'static Regex {
    static OPT_RE: OnceLock<Regex> = OnceLock::new();
    OPT_RE.get_or_init(|| Regex::new(r"(?U)\(.*\)\?").expect("Invalid regex"))
}

/// Matches a named capture group and captures its name.
fn capture_re() -> &'static Regex {
    static CAPTURE_RE: OnceLock<Regex> = OnceLock::new();
    CAPTURE_RE.get_or_init(|| Regex::new(r"\(\?P<(\w+)>[^)]*\)").expect("Invalid regex"))
}

/// Matches every metacharacter left over once groups are resolved.
fn clean_re() -> &'static Regex {
    static CLEAN_RE: OnceLock<Regex> = OnceLock::new();
    CLEAN_RE.get_or_init(|| Regex::new(r"[()$?]").expect("Invalid regex"))
}

/// Expands a route pattern with the default variant bound.
///
/// See [`expand_with_limit`].
pub fn expand(pattern: &str) -> AppResult<Vec<String>> {
    expand_with_limit(pattern, DEFAULT_MAX_VARIANTS)
}

/// Expands a route pattern into concrete path templates.
///
/// Every optional group produces two variants: one with the group's body
/// kept and one with the group removed. Named captures become `{name}`
/// placeholders. The result contains no `(`, `)`, `$` or `?` characters, and
/// its order is stable across runs for identical input.
///
/// # Arguments
///
/// * `pattern` - The raw route pattern.
/// * `max_variants` - Hard bound on the worklist size. A pattern that would
///   exceed it fails with [`AppError::UnsupportedPattern`] instead of
///   degrading silently.
pub fn expand_with_limit(pattern: &str, max_variants: usize) -> AppResult<Vec<String>> {
    let stripped = pattern.replace(GENERIC_NAME_FRAGMENT, "");

    // Resolve optional groups with an iterative worklist. The current entry
    // is rewritten in place with the group kept (minus its own "(" and ")?"
    // markers) and a sibling without the group is appended, then the same
    // entry is re-scanned for further groups.
    let mut variants = vec![stripped];
    let mut i = 0;
    while i < variants.len() {
        let group = opt_re().find(&variants[i]).map(|m| (m.start(), m.end()));
        match group {
            Some((start, end)) => {
                if variants.len() >= max_variants {
                    return Err(AppError::UnsupportedPattern {
                        pattern: pattern.to_string(),
                        limit: max_variants,
                    });
                }
                let entry = variants[i].clone();
                variants[i] = format!(
                    "{}{}{}",
                    &entry[..start],
                    &entry[start + 1..end - 2],
                    &entry[end..]
                );
                variants.push(format!("{}{}", &entry[..start], &entry[end..]));
            }
            None => i += 1,
        }
    }

    // Replace named captures with {name} placeholders, then strip whatever
    // metacharacters remain.
    let mut templates = Vec::with_capacity(variants.len());
    for variant in variants {
        let mut template = variant;
        let replacements: Vec<(String, String)> = capture_re()
            .captures_iter(&template)
            .map(|caps| (caps[0].to_string(), format!("{{{}}}", &caps[1])))
            .collect();
        for (from, to) in replacements {
            template = template.replacen(&from, &to, 1);
        }
        templates.push(clean_re().replace_all(&template, "").into_owned());
    }

    Ok(templates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_pattern_single_output() {
        let out = expand("generate-root/attempt").unwrap();
        assert_eq!(out, vec!["generate-root/attempt".to_string()]);
    }

    #[test]
    fn test_single_optional_group() {
        let out = expand("foo(/bar)?").unwrap();
        assert_eq!(out, vec!["foo/bar".to_string(), "foo".to_string()]);
    }

    #[test]
    fn test_two_optional_groups() {
        let out = expand("a(/b)?(/c)?").unwrap();
        assert_eq!(
            out,
            vec![
                "a/b/c".to_string(),
                "a/c".to_string(),
                "a/b".to_string(),
                "a".to_string(),
            ]
        );
    }

    #[test]
    fn test_named_capture() {
        let out = expand(r"(?P<prefix>[^/]+)/config").unwrap();
        assert_eq!(out, vec!["{prefix}/config".to_string()]);
        for c in ['(', ')', '$', '?'] {
            assert!(!out[0].contains(c));
        }
    }

    #[test]
    fn test_generic_name_fragment_stripped() {
        let out = expand(r"mounts/(?P<path>\w(([\w-.]+)?\w)?)/tune$").unwrap();
        assert_eq!(out, vec!["mounts/{path}/tune".to_string()]);
    }

    #[test]
    fn test_capture_inside_optional_group() {
        let out = expand(r"leases(/(?P<prefix>.+))?").unwrap();
        assert_eq!(out, vec!["leases/{prefix}".to_string(), "leases".to_string()]);
    }

    #[test]
    fn test_foreign_syntax_stripped_not_rejected() {
        // Character classes are not understood; their metacharacters outside
        // the [()$?] set survive into the template.
        let out = expand(r"audit/[a-z]+$").unwrap();
        assert_eq!(out, vec!["audit/[a-z]+".to_string()]);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let a = expand("x(/y)?(/z)?").unwrap();
        let b = expand("x(/y)?(/z)?").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_variant_bound_is_fatal() {
        let res = expand_with_limit("a(/b)?(/c)?", 2);
        match res {
            Err(AppError::UnsupportedPattern { limit, .. }) => assert_eq!(limit, 2),
            other => panic!("expected UnsupportedPattern, got {:?}", other),
        }
    }
}
