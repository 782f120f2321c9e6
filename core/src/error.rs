#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use crate::type_mapping::FieldType;
use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// A declared field type has no entry in the documentation type table.
    /// Generation must abort rather than guess a type.
    #[from(ignore)]
    #[display("Unmapped field type: {_0:?}")]
    UnmappedFieldType(FieldType),

    /// Optional-group expansion of a route pattern exceeded the variant bound.
    #[from(ignore)]
    #[display("Unsupported pattern (more than {limit} expansion variants): {pattern}")]
    UnsupportedPattern {
        /// The raw pattern that blew the bound.
        pattern: String,
        /// The configured variant limit.
        limit: usize,
    },

    /// The requested output document version is not implemented.
    #[from(ignore)]
    #[display("Unsupported OpenAPI version: {_0}")]
    UnsupportedVersion(u32),

    /// A route manifest could not be deserialized.
    #[from(ignore)]
    #[display("Manifest Error: {_0}")]
    Manifest(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
///
/// We implement this manually (instead of `derive(Error)`) because the
/// `General(String)` variant contains a `String`, which does not implement
/// `std::error::Error`, causing auto-derived `source()` implementations to
/// fail compilation.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::Other, "test");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_string_conversion() {
        // Test that String defaults to General, not Manifest
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_unsupported_pattern_display() {
        let app_err = AppError::UnsupportedPattern {
            pattern: "a(/b)?".into(),
            limit: 4,
        };
        assert_eq!(
            format!("{}", app_err),
            "Unsupported pattern (more than 4 expansion variants): a(/b)?"
        );
    }
}
