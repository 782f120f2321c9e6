#![deny(missing_docs)]

//! # Type Mapping
//!
//! Converts the field-type enumeration used by route metadata into the type
//! names the documentation model speaks. The mapping is a fixed, total table:
//! a kind without an entry aborts generation, because documentation
//! correctness depends on every field having an explicit, reviewed type.
//! Extending [`FieldType`] forces extending the match below in lockstep.

use crate::error::{AppError, AppResult};
use serde::Deserialize;

/// Field kinds a route definition may declare for its parameters.
///
/// `Invalid` is the unset/unknown kind. It deliberately has no entry in the
/// type table, so a field carrying it fails generation instead of defaulting
/// to a guessed type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    /// Unset or unrecognized kind.
    Invalid,
    /// Free-form string.
    String,
    /// String restricted to name characters.
    NameString,
    /// Key=value pair list, serialized as a string.
    KvPairs,
    /// Integer.
    Int,
    /// Duration expressed in seconds.
    DurationSecond,
    /// Boolean.
    Bool,
    /// Arbitrary keyed object.
    Map,
    /// Generic list.
    Slice,
    /// List of strings.
    StringSlice,
    /// Comma-separated list of strings.
    CommaStringSlice,
    /// Comma-separated list of integers.
    CommaIntSlice,
}

/// Documentation type for a field: a type name plus, for arrays, the element
/// sub-type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocType {
    /// The documentation type name ("string", "number", ...).
    pub type_: &'static str,
    /// Element sub-type, present only when `type_` is "array".
    pub sub_type: Option<&'static str>,
}

/// Looks up the documentation type for a field kind.
///
/// A kind without a table entry is fatal for the whole generation run.
pub fn convert_type(field_type: FieldType) -> AppResult<DocType> {
    let (type_, sub_type) = match field_type {
        FieldType::String | FieldType::NameString | FieldType::KvPairs => ("string", None),
        FieldType::Int | FieldType::DurationSecond => ("number", None),
        FieldType::Bool => ("boolean", None),
        FieldType::Map => ("object", None),
        FieldType::Slice | FieldType::StringSlice | FieldType::CommaStringSlice => {
            ("array", Some("string"))
        }
        FieldType::CommaIntSlice => ("array", Some("number")),
        FieldType::Invalid => return Err(AppError::UnmappedFieldType(field_type)),
    };

    Ok(DocType { type_, sub_type })
}
