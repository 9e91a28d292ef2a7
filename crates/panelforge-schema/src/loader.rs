//! Document loaders.
//!
//! Schemas load from JSON or YAML. Shape problems (missing required
//! fields, wrong types) surface here as [`ParseError`]; structural
//! invariants are a later, separate concern.

use crate::schema::PanelSchema;
use std::fmt;

/// Error loading a schema document.
#[derive(Debug)]
pub enum ParseError {
    /// JSON parsing error
    Json(serde_json::Error),
    /// YAML parsing error
    Yaml(serde_yaml_ng::Error),
    /// Document parsed but declares an unsupported version
    UnsupportedVersion {
        /// Declared version
        found: u32,
        /// Highest version this engine understands
        supported: u32,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::Yaml(e) => write!(f, "YAML error: {e}"),
            Self::UnsupportedVersion { found, supported } => {
                write!(f, "schema version {found} not supported (max {supported})")
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::Yaml(e) => Some(e),
            Self::UnsupportedVersion { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<serde_yaml_ng::Error> for ParseError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        Self::Yaml(e)
    }
}

/// Highest schema version this engine understands.
pub const SUPPORTED_VERSION: u32 = 1;

fn check_version(schema: PanelSchema) -> Result<PanelSchema, ParseError> {
    if schema.version > SUPPORTED_VERSION {
        return Err(ParseError::UnsupportedVersion {
            found: schema.version,
            supported: SUPPORTED_VERSION,
        });
    }
    Ok(schema)
}

/// Load a schema from a JSON document.
///
/// # Errors
///
/// Returns [`ParseError`] when the document is malformed, missing
/// required fields, or declares an unsupported version.
pub fn from_json_str(json: &str) -> Result<PanelSchema, ParseError> {
    check_version(serde_json::from_str(json)?)
}

/// Load a schema from a YAML document.
///
/// # Errors
///
/// Returns [`ParseError`] when the document is malformed, missing
/// required fields, or declares an unsupported version.
pub fn from_yaml_str(yaml: &str) -> Result<PanelSchema, ParseError> {
    check_version(serde_yaml_ng::from_str(yaml)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let schema = from_json_str(
            r#"{ "version": 1, "layout": { "grid": { "columns": 4, "rows": 3 } } }"#,
        )
        .unwrap();
        assert_eq!(schema.layout.grid.columns, 4);
    }

    #[test]
    fn test_from_yaml() {
        let schema = from_yaml_str(
            "version: 1\nlayout:\n  grid:\n    columns: 2\n    rows: 2\n",
        )
        .unwrap();
        assert_eq!(schema.layout.grid.rows, 2);
    }

    #[test]
    fn test_missing_required_field_is_load_error() {
        // layout.grid.columns missing
        let err = from_json_str(r#"{ "version": 1, "layout": { "grid": { "rows": 3 } } }"#)
            .unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn test_unsupported_version() {
        let err = from_json_str(
            r#"{ "version": 99, "layout": { "grid": { "columns": 1, "rows": 1 } } }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnsupportedVersion { found: 99, .. }
        ));
    }

    #[test]
    fn test_error_display() {
        let err = ParseError::UnsupportedVersion {
            found: 2,
            supported: 1,
        };
        assert_eq!(err.to_string(), "schema version 2 not supported (max 1)");
    }
}
