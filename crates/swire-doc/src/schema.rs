//! # Document-Level Schema Validation
//!
//! On-demand validation of a fragment's JSON materialization against
//! JSON Schema definitions (Draft 2020-12). Codecs never validate
//! documents themselves; transport collaborators opt in after the
//! top-level encode completes.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use jsonschema::Validator;
use serde_json::Value;
use thiserror::Error;

use crate::fragment::WireFragment;

/// Error during document schema validation.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The document did not conform to the schema.
    #[error("validation failed against schema '{schema_name}': {violations}")]
    ValidationFailed {
        /// Name of the schema that was validated against.
        schema_name: String,
        /// Structured list of individual violations.
        violations: Violations,
    },

    /// The schema file could not be loaded or parsed.
    #[error("schema load error for '{schema_name}': {reason}")]
    SchemaLoadError {
        /// Schema filename or identifier.
        schema_name: String,
        /// Reason the schema could not be loaded.
        reason: String,
    },

    /// The compiled validator could not be built.
    #[error("validator build error for schema '{schema_name}': {reason}")]
    ValidatorBuildError {
        /// Schema filename or identifier.
        schema_name: String,
        /// Reason the validator could not be built.
        reason: String,
    },

    /// IO error reading a schema file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single validation violation with structured context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the instance.
    pub instance_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// Collection of validation violations.
#[derive(Debug, Clone)]
pub struct Violations(Vec<Violation>);

impl Violations {
    /// Slice of all violations.
    pub fn as_slice(&self) -> &[Violation] {
        &self.0
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// A schema validator for materialized wire documents.
///
/// Loads every `*.schema.json` file from a directory at construction,
/// indexes by filename, and compiles Draft 2020-12 validators on
/// demand. Loading happens once; the validator is read-only afterwards
/// and can be shared across threads.
#[derive(Debug)]
pub struct DocumentValidator {
    schema_dir: PathBuf,
    schemas: HashMap<String, Value>,
}

impl DocumentValidator {
    /// Load all schemas from the given directory.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::SchemaLoadError` if any schema file cannot
    /// be read or parsed as JSON.
    pub fn new(schema_dir: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let schema_dir = schema_dir.as_ref().to_path_buf();
        let mut schemas = HashMap::new();

        let entries = std::fs::read_dir(&schema_dir).map_err(|e| SchemaError::SchemaLoadError {
            schema_name: schema_dir.display().to_string(),
            reason: format!("cannot read schema directory: {e}"),
        })?;

        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.ends_with(".schema.json") {
                    let content = std::fs::read_to_string(&path)?;
                    let value: Value = serde_json::from_str(&content).map_err(|e| {
                        SchemaError::SchemaLoadError {
                            schema_name: name.to_string(),
                            reason: format!("invalid JSON: {e}"),
                        }
                    })?;
                    schemas.insert(name.to_string(), value);
                }
            }
        }

        Ok(Self { schema_dir, schemas })
    }

    /// Names of all loaded schemas, sorted.
    pub fn schema_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Build a compiled validator for a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::SchemaLoadError` if the schema is not
    /// loaded, `SchemaError::ValidatorBuildError` if it does not
    /// compile.
    pub fn build_validator(&self, schema_name: &str) -> Result<Validator, SchemaError> {
        let schema_value =
            self.schemas
                .get(schema_name)
                .ok_or_else(|| SchemaError::SchemaLoadError {
                    schema_name: schema_name.to_string(),
                    reason: format!("schema not found in {}", self.schema_dir.display()),
                })?;

        let mut opts = jsonschema::options();
        opts.with_draft(jsonschema::Draft::Draft202012);
        opts.build(schema_value)
            .map_err(|e| SchemaError::ValidatorBuildError {
                schema_name: schema_name.to_string(),
                reason: e.to_string(),
            })
    }

    /// Validate a fragment's JSON materialization against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::ValidationFailed` with structured
    /// violations if the document is invalid.
    pub fn validate_fragment(
        &self,
        fragment: &WireFragment,
        schema_name: &str,
    ) -> Result<(), SchemaError> {
        let validator = self.build_validator(schema_name)?;
        let instance = fragment.to_json_value();

        let errors: Vec<Violation> = validator
            .iter_errors(&instance)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed {
                schema_name: schema_name.to_string(),
                violations: Violations(errors),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::FragmentBuilder;

    fn write_schema(dir: &Path, name: &str, schema: &Value) {
        std::fs::write(dir.join(name), serde_json::to_string_pretty(schema).unwrap()).unwrap();
    }

    fn fragment_schema() -> Value {
        serde_json::json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "type": "object",
            "required": ["name"],
            "properties": {
                "name": { "type": "string", "minLength": 1 },
                "attributes": { "type": "object" },
                "nilReason": { "type": "string" },
                "text": { "type": "string" },
                "children": { "type": "array" }
            },
            "additionalProperties": false
        })
    }

    #[test]
    fn test_load_and_validate_fragment() {
        let dir = tempfile::TempDir::new().unwrap();
        write_schema(dir.path(), "fragment.schema.json", &fragment_schema());

        let validator = DocumentValidator::new(dir.path()).unwrap();
        assert_eq!(validator.schema_names(), ["fragment.schema.json"]);

        let frag = FragmentBuilder::new("offering").text("test-offering").build();
        validator
            .validate_fragment(&frag, "fragment.schema.json")
            .unwrap();
    }

    #[test]
    fn test_validation_failure_reports_violations() {
        let dir = tempfile::TempDir::new().unwrap();
        let schema = serde_json::json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "type": "object",
            "required": ["name", "text"]
        });
        write_schema(dir.path(), "strict.schema.json", &schema);

        let validator = DocumentValidator::new(dir.path()).unwrap();
        let frag = FragmentBuilder::new("offering").build();
        let err = validator
            .validate_fragment(&frag, "strict.schema.json")
            .unwrap_err();
        match err {
            SchemaError::ValidationFailed { violations, .. } => {
                assert!(!violations.as_slice().is_empty());
            }
            other => panic!("expected ValidationFailed, got: {other}"),
        }
    }

    #[test]
    fn test_unknown_schema_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let validator = DocumentValidator::new(dir.path()).unwrap();
        let frag = FragmentBuilder::new("x").build();
        let err = validator
            .validate_fragment(&frag, "nonexistent.schema.json")
            .unwrap_err();
        assert!(matches!(err, SchemaError::SchemaLoadError { .. }));
    }
}
