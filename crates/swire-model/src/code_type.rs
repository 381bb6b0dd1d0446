//! # Code Types
//!
//! A `CodeType` is a string value optionally qualified by the code
//! space (vocabulary) it is drawn from. Used for feature names and
//! other controlled-vocabulary labels.

use serde::{Deserialize, Serialize};

/// A value with an optional code space qualifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeType {
    /// The value/identifier itself.
    pub value: String,
    /// URI of the vocabulary the value is drawn from, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub code_space: Option<String>,
}

impl CodeType {
    /// A plain value with no code space.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            code_space: None,
        }
    }

    /// A value qualified by a code space URI.
    pub fn with_code_space(value: impl Into<String>, code_space: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            code_space: Some(code_space.into()),
        }
    }

    /// Whether the value is non-empty.
    pub fn is_set(&self) -> bool {
        !self.value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value() {
        let ct = CodeType::new("test-feature-name");
        assert_eq!(ct.value, "test-feature-name");
        assert!(ct.code_space.is_none());
        assert!(ct.is_set());
    }

    #[test]
    fn test_empty_value_not_set() {
        assert!(!CodeType::new("").is_set());
    }

    #[test]
    fn test_code_space_serde_skipped_when_absent() {
        let json = serde_json::to_value(CodeType::new("x")).unwrap();
        assert!(json.get("code_space").is_none());
    }
}
