//! # SWE Common Data Structures
//!
//! The subset of the SWE common model the codec layer handles: the
//! data record describing a result structure, its typed field
//! components, and the text encoding describing how result blocks are
//! tokenized on the wire.

use serde::{Deserialize, Serialize};

/// Separator-based text encoding for result blocks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SweTextEncoding {
    /// Separator between tokens within a block (e.g., `@`).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub token_separator: Option<String>,
    /// Separator between blocks (e.g., `;`).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub block_separator: Option<String>,
    /// Decimal separator, when it differs from the default `.`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub decimal_separator: Option<String>,
}

impl SweTextEncoding {
    /// An encoding with both mandatory separators set.
    pub fn new(token_separator: impl Into<String>, block_separator: impl Into<String>) -> Self {
        Self {
            token_separator: Some(token_separator.into()),
            block_separator: Some(block_separator.into()),
            decimal_separator: None,
        }
    }
}

/// A time component: values are instants in a given temporal UOM.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SweTime {
    /// Definition URI of the observed quantity.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub definition: Option<String>,
    /// Unit-of-measure code.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub uom: Option<String>,
}

/// A scalar numeric component with a unit of measure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SweQuantity {
    /// Definition URI of the observed quantity.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub definition: Option<String>,
    /// Unit-of-measure code.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub uom: Option<String>,
}

/// A free-text component.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SweText {
    /// Definition URI of the observed quantity.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub definition: Option<String>,
}

/// The typed component carried by a data record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SweComponent {
    /// Temporal instant values.
    Time(SweTime),
    /// Numeric values with a UOM.
    Quantity(SweQuantity),
    /// Free-text values.
    Text(SweText),
}

/// A named field of a data record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweField {
    /// Field name, unique within its record.
    pub name: String,
    /// The typed component the field carries.
    pub component: SweComponent,
}

impl SweField {
    /// Construct a field from a name and component.
    pub fn new(name: impl Into<String>, component: SweComponent) -> Self {
        Self {
            name: name.into(),
            component,
        }
    }
}

/// A record of named, typed fields describing a result structure.
///
/// Field order is declaration order and is preserved on the wire.
/// An empty record is structurally valid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SweDataRecord {
    /// The record's fields, in declaration order.
    pub fields: Vec<SweField>,
}

impl SweDataRecord {
    /// An empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, preserving declaration order.
    pub fn add_field(&mut self, field: SweField) {
        self.fields.push(field);
    }
}
