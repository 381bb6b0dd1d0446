//! # Codec Identity — Keys, Domain Tags, Media Types
//!
//! Value types used to address codecs in the registry. Lookup is by
//! structural equality: a `CodecKey` for operation-level dispatch, or a
//! `(DomainTag, MediaType)` pair for delegated sub-encodes.
//!
//! `DomainTag` is the single source of truth for the logical domain
//! types the codec layer understands. Every `match` on it must be
//! exhaustive — adding a tag forces every consumer to handle it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Media type of a wire representation.
///
/// The registry indexes codecs per media type so the same domain type
/// can have different renderings registered side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaType {
    /// `application/xml` — the standards-family wire format.
    ApplicationXml,
    /// `application/json` — diagnostic and tooling rendering.
    ApplicationJson,
}

impl MediaType {
    /// Canonical MIME string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ApplicationXml => "application/xml",
            Self::ApplicationJson => "application/json",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "application/xml" => Ok(Self::ApplicationXml),
            "application/json" => Ok(Self::ApplicationJson),
            other => Err(CodecError::Decoding {
                location: "media-type".to_string(),
                detail: format!("unknown media type {other:?}"),
            }),
        }
    }
}

/// Logical domain type a codec can consume or produce.
///
/// A codec may declare support for several tags, each paired with one
/// or more media types. Delegating codecs resolve nested sub-values by
/// the sub-value's tag — exact lookup, never runtime type inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DomainTag {
    /// Request to register a result template with the service.
    InsertResultTemplateRequest,
    /// Response to the DeleteObservation extension operation.
    DeleteObservationResponse,
    /// An observation blueprint: all metadata, no concrete result yet.
    ObservationTemplate,
    /// A sampled real-world feature an observation refers to.
    SamplingFeature,
    /// SWE common data record describing a result structure.
    DataRecord,
    /// SWE common text encoding (separator-delimited result blocks).
    TextEncoding,
}

impl DomainTag {
    /// Kebab-case wire name of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InsertResultTemplateRequest => "insert-result-template-request",
            Self::DeleteObservationResponse => "delete-observation-response",
            Self::ObservationTemplate => "observation-template",
            Self::SamplingFeature => "sampling-feature",
            Self::DataRecord => "data-record",
            Self::TextEncoding => "text-encoding",
        }
    }
}

impl fmt::Display for DomainTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable identity of a codec: operation, protocol version, media type.
///
/// Equality and hashing are structural. Exactly one codec may be
/// registered per key; a second registration is a startup error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodecKey {
    /// Operation or message kind (e.g., `InsertResultTemplate`).
    pub operation: String,
    /// Protocol version (e.g., `2.0.0`).
    pub version: String,
    /// Wire media type this codec produces/consumes.
    pub media_type: MediaType,
}

impl CodecKey {
    /// Construct a key from its three components.
    pub fn new(operation: impl Into<String>, version: impl Into<String>, media_type: MediaType) -> Self {
        Self {
            operation: operation.into(),
            version: version.into(),
            media_type,
        }
    }
}

impl fmt::Display for CodecKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({})", self.operation, self.version, self.media_type)
    }
}

/// The lookup argument that failed or collided.
///
/// Both registry lookup paths — by key and by (tag, media type) —
/// report absence and ambiguity through the same error kinds; the
/// selector records which path was taken.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodecSelector {
    /// Operation-level lookup by full codec key.
    Key(CodecKey),
    /// Delegation lookup by domain tag and media type.
    Type {
        /// Domain tag of the nested value.
        tag: DomainTag,
        /// Requested wire media type.
        media_type: MediaType,
    },
}

impl fmt::Display for CodecSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, "key {key}"),
            Self::Type { tag, media_type } => write!(f, "type {tag} ({media_type})"),
        }
    }
}
