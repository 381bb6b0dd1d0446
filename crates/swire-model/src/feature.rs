//! # Sampling Features
//!
//! The real-world feature an observation refers to: an identifier, an
//! optional display name, a feature-type reference, and the sampled
//! geometry.

use serde::{Deserialize, Serialize};

use crate::code_type::CodeType;

/// Feature type URI for a sampling point.
pub const SAMPLING_POINT_TYPE: &str =
    "http://www.opengis.net/def/samplingFeatureType/OGC-OM/2.0/SF_SamplingPoint";

/// A geometry as WKT plus spatial reference identifier.
///
/// The codec layer carries geometries opaquely; parsing WKT is the
/// responsibility of geometry-aware consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    /// Well-known text (e.g., `POINT(30 10)`).
    pub wkt: String,
    /// EPSG spatial reference identifier (e.g., `4326`).
    pub srid: u32,
}

impl Geometry {
    /// Construct a geometry from WKT and SRID.
    pub fn new(wkt: impl Into<String>, srid: u32) -> Self {
        Self {
            wkt: wkt.into(),
            srid,
        }
    }
}

/// A sampled real-world feature.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SamplingFeature {
    /// Globally unique feature identifier. Mandatory for encoding.
    pub identifier: String,
    /// Human-readable name, optionally code-space qualified.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<CodeType>,
    /// Feature type URI (e.g., sampling point).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub feature_type: Option<String>,
    /// The sampled geometry.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub geometry: Option<Geometry>,
}

impl SamplingFeature {
    /// A feature with only its identifier set.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }
}
