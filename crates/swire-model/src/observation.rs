//! # Observation Templates
//!
//! An observation template (constellation) is the blueprint for future
//! observations: procedure, observed property, feature of interest and
//! offering are known; the phenomenon and result times are not — they
//! stay `None` until concrete results arrive, and the codec layer
//! renders them as explicit nil slots with the `template` reason token.

use serde::{Deserialize, Serialize};
use swire_core::Timestamp;

use crate::feature::SamplingFeature;

/// Observation type URI for scalar measurements.
pub const OBSERVATION_TYPE_MEASUREMENT: &str =
    "http://www.opengis.net/def/observationType/OGC-OM/2.0/OM_Measurement";

/// Blueprint for observations produced under a result template.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ObservationTemplate {
    /// Offerings the template is registered under. At least one is
    /// mandatory for encoding.
    #[serde(default)]
    pub offerings: Vec<String>,
    /// Observation type URI (e.g., measurement).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub observation_type: Option<String>,
    /// Identifier of the producing procedure/sensor.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub procedure: Option<String>,
    /// Identifier of the observed property.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub observed_property: Option<String>,
    /// The feature the observations will refer to.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub feature_of_interest: Option<SamplingFeature>,
    /// Time the phenomenon occurred. `None` for templates.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phenomenon_time: Option<Timestamp>,
    /// Time the result was produced. `None` for templates.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub result_time: Option<Timestamp>,
}

impl ObservationTemplate {
    /// An empty template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the template under an offering.
    pub fn add_offering(&mut self, offering: impl Into<String>) {
        self.offerings.push(offering.into());
    }

    /// Whether at least one offering is declared.
    pub fn has_offering(&self) -> bool {
        !self.offerings.is_empty()
    }
}
