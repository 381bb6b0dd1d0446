//! # Service Responses
//!
//! Response values produced by handler collaborators for wire encoding.

use serde::{Deserialize, Serialize};
use swire_core::{SERVICE, SERVICE_VERSION};

/// Response to the DeleteObservation extension operation, confirming
/// which observation was removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteObservationResponse {
    /// Service identifier (e.g., `SOS`).
    pub service: String,
    /// Protocol version (e.g., `2.0.0`).
    pub version: String,
    /// Identifier of the deleted observation. Mandatory for encoding.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub observation_identifier: Option<String>,
}

impl DeleteObservationResponse {
    /// A response for the given service and version.
    pub fn new(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            version: version.into(),
            observation_identifier: None,
        }
    }
}

impl Default for DeleteObservationResponse {
    fn default() -> Self {
        Self::new(SERVICE, SERVICE_VERSION)
    }
}
