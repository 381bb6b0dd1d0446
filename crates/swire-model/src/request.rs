//! # Service Requests
//!
//! Request values built by handler collaborators and handed to the
//! codec layer for wire encoding.

use serde::{Deserialize, Serialize};
use swire_core::{SERVICE, SERVICE_VERSION};

use crate::observation::ObservationTemplate;
use crate::swe::{SweDataRecord, SweTextEncoding};

/// Request to register a result template with the service.
///
/// Mandatory for encoding, in precedence order: the observation
/// template, at least one offering on that template, the result
/// structure, and the result encoding. The identifier is optional —
/// services assign one when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertResultTemplateRequest {
    /// Service identifier (e.g., `SOS`).
    pub service: String,
    /// Protocol version (e.g., `2.0.0`).
    pub version: String,
    /// Caller-proposed template identifier.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub identifier: Option<String>,
    /// The observation blueprint the template applies to.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub observation_template: Option<ObservationTemplate>,
    /// Structure of the result blocks.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub result_structure: Option<SweDataRecord>,
    /// Encoding of the result blocks.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub result_encoding: Option<SweTextEncoding>,
}

impl InsertResultTemplateRequest {
    /// A request for the given service and version, everything else unset.
    pub fn new(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            version: version.into(),
            identifier: None,
            observation_template: None,
            result_structure: None,
            result_encoding: None,
        }
    }
}

impl Default for InsertResultTemplateRequest {
    fn default() -> Self {
        Self::new(SERVICE, SERVICE_VERSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_carries_service_constants() {
        let req = InsertResultTemplateRequest::default();
        assert_eq!(req.service, "SOS");
        assert_eq!(req.version, "2.0.0");
        assert!(req.observation_template.is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut req = InsertResultTemplateRequest::default();
        req.identifier = Some("test-template-identifier".to_string());
        let json = serde_json::to_string(&req).unwrap();
        let back: InsertResultTemplateRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, req);
    }
}
