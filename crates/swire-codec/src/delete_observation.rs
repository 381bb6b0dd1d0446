//! # DeleteObservation Response Codec
//!
//! Encodes the response to the DeleteObservation extension operation:
//! a confirmation carrying the identifier of the removed observation.
//! A leaf codec addressed by operation key.

use swire_core::{CodecError, CodecKey, DomainTag, MediaType, SERVICE_VERSION};
use swire_doc::{FragmentBuilder, WireFragment};
use swire_model::{DeleteObservationResponse, DomainValue};

use crate::codec::{unsupported_tag, Codec};
use crate::validation::{check_required, FieldRule};
use crate::WIRE_MEDIA_TYPE;

const NAME: &str = "DeleteObservationCodec";

/// Operation name this codec serves.
pub const OPERATION: &str = "DeleteObservation";

const RULES: &[FieldRule<DeleteObservationResponse>] = &[FieldRule {
    field: "observationIdentifier",
    context: "DeleteObservation response",
    is_present: |r| r.observation_identifier.is_some(),
}];

/// Codec for DeleteObservation responses.
#[derive(Debug, Default)]
pub struct DeleteObservationCodec;

impl DeleteObservationCodec {
    /// Construct the codec.
    pub fn new() -> Self {
        Self
    }
}

impl Codec for DeleteObservationCodec {
    fn name(&self) -> &'static str {
        NAME
    }

    fn keys(&self) -> Vec<CodecKey> {
        vec![CodecKey::new(OPERATION, SERVICE_VERSION, WIRE_MEDIA_TYPE)]
    }

    fn supported_types(&self) -> Vec<(DomainTag, MediaType)> {
        vec![(DomainTag::DeleteObservationResponse, WIRE_MEDIA_TYPE)]
    }

    fn encode(&self, value: &DomainValue) -> Result<WireFragment, CodecError> {
        let DomainValue::DeleteObservationResponse(response) = value else {
            return Err(unsupported_tag(NAME, value));
        };
        check_required(NAME, response, RULES)?;
        let identifier = response
            .observation_identifier
            .as_deref()
            .ok_or_else(|| CodecError::unsupported_input(NAME, "missing observationIdentifier"))?;

        Ok(FragmentBuilder::new("DeleteObservationResponse")
            .attribute("service", &response.service)
            .attribute("version", &response.version)
            .child(
                FragmentBuilder::new("deletedObservation")
                    .text(identifier)
                    .build(),
            )
            .build())
    }

    fn decode(&self, fragment: &WireFragment) -> Result<DomainValue, CodecError> {
        if fragment.name() != "DeleteObservationResponse" {
            return Err(CodecError::decoding(
                fragment.name(),
                "expected DeleteObservationResponse",
            ));
        }
        let service = fragment
            .attribute("service")
            .ok_or_else(|| CodecError::decoding("DeleteObservationResponse", "missing service attribute"))?;
        let version = fragment
            .attribute("version")
            .ok_or_else(|| CodecError::decoding("DeleteObservationResponse", "missing version attribute"))?;
        let identifier = fragment
            .find("deletedObservation")
            .and_then(|e| e.text())
            .ok_or_else(|| CodecError::decoding("deletedObservation", "missing deleted observation identifier"))?;

        let mut response = DeleteObservationResponse::new(service, version);
        response.observation_identifier = Some(identifier.to_string());
        Ok(DomainValue::DeleteObservationResponse(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_identifier_rejected() {
        let codec = DeleteObservationCodec::new();
        let err = codec
            .encode(&DeleteObservationResponse::default().into())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Encoder DeleteObservationCodec can not encode 'missing observationIdentifier'"
        );
    }

    #[test]
    fn test_encode_carries_service_and_identifier() {
        let codec = DeleteObservationCodec::new();
        let mut response = DeleteObservationResponse::default();
        response.observation_identifier = Some("obs-1".to_string());
        let fragment = codec.encode(&response.into()).unwrap();
        assert_eq!(fragment.attribute("service"), Some("SOS"));
        assert_eq!(fragment.attribute("version"), Some("2.0.0"));
        assert_eq!(
            fragment.find("deletedObservation").and_then(|e| e.text()),
            Some("obs-1")
        );
    }

    #[test]
    fn test_round_trip() {
        let codec = DeleteObservationCodec::new();
        let mut response = DeleteObservationResponse::default();
        response.observation_identifier = Some("obs-1".to_string());
        let value: DomainValue = response.into();
        let decoded = codec.decode(&codec.encode(&value).unwrap()).unwrap();
        assert_eq!(decoded, value);
    }
}
