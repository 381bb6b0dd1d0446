//! # InsertResultTemplate Request Codec
//!
//! The top-level delegating codec: assembles the InsertResultTemplate
//! request document, handing the observation template, result
//! structure, and result encoding sub-trees to whichever codecs the
//! registry resolves for their tags.
//!
//! Mandatory-field precedence is fixed by the interoperability
//! contract: observation template, then offering, then result
//! structure, then result encoding. When several are missing at once,
//! only the first is reported.

use swire_core::{CodecError, CodecKey, DomainTag, MediaType, SERVICE_VERSION};
use swire_doc::{FragmentBuilder, WireFragment};
use swire_model::{DomainValue, InsertResultTemplateRequest};

use crate::codec::{slot_child, unsupported_tag, Codec};
use crate::registry::{DelegationSlot, Resolver};
use crate::validation::{check_required, FieldRule};
use crate::WIRE_MEDIA_TYPE;

const NAME: &str = "InsertResultTemplateCodec";

/// Operation name this codec serves.
pub const OPERATION: &str = "InsertResultTemplate";

const RULES: &[FieldRule<InsertResultTemplateRequest>] = &[
    FieldRule {
        field: "ObservationTemplate",
        context: "InsertResultTemplate request",
        is_present: |r| r.observation_template.is_some(),
    },
    FieldRule {
        field: "offering",
        context: "observation template",
        is_present: |r| {
            r.observation_template
                .as_ref()
                .is_some_and(|t| t.has_offering())
        },
    },
    FieldRule {
        field: "resultStructure",
        context: "InsertResultTemplate request",
        is_present: |r| r.result_structure.is_some(),
    },
    FieldRule {
        field: "resultEncoding",
        context: "InsertResultTemplate request",
        is_present: |r| r.result_encoding.is_some(),
    },
];

/// Codec for InsertResultTemplate requests.
#[derive(Debug, Default)]
pub struct InsertResultTemplateCodec {
    delegation: DelegationSlot,
}

impl InsertResultTemplateCodec {
    /// Construct the codec; the resolver arrives at registry
    /// initialization.
    pub fn new() -> Self {
        Self::default()
    }

    fn encode_request(
        &self,
        request: &InsertResultTemplateRequest,
    ) -> Result<WireFragment, CodecError> {
        check_required(NAME, request, RULES)?;
        let template = request
            .observation_template
            .as_ref()
            .ok_or_else(|| CodecError::unsupported_input(NAME, "missing ObservationTemplate"))?;
        let structure = request
            .result_structure
            .as_ref()
            .ok_or_else(|| CodecError::unsupported_input(NAME, "missing resultStructure"))?;
        let encoding = request
            .result_encoding
            .as_ref()
            .ok_or_else(|| CodecError::unsupported_input(NAME, "missing resultEncoding"))?;

        let observation_fragment = self
            .delegation
            .resolve(DomainTag::ObservationTemplate, WIRE_MEDIA_TYPE)?
            .encode(&DomainValue::ObservationTemplate(template.clone()))?;
        let structure_fragment = self
            .delegation
            .resolve(DomainTag::DataRecord, WIRE_MEDIA_TYPE)?
            .encode(&DomainValue::DataRecord(structure.clone()))?;
        let encoding_fragment = self
            .delegation
            .resolve(DomainTag::TextEncoding, WIRE_MEDIA_TYPE)?
            .encode(&DomainValue::TextEncoding(encoding.clone()))?;

        let mut result_template = FragmentBuilder::new("ResultTemplate");
        if let Some(identifier) = &request.identifier {
            result_template = result_template
                .child(FragmentBuilder::new("identifier").text(identifier).build());
        }
        for offering in &template.offerings {
            result_template =
                result_template.child(FragmentBuilder::new("offering").text(offering).build());
        }
        result_template = result_template
            .slot("observationTemplate", observation_fragment)
            .slot("resultStructure", structure_fragment)
            .slot("resultEncoding", encoding_fragment);

        Ok(FragmentBuilder::new("InsertResultTemplate")
            .attribute("service", &request.service)
            .attribute("version", &request.version)
            .child(
                FragmentBuilder::new("proposedTemplate")
                    .child(result_template.build())
                    .build(),
            )
            .build())
    }

    fn decode_request(
        &self,
        fragment: &WireFragment,
    ) -> Result<InsertResultTemplateRequest, CodecError> {
        if fragment.name() != "InsertResultTemplate" {
            return Err(CodecError::decoding(
                fragment.name(),
                "expected InsertResultTemplate",
            ));
        }
        let service = fragment
            .attribute("service")
            .ok_or_else(|| CodecError::decoding("InsertResultTemplate", "missing service attribute"))?;
        let version = fragment
            .attribute("version")
            .ok_or_else(|| CodecError::decoding("InsertResultTemplate", "missing version attribute"))?;
        let result_template = fragment
            .find("proposedTemplate")
            .and_then(|p| p.find("ResultTemplate"))
            .ok_or_else(|| CodecError::decoding("proposedTemplate", "missing ResultTemplate"))?;

        let mut request = InsertResultTemplateRequest::new(service, version);
        request.identifier = result_template
            .find("identifier")
            .and_then(|e| e.text())
            .map(String::from);

        let offerings: Vec<String> = result_template
            .find_all("offering")
            .filter_map(|e| e.text())
            .map(String::from)
            .collect();

        let observation_inner = slot_child(result_template, "observationTemplate")?;
        let decoded = self
            .delegation
            .resolve(DomainTag::ObservationTemplate, WIRE_MEDIA_TYPE)?
            .decode(observation_inner)?;
        let DomainValue::ObservationTemplate(mut template) = decoded else {
            return Err(CodecError::decoding(
                "observationTemplate",
                format!("delegate returned unexpected value {}", decoded.tag()),
            ));
        };
        // The offering lives on the ResultTemplate element; restore it
        // onto the decoded blueprint.
        template.offerings = offerings;
        request.observation_template = Some(template);

        let structure_inner = slot_child(result_template, "resultStructure")?;
        let decoded = self
            .delegation
            .resolve(DomainTag::DataRecord, WIRE_MEDIA_TYPE)?
            .decode(structure_inner)?;
        let DomainValue::DataRecord(structure) = decoded else {
            return Err(CodecError::decoding(
                "resultStructure",
                format!("delegate returned unexpected value {}", decoded.tag()),
            ));
        };
        request.result_structure = Some(structure);

        let encoding_inner = slot_child(result_template, "resultEncoding")?;
        let decoded = self
            .delegation
            .resolve(DomainTag::TextEncoding, WIRE_MEDIA_TYPE)?
            .decode(encoding_inner)?;
        let DomainValue::TextEncoding(encoding) = decoded else {
            return Err(CodecError::decoding(
                "resultEncoding",
                format!("delegate returned unexpected value {}", decoded.tag()),
            ));
        };
        request.result_encoding = Some(encoding);

        Ok(request)
    }
}

impl Codec for InsertResultTemplateCodec {
    fn name(&self) -> &'static str {
        NAME
    }

    fn keys(&self) -> Vec<CodecKey> {
        vec![CodecKey::new(OPERATION, SERVICE_VERSION, WIRE_MEDIA_TYPE)]
    }

    fn supported_types(&self) -> Vec<(DomainTag, MediaType)> {
        vec![(DomainTag::InsertResultTemplateRequest, WIRE_MEDIA_TYPE)]
    }

    fn encode(&self, value: &DomainValue) -> Result<WireFragment, CodecError> {
        match value {
            DomainValue::InsertResultTemplateRequest(request) => self.encode_request(request),
            other => Err(unsupported_tag(NAME, other)),
        }
    }

    fn decode(&self, fragment: &WireFragment) -> Result<DomainValue, CodecError> {
        Ok(DomainValue::InsertResultTemplateRequest(
            self.decode_request(fragment)?,
        ))
    }

    fn bind_resolver(&self, resolver: Resolver) {
        self.delegation.bind(resolver);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swire_model::{ObservationTemplate, SweDataRecord, SweTextEncoding};

    fn request_with_template_and_offering() -> InsertResultTemplateRequest {
        let mut template = ObservationTemplate::new();
        template.add_offering("test-offering");
        let mut request = InsertResultTemplateRequest::default();
        request.observation_template = Some(template);
        request
    }

    #[test]
    fn test_missing_template_reported_first() {
        let codec = InsertResultTemplateCodec::new();
        let err = codec
            .encode(&InsertResultTemplateRequest::default().into())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Encoder InsertResultTemplateCodec can not encode 'missing ObservationTemplate'"
        );
    }

    #[test]
    fn test_missing_offering_reported_second() {
        let codec = InsertResultTemplateCodec::new();
        let mut request = InsertResultTemplateRequest::default();
        request.observation_template = Some(ObservationTemplate::new());
        let err = codec.encode(&request.into()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Encoder InsertResultTemplateCodec can not encode 'missing offering'"
        );
    }

    #[test]
    fn test_missing_structure_reported_third() {
        let codec = InsertResultTemplateCodec::new();
        let request = request_with_template_and_offering();
        let err = codec.encode(&request.into()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Encoder InsertResultTemplateCodec can not encode 'missing resultStructure'"
        );
    }

    #[test]
    fn test_missing_encoding_reported_fourth() {
        let codec = InsertResultTemplateCodec::new();
        let mut request = request_with_template_and_offering();
        request.result_structure = Some(SweDataRecord::new());
        let err = codec.encode(&request.into()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Encoder InsertResultTemplateCodec can not encode 'missing resultEncoding'"
        );
    }

    #[test]
    fn test_validation_precedes_delegation() {
        // Validation failures must surface even with no resolver bound:
        // no partial assembly, no delegation before the checks pass.
        let codec = InsertResultTemplateCodec::new();
        let err = codec
            .encode(&InsertResultTemplateRequest::default().into())
            .unwrap_err();
        assert!(matches!(err, CodecError::UnsupportedInput { .. }));
    }

    #[test]
    fn test_complete_request_without_resolver_is_not_initialized() {
        let codec = InsertResultTemplateCodec::new();
        let mut request = request_with_template_and_offering();
        request.result_structure = Some(SweDataRecord::new());
        request.result_encoding = Some(SweTextEncoding::new("@", ";"));
        let err = codec.encode(&request.into()).unwrap_err();
        assert!(matches!(err, CodecError::NotInitialized));
    }
}
