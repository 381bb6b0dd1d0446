//! # InsertResultTemplate End-to-End Encoding Tests
//!
//! Drives the full frozen registry through the complete
//! InsertResultTemplate scenario: a fully-populated request is encoded
//! top-down through every delegating codec, and the assembled document
//! is checked element by element. The mandatory-field ladder is walked
//! violation by violation against the exact stable messages consumers
//! match on.

use std::sync::Arc;
use std::thread;

use swire_codec::{default_registry, CodecRegistry, WIRE_MEDIA_TYPE};
use swire_core::{CodecError, CodecKey, SERVICE_VERSION};
use swire_doc::WireFragment;
use swire_model::feature::SAMPLING_POINT_TYPE;
use swire_model::observation::OBSERVATION_TYPE_MEASUREMENT;
use swire_model::{
    CodeType, DomainValue, Geometry, InsertResultTemplateRequest, ObservationTemplate,
    SamplingFeature, SweComponent, SweDataRecord, SweField, SweTextEncoding, SweTime,
};

fn request_key() -> CodecKey {
    CodecKey::new("InsertResultTemplate", SERVICE_VERSION, WIRE_MEDIA_TYPE)
}

fn sampling_feature() -> SamplingFeature {
    SamplingFeature {
        identifier: "test-feature-identifier".to_string(),
        name: Some(CodeType::new("test-feature-name")),
        feature_type: Some(SAMPLING_POINT_TYPE.to_string()),
        geometry: Some(Geometry::new("POINT(30 10)", 4326)),
    }
}

fn observation_template() -> ObservationTemplate {
    let mut template = ObservationTemplate::new();
    template.add_offering("test-offering");
    template.observation_type = Some(OBSERVATION_TYPE_MEASUREMENT.to_string());
    template.procedure = Some("test-procedure-identifier".to_string());
    template.observed_property = Some("test-observed-property".to_string());
    template.feature_of_interest = Some(sampling_feature());
    template
}

fn result_structure() -> SweDataRecord {
    let mut record = SweDataRecord::new();
    record.add_field(SweField::new(
        "test_field_1_name",
        SweComponent::Time(SweTime {
            definition: Some("test-field-1-definition".to_string()),
            uom: Some("test-field-1-uom".to_string()),
        }),
    ));
    record
}

fn full_request() -> InsertResultTemplateRequest {
    let mut request = InsertResultTemplateRequest::default();
    request.identifier = Some("test-template-identifier".to_string());
    request.observation_template = Some(observation_template());
    request.result_structure = Some(result_structure());
    request.result_encoding = Some(SweTextEncoding::new("@", ";"));
    request
}

fn encode(registry: &CodecRegistry, request: InsertResultTemplateRequest) -> WireFragment {
    registry
        .encode(&request_key(), Some(&request.into()))
        .unwrap()
}

fn encode_err(registry: &CodecRegistry, request: InsertResultTemplateRequest) -> String {
    registry
        .encode(&request_key(), Some(&request.into()))
        .unwrap_err()
        .to_string()
}

fn result_template(document: &WireFragment) -> &WireFragment {
    document
        .find("proposedTemplate")
        .and_then(|p| p.find("ResultTemplate"))
        .unwrap()
}

#[test]
fn test_document_root_carries_service_and_version() {
    let registry = default_registry().unwrap();
    let document = encode(&registry, full_request());
    assert_eq!(document.name(), "InsertResultTemplate");
    assert_eq!(document.attribute("service"), Some("SOS"));
    assert_eq!(document.attribute("version"), Some("2.0.0"));
}

#[test]
fn test_identifier_and_offering_on_result_template() {
    let registry = default_registry().unwrap();
    let document = encode(&registry, full_request());
    let template = result_template(&document);
    assert_eq!(
        template.find("identifier").and_then(|e| e.text()),
        Some("test-template-identifier")
    );
    assert_eq!(
        template.find("offering").and_then(|e| e.text()),
        Some("test-offering")
    );
}

#[test]
fn test_omitted_identifier_is_not_encoded() {
    let registry = default_registry().unwrap();
    let mut request = full_request();
    request.identifier = None;
    let document = encode(&registry, request);
    assert!(result_template(&document).find("identifier").is_none());
}

#[test]
fn test_observation_template_times_are_nil_with_template_reason() {
    let registry = default_registry().unwrap();
    let document = encode(&registry, full_request());
    let observation = result_template(&document)
        .find("observationTemplate")
        .and_then(|s| s.children().first())
        .unwrap();
    assert_eq!(observation.name(), "OM_Observation");
    for slot_name in ["phenomenonTime", "resultTime"] {
        let slot = observation.find(slot_name).unwrap();
        assert_eq!(slot.nil_reason(), Some("template"), "{slot_name}");
        assert!(slot.text().is_none(), "{slot_name} must carry no value");
    }
}

#[test]
fn test_observation_template_references() {
    let registry = default_registry().unwrap();
    let document = encode(&registry, full_request());
    let observation = result_template(&document)
        .find("observationTemplate")
        .and_then(|s| s.children().first())
        .unwrap();
    assert_eq!(
        observation.find("type").and_then(|e| e.attribute("href")),
        Some(OBSERVATION_TYPE_MEASUREMENT)
    );
    assert_eq!(
        observation
            .find("procedure")
            .and_then(|e| e.attribute("href")),
        Some("test-procedure-identifier")
    );
    assert_eq!(
        observation
            .find("observedProperty")
            .and_then(|e| e.attribute("href")),
        Some("test-observed-property")
    );
}

#[test]
fn test_feature_of_interest_is_fully_delegated() {
    let registry = default_registry().unwrap();
    let document = encode(&registry, full_request());
    let feature = result_template(&document)
        .find("observationTemplate")
        .and_then(|s| s.children().first())
        .and_then(|o| o.find("featureOfInterest"))
        .and_then(|s| s.children().first())
        .unwrap();
    assert_eq!(feature.name(), "SF_SamplingFeature");
    assert_eq!(
        feature.find("identifier").and_then(|e| e.text()),
        Some("test-feature-identifier")
    );
    assert_eq!(
        feature.find("name").and_then(|e| e.text()),
        Some("test-feature-name")
    );
    let shape = feature.find("shape").unwrap();
    assert_eq!(shape.text(), Some("POINT(30 10)"));
    assert_eq!(shape.attribute("srid"), Some("4326"));
}

#[test]
fn test_result_structure_field_and_uom() {
    let registry = default_registry().unwrap();
    let document = encode(&registry, full_request());
    let record = result_template(&document)
        .find("resultStructure")
        .and_then(|s| s.children().first())
        .unwrap();
    assert_eq!(record.name(), "DataRecord");
    let field = record.find("field").unwrap();
    assert_eq!(field.attribute("name"), Some("test_field_1_name"));
    let time = &field.children()[0];
    assert_eq!(time.name(), "Time");
    assert_eq!(
        time.find("uom").and_then(|u| u.attribute("code")),
        Some("test-field-1-uom")
    );
}

#[test]
fn test_result_encoding_separators() {
    let registry = default_registry().unwrap();
    let document = encode(&registry, full_request());
    let encoding = result_template(&document)
        .find("resultEncoding")
        .and_then(|s| s.children().first())
        .unwrap();
    assert_eq!(encoding.name(), "TextEncoding");
    assert_eq!(encoding.attribute("tokenSeparator"), Some("@"));
    assert_eq!(encoding.attribute("blockSeparator"), Some(";"));
}

#[test]
fn test_null_input_is_rejected_before_field_checks() {
    let registry = default_registry().unwrap();
    let err = registry.encode(&request_key(), None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Encoder InsertResultTemplateCodec can not encode 'null'"
    );
}

#[test]
fn test_mandatory_field_ladder() {
    let registry = default_registry().unwrap();

    // Violations are reported one at a time, in precedence order;
    // fixing each one surfaces the next.
    let mut request = InsertResultTemplateRequest::default();
    assert_eq!(
        encode_err(&registry, request.clone()),
        "Encoder InsertResultTemplateCodec can not encode 'missing ObservationTemplate'"
    );

    request.observation_template = Some(ObservationTemplate::new());
    assert_eq!(
        encode_err(&registry, request.clone()),
        "Encoder InsertResultTemplateCodec can not encode 'missing offering'"
    );

    request.observation_template = Some(observation_template());
    assert_eq!(
        encode_err(&registry, request.clone()),
        "Encoder InsertResultTemplateCodec can not encode 'missing resultStructure'"
    );

    request.result_structure = Some(result_structure());
    assert_eq!(
        encode_err(&registry, request.clone()),
        "Encoder InsertResultTemplateCodec can not encode 'missing resultEncoding'"
    );

    request.result_encoding = Some(SweTextEncoding::new("@", ";"));
    encode(&registry, request);
}

#[test]
fn test_nested_separator_failure_propagates_verbatim() {
    let registry = default_registry().unwrap();
    let mut request = full_request();
    request.result_encoding = Some(SweTextEncoding::default());
    assert_eq!(
        encode_err(&registry, request),
        "Encoder SweCommonCodec can not encode 'missing tokenSeparator'"
    );
}

#[test]
fn test_deeply_nested_feature_failure_propagates_verbatim() {
    let registry = default_registry().unwrap();
    let mut request = full_request();
    // Three delegation levels down: request -> observation -> feature.
    if let Some(template) = request.observation_template.as_mut() {
        template.feature_of_interest = Some(SamplingFeature::default());
    }
    assert_eq!(
        encode_err(&registry, request),
        "Encoder SamplingCodec can not encode 'missing identifier'"
    );
}

#[test]
fn test_full_round_trip() {
    let registry = default_registry().unwrap();
    let value: DomainValue = full_request().into();
    let document = registry.encode(&request_key(), Some(&value)).unwrap();
    let decoded = registry.decode(&request_key(), &document).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn test_unknown_operation_key_fails() {
    let registry = default_registry().unwrap();
    let key = CodecKey::new("GetCapabilities", SERVICE_VERSION, WIRE_MEDIA_TYPE);
    let err = registry
        .encode(&key, Some(&full_request().into()))
        .unwrap_err();
    assert!(matches!(err, CodecError::NoCodecFound { .. }));
}

#[test]
fn test_concurrent_encodes_over_shared_registry() {
    let registry = Arc::new(default_registry().unwrap());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let mut request = full_request();
                request.identifier = Some(format!("template-{i}"));
                let document = registry
                    .encode(&request_key(), Some(&request.into()))
                    .unwrap();
                let identifier = result_template(&document)
                    .find("identifier")
                    .and_then(|e| e.text())
                    .map(String::from);
                assert_eq!(identifier.as_deref(), Some(format!("template-{i}").as_str()));
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
