//! # Observation Template Codec
//!
//! Encodes observation blueprints. Two rules distinguish a template
//! from a concrete observation record:
//!
//! - The phenomenon time and result time are not yet known. The wire
//!   schema still requires both slots, so they are encoded present but
//!   explicitly nil with the fixed reason token
//!   [`TEMPLATE_NIL_REASON`] — never omitted, never given a value.
//! - The feature of interest is a full sub-structure; its fragment is
//!   produced by whichever codec the registry resolves for the
//!   `sampling-feature` tag, never assembled here.

use swire_core::{CodecError, DomainTag, MediaType, Timestamp};
use swire_doc::{FragmentBuilder, WireFragment};
use swire_model::{DomainValue, ObservationTemplate};

use crate::codec::{slot_child, unsupported_tag, Codec};
use crate::registry::{DelegationSlot, Resolver};
use crate::WIRE_MEDIA_TYPE;

const NAME: &str = "ObservationCodec";

/// Reason token marking a field that is unknown because the value is a
/// template, not a concrete record. Fixed by the wire contract.
pub const TEMPLATE_NIL_REASON: &str = "template";

/// Codec for observation templates. Delegates the feature of interest.
///
/// Offerings are not part of the observation fragment: the enclosing
/// request codec emits them as `offering` elements on the
/// `ResultTemplate` and restores them when decoding. A direct
/// `decode(encode(t))` on this codec alone therefore yields a template
/// with empty offerings; the round trip closes one level up.
#[derive(Debug, Default)]
pub struct ObservationCodec {
    delegation: DelegationSlot,
}

impl ObservationCodec {
    /// Construct the codec; the resolver arrives at registry
    /// initialization.
    pub fn new() -> Self {
        Self::default()
    }

    fn encode_template(&self, template: &ObservationTemplate) -> Result<WireFragment, CodecError> {
        let mut builder = FragmentBuilder::new("OM_Observation");

        if let Some(observation_type) = &template.observation_type {
            builder = builder.child(
                FragmentBuilder::new("type")
                    .attribute("href", observation_type)
                    .build(),
            );
        }

        builder = builder
            .child(time_slot("phenomenonTime", template.phenomenon_time.as_ref()))
            .child(time_slot("resultTime", template.result_time.as_ref()));

        if let Some(procedure) = &template.procedure {
            builder = builder.child(
                FragmentBuilder::new("procedure")
                    .attribute("href", procedure)
                    .build(),
            );
        }
        if let Some(observed_property) = &template.observed_property {
            builder = builder.child(
                FragmentBuilder::new("observedProperty")
                    .attribute("href", observed_property)
                    .build(),
            );
        }
        if let Some(feature) = &template.feature_of_interest {
            let delegate = self
                .delegation
                .resolve(DomainTag::SamplingFeature, WIRE_MEDIA_TYPE)?;
            let fragment = delegate.encode(&DomainValue::SamplingFeature(feature.clone()))?;
            builder = builder.slot("featureOfInterest", fragment);
        }
        Ok(builder.build())
    }

    fn decode_template(&self, fragment: &WireFragment) -> Result<ObservationTemplate, CodecError> {
        if fragment.name() != "OM_Observation" {
            return Err(CodecError::decoding(fragment.name(), "expected OM_Observation"));
        }

        let mut template = ObservationTemplate::new();
        template.observation_type = fragment
            .find("type")
            .and_then(|e| e.attribute("href"))
            .map(String::from);
        template.phenomenon_time = decode_time_slot(fragment, "phenomenonTime")?;
        template.result_time = decode_time_slot(fragment, "resultTime")?;
        template.procedure = fragment
            .find("procedure")
            .and_then(|e| e.attribute("href"))
            .map(String::from);
        template.observed_property = fragment
            .find("observedProperty")
            .and_then(|e| e.attribute("href"))
            .map(String::from);

        if fragment.find("featureOfInterest").is_some() {
            let inner = slot_child(fragment, "featureOfInterest")?;
            let delegate = self
                .delegation
                .resolve(DomainTag::SamplingFeature, WIRE_MEDIA_TYPE)?;
            match delegate.decode(inner)? {
                DomainValue::SamplingFeature(feature) => {
                    template.feature_of_interest = Some(feature);
                }
                other => {
                    return Err(CodecError::decoding(
                        "featureOfInterest",
                        format!("delegate returned unexpected value {}", other.tag()),
                    ));
                }
            }
        }
        Ok(template)
    }
}

impl Codec for ObservationCodec {
    fn name(&self) -> &'static str {
        NAME
    }

    fn supported_types(&self) -> Vec<(DomainTag, MediaType)> {
        vec![(DomainTag::ObservationTemplate, WIRE_MEDIA_TYPE)]
    }

    fn encode(&self, value: &DomainValue) -> Result<WireFragment, CodecError> {
        match value {
            DomainValue::ObservationTemplate(template) => self.encode_template(template),
            other => Err(unsupported_tag(NAME, other)),
        }
    }

    fn decode(&self, fragment: &WireFragment) -> Result<DomainValue, CodecError> {
        Ok(DomainValue::ObservationTemplate(
            self.decode_template(fragment)?,
        ))
    }

    fn bind_resolver(&self, resolver: Resolver) {
        self.delegation.bind(resolver);
    }
}

/// A time slot: a concrete instant when known, otherwise present but
/// explicitly nil with the `template` reason token.
fn time_slot(name: &str, time: Option<&Timestamp>) -> WireFragment {
    match time {
        Some(time) => FragmentBuilder::new(name).text(time.to_iso8601()).build(),
        None => FragmentBuilder::new(name)
            .nil_with_reason(TEMPLATE_NIL_REASON)
            .build(),
    }
}

fn decode_time_slot(fragment: &WireFragment, name: &str) -> Result<Option<Timestamp>, CodecError> {
    let Some(slot) = fragment.find(name) else {
        return Err(CodecError::decoding(
            name,
            "time slot must be present, nil-with-reason when unknown",
        ));
    };
    if slot.nil_reason().is_some() {
        return Ok(None);
    }
    match slot.text() {
        Some(text) => Ok(Some(Timestamp::parse(text)?)),
        None => Err(CodecError::decoding(name, "time slot has neither value nor nil reason")),
    }
}
