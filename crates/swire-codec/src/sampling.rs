//! # Sampling Feature Codec
//!
//! Encodes sampled real-world features: identifier, display name,
//! feature type reference, and the sampled geometry as WKT with an
//! SRID. A leaf codec — geometries are carried opaquely, so nothing is
//! delegated.

use swire_core::{CodecError, DomainTag, MediaType};
use swire_doc::{FragmentBuilder, WireFragment};
use swire_model::{CodeType, DomainValue, Geometry, SamplingFeature};

use crate::codec::{unsupported_tag, Codec};
use crate::validation::{check_required, FieldRule};
use crate::WIRE_MEDIA_TYPE;

const NAME: &str = "SamplingCodec";

const RULES: &[FieldRule<SamplingFeature>] = &[FieldRule {
    field: "identifier",
    context: "sampling feature",
    is_present: |f| !f.identifier.is_empty(),
}];

/// Codec for sampling features.
#[derive(Debug, Default)]
pub struct SamplingCodec;

impl SamplingCodec {
    /// Construct the codec.
    pub fn new() -> Self {
        Self
    }

    fn encode_feature(&self, feature: &SamplingFeature) -> Result<WireFragment, CodecError> {
        check_required(NAME, feature, RULES)?;

        let mut builder = FragmentBuilder::new("SF_SamplingFeature").child(
            FragmentBuilder::new("identifier")
                .text(&feature.identifier)
                .build(),
        );
        if let Some(name) = &feature.name {
            let mut name_builder = FragmentBuilder::new("name").text(&name.value);
            if let Some(code_space) = &name.code_space {
                name_builder = name_builder.attribute("codeSpace", code_space);
            }
            builder = builder.child(name_builder.build());
        }
        if let Some(feature_type) = &feature.feature_type {
            builder = builder.child(
                FragmentBuilder::new("type")
                    .attribute("href", feature_type)
                    .build(),
            );
        }
        if let Some(geometry) = &feature.geometry {
            builder = builder.child(
                FragmentBuilder::new("shape")
                    .attribute("srid", geometry.srid.to_string())
                    .text(&geometry.wkt)
                    .build(),
            );
        }
        Ok(builder.build())
    }

    fn decode_feature(&self, fragment: &WireFragment) -> Result<SamplingFeature, CodecError> {
        if fragment.name() != "SF_SamplingFeature" {
            return Err(CodecError::decoding(
                fragment.name(),
                "expected SF_SamplingFeature",
            ));
        }

        let identifier = fragment
            .find("identifier")
            .and_then(|e| e.text())
            .ok_or_else(|| CodecError::decoding("SF_SamplingFeature", "missing identifier"))?;
        let mut feature = SamplingFeature::new(identifier);

        if let Some(name) = fragment.find("name") {
            let value = name
                .text()
                .ok_or_else(|| CodecError::decoding("name", "missing text content"))?;
            feature.name = Some(CodeType {
                value: value.to_string(),
                code_space: name.attribute("codeSpace").map(String::from),
            });
        }
        feature.feature_type = fragment
            .find("type")
            .and_then(|e| e.attribute("href"))
            .map(String::from);
        if let Some(shape) = fragment.find("shape") {
            let wkt = shape
                .text()
                .ok_or_else(|| CodecError::decoding("shape", "missing WKT content"))?;
            let srid = shape
                .attribute("srid")
                .ok_or_else(|| CodecError::decoding("shape", "missing srid attribute"))?;
            let srid: u32 = srid
                .parse()
                .map_err(|e| CodecError::decoding("shape", format!("invalid srid {srid:?}: {e}")))?;
            feature.geometry = Some(Geometry::new(wkt, srid));
        }
        Ok(feature)
    }
}

impl Codec for SamplingCodec {
    fn name(&self) -> &'static str {
        NAME
    }

    fn supported_types(&self) -> Vec<(DomainTag, MediaType)> {
        vec![(DomainTag::SamplingFeature, WIRE_MEDIA_TYPE)]
    }

    fn encode(&self, value: &DomainValue) -> Result<WireFragment, CodecError> {
        match value {
            DomainValue::SamplingFeature(feature) => self.encode_feature(feature),
            other => Err(unsupported_tag(NAME, other)),
        }
    }

    fn decode(&self, fragment: &WireFragment) -> Result<DomainValue, CodecError> {
        Ok(DomainValue::SamplingFeature(self.decode_feature(fragment)?))
    }
}
