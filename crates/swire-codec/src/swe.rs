//! # SWE Common Codec
//!
//! Handles two domain tags: the data record describing a result
//! structure and the text encoding describing result tokenization.
//! A multi-tag leaf codec — it never delegates.

use swire_core::{CodecError, DomainTag, MediaType};
use swire_doc::{FragmentBuilder, WireFragment};
use swire_model::{
    DomainValue, SweComponent, SweDataRecord, SweField, SweQuantity, SweText, SweTextEncoding,
    SweTime,
};

use crate::codec::{unsupported_tag, Codec};
use crate::validation::{check_required, FieldRule};
use crate::WIRE_MEDIA_TYPE;

const NAME: &str = "SweCommonCodec";

const TEXT_ENCODING_RULES: &[FieldRule<SweTextEncoding>] = &[
    FieldRule {
        field: "tokenSeparator",
        context: "text encoding",
        is_present: |e| e.token_separator.is_some(),
    },
    FieldRule {
        field: "blockSeparator",
        context: "text encoding",
        is_present: |e| e.block_separator.is_some(),
    },
];

/// Codec for SWE common data records and text encodings.
#[derive(Debug, Default)]
pub struct SweCommonCodec;

impl SweCommonCodec {
    /// Construct the codec.
    pub fn new() -> Self {
        Self
    }

    fn encode_record(&self, record: &SweDataRecord) -> WireFragment {
        let mut builder = FragmentBuilder::new("DataRecord");
        for field in &record.fields {
            builder = builder.child(
                FragmentBuilder::new("field")
                    .attribute("name", &field.name)
                    .child(encode_component(&field.component))
                    .build(),
            );
        }
        builder.build()
    }

    fn encode_text_encoding(&self, encoding: &SweTextEncoding) -> Result<WireFragment, CodecError> {
        check_required(NAME, encoding, TEXT_ENCODING_RULES)?;
        let token = encoding
            .token_separator
            .as_deref()
            .ok_or_else(|| CodecError::unsupported_input(NAME, "missing tokenSeparator"))?;
        let block = encoding
            .block_separator
            .as_deref()
            .ok_or_else(|| CodecError::unsupported_input(NAME, "missing blockSeparator"))?;

        let mut builder = FragmentBuilder::new("TextEncoding")
            .attribute("tokenSeparator", token)
            .attribute("blockSeparator", block);
        if let Some(decimal) = &encoding.decimal_separator {
            builder = builder.attribute("decimalSeparator", decimal);
        }
        Ok(builder.build())
    }

    fn decode_record(&self, fragment: &WireFragment) -> Result<SweDataRecord, CodecError> {
        let mut record = SweDataRecord::new();
        for field in fragment.find_all("field") {
            let name = field
                .attribute("name")
                .ok_or_else(|| CodecError::decoding("field", "missing name attribute"))?;
            let component = field
                .children()
                .first()
                .ok_or_else(|| CodecError::decoding("field", "missing component element"))?;
            record.add_field(SweField::new(name, decode_component(component)?));
        }
        Ok(record)
    }

    fn decode_text_encoding(&self, fragment: &WireFragment) -> Result<SweTextEncoding, CodecError> {
        let token = fragment
            .attribute("tokenSeparator")
            .ok_or_else(|| CodecError::decoding("TextEncoding", "missing tokenSeparator attribute"))?;
        let block = fragment
            .attribute("blockSeparator")
            .ok_or_else(|| CodecError::decoding("TextEncoding", "missing blockSeparator attribute"))?;
        let mut encoding = SweTextEncoding::new(token, block);
        encoding.decimal_separator = fragment.attribute("decimalSeparator").map(String::from);
        Ok(encoding)
    }
}

impl Codec for SweCommonCodec {
    fn name(&self) -> &'static str {
        NAME
    }

    fn supported_types(&self) -> Vec<(DomainTag, MediaType)> {
        vec![
            (DomainTag::DataRecord, WIRE_MEDIA_TYPE),
            (DomainTag::TextEncoding, WIRE_MEDIA_TYPE),
        ]
    }

    fn encode(&self, value: &DomainValue) -> Result<WireFragment, CodecError> {
        match value {
            DomainValue::DataRecord(record) => Ok(self.encode_record(record)),
            DomainValue::TextEncoding(encoding) => self.encode_text_encoding(encoding),
            other => Err(unsupported_tag(NAME, other)),
        }
    }

    fn decode(&self, fragment: &WireFragment) -> Result<DomainValue, CodecError> {
        match fragment.name() {
            "DataRecord" => Ok(DomainValue::DataRecord(self.decode_record(fragment)?)),
            "TextEncoding" => Ok(DomainValue::TextEncoding(
                self.decode_text_encoding(fragment)?,
            )),
            other => Err(CodecError::decoding(
                other,
                "fragment is neither DataRecord nor TextEncoding",
            )),
        }
    }
}

fn encode_component(component: &SweComponent) -> WireFragment {
    match component {
        SweComponent::Time(time) => {
            scalar_component("Time", time.definition.as_deref(), time.uom.as_deref())
        }
        SweComponent::Quantity(quantity) => scalar_component(
            "Quantity",
            quantity.definition.as_deref(),
            quantity.uom.as_deref(),
        ),
        SweComponent::Text(text) => scalar_component("Text", text.definition.as_deref(), None),
    }
}

fn scalar_component(name: &str, definition: Option<&str>, uom: Option<&str>) -> WireFragment {
    let mut builder = FragmentBuilder::new(name);
    if let Some(definition) = definition {
        builder = builder.attribute("definition", definition);
    }
    if let Some(uom) = uom {
        builder = builder.child(FragmentBuilder::new("uom").attribute("code", uom).build());
    }
    builder.build()
}

fn decode_component(fragment: &WireFragment) -> Result<SweComponent, CodecError> {
    let definition = fragment.attribute("definition").map(String::from);
    let uom = fragment
        .find("uom")
        .and_then(|u| u.attribute("code"))
        .map(String::from);
    match fragment.name() {
        "Time" => Ok(SweComponent::Time(SweTime { definition, uom })),
        "Quantity" => Ok(SweComponent::Quantity(SweQuantity { definition, uom })),
        "Text" => Ok(SweComponent::Text(SweText { definition })),
        other => Err(CodecError::decoding(
            other,
            "unknown data component element",
        )),
    }
}
