//! # Domain Value Dispatch
//!
//! `DomainValue` is the bridge between callers and the codec registry:
//! one exhaustive enum over every encodable domain type, with a total
//! mapping onto [`DomainTag`]. Delegating codecs hand nested sub-values
//! to the registry as `DomainValue`s and the registry dispatches on the
//! tag — exact lookup, never runtime type inspection.

use serde::{Deserialize, Serialize};
use swire_core::DomainTag;

use crate::feature::SamplingFeature;
use crate::observation::ObservationTemplate;
use crate::request::InsertResultTemplateRequest;
use crate::response::DeleteObservationResponse;
use crate::swe::{SweDataRecord, SweTextEncoding};

/// Any domain value the codec layer can encode or decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DomainValue {
    /// An InsertResultTemplate request.
    InsertResultTemplateRequest(InsertResultTemplateRequest),
    /// A DeleteObservation response.
    DeleteObservationResponse(DeleteObservationResponse),
    /// An observation blueprint.
    ObservationTemplate(ObservationTemplate),
    /// A sampled feature.
    SamplingFeature(SamplingFeature),
    /// A SWE data record.
    DataRecord(SweDataRecord),
    /// A SWE text encoding.
    TextEncoding(SweTextEncoding),
}

impl DomainValue {
    /// The domain tag used for registry dispatch.
    pub fn tag(&self) -> DomainTag {
        match self {
            Self::InsertResultTemplateRequest(_) => DomainTag::InsertResultTemplateRequest,
            Self::DeleteObservationResponse(_) => DomainTag::DeleteObservationResponse,
            Self::ObservationTemplate(_) => DomainTag::ObservationTemplate,
            Self::SamplingFeature(_) => DomainTag::SamplingFeature,
            Self::DataRecord(_) => DomainTag::DataRecord,
            Self::TextEncoding(_) => DomainTag::TextEncoding,
        }
    }
}

impl From<InsertResultTemplateRequest> for DomainValue {
    fn from(v: InsertResultTemplateRequest) -> Self {
        Self::InsertResultTemplateRequest(v)
    }
}

impl From<DeleteObservationResponse> for DomainValue {
    fn from(v: DeleteObservationResponse) -> Self {
        Self::DeleteObservationResponse(v)
    }
}

impl From<ObservationTemplate> for DomainValue {
    fn from(v: ObservationTemplate) -> Self {
        Self::ObservationTemplate(v)
    }
}

impl From<SamplingFeature> for DomainValue {
    fn from(v: SamplingFeature) -> Self {
        Self::SamplingFeature(v)
    }
}

impl From<SweDataRecord> for DomainValue {
    fn from(v: SweDataRecord) -> Self {
        Self::DataRecord(v)
    }
}

impl From<SweTextEncoding> for DomainValue {
    fn from(v: SweTextEncoding) -> Self {
        Self::TextEncoding(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_mapping_is_total() {
        let values: Vec<DomainValue> = vec![
            InsertResultTemplateRequest::default().into(),
            DeleteObservationResponse::default().into(),
            ObservationTemplate::new().into(),
            SamplingFeature::new("f").into(),
            SweDataRecord::new().into(),
            SweTextEncoding::new("@", ";").into(),
        ];
        let tags: Vec<DomainTag> = values.iter().map(DomainValue::tag).collect();
        assert_eq!(
            tags,
            [
                DomainTag::InsertResultTemplateRequest,
                DomainTag::DeleteObservationResponse,
                DomainTag::ObservationTemplate,
                DomainTag::SamplingFeature,
                DomainTag::DataRecord,
                DomainTag::TextEncoding,
            ]
        );
    }

    #[test]
    fn test_serde_tagged_round_trip() {
        let value: DomainValue = SweTextEncoding::new("@", ";").into();
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["type"], "text-encoding");
        let back: DomainValue = serde_json::from_value(json).unwrap();
        assert_eq!(back, value);
    }
}
