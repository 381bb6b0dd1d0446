//! # swire-model — Domain Model for the Sensor-Observation Family
//!
//! Plain typed values consumed and produced by the codec layer:
//! requests, responses, observation templates, sampling features, and
//! the SWE common data structures that describe result streams.
//!
//! The codec framework treats these as opaque domain values addressed
//! by [`swire_core::DomainTag`]; the [`DomainValue`] enum in this crate
//! is the dynamic-dispatch bridge between the two.
//!
//! All types are serde-derived and structurally comparable — the
//! round-trip law `decode(encode(v)) == v` relies on `PartialEq` here.

pub mod code_type;
pub mod feature;
pub mod observation;
pub mod request;
pub mod response;
pub mod swe;
pub mod value;

pub use code_type::CodeType;
pub use feature::{Geometry, SamplingFeature};
pub use observation::ObservationTemplate;
pub use request::InsertResultTemplateRequest;
pub use response::DeleteObservationResponse;
pub use swe::{SweComponent, SweDataRecord, SweField, SweQuantity, SweText, SweTextEncoding, SweTime};
pub use value::DomainValue;
