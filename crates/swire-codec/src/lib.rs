//! # swire-codec — Codec Registry and Composition Framework
//!
//! The core of sensorwire: how codecs are selected, how they delegate
//! to one another for nested sub-structures, how mandatory-field
//! validation runs before assembly, and how template placeholder
//! values are applied.
//!
//! ## Architecture
//!
//! - [`Codec`] — one unit converting one domain type to/from one wire
//!   representation; stateless, `Send + Sync`, reentrant.
//! - [`CodecRegistry`] — process-scoped catalog with a two-phase
//!   lifecycle: registration (single-threaded, mutable) then
//!   [`CodecRegistry::initialize`] (freeze). After the freeze the
//!   registry is read concurrently without locking.
//! - [`Resolver`] — the narrow, non-owning lookup capability handed to
//!   each delegating codec at initialization. Codecs may request other
//!   codecs; they can never register or mutate.
//! - Validation — ordered mandatory-field rules per domain type,
//!   resolved to the single first violated rule.
//!
//! ## Delegation discipline
//!
//! A delegating codec never constructs nested fragments itself: it
//! resolves the codec for the sub-value's [`swire_core::DomainTag`] and
//! embeds whatever comes back. Failures from delegated encodes
//! propagate verbatim to the top-level caller — no wrapping, no
//! swallowing.

pub mod codec;
pub mod delete_observation;
pub mod insert_result_template;
pub mod observation;
pub mod registry;
pub mod sampling;
pub mod swe;
pub mod validation;

pub use codec::Codec;
pub use registry::{CodecRegistry, DelegationSlot, Resolver};
pub use validation::{check_required, first_missing, FieldRule, ValidationFailure};

pub use delete_observation::DeleteObservationCodec;
pub use insert_result_template::InsertResultTemplateCodec;
pub use observation::ObservationCodec;
pub use sampling::SamplingCodec;
pub use swe::SweCommonCodec;

use std::sync::Arc;

use swire_core::{CodecError, MediaType};

/// Media type the standard codec set registers under.
pub const WIRE_MEDIA_TYPE: MediaType = MediaType::ApplicationXml;

/// Build and freeze a registry with the full codec set.
///
/// # Errors
///
/// Returns `CodecError::DuplicateCodec` if the built-in set ever
/// declares colliding identities (a defect, not a runtime condition).
pub fn default_registry() -> Result<CodecRegistry, CodecError> {
    let mut registry = CodecRegistry::new();
    registry.register(Arc::new(InsertResultTemplateCodec::new()))?;
    registry.register(Arc::new(DeleteObservationCodec::new()))?;
    registry.register(Arc::new(ObservationCodec::new()))?;
    registry.register(Arc::new(SamplingCodec::new()))?;
    registry.register(Arc::new(SweCommonCodec::new()))?;
    registry.initialize();
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use swire_core::{CodecKey, DomainTag, SERVICE_VERSION};

    #[test]
    fn test_default_registry_resolves_all_tags() {
        let registry = default_registry().unwrap();
        for tag in [
            DomainTag::InsertResultTemplateRequest,
            DomainTag::DeleteObservationResponse,
            DomainTag::ObservationTemplate,
            DomainTag::SamplingFeature,
            DomainTag::DataRecord,
            DomainTag::TextEncoding,
        ] {
            registry.resolve(tag, WIRE_MEDIA_TYPE).unwrap();
        }
    }

    #[test]
    fn test_default_registry_resolves_operation_keys() {
        let registry = default_registry().unwrap();
        for operation in ["InsertResultTemplate", "DeleteObservation"] {
            let key = CodecKey::new(operation, SERVICE_VERSION, WIRE_MEDIA_TYPE);
            registry.resolve_by_key(&key).unwrap();
        }
    }
}
