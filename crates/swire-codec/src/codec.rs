//! # The Codec Trait
//!
//! One codec converts one set of domain types to/from one wire
//! representation. Codecs are stateless and reentrant: encode/decode
//! calls carry all per-call state on the stack, so unrelated calls —
//! including calls nested into each other through delegation — never
//! race over shared mutable state.

use swire_core::{CodecError, CodecKey, DomainTag, MediaType};
use swire_doc::WireFragment;
use swire_model::DomainValue;

use crate::registry::Resolver;

/// A unit of conversion between one or more domain types and a wire
/// representation.
///
/// Implementations declare their identity twice over: operation-level
/// [`CodecKey`]s for top-level dispatch, and `(DomainTag, MediaType)`
/// pairs for delegated sub-encodes. Sub-codecs that are only ever
/// reached through delegation declare no keys.
pub trait Codec: Send + Sync {
    /// Stable codec name, used in error messages consumers match on.
    fn name(&self) -> &'static str;

    /// Operation-level keys this codec serves. Empty for sub-codecs.
    fn keys(&self) -> Vec<CodecKey> {
        Vec::new()
    }

    /// Every `(DomainTag, MediaType)` pair this codec understands.
    fn supported_types(&self) -> Vec<(DomainTag, MediaType)>;

    /// Validate `value` and assemble its wire fragment.
    ///
    /// # Errors
    ///
    /// `UnsupportedInput` with a stable reason for the first violated
    /// mandatory-field rule; delegated failures propagate unchanged.
    fn encode(&self, value: &DomainValue) -> Result<WireFragment, CodecError>;

    /// Parse a wire fragment back into its domain value.
    ///
    /// # Errors
    ///
    /// `Decoding { location, detail }` for unknown or structurally
    /// broken fragments; delegated failures propagate unchanged.
    fn decode(&self, fragment: &WireFragment) -> Result<DomainValue, CodecError>;

    /// Receive the registry's lookup capability.
    ///
    /// Called once per codec during [`crate::CodecRegistry::initialize`].
    /// Leaf codecs that never delegate keep the default no-op.
    fn bind_resolver(&self, _resolver: Resolver) {}
}

impl std::fmt::Debug for dyn Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Codec").field("name", &self.name()).finish()
    }
}

/// Rejection for a `DomainValue` variant a codec does not support.
pub(crate) fn unsupported_tag(encoder: &str, value: &DomainValue) -> CodecError {
    CodecError::unsupported_input(encoder, format!("unsupported input type {}", value.tag()))
}

/// The single delegated fragment inside a named slot element.
pub(crate) fn slot_child<'a>(
    parent: &'a WireFragment,
    slot: &str,
) -> Result<&'a WireFragment, CodecError> {
    parent
        .find(slot)
        .and_then(|s| s.children().first())
        .ok_or_else(|| CodecError::decoding(slot, "missing or empty slot"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use swire_model::SweTextEncoding;

    #[test]
    fn test_unsupported_tag_message() {
        let value: DomainValue = SweTextEncoding::new("@", ";").into();
        let err = unsupported_tag("SamplingCodec", &value);
        assert_eq!(
            err.to_string(),
            "Encoder SamplingCodec can not encode 'unsupported input type text-encoding'"
        );
    }
}
