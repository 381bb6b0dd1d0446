//! # Error Taxonomy
//!
//! Structured failure values for the codec layer. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Stability Invariant
//!
//! The `Display` output of `UnsupportedInput` is matched verbatim by
//! interoperability tests and downstream clients:
//!
//! ```text
//! Encoder InsertResultTemplateCodec can not encode 'missing offering'
//! ```
//!
//! The reason tokens (`null`, `missing ObservationTemplate`,
//! `missing offering`, `missing resultStructure`,
//! `missing resultEncoding`, ...) are literal and stable across
//! versions. Do not rephrase them.
//!
//! ## Propagation Policy
//!
//! Validation resolves to the single first violated rule and returns
//! immediately. Failures raised by a delegated sub-encode propagate
//! unchanged through every delegating codec above them — never caught,
//! wrapped, or re-labeled.

use thiserror::Error;

use crate::key::CodecSelector;

/// Top-level error type for the codec layer.
#[derive(Error, Debug)]
pub enum CodecError {
    /// No codec is registered for the requested selector. Surfaced to
    /// the caller as a configuration/deployment problem; never retried.
    #[error("no codec found for {selector}")]
    NoCodecFound {
        /// The lookup that found nothing.
        selector: CodecSelector,
    },

    /// Two codecs claimed the same key or the same (tag, media type)
    /// pair. Startup-only, fatal: the dispatch would be ambiguous.
    #[error("duplicate codec registration for {selector}")]
    DuplicateCodec {
        /// The colliding identity.
        selector: CodecSelector,
    },

    /// The registry was read before `initialize()` completed, or a
    /// delegation slot outlived the registry it was bound to.
    /// Programming error, fatal, not retried.
    #[error("codec registry used before initialize()")]
    NotInitialized,

    /// A codec was registered after the registry was frozen. The
    /// registry is immutable post-initialization; hot reload is a new
    /// registry instance plus an atomic swap, never in-place mutation.
    #[error("codec registry is frozen; register() is only valid before initialize()")]
    AlreadyInitialized,

    /// The input value (or a mandatory field within it) is absent or
    /// invalid. Recoverable at the caller's discretion; the reason
    /// string is stable and literal.
    #[error("Encoder {encoder} can not encode '{reason}'")]
    UnsupportedInput {
        /// Name of the codec that rejected the input.
        encoder: String,
        /// Stable reason token (e.g., `null`, `missing offering`).
        reason: String,
    },

    /// Structural failure while assembling a wire fragment.
    #[error("encoding failed at {location}: {detail}")]
    Encoding {
        /// Slot or element where assembly failed.
        location: String,
        /// What went wrong.
        detail: String,
    },

    /// Structural failure while parsing a wire fragment.
    #[error("decoding failed at {location}: {detail}")]
    Decoding {
        /// Slot or element where parsing failed.
        location: String,
        /// What went wrong.
        detail: String,
    },
}

impl CodecError {
    /// Build the stable `UnsupportedInput` failure for an encoder name
    /// and reason token.
    pub fn unsupported_input(encoder: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedInput {
            encoder: encoder.into(),
            reason: reason.into(),
        }
    }

    /// Build a `Decoding` failure for a location and detail.
    pub fn decoding(location: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Decoding {
            location: location.into(),
            detail: detail.into(),
        }
    }
}
