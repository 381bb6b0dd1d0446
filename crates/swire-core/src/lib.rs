//! # swire-core — Foundational Types for sensorwire
//!
//! This crate is the leaf of the sensorwire workspace. It defines the
//! identity model used to address codecs (`CodecKey`, `DomainTag`,
//! `MediaType`), the error taxonomy shared by every layer (`CodecError`),
//! and the UTC-only `Timestamp` used for temporal fields.
//!
//! ## Key Design Principles
//!
//! 1. **Value-type identity.** Codec lookup is by structural equality on
//!    `CodecKey` and `(DomainTag, MediaType)` pairs — never by runtime
//!    type inspection.
//!
//! 2. **Exhaustive domain tags.** `DomainTag` is one enum, matched
//!    exhaustively. Adding a domain type forces every consumer to
//!    handle it at compile time.
//!
//! 3. **Stable error text.** `CodecError::UnsupportedInput` renders the
//!    exact strings interoperating clients match on. Changing them is a
//!    breaking wire-compatibility change, not a cosmetic one.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `swire-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod key;
pub mod temporal;

pub use error::CodecError;
pub use key::{CodecKey, CodecSelector, DomainTag, MediaType};
pub use temporal::Timestamp;

/// Service identifier for the sensor-observation service family.
pub const SERVICE: &str = "SOS";

/// Protocol version spoken by the codecs in this workspace.
pub const SERVICE_VERSION: &str = "2.0.0";
