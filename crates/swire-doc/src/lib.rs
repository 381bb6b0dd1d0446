//! # swire-doc — Wire Document Assembler
//!
//! The builder codecs use to materialize structured wire documents.
//! A [`WireFragment`] is an element tree assembled via
//! [`FragmentBuilder`]; the codec layer treats fragments as opaque
//! handles beyond embedding one inside another at a named slot.
//!
//! Fragments materialize two ways:
//!
//! - XML text via `quick-xml` — the standards-family wire format.
//! - A `serde_json::Value` tree — diagnostics and schema validation.
//!
//! The `schema` module provides on-demand document-level validation of
//! the JSON materialization against JSON Schema (Draft 2020-12).

pub mod fragment;
pub mod schema;

pub use fragment::{FragmentBuilder, WireFragment};
pub use schema::{DocumentValidator, SchemaError, Violation};
