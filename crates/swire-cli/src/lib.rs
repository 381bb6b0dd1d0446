//! # swire-cli — sensorwire Command-Line Interface
//!
//! Drives the codec layer from the shell: domain values in, wire
//! documents out, and back again.
//!
//! ## Subcommands
//!
//! - `encode` — Encode a JSON domain value into a wire document
//! - `decode` — Decode a materialized document back into a domain value
//! - `codecs` — List registered codecs with their dispatch identities
//! - `validate` — Validate a materialized document against a JSON Schema
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to domain crates — no codec logic here.

pub mod codecs;
pub mod decode;
pub mod encode;
pub mod validate;
