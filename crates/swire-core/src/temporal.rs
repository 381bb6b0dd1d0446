//! # Temporal Types — UTC-Only Timestamps
//!
//! Defines `Timestamp`, the UTC-only timestamp used for phenomenon and
//! result times. Wire documents in the sensor-observation family carry
//! times as ISO8601 with a `Z` suffix at seconds precision; keeping the
//! invariant at the type level means codecs never re-normalize.
//!
//! Non-UTC inputs are rejected at construction — there is no silent
//! conversion that could change the rendered wire text.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// A UTC-only timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`] — current UTC time, truncated.
/// - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`, truncating sub-seconds.
/// - [`Timestamp::parse()`] — from an ISO8601 string, rejecting non-UTC offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse a timestamp from an RFC 3339 / ISO8601 string.
    ///
    /// Only timestamps with the `Z` suffix are accepted. Explicit
    /// offsets like `+00:00` or `+05:30` are rejected — even `+00:00`,
    /// which is semantically equivalent to `Z` — so a decoded value
    /// re-encodes to byte-identical wire text.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Decoding` if the string is not valid
    /// RFC 3339 or uses a non-Z timezone offset.
    pub fn parse(s: &str) -> Result<Self, CodecError> {
        if !s.ends_with('Z') {
            return Err(CodecError::decoding(
                "timestamp",
                format!("timestamp must use Z suffix (UTC only), got: {s:?}"),
            ));
        }

        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            CodecError::decoding("timestamp", format!("invalid RFC 3339 timestamp {s:?}: {e}"))
        })?;

        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render as ISO8601 with Z suffix (e.g., `2026-01-15T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// Truncate a `DateTime<Utc>` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}
