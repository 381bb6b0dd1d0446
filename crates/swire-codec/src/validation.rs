//! # Mandatory-Field Validation
//!
//! Pre-flight checks each codec runs before committing to assembly.
//! Every domain type declares an ordered list of required sub-fields;
//! evaluation walks the list in declared order and stops at the first
//! missing field. Later-stage absence is not reported simultaneously —
//! consumers depend on the precedence when several fields are missing
//! at once.
//!
//! The failure is returned as a value, never raised: the codec maps it
//! onto the stable `UnsupportedInput` reason string
//! `missing {field}`.

use swire_core::CodecError;

/// A structured description of one missing mandatory field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    /// The declared name of the missing field (appears verbatim in the
    /// stable reason string).
    pub missing_field: String,
    /// Where in the domain value the field was expected.
    pub context: String,
}

impl ValidationFailure {
    /// The stable reason token for this failure.
    pub fn reason(&self) -> String {
        format!("missing {}", self.missing_field)
    }

    /// Wrap as the `UnsupportedInput` error a caller observes.
    pub fn into_error(self, encoder: &str) -> CodecError {
        let reason = self.reason();
        CodecError::unsupported_input(encoder, reason)
    }
}

/// One mandatory-field rule: a declared field name, the context it
/// lives in, and a presence predicate over the domain type.
pub struct FieldRule<T: ?Sized> {
    /// Field name as it appears in the stable reason string.
    pub field: &'static str,
    /// Human-readable location of the field.
    pub context: &'static str,
    /// Presence check. `false` means the field is missing.
    pub is_present: fn(&T) -> bool,
}

/// Evaluate rules in declared order; return the first failure, if any.
pub fn first_missing<T: ?Sized>(value: &T, rules: &[FieldRule<T>]) -> Option<ValidationFailure> {
    rules
        .iter()
        .find(|rule| !(rule.is_present)(value))
        .map(|rule| ValidationFailure {
            missing_field: rule.field.to_string(),
            context: rule.context.to_string(),
        })
}

/// Evaluate rules and convert the first failure into the encoder's
/// stable `UnsupportedInput` error.
pub fn check_required<T: ?Sized>(
    encoder: &'static str,
    value: &T,
    rules: &[FieldRule<T>],
) -> Result<(), CodecError> {
    match first_missing(value, rules) {
        None => Ok(()),
        Some(failure) => Err(failure.into_error(encoder)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        first: Option<()>,
        second: Option<()>,
    }

    const RULES: &[FieldRule<Probe>] = &[
        FieldRule {
            field: "first",
            context: "probe",
            is_present: |p| p.first.is_some(),
        },
        FieldRule {
            field: "second",
            context: "probe",
            is_present: |p| p.second.is_some(),
        },
    ];

    #[test]
    fn test_all_present_passes() {
        let probe = Probe {
            first: Some(()),
            second: Some(()),
        };
        assert!(first_missing(&probe, RULES).is_none());
        assert!(check_required("ProbeCodec", &probe, RULES).is_ok());
    }

    #[test]
    fn test_stops_at_first_missing() {
        // Both fields missing: only the first is reported.
        let probe = Probe {
            first: None,
            second: None,
        };
        let failure = first_missing(&probe, RULES).unwrap();
        assert_eq!(failure.missing_field, "first");
        assert_eq!(failure.reason(), "missing first");
    }

    #[test]
    fn test_later_rule_reported_when_earlier_present() {
        let probe = Probe {
            first: Some(()),
            second: None,
        };
        let failure = first_missing(&probe, RULES).unwrap();
        assert_eq!(failure.missing_field, "second");
    }

    #[test]
    fn test_into_error_renders_stable_message() {
        let probe = Probe {
            first: None,
            second: Some(()),
        };
        let err = check_required("ProbeCodec", &probe, RULES).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Encoder ProbeCodec can not encode 'missing first'"
        );
    }
}
