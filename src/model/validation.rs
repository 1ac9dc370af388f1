use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::field::{FieldId, FieldKind, FieldSpec};
use super::form_state::FormState;

/// A field value that would be refused by the form's input constraints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{label} must be a number, got {value:?}")]
    NotANumber { label: &'static str, value: String },
    #[error("{label} must be a whole number, got {value:?}")]
    NotAWholeNumber { label: &'static str, value: String },
    #[error("{label} must be between {min} and {max}")]
    OutOfRange {
        label: &'static str,
        min: String,
        max: String,
    },
    #[error("{label} must be one of the listed options, got {value:?}")]
    UnknownOption { label: &'static str, value: String },
}

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?(\d+(\.\d+)?|\.\d+)$").expect("valid hardcoded regex"));

static INTEGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+$").expect("valid hardcoded regex"));

/// Checks one value against its field's constraints.
///
/// Every field is required (non-empty). Numbers must parse, be whole when the
/// field says so, and fall inside the inclusive bounds; selects must hold one
/// of their options.
pub fn validate_field(spec: &FieldSpec, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required(spec.label));
    }
    match spec.kind {
        FieldKind::Text => Ok(()),
        FieldKind::Number { min, max, integer } => {
            if integer && NUMBER_RE.is_match(value) && !INTEGER_RE.is_match(value) {
                return Err(ValidationError::NotAWholeNumber {
                    label: spec.label,
                    value: value.to_string(),
                });
            }
            let parsed = NUMBER_RE
                .is_match(value)
                .then(|| value.parse::<f64>().ok())
                .flatten()
                .ok_or_else(|| ValidationError::NotANumber {
                    label: spec.label,
                    value: value.to_string(),
                })?;
            if (min..=max).contains(&parsed) {
                Ok(())
            } else {
                Err(ValidationError::OutOfRange {
                    label: spec.label,
                    min: min.to_string(),
                    max: max.to_string(),
                })
            }
        }
        FieldKind::Select { options } => {
            if options.contains(&value) {
                Ok(())
            } else {
                Err(ValidationError::UnknownOption {
                    label: spec.label,
                    value: value.to_string(),
                })
            }
        }
    }
}

/// Checks every field of the form, returning each failure in schema order.
///
/// An empty result means the form may be submitted.
pub fn validate_form(state: &FormState) -> Vec<(FieldId, ValidationError)> {
    state
        .iter()
        .filter_map(|(id, value)| validate_field(id.spec(), value).err().map(|e| (id, e)))
        .collect()
}
