//! Validation rules for the two form fields.
//!
//! Rules are checked in list order and the first violation wins, so an empty
//! name always reports [`FieldError::Required`] and never the pattern error.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Lowercase letter first, then letters, digits or underscores, never ending in `_`.
pub const COLUMN_NAME_PATTERN: &str = r"^[a-z]([a-z0-9_]*[a-z0-9])?$";

static COLUMN_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(COLUMN_NAME_PATTERN).expect("column name pattern compiles"));

/// A rule violation for a single field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldError {
    /// The field is empty.
    Required,
    /// The column name does not match [`COLUMN_NAME_PATTERN`].
    Pattern,
}

impl FieldError {
    /// Built-in inline message for a name field error.
    pub fn name_message(self) -> &'static str {
        match self {
            Self::Required => "Column name is required.",
            Self::Pattern => {
                "Column name must start with a lowercase letter, contain only lowercase letters, \
                 numbers and underscores, and must not end with an underscore."
            }
        }
    }

    /// Built-in inline message for a label field error.
    ///
    /// The label only has a required rule, so any error reads as "required".
    pub fn label_message(self) -> &'static str {
        match self {
            Self::Required | Self::Pattern => "Column label is required.",
        }
    }
}

pub fn is_valid_column_name(name: &str) -> bool {
    COLUMN_NAME_RE.is_match(name)
}

pub fn validate_name(name: &str) -> Option<FieldError> {
    if name.is_empty() {
        Some(FieldError::Required)
    } else if !is_valid_column_name(name) {
        Some(FieldError::Pattern)
    } else {
        None
    }
}

pub fn validate_label(label: &str) -> Option<FieldError> {
    label.is_empty().then_some(FieldError::Required)
}

/// Derived validation result for both drafts. Recomputed, never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidationState {
    pub name: Option<FieldError>,
    pub label: Option<FieldError>,
}

impl ValidationState {
    pub fn evaluate(name: &str, label: &str) -> Self {
        Self {
            name: validate_name(name),
            label: validate_label(label),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.name.is_none() && self.label.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["a", "z9", "order_id", "col_1_b", "abc123", "a_b"] {
            assert_eq!(validate_name(name), None, "{name} should be valid");
        }
    }

    #[test]
    fn test_pattern_violations() {
        for name in ["_a", "1col", "Col", "col_", "my col", "col-1", "é", "a__"] {
            assert_eq!(
                validate_name(name),
                Some(FieldError::Pattern),
                "{name} should fail the pattern rule"
            );
        }
    }

    #[test]
    fn test_required_takes_precedence() {
        assert_eq!(validate_name(""), Some(FieldError::Required));
        assert_eq!(validate_label(""), Some(FieldError::Required));
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        // Emptiness is checked on the raw string.
        assert_eq!(validate_name(" "), Some(FieldError::Pattern));
        assert_eq!(validate_label(" "), None);
    }

    #[test]
    fn test_interior_double_underscore_is_valid() {
        assert!(is_valid_column_name("a__b"));
    }

    #[test]
    fn test_state_validity() {
        assert!(ValidationState::evaluate("orders", "Orders").is_valid());
        assert!(!ValidationState::evaluate("orders", "").is_valid());
        assert!(!ValidationState::evaluate("Orders", "Orders").is_valid());
    }

    #[test]
    fn test_name_messages_are_distinct() {
        assert_ne!(
            FieldError::Required.name_message(),
            FieldError::Pattern.name_message()
        );
    }
}
