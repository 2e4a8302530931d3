//! Error types for the projection engine

use serde::Serialize;
use thiserror::Error;

/// A single rejected input field, with a user-facing label.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub label: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            label: crate::validation::field_display_label(field).to_string(),
            message: message.into(),
        }
    }

    /// Format as a user-facing message, e.g. "Target Weight: must be below current weight"
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.label, self.message)
    }
}

/// Engine-level failures.
///
/// Validation carries every rejected field at once so a form can surface all
/// problems in a single round trip. There is no partial-result variant: an
/// invalid request produces no computed output at all.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("invalid input")]
    Validation(Vec<FieldError>),
}

impl PlanError {
    /// Joined user-facing description of every rejected field.
    pub fn detail(&self) -> String {
        match self {
            PlanError::Validation(errors) => errors
                .iter()
                .map(FieldError::user_message)
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}
