//! Error types for `issuedeck-lib`.
//!
//! Everything here is a recoverable, caller-facing condition; the store
//! never panics on bad input.

use thiserror::Error;

/// Primary error type for issuedeck-lib operations.
#[derive(Error, Debug)]
pub enum DeckError {
    // === Lookup Errors ===
    /// Issue with the specified ID was not found.
    #[error("Issue not found: {id}")]
    IssueNotFound { id: i64 },

    /// Comment with the specified ID was not found.
    #[error("Comment not found: {id}")]
    CommentNotFound { id: i64 },

    /// Team member with the specified ID was not found.
    #[error("Team member not found: {id}")]
    MemberNotFound { id: i64 },

    /// Activity with the specified ID was not found.
    #[error("Activity not found: {id}")]
    ActivityNotFound { id: i64 },

    // === Validation Errors ===
    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Multiple validation errors occurred.
    #[error("Validation errors: {errors:?}")]
    ValidationErrors { errors: Vec<ValidationError> },

    /// Invalid status value.
    #[error("Invalid status: {status}")]
    InvalidStatus { status: String },

    /// Invalid severity value.
    #[error("Invalid severity: {severity}")]
    InvalidSeverity { severity: String },
}

/// A single field validation error.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl DeckError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn from_validation_errors(errors: Vec<ValidationError>) -> Self {
        if errors.len() == 1 {
            let err = &errors[0];
            Self::Validation {
                field: err.field.clone(),
                reason: err.message.clone(),
            }
        } else {
            Self::ValidationErrors { errors }
        }
    }

    /// True for the "target id absent from store" family.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::IssueNotFound { .. }
                | Self::CommentNotFound { .. }
                | Self::MemberNotFound { .. }
                | Self::ActivityNotFound { .. }
        )
    }
}

/// Result type using `DeckError`.
pub type Result<T> = std::result::Result<T, DeckError>;
