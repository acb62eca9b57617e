//! Validation helpers for issuedeck-lib.
//!
//! These routines enforce the dashboard's input constraints and return
//! structured validation errors without mutating storage. The store
//! re-validates on every mutation; the UI layer may call these earlier
//! for inline feedback.

use crate::error::ValidationError;
use crate::model::NewIssue;

/// Maximum comment body length, matching the comment input's character
/// counter.
pub const MAX_COMMENT_LEN: usize = 500;

/// Maximum issue title length.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum issue description length.
pub const MAX_DESCRIPTION_LEN: usize = 5_000;

/// Validates comment content.
pub struct CommentValidator;

impl CommentValidator {
    /// Validate a comment body.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the content is empty after
    /// trimming or exceeds [`MAX_COMMENT_LEN`] characters.
    pub fn validate_content(content: &str) -> Result<(), ValidationError> {
        if content.trim().is_empty() {
            return Err(ValidationError::new("content", "cannot be empty"));
        }

        if content.chars().count() > MAX_COMMENT_LEN {
            return Err(ValidationError::new(
                "content",
                format!("exceeds {MAX_COMMENT_LEN} characters"),
            ));
        }

        Ok(())
    }
}

/// Validates issue fields.
pub struct IssueValidator;

impl IssueValidator {
    /// Validate a new issue and return all validation errors found.
    ///
    /// # Errors
    ///
    /// Returns a `Vec<ValidationError>` if any validation rules are violated.
    pub fn validate(issue: &NewIssue) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if issue.title.trim().is_empty() {
            errors.push(ValidationError::new("title", "cannot be empty"));
        }
        if issue.title.chars().count() > MAX_TITLE_LEN {
            errors.push(ValidationError::new(
                "title",
                format!("exceeds {MAX_TITLE_LEN} characters"),
            ));
        }

        if let Some(description) = issue.description.as_ref() {
            if description.chars().count() > MAX_DESCRIPTION_LEN {
                errors.push(ValidationError::new(
                    "description",
                    format!("exceeds {MAX_DESCRIPTION_LEN} characters"),
                ));
            }
        }

        if issue.reporter.trim().is_empty() {
            errors.push(ValidationError::new("reporter", "cannot be empty"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_validation_rejects_blank_content() {
        let err = CommentValidator::validate_content("   ").unwrap_err();
        assert_eq!(err.field, "content");
    }

    #[test]
    fn comment_validation_rejects_over_limit() {
        let long = "x".repeat(MAX_COMMENT_LEN + 1);
        let err = CommentValidator::validate_content(&long).unwrap_err();
        assert_eq!(err.field, "content");
    }

    #[test]
    fn comment_validation_accepts_exact_limit() {
        let exact = "x".repeat(MAX_COMMENT_LEN);
        assert!(CommentValidator::validate_content(&exact).is_ok());
    }

    #[test]
    fn issue_validation_rejects_empty_title() {
        let issue = NewIssue {
            title: " ".to_string(),
            reporter: "someone".to_string(),
            ..Default::default()
        };
        let errors = IssueValidator::validate(&issue).unwrap_err();
        assert!(errors.iter().any(|err| err.field == "title"));
    }

    #[test]
    fn issue_validation_collects_multiple_errors() {
        let issue = NewIssue {
            title: String::new(),
            reporter: String::new(),
            ..Default::default()
        };
        let errors = IssueValidator::validate(&issue).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|err| err.field.as_str()).collect();
        assert!(fields.contains(&"title"));
        assert!(fields.contains(&"reporter"));
    }
}
