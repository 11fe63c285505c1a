//! Form validation service.
//!
//! Checks every field of a submission against its pattern.

use crate::domain::{FieldResult, FormField, FormPatterns, FormSubmission, ValidationResult};
use std::sync::Arc;

/// Validate a submission against a pattern set.
///
/// Absent fields are matched as the empty string. All three fields are
/// always evaluated, each independently of the others.
pub fn validate(submission: &FormSubmission, patterns: &FormPatterns) -> ValidationResult {
    let check = |field: FormField| {
        if patterns.is_match(field, submission.value(field)) {
            FieldResult::valid()
        } else {
            tracing::debug!(field = field.name(), "Field rejected by pattern");
            FieldResult::invalid(field)
        }
    };

    ValidationResult {
        title: check(FormField::Title),
        phone: check(FormField::Phone),
        mail: check(FormField::Mail),
    }
}

/// Validator bound to a shared pattern set.
#[derive(Debug, Clone)]
pub struct FormValidator {
    patterns: Arc<FormPatterns>,
}

impl FormValidator {
    /// Create a validator over the given patterns.
    pub fn new(patterns: Arc<FormPatterns>) -> Self {
        Self { patterns }
    }

    /// Validate a submission.
    pub fn validate(&self, submission: &FormSubmission) -> ValidationResult {
        validate(submission, &self.patterns)
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new(Arc::new(FormPatterns::default()))
    }
}
