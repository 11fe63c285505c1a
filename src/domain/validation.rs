//! ValidationResult: the per-field outcome of one validation pass.

use super::field::FormField;
use serde::Serialize;

/// Validity of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldResult {
    pub is_valid: bool,
    pub error_message: Option<&'static str>,
}

impl FieldResult {
    /// A passing field, with no message.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: None,
        }
    }

    /// A failing field, carrying that field's fixed message.
    pub fn invalid(field: FormField) -> Self {
        Self {
            is_valid: false,
            error_message: Some(field.error_message()),
        }
    }
}

/// Outcome of validating all three fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub title: FieldResult,
    pub phone: FieldResult,
    pub mail: FieldResult,
}

impl ValidationResult {
    /// The result of one field.
    pub fn get(&self, field: FormField) -> &FieldResult {
        match field {
            FormField::Title => &self.title,
            FormField::Phone => &self.phone,
            FormField::Mail => &self.mail,
        }
    }

    /// The error message of a field, if it failed.
    pub fn error(&self, field: FormField) -> Option<&'static str> {
        self.get(field).error_message
    }

    /// True when every field passed.
    pub fn is_valid(&self) -> bool {
        FormField::ALL.iter().all(|field| self.get(*field).is_valid)
    }

    /// Fields that failed, in render order.
    pub fn invalid_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| !self.get(*field).is_valid)
            .collect()
    }
}
