//! Domain validation errors.

use super::field::FormField;
use std::fmt;

/// A field's pattern could not be compiled.
///
/// This is a deployment-time defect: it is raised while loading
/// configuration, never while handling a request.
#[derive(Debug, Clone)]
pub struct PatternError {
    /// The field whose pattern is malformed.
    pub field: FormField,

    /// The underlying regex compilation error.
    pub source: regex::Error,
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {} pattern: {}", self.field, self.source)
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
