//! Domain types of the form.
//!
//! The three fields, the values a client submits for them, the pattern each
//! value must satisfy and the outcome of checking them.

pub mod errors;
pub mod field;
pub mod patterns;
pub mod submission;
pub mod validation;

pub use errors::PatternError;
pub use field::FormField;
pub use patterns::FormPatterns;
pub use submission::{FormPost, FormSubmission};
pub use validation::{FieldResult, ValidationResult};
