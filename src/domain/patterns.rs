//! FormPatterns: one compiled pattern per field.

use super::errors::PatternError;
use super::field::FormField;
use regex::Regex;

/// The validation rule of every form field.
///
/// Patterns are bare regular expressions (no `/.../` delimiters) with
/// search semantics: a value passes if the pattern matches anywhere in it.
/// Anchor with `^...$` to require a whole-value match.
///
/// `$` matches only at the very end of the value. Unlike PCRE it does not
/// also match before a trailing `\n`, so `^[0-9]+$` rejects `"123\n"`.
/// Write `^[0-9]+\n?$` to accept a trailing newline.
///
/// The default set uses the empty pattern for every field, which matches
/// any value.
///
/// # Example
///
/// ```
/// use regex_form_server::domain::{FormField, FormPatterns};
///
/// let patterns = FormPatterns::new(r"^.+$", r"^[0-9]+$", r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
/// assert!(patterns.is_match(FormField::Phone, "123"));
/// assert!(!patterns.is_match(FormField::Phone, "abc"));
/// ```
#[derive(Debug, Clone)]
pub struct FormPatterns {
    title: Regex,
    phone: Regex,
    mail: Regex,
}

impl FormPatterns {
    /// Compile the three field patterns.
    ///
    /// # Errors
    ///
    /// Returns a `PatternError` naming the first field whose pattern does
    /// not compile.
    pub fn new(title: &str, phone: &str, mail: &str) -> Result<Self, PatternError> {
        Ok(Self {
            title: compile(FormField::Title, title)?,
            phone: compile(FormField::Phone, phone)?,
            mail: compile(FormField::Mail, mail)?,
        })
    }

    /// The compiled pattern of a field.
    pub fn pattern(&self, field: FormField) -> &Regex {
        match field {
            FormField::Title => &self.title,
            FormField::Phone => &self.phone,
            FormField::Mail => &self.mail,
        }
    }

    /// Test a value against a field's pattern.
    pub fn is_match(&self, field: FormField, value: &str) -> bool {
        self.pattern(field).is_match(value)
    }
}

impl Default for FormPatterns {
    fn default() -> Self {
        Self::new("", "", "").expect("empty pattern always compiles")
    }
}

fn compile(field: FormField, pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(pattern).map_err(|source| PatternError { field, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_patterns_match_everything() {
        let patterns = FormPatterns::default();
        for field in FormField::ALL {
            assert!(patterns.is_match(field, ""));
            assert!(patterns.is_match(field, "anything at all"));
        }
    }

    #[test]
    fn test_patterns_search_semantics() {
        let patterns = FormPatterns::new("[0-9]", "^[0-9]+$", "").unwrap();
        assert!(patterns.is_match(FormField::Title, "room 101"));
        assert!(!patterns.is_match(FormField::Phone, "tel 101"));
        assert!(patterns.is_match(FormField::Phone, "101"));
    }

    #[test]
    fn test_dollar_does_not_match_before_trailing_newline() {
        let patterns = FormPatterns::new("", r"^[0-9]+$", "").unwrap();
        assert!(!patterns.is_match(FormField::Phone, "123\n"));

        let patterns = FormPatterns::new("", r"^[0-9]+\n?$", "").unwrap();
        assert!(patterns.is_match(FormField::Phone, "123\n"));
        assert!(patterns.is_match(FormField::Phone, "123"));
    }

    #[test]
    fn test_invalid_pattern_names_field() {
        let err = FormPatterns::new("", "[0-9", "").unwrap_err();
        assert_eq!(err.field, FormField::Phone);
        assert!(err.to_string().starts_with("Invalid phone pattern:"));
    }

    #[test]
    fn test_first_invalid_pattern_reported() {
        let err = FormPatterns::new("(", "(", "(").unwrap_err();
        assert_eq!(err.field, FormField::Title);
    }
}
