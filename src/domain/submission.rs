//! FormSubmission and the parsed POST body.

use super::field::FormField;

/// The raw values posted by the client.
///
/// Every field is optional: on first load nothing has been submitted, and
/// a client may omit any key from its POST body. Values are kept exactly as
/// received, without trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    pub title: Option<String>,
    pub phone: Option<String>,
    pub mail: Option<String>,
}

impl FormSubmission {
    /// Build a submission with all three fields present.
    pub fn new(
        title: impl Into<String>,
        phone: impl Into<String>,
        mail: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            phone: Some(phone.into()),
            mail: Some(mail.into()),
        }
    }

    /// The submitted value of a field, if any.
    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Title => self.title.as_deref(),
            FormField::Phone => self.phone.as_deref(),
            FormField::Mail => self.mail.as_deref(),
        }
    }

    /// The submitted value of a field, with absent treated as empty.
    pub fn value(&self, field: FormField) -> &str {
        self.get(field).unwrap_or("")
    }

    /// Set a field's value, replacing any previous one.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Title => &mut self.title,
            FormField::Phone => &mut self.phone,
            FormField::Mail => &mut self.mail,
        };
        *slot = Some(value.into());
    }
}

/// A decoded `application/x-www-form-urlencoded` POST body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPost {
    /// The field values found in the body.
    pub submission: FormSubmission,

    /// Whether the `save` submit marker was present.
    pub save: bool,
}

impl FormPost {
    /// Name of the submit button whose presence requests validation.
    pub const SAVE_KEY: &'static str = "save";

    /// Decode a form body.
    ///
    /// Unknown keys are ignored; when a key repeats, the last value wins.
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn parse(body: &[u8]) -> Self {
        let mut post = Self::default();

        for (key, value) in url::form_urlencoded::parse(body) {
            if key == Self::SAVE_KEY {
                post.save = true;
            } else if let Some(field) = FormField::from_name(&key) {
                post.submission.set(field, value.into_owned());
            }
        }

        post
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_value_is_empty() {
        let submission = FormSubmission::default();
        assert_eq!(submission.get(FormField::Title), None);
        assert_eq!(submission.value(FormField::Title), "");
    }

    #[test]
    fn test_parse_full_body() {
        let post = FormPost::parse(b"title=Alice&phone=123&mail=a%40b.com&save=");
        assert!(post.save);
        assert_eq!(post.submission, FormSubmission::new("Alice", "123", "a@b.com"));
    }

    #[test]
    fn test_parse_without_save_marker() {
        let post = FormPost::parse(b"title=Alice");
        assert!(!post.save);
        assert_eq!(post.submission.get(FormField::Title), Some("Alice"));
        assert_eq!(post.submission.get(FormField::Phone), None);
    }

    #[test]
    fn test_parse_keeps_whitespace_and_plus() {
        let post = FormPost::parse(b"title=+Hello+World+&phone=%2B1+555");
        assert_eq!(post.submission.value(FormField::Title), " Hello World ");
        assert_eq!(post.submission.value(FormField::Phone), "+1 555");
    }

    #[test]
    fn test_parse_last_duplicate_wins() {
        let post = FormPost::parse(b"mail=first&mail=second");
        assert_eq!(post.submission.value(FormField::Mail), "second");
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let post = FormPost::parse(b"other=1&Title=x");
        assert_eq!(post, FormPost::default());
    }

    #[test]
    fn test_parse_invalid_utf8_is_lossy() {
        let post = FormPost::parse(b"title=%FF%FEabc&save=");
        assert!(post.save);
        assert_eq!(post.submission.value(FormField::Title), "\u{FFFD}\u{FFFD}abc");
    }

    #[test]
    fn test_parse_empty_value_is_present() {
        let post = FormPost::parse(b"title=&save=Save");
        assert!(post.save);
        assert_eq!(post.submission.get(FormField::Title), Some(""));
    }
}
