//! FormField enumeration.

use serde::Serialize;
use std::fmt;

/// One of the three inputs of the form.
///
/// Each field carries its own fixed constants: the name it is posted under,
/// the label shown next to it, the HTML input type and the error message
/// displayed when its value does not match the field's pattern.
///
/// # Example
///
/// ```
/// use regex_form_server::domain::FormField;
///
/// assert_eq!(FormField::Phone.name(), "phone");
/// assert_eq!(FormField::Phone.error_message(), "invalid phone");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Title,
    Phone,
    Mail,
}

impl FormField {
    /// All fields, in the order they are rendered.
    pub const ALL: [FormField; 3] = [FormField::Title, FormField::Phone, FormField::Mail];

    /// Name of the form control (and of the POST body key).
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Phone => "phone",
            Self::Mail => "mail",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Phone => "Telephone",
            Self::Mail => "Mail",
        }
    }

    /// HTML `type` attribute of the input.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Mail => "email",
            Self::Title | Self::Phone => "text",
        }
    }

    /// Fixed message shown when the field fails validation.
    pub fn error_message(self) -> &'static str {
        match self {
            Self::Title => "invalid title",
            Self::Phone => "invalid phone",
            Self::Mail => "invalid mail",
        }
    }

    /// Look up a field by its form name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
