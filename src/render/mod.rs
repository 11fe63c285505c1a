//! HTML rendering of the form.
//!
//! The page is rendered the same way on first load and after a submission;
//! only the echoed values and the per-field results differ.

use crate::domain::{FormField, FormSubmission, ValidationResult};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static HTML_SPECIAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[&<>"']"#).expect("Failed to compile HTML escape regex"));

const VALID_COLOR: &str = "green";
const INVALID_COLOR: &str = "red";

/// Everything needed to render one response.
#[derive(Debug, Clone, Default)]
pub struct FormView {
    /// Values to echo back into the inputs.
    pub submission: FormSubmission,

    /// Outcome of validation, when it ran.
    pub result: Option<ValidationResult>,
}

impl FormView {
    /// The empty form shown on first load.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A form echoing `submission`, with the outcome of validating it.
    pub fn validated(submission: FormSubmission, result: ValidationResult) -> Self {
        Self {
            submission,
            result: Some(result),
        }
    }

    /// A form echoing `submission` without validating it.
    pub fn echoed(submission: FormSubmission) -> Self {
        Self {
            submission,
            result: None,
        }
    }

    /// The error to display under a field, if any.
    pub fn error(&self, field: FormField) -> Option<&'static str> {
        self.result.as_ref().and_then(|result| result.error(field))
    }
}

/// Escape text for use in HTML content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    HTML_SPECIAL_REGEX
        .replace_all(text, |caps: &Captures| match &caps[0] {
            "&" => "&amp;",
            "<" => "&lt;",
            ">" => "&gt;",
            "\"" => "&quot;",
            _ => "&#39;",
        })
        .into_owned()
}

/// Render the full form page.
pub fn render_form(view: &FormView) -> String {
    let fields: String = FormField::ALL
        .into_iter()
        .map(|field| render_field(view, field))
        .collect();

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport"
          content="width=device-width, user-scalable=no, initial-scale=1.0, maximum-scale=1.0, minimum-scale=1.0">
    <meta http-equiv="X-UA-Compatible" content="ie=edge">
    <title>REG-EX</title>
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"
          crossorigin="anonymous" referrerpolicy="no-referrer"/>
    <style>
        .text-danger {{
            color: red;
        }}
    </style>
</head>
<body>
<h1>Simple Form</h1>
<form action="" method="POST">
    <div>
{fields}    </div>
    <div>
        <button type="submit" name="save">Save</button>
    </div>
</form>
</body>
</html>
"#
    )
}

fn render_field(view: &FormView, field: FormField) -> String {
    let name = field.name();
    let error = view.error(field);
    let color = if error.is_some() {
        INVALID_COLOR
    } else {
        VALID_COLOR
    };

    format!(
        r#"        <div>
            <label for="{name}">{label}</label>
            <input type="{input_type}" name="{name}" id="{name}" value="{value}"/>
            <i style="color: {color}" class="fa-solid fa-circle-check"></i>
            <p class="text-danger">{error}</p>
        </div>
"#,
        label = field.label(),
        input_type = field.input_type(),
        value = escape_html(view.submission.value(field)),
        error = error.unwrap_or(""),
    )
}

/// Render a minimal page for a non-form response (400, 404, 405, 413).
pub fn render_status_page(title: &str, message: &str) -> String {
    format!(
        "<!doctype html><html lang=\"en\"><head><title>{title}</title></head>\
         <body><h1>{title}</h1><p>{message}</p></body></html>",
        title = escape_html(title),
        message = escape_html(message),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldResult;

    fn input_value(html: &str, field: FormField) -> String {
        let needle = format!(r#"name="{}" id="{}" value=""#, field.name(), field.name());
        let start = html.find(&needle).expect("input present") + needle.len();
        let end = html[start..].find('"').expect("closing quote") + start;
        html[start..end].to_string()
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_empty_form_is_all_green() {
        let html = render_form(&FormView::empty());

        assert_eq!(html.matches("color: green").count(), 3);
        assert!(!html.contains("color: red\""));
        assert!(!html.contains("invalid "));
        for field in FormField::ALL {
            assert_eq!(input_value(&html, field), "");
        }
        assert!(html.contains(r#"<button type="submit" name="save">Save</button>"#));
    }

    #[test]
    fn test_failed_field_is_red_with_message() {
        let result = ValidationResult {
            title: FieldResult::valid(),
            phone: FieldResult::invalid(FormField::Phone),
            mail: FieldResult::valid(),
        };
        let view = FormView::validated(FormSubmission::new("Alice", "abc", "a@b.com"), result);
        let html = render_form(&view);

        assert_eq!(html.matches("color: green").count(), 2);
        assert_eq!(html.matches("color: red\"").count(), 1);
        assert!(html.contains(r#"<p class="text-danger">invalid phone</p>"#));
        assert_eq!(html.matches(r#"<p class="text-danger"></p>"#).count(), 2);
        assert_eq!(input_value(&html, FormField::Phone), "abc");
    }

    #[test]
    fn test_echoed_values_are_escaped() {
        let view = FormView::echoed(FormSubmission::new("\"><script>", "", ""));
        let html = render_form(&view);

        assert!(!html.contains("<script>"));
        assert_eq!(input_value(&html, FormField::Title), "&quot;&gt;&lt;script&gt;");
    }

    #[test]
    fn test_fields_render_in_order() {
        let html = render_form(&FormView::empty());
        let title = html.find(r#"for="title""#).unwrap();
        let phone = html.find(r#"for="phone""#).unwrap();
        let mail = html.find(r#"for="mail""#).unwrap();
        assert!(title < phone && phone < mail);
        assert!(html.contains(r#"<input type="email" name="mail""#));
        assert!(html.contains(r#"<label for="phone">Telephone</label>"#));
    }
}
