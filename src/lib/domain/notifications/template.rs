//! HTML email document

use askama::Template;

use super::errors::MessageError;

/// A body paragraph
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paragraph {
    /// The paragraph text
    pub text: String,

    /// Whether the paragraph is rendered in the warning colour
    pub warning: bool,
}

/// Call-to-action button
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action {
    /// The button label
    pub label: String,

    /// Where the button leads
    pub href: String,
}

/// Table-based layout shared by every notification
#[derive(Debug, Template)]
#[template(path = "emails/notification.html")]
pub struct NotificationTemplate {
    /// Language tag of the document
    pub lang: &'static str,

    /// Shown in the footer
    pub business_name: String,

    /// Inbox preview text
    pub preheader: String,

    /// The heading above the body
    pub heading: String,

    /// Body paragraphs, in order
    pub paragraphs: Vec<Paragraph>,

    /// Optional call-to-action
    pub action: Option<Action>,

    /// Small print below the body
    pub footnotes: Vec<String>,
}

impl NotificationTemplate {
    /// Renders the document with its stylesheet inlined
    pub fn render_html(&self) -> Result<String, MessageError> {
        Ok(css_inline::inline(&self.render()?)?)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn template() -> NotificationTemplate {
        NotificationTemplate {
            lang: "nl",
            business_name: "MyApp".to_string(),
            preheader: "Preview text".to_string(),
            heading: "Heading".to_string(),
            paragraphs: vec![
                Paragraph {
                    text: "First paragraph".to_string(),
                    warning: false,
                },
                Paragraph {
                    text: "Careful now".to_string(),
                    warning: true,
                },
            ],
            action: None,
            footnotes: vec!["Small print".to_string()],
        }
    }

    #[test]
    fn test_render_inlines_styles() -> TestResult {
        let html = template().render_html()?;

        assert!(html.contains("lang=\"nl\""));
        assert!(!html.contains("<style>"));
        assert!(html.contains("#b45309"));
        assert!(html.contains("First paragraph"));
        assert!(html.contains("Small print"));
        assert!(!html.contains("class=\"action\""));

        Ok(())
    }

    #[test]
    fn test_render_action() -> TestResult {
        let html = NotificationTemplate {
            action: Some(Action {
                label: "Verify email address".to_string(),
                href: "https://myapp.com/verify".to_string(),
            }),
            ..template()
        }
        .render_html()?;

        assert!(html.contains("class=\"action\""));
        assert!(html.contains("Verify email address"));

        Ok(())
    }

    #[test]
    fn test_render_escapes_text() -> TestResult {
        let html = NotificationTemplate {
            heading: "<script>alert(1)</script>".to_string(),
            ..template()
        }
        .render_html()?;

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));

        Ok(())
    }
}
