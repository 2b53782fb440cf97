//! Mailer that only records what it would have sent

use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

use super::{Delivery, Mailer, MailerError, OutboundMessage};

/// Logs every message instead of transmitting it. Never fails.
#[derive(Debug, Default, Clone)]
pub struct LoggingMailer;

impl LoggingMailer {
    /// Creates a new logging mailer
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Mailer for LoggingMailer {
    async fn send_email(&self, message: &OutboundMessage) -> Result<Delivery, MailerError> {
        info!(
            from = %message.from,
            to = %message.recipients(),
            subject = %message.subject,
            has_html = !message.html.is_empty(),
            has_text = message.text.is_some(),
            "Email would be sent"
        );

        debug!(html_length = message.html.len(), "Email HTML content");

        if let Some(text) = &message.text {
            debug!(text = %text, "Email text content");
        }

        Ok(Delivery::new(format!("logged-{}", Uuid::now_v7())))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::communication::{
        email_addresses::EmailAddress, mailer::captured_logs::CapturedLogs,
    };

    use super::*;

    #[tokio::test]
    async fn test_logs_message_instead_of_sending() -> TestResult {
        let (logs, _guard) = CapturedLogs::install();

        let message = OutboundMessage {
            from: EmailAddress::new_unchecked("noreply@myapp.com"),
            to: vec![EmailAddress::new_unchecked("user@example.com")],
            subject: "MyApp | Verify your email address".to_string(),
            text: Some("https://myapp.com/verify?t=abc".to_string()),
            html: "<p>verify</p>".to_string(),
        };

        let delivery = LoggingMailer::new().send_email(&message).await?;

        assert!(delivery.id.starts_with("logged-"));

        let logs = logs.contents();
        assert!(logs.contains("Email would be sent"));
        assert!(logs.contains("from=noreply@myapp.com"));
        assert!(logs.contains("to=user@example.com"));
        assert!(logs.contains("subject=MyApp | Verify your email address"));
        assert!(logs.contains("has_html=true"));
        assert!(logs.contains("has_text=true"));
        assert!(logs.contains("html_length=13"));
        assert!(logs.contains("text=https://myapp.com/verify?t=abc"));

        Ok(())
    }

    #[tokio::test]
    async fn test_never_fails_without_text_body() -> TestResult {
        let message = OutboundMessage {
            from: EmailAddress::new_unchecked("noreply@myapp.com"),
            to: vec![EmailAddress::new_unchecked("user@example.com")],
            subject: "MyApp | Password Changed".to_string(),
            text: None,
            html: String::new(),
        };

        let first = LoggingMailer::new().send_email(&message).await?;
        let second = LoggingMailer::new().send_email(&message).await?;

        assert_ne!(first.id, second.id);

        Ok(())
    }
}
