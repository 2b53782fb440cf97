//! SMTP email service implementation

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use clap::{ArgAction, Parser};
use lettre::{
    message::{Mailbox, MultiPart, SinglePart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use uuid::Uuid;

use crate::domain::communication::mailer::{Delivery, Mailer, MailerError, OutboundMessage};

/// SMTP configuration
#[derive(Clone, Default, Debug, Parser)]
pub struct SMTPConfig {
    /// The SMTP host
    #[clap(long = "smtp-host", env = "SMTP_HOST")]
    pub host: String,

    /// The SMTP port
    #[clap(long = "smtp-port", env = "SMTP_PORT", default_value = "587")]
    pub port: u16,

    /// The SMTP username
    #[clap(long = "smtp-user", env = "SMTP_USER")]
    pub username: String,

    /// The SMTP password
    #[clap(long = "smtp-password", env = "SMTP_PASSWORD")]
    pub password: String,

    /// Verify the TLS certificate
    #[clap(long = "smtp-verify-tls", env = "SMTP_VERIFY_TLS", default_value_t = true, action = ArgAction::Set)]
    pub verify_tls: bool,

    /// Enable STARTTLS (TLS upgrade on connection)
    #[clap(long = "smtp-starttls", env = "SMTP_STARTTLS", default_value_t = true, action = ArgAction::Set)]
    pub starttls: bool,
}

/// SMTP mailer
#[derive(Clone)]
pub struct SMTPMailer {
    transport: Arc<AsyncSmtpTransport<Tokio1Executor>>,
}

impl SMTPMailer {
    /// Create a new SMTP mailer
    pub fn new(config: &SMTPConfig) -> Result<Self, MailerError> {
        let creds = Credentials::new(config.username.clone(), config.password.clone());

        let tls = TlsParameters::builder(config.host.clone())
            .dangerous_accept_invalid_certs(!config.verify_tls)
            .build()?;

        let relay = if config.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
                .tls(Tls::Required(tls))
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?.tls(Tls::Wrapper(tls))
        };

        let transport = relay.credentials(creds).port(config.port).build();

        Ok(Self {
            transport: Arc::new(transport),
        })
    }
}

impl fmt::Debug for SMTPMailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SMTPMailer").finish_non_exhaustive()
    }
}

/// Converts a message into its MIME form, returning it with its `Message-ID`
fn build_message(message: &OutboundMessage) -> Result<(Message, String), MailerError> {
    let message_id = format!("<{}@{}>", Uuid::now_v7(), message.from.domain());

    let mut builder = Message::builder()
        .from(message.from.as_str().parse::<Mailbox>()?)
        .subject(message.subject.clone())
        .message_id(Some(message_id.clone()));

    for to in &message.to {
        builder = builder.to(to.as_str().parse::<Mailbox>()?);
    }

    let email = match &message.text {
        Some(text) => builder.multipart(MultiPart::alternative_plain_html(
            text.clone(),
            message.html.clone(),
        ))?,
        None => builder.singlepart(SinglePart::html(message.html.clone()))?,
    };

    Ok((email, message_id))
}

#[async_trait]
impl Mailer for SMTPMailer {
    #[mutants::skip]
    async fn send_email(&self, message: &OutboundMessage) -> Result<Delivery, MailerError> {
        let (email, message_id) = build_message(message)?;

        match self.transport.send(email).await {
            Ok(_) => Ok(Delivery::new(message_id)),
            Err(e) => Err(MailerError::UnknownError(e.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::communication::email_addresses::EmailAddress;

    use super::*;

    fn message(text: Option<&str>) -> OutboundMessage {
        OutboundMessage {
            from: EmailAddress::new_unchecked("noreply@myapp.com"),
            to: vec![EmailAddress::new_unchecked("user@example.com")],
            subject: "MyApp | Verify your email address".to_string(),
            text: text.map(str::to_string),
            html: "<p>Verify</p>".to_string(),
        }
    }

    #[test]
    fn test_build_message_with_text_is_multipart() -> TestResult {
        let (email, message_id) = build_message(&message(Some("https://myapp.com/verify")))?;

        let formatted = String::from_utf8(email.formatted())?;

        assert!(message_id.starts_with('<'));
        assert!(message_id.ends_with("@myapp.com>"));
        assert!(formatted.contains(&format!("Message-ID: {message_id}")));
        assert!(formatted.contains("Subject: MyApp | Verify your email address"));
        assert!(formatted.contains("To: user@example.com"));
        assert!(formatted.contains("multipart/alternative"));
        assert!(formatted.contains("https://myapp.com/verify"));

        Ok(())
    }

    #[test]
    fn test_build_message_without_text_is_html_only() -> TestResult {
        let (email, _) = build_message(&message(None))?;

        let formatted = String::from_utf8(email.formatted())?;

        assert!(!formatted.contains("multipart/alternative"));
        assert!(formatted.contains("text/html"));

        Ok(())
    }

    #[test]
    fn test_build_message_rejects_unparseable_recipient() {
        let mut message = message(None);
        message.to = vec![EmailAddress::new_unchecked("not an email")];

        let result = build_message(&message);

        assert!(matches!(result, Err(MailerError::InvalidEmail)));
    }

    #[tokio::test]
    async fn test_new_mailer_does_not_connect() -> TestResult {
        let config = SMTPConfig {
            host: "localhost".to_string(),
            port: 1025,
            ..Default::default()
        };

        let mailer = SMTPMailer::new(&config)?;

        assert_eq!(format!("{mailer:?}"), "SMTPMailer { .. }");

        Ok(())
    }
}
