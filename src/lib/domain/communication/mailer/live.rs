//! Mailer that delivers through a real transport

use async_trait::async_trait;
use tracing::{error, info};

use super::{Delivery, Mailer, MailerError, OutboundMessage};

/// Delivers through `T` and records the outcome of every send.
///
/// Failures are logged and handed back untouched; retrying is left to the transport.
#[derive(Debug, Clone)]
pub struct LiveMailer<T>
where
    T: Mailer,
{
    transport: T,
}

impl<T> LiveMailer<T>
where
    T: Mailer,
{
    /// Creates a new live mailer
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl<T> Mailer for LiveMailer<T>
where
    T: Mailer,
{
    async fn send_email(&self, message: &OutboundMessage) -> Result<Delivery, MailerError> {
        match self.transport.send_email(message).await {
            Ok(delivery) => {
                info!(
                    message_id = %delivery.id,
                    to = %message.recipients(),
                    "Email sent successfully"
                );

                Ok(delivery)
            }
            Err(err) => {
                error!(
                    error = %err,
                    to = %message.recipients(),
                    "Failed to send email"
                );

                Err(err)
            }
        }
    }
}
