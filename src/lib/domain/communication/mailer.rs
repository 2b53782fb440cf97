//! Mail delivery capability

mod errors;
mod live;
mod logging;
mod message;

#[cfg(test)]
pub(crate) mod captured_logs;

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

pub use errors::MailerError;
pub use live::LiveMailer;
pub use logging::LoggingMailer;
pub use message::{Delivery, OutboundMessage, Recipients};

/// Delivers a single [`OutboundMessage`]
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Send an email
    ///
    /// # Arguments
    /// * `message` - The fully composed [`OutboundMessage`] to deliver.
    ///
    /// # Returns
    /// - [`Ok`] with the [`Delivery`] receipt carrying the provider's message id.
    /// - [`Err`] containing a [`MailerError`] if the message could not be delivered.
    async fn send_email(&self, message: &OutboundMessage) -> Result<Delivery, MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send_email(&self, message: &OutboundMessage) -> Result<Delivery, MailerError>;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    pub use super::MockMailer;
}
