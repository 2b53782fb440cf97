//! Errors raised while building and dispatching notifications

use css_inline::InlineError;
use thiserror::Error;
use tracing::debug;

use crate::domain::communication::mailer::MailerError;

/// The message could not be built
#[derive(Debug, Error)]
pub enum MessageError {
    /// The template failed to render
    #[error("could not render email template")]
    Render(#[source] askama::Error),

    /// The stylesheet could not be inlined
    #[error("could not inline email styles")]
    Inline(#[source] InlineError),
}

impl From<askama::Error> for MessageError {
    fn from(err: askama::Error) -> Self {
        debug!("askama::Error -> MessageError");

        MessageError::Render(err)
    }
}

impl From<InlineError> for MessageError {
    fn from(err: InlineError) -> Self {
        debug!("InlineError -> MessageError");

        MessageError::Inline(err)
    }
}

/// A lifecycle notification could not be built or delivered
#[derive(Debug, Error)]
pub enum NotificationError {
    /// Building the message failed, nothing was sent
    #[error(transparent)]
    Message(#[from] MessageError),

    /// The mailer rejected the message
    #[error(transparent)]
    Delivery(#[from] MailerError),

    /// The host's identity created hook failed
    #[error("identity created hook failed")]
    IdentityCreated(#[source] anyhow::Error),
}
