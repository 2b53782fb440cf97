//! Binds identity backend callbacks to message builders and a mailer

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use futures::future::BoxFuture;
use tracing::{info, info_span, Instrument, Span};
use uuid::Uuid;

use crate::domain::communication::{
    business::BusinessProfile,
    email_addresses::EmailAddress,
    locale::Locale,
    mailer::{LiveMailer, LoggingMailer, Mailer, OutboundMessage},
};

use super::{errors::NotificationError, messages};

/// Callbacks the identity backend raises on account lifecycle events
#[async_trait]
pub trait IdentityNotifications: Clone + Send + Sync + 'static {
    /// A new address must be verified through `verification_url`.
    async fn send_verification(
        &self,
        email: &EmailAddress,
        verification_url: &str,
    ) -> Result<(), NotificationError>;

    /// The user asked to reset their password.
    async fn send_password_reset(
        &self,
        email: &EmailAddress,
        reset_url: &str,
    ) -> Result<(), NotificationError>;

    /// The password was changed.
    async fn send_password_change(&self, email: &EmailAddress) -> Result<(), NotificationError>;

    /// The new address of a pending email change must be confirmed through `verification_url`.
    async fn send_email_change_confirmation(
        &self,
        current_email: &EmailAddress,
        new_email: &EmailAddress,
        verification_url: &str,
    ) -> Result<(), NotificationError>;

    /// Warns the current address about a pending email change.
    async fn send_email_change_request(
        &self,
        current_email: &EmailAddress,
        new_email: &EmailAddress,
    ) -> Result<(), NotificationError>;

    /// The email change went through.
    ///
    /// Notifies the old address first and only then welcomes the new one; if the
    /// first send fails the second is never attempted.
    async fn send_email_change_success(
        &self,
        current_email: &EmailAddress,
        new_email: &EmailAddress,
    ) -> Result<(), NotificationError>;

    /// The user asked for their account to be deleted.
    async fn send_deletion_request(&self, email: &EmailAddress) -> Result<(), NotificationError>;

    /// The account was deleted.
    async fn send_deletion_confirmation(
        &self,
        email: &EmailAddress,
    ) -> Result<(), NotificationError>;

    /// A new identity was created.
    ///
    /// No email is sent for this event.
    async fn on_identity_created(
        &self,
        id: &Uuid,
        email: &EmailAddress,
    ) -> Result<(), NotificationError>;
}

/// Host hook run after a new identity was created
pub type IdentityCreatedHook =
    Arc<dyn Fn(Uuid, EmailAddress) -> BoxFuture<'static, anyhow::Result<()>> + Send + Sync>;

/// Email-backed [`IdentityNotifications`]
#[derive(Clone)]
pub struct NotificationAdapter<M>
where
    M: Mailer,
{
    business: Arc<BusinessProfile>,
    locale: Locale,
    mailer: M,
    span: Option<Span>,
    identity_created: Option<IdentityCreatedHook>,
}

impl<M> NotificationAdapter<M>
where
    M: Mailer,
{
    /// Creates a new adapter delivering through `mailer`.
    ///
    /// Unless [`with_span`](Self::with_span) is used, every send opens its own
    /// `notifications` span under the subscriber active at that moment, so the adapter
    /// can be built before the host installs its subscriber.
    pub fn new(business: Arc<BusinessProfile>, locale: Locale, mailer: M) -> Self {
        Self {
            business,
            locale,
            mailer,
            span: None,
            identity_created: None,
        }
    }

    /// Records every send under `span` instead of the default `notifications` span
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Runs `hook` after every [`on_identity_created`](IdentityNotifications::on_identity_created).
    ///
    /// A failing hook fails the callback with [`NotificationError::IdentityCreated`].
    pub fn with_identity_created<F>(mut self, hook: F) -> Self
    where
        F: Fn(Uuid, EmailAddress) -> BoxFuture<'static, anyhow::Result<()>>
            + Send
            + Sync
            + 'static,
    {
        self.identity_created = Some(Arc::new(hook));
        self
    }

    /// The business the adapter writes on behalf of
    pub fn business(&self) -> &BusinessProfile {
        &self.business
    }

    fn span(&self) -> Span {
        match &self.span {
            Some(span) => span.clone(),
            None => info_span!(
                "notifications",
                business = %self.business.name(),
                locale = %self.locale
            ),
        }
    }

    async fn deliver(&self, message: OutboundMessage) -> Result<(), NotificationError> {
        self.mailer
            .send_email(&message)
            .instrument(self.span())
            .await?;

        Ok(())
    }
}

impl<T> NotificationAdapter<LiveMailer<T>>
where
    T: Mailer,
{
    /// Adapter that delivers through `transport`, logging every outcome
    pub fn live(business: Arc<BusinessProfile>, locale: Locale, transport: T) -> Self {
        Self::new(business, locale, LiveMailer::new(transport))
    }
}

impl NotificationAdapter<LoggingMailer> {
    /// Adapter that only logs what it would send
    pub fn logging(business: Arc<BusinessProfile>, locale: Locale) -> Self {
        Self::new(business, locale, LoggingMailer::new())
    }
}

impl<M> fmt::Debug for NotificationAdapter<M>
where
    M: Mailer,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationAdapter")
            .field("business", &self.business)
            .field("locale", &self.locale)
            .field("mailer", &"Mailer")
            .field("identity_created", &self.identity_created.is_some())
            .finish()
    }
}

#[async_trait]
impl<M> IdentityNotifications for NotificationAdapter<M>
where
    M: Mailer,
{
    async fn send_verification(
        &self,
        email: &EmailAddress,
        verification_url: &str,
    ) -> Result<(), NotificationError> {
        let message =
            messages::request_email_verification(&self.business, self.locale, email, verification_url)?;

        self.deliver(message).await
    }

    async fn send_password_reset(
        &self,
        email: &EmailAddress,
        reset_url: &str,
    ) -> Result<(), NotificationError> {
        let message = messages::password_reset_request(&self.business, self.locale, email, reset_url)?;

        self.deliver(message).await
    }

    async fn send_password_change(&self, email: &EmailAddress) -> Result<(), NotificationError> {
        let message = messages::password_change_notification(&self.business, self.locale, email)?;

        self.deliver(message).await
    }

    async fn send_email_change_confirmation(
        &self,
        current_email: &EmailAddress,
        new_email: &EmailAddress,
        verification_url: &str,
    ) -> Result<(), NotificationError> {
        let message = messages::email_change_confirmation_request(
            &self.business,
            self.locale,
            current_email,
            new_email,
            verification_url,
        )?;

        self.deliver(message).await
    }

    async fn send_email_change_request(
        &self,
        current_email: &EmailAddress,
        new_email: &EmailAddress,
    ) -> Result<(), NotificationError> {
        let message = messages::email_change_request_notification(
            &self.business,
            self.locale,
            current_email,
            new_email,
        )?;

        self.deliver(message).await
    }

    async fn send_email_change_success(
        &self,
        current_email: &EmailAddress,
        new_email: &EmailAddress,
    ) -> Result<(), NotificationError> {
        let to_old = messages::email_change_success_to_old_email(
            &self.business,
            self.locale,
            current_email,
            new_email,
        )?;

        self.deliver(to_old).await?;

        let to_new = messages::email_change_success_to_new_email(
            &self.business,
            self.locale,
            current_email,
            new_email,
        )?;

        self.deliver(to_new).await
    }

    async fn send_deletion_request(&self, email: &EmailAddress) -> Result<(), NotificationError> {
        let message = messages::deletion_request_notification(&self.business, self.locale, email)?;

        self.deliver(message).await
    }

    async fn send_deletion_confirmation(
        &self,
        email: &EmailAddress,
    ) -> Result<(), NotificationError> {
        let message =
            messages::deletion_confirmation_notification(&self.business, self.locale, email)?;

        self.deliver(message).await
    }

    async fn on_identity_created(
        &self,
        id: &Uuid,
        email: &EmailAddress,
    ) -> Result<(), NotificationError> {
        let span = self.span();

        span.in_scope(|| {
            info!(identity_id = %id, email = %email, "New identity created");
        });

        if let Some(hook) = &self.identity_created {
            hook(*id, email.clone())
                .instrument(span)
                .await
                .map_err(NotificationError::IdentityCreated)?;
        }

        Ok(())
    }
}
