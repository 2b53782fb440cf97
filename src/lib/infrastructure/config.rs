//! Environment driven wiring of the notification adapter

use std::sync::Arc;

use async_trait::async_trait;
use clap::{Parser, ValueEnum};
use futures::future::BoxFuture;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::{
    domain::{
        communication::{
            business::{BusinessProfile, BusinessProfileError},
            email_addresses::EmailAddress,
            locale::Locale,
            mailer::{LiveMailer, LoggingMailer, MailerError},
        },
        notifications::{IdentityNotifications, NotificationAdapter, NotificationError},
    },
    infrastructure::email::smtp::{SMTPConfig, SMTPMailer},
};

/// How notifications leave the process
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum DeliveryMode {
    /// Deliver over SMTP
    Live,

    /// Only log what would be sent
    #[default]
    Logging,
}

/// Notification configuration
#[derive(Clone, Debug, Parser)]
pub struct NotificationConfig {
    /// Display name used as the subject prefix
    #[clap(long, env = "BUSINESS_NAME")]
    pub business_name: String,

    /// Support contact mentioned in every message
    #[clap(long, env = "SUPPORT_EMAIL")]
    pub support_email: String,

    /// Sender address
    #[clap(long, env = "FROM_EMAIL")]
    pub from_email: String,

    /// Locale every message is written in
    #[clap(long, env = "NOTIFICATION_LOCALE", value_enum, default_value = "en")]
    pub locale: Locale,

    /// Delivery mode
    #[clap(long, env = "NOTIFICATION_DELIVERY", value_enum, default_value = "logging")]
    pub delivery: DeliveryMode,
}

impl TryFrom<&NotificationConfig> for BusinessProfile {
    type Error = BusinessProfileError;

    fn try_from(config: &NotificationConfig) -> Result<Self, Self::Error> {
        BusinessProfile::parse(&config.business_name, &config.support_email, &config.from_email)
    }
}

/// Errors that can occur while wiring notifications from configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The business details are invalid
    #[error(transparent)]
    Business(#[from] BusinessProfileError),

    /// Live delivery was requested without SMTP settings
    #[error("live delivery requires SMTP configuration")]
    MissingSmtpConfig,

    /// The SMTP transport could not be built
    #[error("could not configure SMTP transport")]
    Smtp(#[source] MailerError),
}

impl From<MailerError> for ConfigError {
    fn from(err: MailerError) -> Self {
        debug!("MailerError -> ConfigError");

        ConfigError::Smtp(err)
    }
}

/// Notification adapter selected by [`DeliveryMode`]
#[derive(Clone, Debug)]
pub enum ConfiguredNotifications {
    /// Delivers over SMTP
    Live(NotificationAdapter<LiveMailer<SMTPMailer>>),

    /// Logs instead of delivering
    Logging(NotificationAdapter<LoggingMailer>),
}

impl ConfiguredNotifications {
    /// Builds the adapter described by `config`.
    ///
    /// `smtp` is only consulted for [`DeliveryMode::Live`].
    pub fn from_config(
        config: &NotificationConfig,
        smtp: Option<&SMTPConfig>,
    ) -> Result<Self, ConfigError> {
        let business = Arc::new(BusinessProfile::try_from(config)?);

        match config.delivery {
            DeliveryMode::Live => {
                let smtp = smtp.ok_or(ConfigError::MissingSmtpConfig)?;

                Ok(Self::Live(NotificationAdapter::live(
                    business,
                    config.locale,
                    SMTPMailer::new(smtp)?,
                )))
            }
            DeliveryMode::Logging => Ok(Self::Logging(NotificationAdapter::logging(
                business,
                config.locale,
            ))),
        }
    }

    /// Runs `hook` after every identity creation, whichever adapter is selected
    pub fn with_identity_created<F>(self, hook: F) -> Self
    where
        F: Fn(Uuid, EmailAddress) -> BoxFuture<'static, anyhow::Result<()>>
            + Send
            + Sync
            + 'static,
    {
        match self {
            Self::Live(adapter) => Self::Live(adapter.with_identity_created(hook)),
            Self::Logging(adapter) => Self::Logging(adapter.with_identity_created(hook)),
        }
    }
}

#[async_trait]
impl IdentityNotifications for ConfiguredNotifications {
    async fn send_verification(
        &self,
        email: &EmailAddress,
        verification_url: &str,
    ) -> Result<(), NotificationError> {
        match self {
            Self::Live(adapter) => adapter.send_verification(email, verification_url).await,
            Self::Logging(adapter) => adapter.send_verification(email, verification_url).await,
        }
    }

    async fn send_password_reset(
        &self,
        email: &EmailAddress,
        reset_url: &str,
    ) -> Result<(), NotificationError> {
        match self {
            Self::Live(adapter) => adapter.send_password_reset(email, reset_url).await,
            Self::Logging(adapter) => adapter.send_password_reset(email, reset_url).await,
        }
    }

    async fn send_password_change(&self, email: &EmailAddress) -> Result<(), NotificationError> {
        match self {
            Self::Live(adapter) => adapter.send_password_change(email).await,
            Self::Logging(adapter) => adapter.send_password_change(email).await,
        }
    }

    async fn send_email_change_confirmation(
        &self,
        current_email: &EmailAddress,
        new_email: &EmailAddress,
        verification_url: &str,
    ) -> Result<(), NotificationError> {
        match self {
            Self::Live(adapter) => {
                adapter
                    .send_email_change_confirmation(current_email, new_email, verification_url)
                    .await
            }
            Self::Logging(adapter) => {
                adapter
                    .send_email_change_confirmation(current_email, new_email, verification_url)
                    .await
            }
        }
    }

    async fn send_email_change_request(
        &self,
        current_email: &EmailAddress,
        new_email: &EmailAddress,
    ) -> Result<(), NotificationError> {
        match self {
            Self::Live(adapter) => {
                adapter
                    .send_email_change_request(current_email, new_email)
                    .await
            }
            Self::Logging(adapter) => {
                adapter
                    .send_email_change_request(current_email, new_email)
                    .await
            }
        }
    }

    async fn send_email_change_success(
        &self,
        current_email: &EmailAddress,
        new_email: &EmailAddress,
    ) -> Result<(), NotificationError> {
        match self {
            Self::Live(adapter) => {
                adapter
                    .send_email_change_success(current_email, new_email)
                    .await
            }
            Self::Logging(adapter) => {
                adapter
                    .send_email_change_success(current_email, new_email)
                    .await
            }
        }
    }

    async fn send_deletion_request(&self, email: &EmailAddress) -> Result<(), NotificationError> {
        match self {
            Self::Live(adapter) => adapter.send_deletion_request(email).await,
            Self::Logging(adapter) => adapter.send_deletion_request(email).await,
        }
    }

    async fn send_deletion_confirmation(
        &self,
        email: &EmailAddress,
    ) -> Result<(), NotificationError> {
        match self {
            Self::Live(adapter) => adapter.send_deletion_confirmation(email).await,
            Self::Logging(adapter) => adapter.send_deletion_confirmation(email).await,
        }
    }

    async fn on_identity_created(
        &self,
        id: &Uuid,
        email: &EmailAddress,
    ) -> Result<(), NotificationError> {
        match self {
            Self::Live(adapter) => adapter.on_identity_created(id, email).await,
            Self::Logging(adapter) => adapter.on_identity_created(id, email).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use futures::FutureExt;
    use testresult::TestResult;

    use crate::domain::communication::email_addresses::EmailAddressError;

    use super::*;

    fn config(args: &[&str]) -> Result<NotificationConfig, clap::Error> {
        let base = [
            "notifications",
            "--business-name",
            "MyApp",
            "--support-email",
            "support@myapp.com",
            "--from-email",
            "noreply@myapp.com",
        ];

        NotificationConfig::try_parse_from(base.iter().chain(args))
    }

    #[test]
    fn test_parse_config_defaults() -> TestResult {
        let config = config(&[])?;

        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.delivery, DeliveryMode::Logging);

        let business = BusinessProfile::try_from(&config)?;
        assert_eq!(business.name(), "MyApp");

        Ok(())
    }

    #[test]
    fn test_parse_config_locale_and_delivery() -> TestResult {
        let config = config(&["--locale", "nl", "--delivery", "live"])?;

        assert_eq!(config.locale, Locale::Dutch);
        assert_eq!(config.delivery, DeliveryMode::Live);

        Ok(())
    }

    #[test]
    fn test_unsupported_locale_is_rejected() {
        assert!(config(&["--locale", "de"]).is_err());
    }

    #[tokio::test]
    async fn test_logging_mode_builds_logging_adapter() -> TestResult {
        let notifications = ConfiguredNotifications::from_config(&config(&[])?, None)?;

        assert!(matches!(notifications, ConfiguredNotifications::Logging(_)));

        notifications
            .send_password_change(&EmailAddress::new("user@example.com")?)
            .await?;
        notifications
            .on_identity_created(&Uuid::now_v7(), &EmailAddress::new("user@example.com")?)
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_identity_created_hook_reaches_selected_adapter() -> TestResult {
        let created = Arc::new(AtomicUsize::new(0));

        let counter = created.clone();
        let notifications = ConfiguredNotifications::from_config(&config(&[])?, None)?
            .with_identity_created(move |_, _| {
                counter.fetch_add(1, Ordering::SeqCst);
                async { Ok::<_, anyhow::Error>(()) }.boxed()
            });

        notifications
            .on_identity_created(&Uuid::now_v7(), &EmailAddress::new("user@example.com")?)
            .await?;

        assert_eq!(created.load(Ordering::SeqCst), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_live_mode_builds_smtp_adapter() -> TestResult {
        let smtp = SMTPConfig {
            host: "localhost".to_string(),
            port: 1025,
            ..Default::default()
        };

        let notifications =
            ConfiguredNotifications::from_config(&config(&["--delivery", "live"])?, Some(&smtp))?;

        assert!(matches!(notifications, ConfiguredNotifications::Live(_)));

        Ok(())
    }

    #[test]
    fn test_live_mode_requires_smtp() -> TestResult {
        let result = ConfiguredNotifications::from_config(&config(&["--delivery", "live"])?, None);

        assert!(matches!(result, Err(ConfigError::MissingSmtpConfig)));

        Ok(())
    }

    #[test]
    fn test_invalid_business_address_is_rejected() {
        let config = NotificationConfig {
            business_name: "MyApp".to_string(),
            support_email: "support@myapp.com".to_string(),
            from_email: "not-an-email".to_string(),
            locale: Locale::English,
            delivery: DeliveryMode::Logging,
        };

        let result = ConfiguredNotifications::from_config(&config, None);

        assert!(matches!(
            result,
            Err(ConfigError::Business(BusinessProfileError::InvalidFromEmail(
                EmailAddressError::InvalidEmailAddress(_)
            )))
        ));
    }
}
