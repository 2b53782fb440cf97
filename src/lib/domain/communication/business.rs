//! Business identity carried into every outbound message

use thiserror::Error;

use crate::domain::communication::email_addresses::{EmailAddress, EmailAddressError};

/// Errors that can occur when building a [`BusinessProfile`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BusinessProfileError {
    /// The display name is blank
    #[error("business name is empty")]
    EmptyName,

    /// The support address could not be parsed
    #[error("invalid support email address")]
    InvalidSupportEmail(#[source] EmailAddressError),

    /// The sender address could not be parsed
    #[error("invalid from email address")]
    InvalidFromEmail(#[source] EmailAddressError),
}

/// Sender identity and support contact applied to all notifications
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BusinessProfile {
    name: String,
    support_email: EmailAddress,
    from_email: EmailAddress,
}

impl BusinessProfile {
    /// Creates a new business profile from already validated addresses
    pub fn new(
        name: &str,
        support_email: EmailAddress,
        from_email: EmailAddress,
    ) -> Result<Self, BusinessProfileError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(BusinessProfileError::EmptyName);
        }

        Ok(Self {
            name: name.to_string(),
            support_email,
            from_email,
        })
    }

    /// Creates a new business profile, validating both addresses
    pub fn parse(name: &str, support_email: &str, from_email: &str) -> Result<Self, BusinessProfileError> {
        let support_email =
            EmailAddress::new(support_email).map_err(BusinessProfileError::InvalidSupportEmail)?;
        let from_email =
            EmailAddress::new(from_email).map_err(BusinessProfileError::InvalidFromEmail)?;

        Self::new(name, support_email, from_email)
    }

    /// The display name, used as the subject prefix
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where users are told to turn for help
    pub fn support_email(&self) -> &EmailAddress {
        &self.support_email
    }

    /// The sender of every message
    pub fn from_email(&self) -> &EmailAddress {
        &self.from_email
    }
}
