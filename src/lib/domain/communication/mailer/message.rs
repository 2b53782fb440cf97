//! Email message

use std::fmt;

use crate::domain::communication::email_addresses::EmailAddress;

/// A fully composed email, built once per send and never mutated
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundMessage {
    /// The sender of the email
    pub from: EmailAddress,

    /// The recipients of the email
    pub to: Vec<EmailAddress>,

    /// The subject of the email
    pub subject: String,

    /// The plain text fallback, only present for messages carrying a link
    pub text: Option<String>,

    /// The HTML body of the email
    pub html: String,
}

impl OutboundMessage {
    /// Recipients joined for logging
    pub fn recipients(&self) -> Recipients<'_> {
        Recipients(&self.to)
    }
}

/// Comma separated list of recipients
#[derive(Debug)]
pub struct Recipients<'a>(&'a [EmailAddress]);

impl fmt::Display for Recipients<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, address) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{address}")?;
        }

        Ok(())
    }
}

/// Receipt of a delivered message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delivery {
    /// The message id assigned by the transport
    pub id: String,
}

impl Delivery {
    /// Creates a new delivery receipt
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
