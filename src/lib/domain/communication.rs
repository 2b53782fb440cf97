//! Outbound communication: addresses, sender identity, localization and mail delivery

pub mod business;
pub mod email_addresses;
pub mod locale;
pub mod mailer;
