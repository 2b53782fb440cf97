//! Signup email verification

use crate::domain::{
    communication::{
        business::BusinessProfile, email_addresses::EmailAddress, locale::Locale,
        mailer::OutboundMessage,
    },
    notifications::{errors::MessageError, phrases::Phrase},
};

use super::Composer;

/// Asks a new user to verify their address by following `verification_url`
pub fn request_email_verification(
    business: &BusinessProfile,
    locale: Locale,
    to: &EmailAddress,
    verification_url: &str,
) -> Result<OutboundMessage, MessageError> {
    let composer = Composer::new(business, locale);

    let html = composer
        .document(Phrase::VerificationPreheader, Phrase::VerificationHeading)
        .paragraph(Phrase::VerificationIntro)
        .action(Phrase::VerifyEmailAction, verification_url)
        .footnote(Phrase::VerificationExpiry)
        .footnote(Phrase::VerificationDisregard)
        .footnote(Phrase::ContactForHelp)
        .render()?;

    Ok(composer.message(
        to,
        Phrase::VerificationSubject,
        Some(verification_url),
        html,
    ))
}
