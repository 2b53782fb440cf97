//! Password reset and password change

use crate::domain::{
    communication::{
        business::BusinessProfile, email_addresses::EmailAddress, locale::Locale,
        mailer::OutboundMessage,
    },
    notifications::{errors::MessageError, phrases::Phrase},
};

use super::Composer;

/// Sends the link that lets the user choose a new password
pub fn password_reset_request(
    business: &BusinessProfile,
    locale: Locale,
    to: &EmailAddress,
    reset_url: &str,
) -> Result<OutboundMessage, MessageError> {
    let composer = Composer::new(business, locale);

    let html = composer
        .document(Phrase::PasswordResetPreheader, Phrase::PasswordResetSubject)
        .paragraph(Phrase::PasswordResetIntro)
        .action(Phrase::PasswordResetAction, reset_url)
        .footnote(Phrase::LinkExpiresInOneHour)
        .footnote(Phrase::PasswordResetIgnore)
        .footnote(Phrase::ContactForHelp)
        .render()?;

    Ok(composer.message(to, Phrase::PasswordResetSubject, Some(reset_url), html))
}

/// Confirms a completed password reset
pub fn password_reset_confirmation(
    business: &BusinessProfile,
    locale: Locale,
    to: &EmailAddress,
) -> Result<OutboundMessage, MessageError> {
    let composer = Composer::new(business, locale);

    let html = composer
        .document(
            Phrase::PasswordResetConfirmationPreheader,
            Phrase::PasswordResetConfirmationSubject,
        )
        .paragraph(Phrase::PasswordResetConfirmationIntro)
        .paragraph(Phrase::PasswordResetConfirmationLogin)
        .footnote(Phrase::SecureAccount)
        .render()?;

    Ok(composer.message(to, Phrase::PasswordResetConfirmationSubject, None, html))
}

/// Tells the user their password was changed
pub fn password_change_notification(
    business: &BusinessProfile,
    locale: Locale,
    to: &EmailAddress,
) -> Result<OutboundMessage, MessageError> {
    let composer = Composer::new(business, locale);

    let html = composer
        .document(Phrase::PasswordChangedPreheader, Phrase::PasswordChangedSubject)
        .paragraph(Phrase::PasswordChangedIntro)
        .paragraph(Phrase::PasswordChangedConfirmation)
        .footnote(Phrase::SecureAccount)
        .render()?;

    Ok(composer.message(to, Phrase::PasswordChangedSubject, None, html))
}
