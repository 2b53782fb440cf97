//! Email address change

use crate::domain::{
    communication::{
        business::BusinessProfile, email_addresses::EmailAddress, locale::Locale,
        mailer::OutboundMessage,
    },
    notifications::{errors::MessageError, phrases::Phrase},
};

use super::Composer;

/// Asks the holder of `new_email` to confirm it through `verification_url`
pub fn email_change_confirmation_request(
    business: &BusinessProfile,
    locale: Locale,
    current_email: &EmailAddress,
    new_email: &EmailAddress,
    verification_url: &str,
) -> Result<OutboundMessage, MessageError> {
    let composer = Composer::new(business, locale).with_addresses(current_email, new_email);

    let html = composer
        .document(
            Phrase::EmailChangeConfirmationPreheader,
            Phrase::EmailChangeConfirmationHeading,
        )
        .paragraph(Phrase::EmailChangeConfirmationIntro)
        .action(Phrase::VerifyEmailAction, verification_url)
        .footnote(Phrase::EmailChangeConfirmationExpiry)
        .footnote(Phrase::EmailChangeConfirmationIgnore)
        .footnote(Phrase::EmailChangeConfirmationContact)
        .render()?;

    Ok(composer.message(
        new_email,
        Phrase::VerificationSubject,
        Some(verification_url),
        html,
    ))
}

/// Warns the current address that a change to `new_email` was requested
pub fn email_change_request_notification(
    business: &BusinessProfile,
    locale: Locale,
    current_email: &EmailAddress,
    new_email: &EmailAddress,
) -> Result<OutboundMessage, MessageError> {
    let composer = Composer::new(business, locale).with_addresses(current_email, new_email);

    let html = composer
        .document(
            Phrase::EmailChangeRequestPreheader,
            Phrase::EmailChangeRequestHeading,
        )
        .paragraph(Phrase::EmailChangeRequestIntro)
        .paragraph(Phrase::EmailChangeRequestNoAction)
        .footnote(Phrase::EmailChangeRequestSecureAccount)
        .render()?;

    Ok(composer.message(current_email, Phrase::EmailChangeRequestSubject, None, html))
}

/// Tells the previous address that the account moved to `new_email`
pub fn email_change_success_to_old_email(
    business: &BusinessProfile,
    locale: Locale,
    current_email: &EmailAddress,
    new_email: &EmailAddress,
) -> Result<OutboundMessage, MessageError> {
    let composer = Composer::new(business, locale).with_addresses(current_email, new_email);

    let html = composer
        .document(Phrase::EmailChangedPreheader, Phrase::EmailChangedHeading)
        .paragraph(Phrase::EmailChangedIntro)
        .paragraph(Phrase::EmailChangedConfirmation)
        .footnote(Phrase::SecureAccount)
        .render()?;

    Ok(composer.message(current_email, Phrase::EmailChangedSubject, None, html))
}

/// Welcomes `new_email` as the account's address
pub fn email_change_success_to_new_email(
    business: &BusinessProfile,
    locale: Locale,
    current_email: &EmailAddress,
    new_email: &EmailAddress,
) -> Result<OutboundMessage, MessageError> {
    let composer = Composer::new(business, locale).with_addresses(current_email, new_email);

    let html = composer
        .document(
            Phrase::NewEmailConfirmedPreheader,
            Phrase::NewEmailConfirmedSubject,
        )
        .paragraph(Phrase::NewEmailConfirmedWelcome)
        .paragraph(Phrase::NewEmailConfirmedLogin)
        .footnote(Phrase::NewEmailConfirmedContact)
        .render()?;

    Ok(composer.message(new_email, Phrase::NewEmailConfirmedSubject, None, html))
}
