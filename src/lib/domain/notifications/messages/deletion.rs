//! Account deletion

use crate::domain::{
    communication::{
        business::BusinessProfile, email_addresses::EmailAddress, locale::Locale,
        mailer::OutboundMessage,
    },
    notifications::{errors::MessageError, phrases::Phrase},
};

use super::Composer;

/// Acknowledges a deletion request and explains how to stop it
pub fn deletion_request_notification(
    business: &BusinessProfile,
    locale: Locale,
    to: &EmailAddress,
) -> Result<OutboundMessage, MessageError> {
    let composer = Composer::new(business, locale);

    let html = composer
        .document(Phrase::DeletionRequestPreheader, Phrase::DeletionRequestHeading)
        .paragraph(Phrase::DeletionRequestIntro)
        .warning(Phrase::DeletionRequestWarning)
        .paragraph(Phrase::DeletionRequestNoAction)
        .footnote(Phrase::DeletionRequestContact)
        .render()?;

    Ok(composer.message(to, Phrase::DeletionRequestSubject, None, html))
}

/// Confirms the account is gone
pub fn deletion_confirmation_notification(
    business: &BusinessProfile,
    locale: Locale,
    to: &EmailAddress,
) -> Result<OutboundMessage, MessageError> {
    let composer = Composer::new(business, locale);

    let html = composer
        .document(
            Phrase::DeletionConfirmedPreheader,
            Phrase::DeletionConfirmedSubject,
        )
        .paragraph(Phrase::DeletionConfirmedIntro)
        .paragraph(Phrase::DeletionConfirmedDataRemoved)
        .paragraph(Phrase::DeletionConfirmedFarewell)
        .footnote(Phrase::DeletionConfirmedContact)
        .render()?;

    Ok(composer.message(to, Phrase::DeletionConfirmedSubject, None, html))
}
