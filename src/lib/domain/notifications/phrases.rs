//! Every user-facing string, in both locales.
//!
//! Placeholders: `{business}`, `{support}`, `{current}` and `{new}`.
//!
//! Copy is kept per event as written, so lines that read alike in English may differ in
//! Dutch between events (link expiry, help and security lines).

use crate::domain::communication::locale::LocalizedText;

/// Identifies one piece of copy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Phrase {
    // shared
    ContactForHelp,
    SecureAccount,
    LinkExpiresInOneHour,
    VerifyEmailAction,

    // email verification
    VerificationSubject,
    VerificationPreheader,
    VerificationHeading,
    VerificationIntro,
    VerificationExpiry,
    VerificationDisregard,

    // password reset
    PasswordResetSubject,
    PasswordResetPreheader,
    PasswordResetIntro,
    PasswordResetAction,
    PasswordResetIgnore,

    // password reset confirmation
    PasswordResetConfirmationSubject,
    PasswordResetConfirmationPreheader,
    PasswordResetConfirmationIntro,
    PasswordResetConfirmationLogin,

    // password changed
    PasswordChangedSubject,
    PasswordChangedPreheader,
    PasswordChangedIntro,
    PasswordChangedConfirmation,

    // email change requested
    EmailChangeRequestSubject,
    EmailChangeRequestPreheader,
    EmailChangeRequestHeading,
    EmailChangeRequestIntro,
    EmailChangeRequestNoAction,
    EmailChangeRequestSecureAccount,

    // email change confirmation
    EmailChangeConfirmationPreheader,
    EmailChangeConfirmationHeading,
    EmailChangeConfirmationIntro,
    EmailChangeConfirmationExpiry,
    EmailChangeConfirmationIgnore,
    EmailChangeConfirmationContact,

    // email change succeeded, old address
    EmailChangedSubject,
    EmailChangedPreheader,
    EmailChangedHeading,
    EmailChangedIntro,
    EmailChangedConfirmation,

    // email change succeeded, new address
    NewEmailConfirmedSubject,
    NewEmailConfirmedPreheader,
    NewEmailConfirmedWelcome,
    NewEmailConfirmedLogin,
    NewEmailConfirmedContact,

    // deletion requested
    DeletionRequestSubject,
    DeletionRequestPreheader,
    DeletionRequestHeading,
    DeletionRequestIntro,
    DeletionRequestWarning,
    DeletionRequestNoAction,
    DeletionRequestContact,

    // deletion confirmed
    DeletionConfirmedSubject,
    DeletionConfirmedPreheader,
    DeletionConfirmedIntro,
    DeletionConfirmedDataRemoved,
    DeletionConfirmedFarewell,
    DeletionConfirmedContact,
}

impl Phrase {
    /// The English and Dutch renderings of the phrase
    pub const fn text(self) -> LocalizedText {
        use Phrase::*;

        match self {
            ContactForHelp => LocalizedText::new(
                "For help, contact us at {support}.",
                "Voor hulp, neem contact op met ons op via {support}.",
            ),
            SecureAccount => LocalizedText::new(
                "If you didn't request this change, please contact us immediately at {support} to secure your account.",
                "Als je deze wijziging niet hebt aangevraagd, neem dan onmiddellijk contact op met ons via {support} om je account te beveiligen.",
            ),
            LinkExpiresInOneHour => LocalizedText::new(
                "This link will expire in 1 hour for security reasons.",
                "Om veiligheidsredenen verloopt deze link binnen 1 uur.",
            ),
            VerifyEmailAction => {
                LocalizedText::new("Verify email address", "Verifieer e-mailadres")
            }

            VerificationSubject => {
                LocalizedText::new("Verify your email address", "Verifieer je e-mailadres")
            }
            VerificationPreheader => LocalizedText::new(
                "Verify your email for {business}",
                "Verifiëer je emailadres voor {business}",
            ),
            VerificationHeading => {
                LocalizedText::new("Verify your email address", "Verifiëer je emailadres")
            }
            VerificationIntro => LocalizedText::new(
                "To continue setting up your {business} account, please verify that this is your email address.",
                "Om de setup van je {business} account te voltooien, bevestig alsjeblieft dat dit je e-mailadres is.",
            ),
            VerificationExpiry => LocalizedText::new(
                "This verification link will expire in 24 hours for security reasons.",
                "Om veiligheidsredenen verloopt deze verificatielink binnen 24 uur.",
            ),
            VerificationDisregard => LocalizedText::new(
                "If you did not make this request, please disregard this email.",
                "Als je deze aanvraag niet hebt gedaan, kun je deze e-mail negeren.",
            ),

            PasswordResetSubject => LocalizedText::new("Reset your password", "Reset je wachtwoord"),
            PasswordResetPreheader => LocalizedText::new(
                "Reset your password for {business}",
                "Reset je wachtwoord voor {business}",
            ),
            PasswordResetIntro => LocalizedText::new(
                "We received a request to reset the password for your {business} account. Click the button below to change your password.",
                "We hebben een verzoek ontvangen om het wachtwoord voor je {business} account te resetten. Klik op de onderstaande knop om je wachtwoord te wijzigen.",
            ),
            PasswordResetAction => LocalizedText::new("Reset password", "Reset wachtwoord"),
            PasswordResetIgnore => LocalizedText::new(
                "If you didn't request a password reset, you can ignore this email.",
                "Als je geen wachtwoordreset hebt aangevraagd, kun je deze e-mail negeren.",
            ),

            PasswordResetConfirmationSubject => {
                LocalizedText::new("Password Successfully Reset", "Wachtwoord succesvol gereset")
            }
            PasswordResetConfirmationPreheader => LocalizedText::new(
                "Your password has been successfully reset for {business}",
                "Je wachtwoord is succesvol gereset voor {business}",
            ),
            PasswordResetConfirmationIntro => LocalizedText::new(
                "We confirm that the password for your {business} account has been successfully reset.",
                "We bevestigen dat je wachtwoord voor je {business} account succesvol is gereset.",
            ),
            PasswordResetConfirmationLogin => LocalizedText::new(
                "You can now log in using your new password.",
                "Je kunt nu inloggen met je nieuwe wachtwoord.",
            ),

            PasswordChangedSubject => LocalizedText::new("Password Changed", "Wachtwoord gewijzigd"),
            PasswordChangedPreheader => LocalizedText::new(
                "Your password has been changed for {business}",
                "Je wachtwoord is gewijzigd voor {business}",
            ),
            PasswordChangedIntro => LocalizedText::new(
                "We're writing to inform you that the password for your {business} account has just been changed.",
                "We willen je informeren dat het wachtwoord voor je {business} account zojuist is gewijzigd.",
            ),
            PasswordChangedConfirmation => LocalizedText::new(
                "If you requested this change, please consider this email as confirmation.",
                "Als je deze wijziging hebt aangevraagd, kun je deze e-mail als bevestiging beschouwen.",
            ),

            EmailChangeRequestSubject => LocalizedText::new(
                "Important: Email Change Request Received",
                "Belangrijk: Verzoek tot e-mailwijziging ontvangen",
            ),
            EmailChangeRequestPreheader => LocalizedText::new(
                "A request has been made to change your email address for {business}",
                "Er is een verzoek ingediend om je e-mailadres te wijzigen voor {business}",
            ),
            EmailChangeRequestHeading => LocalizedText::new(
                "Email Change Request Received",
                "Verzoek tot e-mailwijziging ontvangen",
            ),
            EmailChangeRequestIntro => LocalizedText::new(
                "We received a request to change the email address for your {business} account from {current} to {new}.",
                "We hebben een verzoek ontvangen om het e-mailadres voor je {business} account te wijzigen van {current} naar {new}.",
            ),
            EmailChangeRequestNoAction => LocalizedText::new(
                "If you made this request, no further action is needed. The change will be processed shortly.",
                "Als je dit verzoek hebt gedaan, hoef je verder niets te doen. De wijziging wordt binnenkort doorgevoerd.",
            ),
            EmailChangeRequestSecureAccount => LocalizedText::new(
                "If you didn't request this change, please contact us immediately at {support} to secure your account.",
                "Als je dit verzoek niet hebt gedaan, neem dan onmiddellijk contact op met ons via {support} om je account te beveiligen.",
            ),

            EmailChangeConfirmationPreheader => LocalizedText::new(
                "Verify your new email address for {business}",
                "Verifieer je nieuwe e-mailadres voor {business}",
            ),
            EmailChangeConfirmationHeading => LocalizedText::new(
                "Verify your new email address",
                "Verifieer je nieuwe e-mailadres",
            ),
            EmailChangeConfirmationIntro => LocalizedText::new(
                "We received a request to change the email address for your {business} account. Click the button below to verify your new email address.",
                "We hebben een verzoek ontvangen om het e-mailadres voor je {business} account te wijzigen. Klik op de onderstaande knop om je nieuwe e-mailadres te verifiëren.",
            ),
            EmailChangeConfirmationExpiry => LocalizedText::new(
                "This link will expire in 1 hour for security reasons.",
                "Deze link verloopt binnen 1 uur om veiligheidsredenen.",
            ),
            EmailChangeConfirmationIgnore => LocalizedText::new(
                "If you didn't request an email address change, you can ignore this email.",
                "Als je geen wijziging van je e-mailadres hebt aangevraagd, kun je deze e-mail negeren.",
            ),
            EmailChangeConfirmationContact => LocalizedText::new(
                "For help, contact us at {support}.",
                "Voor hulp, neem contact op met ons via {support}.",
            ),

            EmailChangedSubject => LocalizedText::new(
                "Important: Your email address has been changed",
                "Belangrijk: Je e-mailadres is gewijzigd",
            ),
            EmailChangedPreheader => LocalizedText::new(
                "Your email address for {business} has been changed",
                "Je e-mailadres voor {business} is gewijzigd",
            ),
            EmailChangedHeading => LocalizedText::new(
                "Your email address has been changed",
                "Je e-mailadres is gewijzigd",
            ),
            EmailChangedIntro => LocalizedText::new(
                "We're informing you that the email address for your {business} account has been changed from {current} to {new}.",
                "We willen je informeren dat het e-mailadres voor je {business} account is gewijzigd van {current} naar {new}.",
            ),
            EmailChangedConfirmation => LocalizedText::new(
                "If you requested this change, please consider this email as confirmation. You can now log in using your new email address.",
                "Als je deze wijziging hebt aangevraagd, kun je deze e-mail als bevestiging beschouwen. Je kunt nu inloggen met je nieuwe e-mailadres.",
            ),

            NewEmailConfirmedSubject => LocalizedText::new(
                "Your new email address is confirmed",
                "Je nieuwe e-mailadres is bevestigd",
            ),
            NewEmailConfirmedPreheader => LocalizedText::new(
                "Your new email address for {business} is confirmed",
                "Je nieuwe e-mailadres voor {business} is bevestigd",
            ),
            NewEmailConfirmedWelcome => LocalizedText::new(
                "Welcome! We confirm that this email address ({new}) is now associated with your {business} account. Your previous email address was {current}.",
                "Welkom! We bevestigen dat dit e-mailadres ({new}) nu is gekoppeld aan je {business} account. Je vorige e-mailadres was {current}.",
            ),
            NewEmailConfirmedLogin => LocalizedText::new(
                "You can now log in to your account using this new email address. All your account details and preferences remain unchanged.",
                "Je kunt nu inloggen op je account met dit nieuwe e-mailadres. Al je accountgegevens en voorkeuren blijven ongewijzigd.",
            ),
            NewEmailConfirmedContact => LocalizedText::new(
                "If you didn't request this change or if you have any questions, please contact us at {support}.",
                "Als je deze wijziging niet hebt aangevraagd of als je vragen hebt, neem dan contact op met ons via {support}.",
            ),

            DeletionRequestSubject => LocalizedText::new(
                "Important: Account Deletion Request Received",
                "Belangrijk: Verzoek tot accountverwijdering ontvangen",
            ),
            DeletionRequestPreheader => LocalizedText::new(
                "A request has been made to delete your {business} account",
                "Er is een verzoek ingediend om je {business} account te verwijderen",
            ),
            DeletionRequestHeading => LocalizedText::new(
                "Account Deletion Request Received",
                "Verzoek tot accountverwijdering ontvangen",
            ),
            DeletionRequestIntro => LocalizedText::new(
                "We received a request to permanently delete your {business} account. This request will be processed within 30 days.",
                "We hebben een verzoek ontvangen om je {business} account permanent te verwijderen. Dit verzoek wordt binnen 30 dagen verwerkt.",
            ),
            DeletionRequestWarning => LocalizedText::new(
                "Please note: This action cannot be undone. All account data, settings, and associated information will be permanently deleted.",
                "Let op: Deze actie kan niet ongedaan worden gemaakt. Alle accountgegevens, instellingen en bijbehorende informatie zullen permanent worden verwijderd.",
            ),
            DeletionRequestNoAction => LocalizedText::new(
                "If you made this request, no further action is needed. You will receive a confirmation once your account has been deleted.",
                "Als je dit verzoek hebt gedaan, hoef je verder niets te doen. Je ontvangt een bevestiging zodra je account is verwijderd.",
            ),
            DeletionRequestContact => LocalizedText::new(
                "If you didn't request this or if you've changed your mind, please contact us immediately at {support} to stop the deletion process.",
                "Als je dit verzoek niet hebt gedaan of als je van gedachten bent veranderd, neem dan onmiddellijk contact op met ons via {support} om het verwijderingsproces te stoppen.",
            ),

            DeletionConfirmedSubject => {
                LocalizedText::new("Your account has been deleted", "Je account is verwijderd")
            }
            DeletionConfirmedPreheader => LocalizedText::new(
                "Your {business} account has been permanently deleted",
                "Je {business} account is permanent verwijderd",
            ),
            DeletionConfirmedIntro => LocalizedText::new(
                "We confirm that your {business} account and all associated data have been permanently deleted as requested.",
                "We bevestigen dat je {business} account en alle bijbehorende gegevens permanent zijn verwijderd volgens je verzoek.",
            ),
            DeletionConfirmedDataRemoved => LocalizedText::new(
                "All personal information, settings, and account data have been removed from our systems.",
                "Alle persoonlijke informatie, instellingen en accountgegevens zijn verwijderd uit onze systemen.",
            ),
            DeletionConfirmedFarewell => LocalizedText::new(
                "We're sorry to see you go. If you'd like to use {business} again in the future, you're always welcome to create a new account.",
                "We vinden het jammer je te zien gaan. Als je in de toekomst weer gebruik wilt maken van {business}, ben je altijd welkom om een nieuw account aan te maken.",
            ),
            DeletionConfirmedContact => LocalizedText::new(
                "If you have any questions or if you didn't make this request, please contact us at {support}.",
                "Als je vragen hebt of als je dit verzoek niet hebt gedaan, neem dan contact op met ons via {support}.",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::communication::locale::Locale;

    use super::*;

    #[test]
    fn test_support_phrases_mention_support_address() {
        for phrase in [
            Phrase::ContactForHelp,
            Phrase::SecureAccount,
            Phrase::EmailChangeRequestSecureAccount,
            Phrase::EmailChangeConfirmationContact,
            Phrase::NewEmailConfirmedContact,
            Phrase::DeletionRequestContact,
            Phrase::DeletionConfirmedContact,
        ] {
            for locale in [Locale::English, Locale::Dutch] {
                assert!(
                    phrase.text().resolve(locale).contains("{support}"),
                    "{phrase:?} in {locale}"
                );
            }
        }
    }

    #[test]
    fn test_renderings_differ_per_locale() {
        let text = Phrase::PasswordChangedSubject.text();

        assert_eq!(text.resolve(Locale::English), "Password Changed");
        assert_eq!(text.resolve(Locale::Dutch), "Wachtwoord gewijzigd");
    }

    #[test]
    fn test_dutch_copy_is_kept_per_event() {
        let dutch = |phrase: Phrase| phrase.text().resolve(Locale::Dutch);

        assert_eq!(
            dutch(Phrase::LinkExpiresInOneHour),
            "Om veiligheidsredenen verloopt deze link binnen 1 uur."
        );
        assert_eq!(
            dutch(Phrase::EmailChangeConfirmationExpiry),
            "Deze link verloopt binnen 1 uur om veiligheidsredenen."
        );
        assert_eq!(
            dutch(Phrase::ContactForHelp),
            "Voor hulp, neem contact op met ons op via {support}."
        );
        assert_eq!(
            dutch(Phrase::EmailChangeConfirmationContact),
            "Voor hulp, neem contact op met ons via {support}."
        );
        assert_ne!(
            dutch(Phrase::SecureAccount),
            dutch(Phrase::EmailChangeRequestSecureAccount)
        );

        for phrase in [
            Phrase::LinkExpiresInOneHour,
            Phrase::EmailChangeConfirmationExpiry,
        ] {
            assert_eq!(
                phrase.text().resolve(Locale::English),
                "This link will expire in 1 hour for security reasons."
            );
        }
    }
}
