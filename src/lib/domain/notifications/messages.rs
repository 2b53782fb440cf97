//! One message builder per identity lifecycle event.
//!
//! Builders are pure: they take the business profile, the locale and the event data, and
//! return a complete [`OutboundMessage`] or the error that prevented building it.

mod deletion;
mod email_change;
mod email_verification;
mod password;

pub use deletion::{deletion_confirmation_notification, deletion_request_notification};
pub use email_change::{
    email_change_confirmation_request, email_change_request_notification,
    email_change_success_to_new_email, email_change_success_to_old_email,
};
pub use email_verification::request_email_verification;
pub use password::{
    password_change_notification, password_reset_confirmation, password_reset_request,
};

use crate::domain::communication::{
    business::BusinessProfile, email_addresses::EmailAddress, locale::Locale,
    mailer::OutboundMessage,
};

use super::{
    errors::MessageError,
    phrases::Phrase,
    template::{Action, NotificationTemplate, Paragraph},
};

/// Resolves phrases for one message
struct Composer<'a> {
    business: &'a BusinessProfile,
    locale: Locale,
    args: Vec<(&'static str, &'a str)>,
}

impl<'a> Composer<'a> {
    fn new(business: &'a BusinessProfile, locale: Locale) -> Self {
        Self {
            business,
            locale,
            args: vec![
                ("business", business.name()),
                ("support", business.support_email().as_str()),
            ],
        }
    }

    fn with_addresses(mut self, current: &'a EmailAddress, new: &'a EmailAddress) -> Self {
        self.args.push(("current", current.as_str()));
        self.args.push(("new", new.as_str()));
        self
    }

    fn text(&self, phrase: Phrase) -> String {
        phrase.text().render(self.locale, &self.args)
    }

    fn document(&self, preheader: Phrase, heading: Phrase) -> Document<'_, 'a> {
        Document {
            composer: self,
            template: NotificationTemplate {
                lang: self.locale.tag(),
                business_name: self.business.name().to_string(),
                preheader: self.text(preheader),
                heading: self.text(heading),
                paragraphs: Vec::new(),
                action: None,
                footnotes: Vec::new(),
            },
        }
    }

    /// Subjects always read `"{business} | {subject}"`
    fn message(
        &self,
        to: &EmailAddress,
        subject: Phrase,
        link: Option<&str>,
        html: String,
    ) -> OutboundMessage {
        OutboundMessage {
            from: self.business.from_email().clone(),
            to: vec![to.clone()],
            subject: format!("{} | {}", self.business.name(), self.text(subject)),
            text: link.map(str::to_string),
            html,
        }
    }
}

/// Email body under construction
struct Document<'c, 'a> {
    composer: &'c Composer<'a>,
    template: NotificationTemplate,
}

impl Document<'_, '_> {
    fn paragraph(mut self, phrase: Phrase) -> Self {
        self.template.paragraphs.push(Paragraph {
            text: self.composer.text(phrase),
            warning: false,
        });
        self
    }

    fn warning(mut self, phrase: Phrase) -> Self {
        self.template.paragraphs.push(Paragraph {
            text: self.composer.text(phrase),
            warning: true,
        });
        self
    }

    fn action(mut self, label: Phrase, href: &str) -> Self {
        self.template.action = Some(Action {
            label: self.composer.text(label),
            href: href.to_string(),
        });
        self
    }

    fn footnote(mut self, phrase: Phrase) -> Self {
        self.template.footnotes.push(self.composer.text(phrase));
        self
    }

    fn render(self) -> Result<String, MessageError> {
        self.template.render_html()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::domain::communication::{business::BusinessProfile, email_addresses::EmailAddress};

    pub fn business() -> BusinessProfile {
        BusinessProfile::new(
            "MyApp",
            EmailAddress::new_unchecked("support@myapp.com"),
            EmailAddress::new_unchecked("noreply@myapp.com"),
        )
        .unwrap()
    }

    pub fn user() -> EmailAddress {
        EmailAddress::new_unchecked("user@example.com")
    }

    pub fn old_email() -> EmailAddress {
        EmailAddress::new_unchecked("old@example.com")
    }

    pub fn new_email() -> EmailAddress {
        EmailAddress::new_unchecked("new@example.com")
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::{fixtures::*, *};

    fn every_message(locale: Locale) -> Result<Vec<OutboundMessage>, MessageError> {
        let business = business();
        let url = "https://myapp.com/link?t=abc";

        Ok(vec![
            request_email_verification(&business, locale, &user(), url)?,
            password_reset_request(&business, locale, &user(), url)?,
            password_reset_confirmation(&business, locale, &user())?,
            password_change_notification(&business, locale, &user())?,
            email_change_confirmation_request(&business, locale, &old_email(), &new_email(), url)?,
            email_change_request_notification(&business, locale, &old_email(), &new_email())?,
            email_change_success_to_old_email(&business, locale, &old_email(), &new_email())?,
            email_change_success_to_new_email(&business, locale, &old_email(), &new_email())?,
            deletion_request_notification(&business, locale, &user())?,
            deletion_confirmation_notification(&business, locale, &user())?,
        ])
    }

    #[test]
    fn test_every_subject_is_prefixed_with_business_name() -> TestResult {
        for locale in [Locale::English, Locale::Dutch] {
            for message in every_message(locale)? {
                assert!(message.subject.starts_with("MyApp | "), "{}", message.subject);
            }
        }

        Ok(())
    }

    #[test]
    fn test_every_message_comes_from_business() -> TestResult {
        for message in every_message(Locale::English)? {
            assert_eq!(message.from.as_str(), "noreply@myapp.com");
            assert_eq!(message.to.len(), 1);
        }

        Ok(())
    }

    #[test]
    fn test_every_message_mentions_support_address() -> TestResult {
        for locale in [Locale::English, Locale::Dutch] {
            for message in every_message(locale)? {
                assert!(message.html.contains("support@myapp.com"), "{}", message.subject);
            }
        }

        Ok(())
    }

    #[test]
    fn test_only_link_messages_have_text_body() -> TestResult {
        let with_text: Vec<_> = every_message(Locale::English)?
            .into_iter()
            .filter(|message| message.text.is_some())
            .map(|message| message.subject)
            .collect();

        assert_eq!(
            with_text,
            vec![
                "MyApp | Verify your email address",
                "MyApp | Reset your password",
                "MyApp | Verify your email address",
            ]
        );

        Ok(())
    }

    #[test]
    fn test_building_twice_is_identical() -> TestResult {
        assert_eq!(every_message(Locale::Dutch)?, every_message(Locale::Dutch)?);

        Ok(())
    }

    #[test]
    fn test_locale_selects_rendering() -> TestResult {
        let english = every_message(Locale::English)?;
        let dutch = every_message(Locale::Dutch)?;

        for (english, dutch) in english.iter().zip(&dutch) {
            assert_ne!(english.subject, dutch.subject);
            assert!(english.html.contains("lang=\"en\""));
            assert!(dutch.html.contains("lang=\"nl\""));
        }

        Ok(())
    }
}
