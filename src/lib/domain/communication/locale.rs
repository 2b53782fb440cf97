//! Two-locale copy

use std::{fmt, str::FromStr};

use clap::ValueEnum;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use thiserror::Error;

lazy_static! {
    static ref PLACEHOLDER_REGEX: Regex = Regex::new(r"\{([a-z_]+)\}").unwrap();
}

/// The locales every message is written in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Locale {
    /// English
    #[default]
    #[value(name = "en")]
    English,

    /// Dutch
    #[value(name = "nl")]
    Dutch,
}

impl Locale {
    /// The language tag of the locale
    pub fn tag(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Dutch => "nl",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when parsing an unsupported locale tag
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported locale \"{0}\"")]
pub struct UnsupportedLocale(String);

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::English),
            "nl" => Ok(Self::Dutch),
            other => Err(UnsupportedLocale(other.to_string())),
        }
    }
}

/// The same piece of copy in both locales
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalizedText {
    /// English rendering
    pub english: &'static str,

    /// Dutch rendering
    pub dutch: &'static str,
}

impl LocalizedText {
    /// Creates a new localized text
    pub const fn new(english: &'static str, dutch: &'static str) -> Self {
        Self { english, dutch }
    }

    /// Picks the rendering for `locale`
    pub fn resolve(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => self.english,
            Locale::Dutch => self.dutch,
        }
    }

    /// Resolves the text and fills in `{name}` placeholders from `args`.
    ///
    /// Substitution is a single pass, so argument values are inserted verbatim even if
    /// they contain braces. Placeholders without a matching argument are kept as-is.
    pub fn render(&self, locale: Locale, args: &[(&str, &str)]) -> String {
        let text = self.resolve(locale);

        PLACEHOLDER_REGEX
            .replace_all(text, |caps: &Captures<'_>| {
                args.iter()
                    .find(|(name, _)| *name == &caps[1])
                    .map(|(_, value)| value.to_string())
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}
