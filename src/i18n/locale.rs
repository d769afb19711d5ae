// SPDX-License-Identifier: MIT

//! Locale selection and environment-based language detection.

use serde::{Deserialize, Serialize};

/// The three locales the site is authored in.
///
/// Each variant maps to an ISO 639-1 two-letter code which doubles as the
/// leading URL path segment (`/en`, `/zh`, `/de`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    En,
    Zh,
    De,
}

impl Locale {
    /// ISO 639-1 two-letter code for this locale.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
            Locale::De => "de",
        }
    }

    /// Parse an ISO 639-1 code into a supported locale.
    ///
    /// Returns `None` for anything the site is not authored in.
    /// Case-sensitive (codes must be lowercase per ISO 639-1).
    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "en" => Some(Locale::En),
            "zh" => Some(Locale::Zh),
            "de" => Some(Locale::De),
            _ => None,
        }
    }

    /// All supported locales, in switcher display order.
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Zh, Locale::De]
    }

    /// Short label shown in the language switcher.
    pub fn switcher_label(&self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Zh => "中文",
            Locale::De => "DE",
        }
    }

    /// Value for the document's declared language attribute.
    ///
    /// The site's Chinese content is Traditional Chinese, so `zh`
    /// declares itself as `zh-TW`.
    pub fn document_lang(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh-TW",
            Locale::De => "de",
        }
    }

    /// Match an environment-reported language preference such as
    /// `zh_TW.UTF-8`, `de-DE`, or plain `en`.
    ///
    /// Only the leading language subtag matters. Returns `None` for
    /// preferences the site has no catalog for.
    pub fn from_language_preference(pref: &str) -> Option<Locale> {
        let tag = pref
            .split(['_', '-', '.'])
            .next()
            .unwrap_or("")
            .to_lowercase();
        Locale::from_code(&tag)
    }

    /// Detection order: `LC_ALL` then `LANG`, falling back to English.
    ///
    /// This is the desktop analog of the browser's language preference;
    /// the route's path segment takes priority over it (see
    /// [`crate::route::Route`]).
    pub fn detect() -> Locale {
        for var in ["LC_ALL", "LANG"] {
            if let Ok(value) = std::env::var(var) {
                if let Some(locale) = Locale::from_language_preference(&value) {
                    return locale;
                }
            }
        }
        Locale::En
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::En
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
