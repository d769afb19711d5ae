// SPDX-License-Identifier: MIT

//! Typed translation catalog for the site.
//!
//! One record type per page section, decoded from the embedded locale
//! documents at startup. Every field is required and unknown keys are
//! rejected, so the three documents cannot drift apart silently: an
//! authoring mistake fails [`Catalog::load`] with the offending locale
//! named in the error, instead of surfacing as a blank string at
//! render time.

use crate::i18n::Locale;
use anyhow::{Context, Result};
use serde::Deserialize;

const EN_JSON: &str = include_str!("../../assets/locales/en.json");
const ZH_JSON: &str = include_str!("../../assets/locales/zh.json");
const DE_JSON: &str = include_str!("../../assets/locales/de.json");

// ─── Section records ────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Nav {
    pub home: String,
    pub services: String,
    pub work: String,
    pub about: String,
    pub contact: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hero {
    pub eyebrow: String,
    pub headline1: String,
    pub headline2: String,
    pub sub: String,
    pub cta_book: String,
    pub cta_email: String,
    pub cta_linkedin: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Proof {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Video {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Demos {
    pub title: String,
    pub sub: String,
    pub videos: Vec<Video>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceOffer {
    pub title: String,
    pub timeline: String,
    pub desc: String,
    pub best_for: String,
    pub deliverables: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Services {
    pub title: String,
    pub sub: String,
    pub cta: String,
    pub offers: Vec<ServiceOffer>,
}

/// One case study. Sourced verbatim from the locale document; the only
/// mutable state associated with the collection is the expanded-index
/// pointer in [`crate::disclosure::Disclosure`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkCase {
    pub title: String,
    pub client: String,
    pub tags: Vec<String>,
    pub problem: String,
    pub approach: String,
    pub outcome: String,
    pub owned: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Work {
    pub title: String,
    pub sub: String,
    pub problem_label: String,
    pub approach_label: String,
    pub outcome_label: String,
    pub owned_label: String,
    pub cases: Vec<WorkCase>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Principle {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Credential {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct About {
    pub title: String,
    pub bio: String,
    pub principles_title: String,
    pub principles: Vec<Principle>,
    pub skills_title: String,
    pub skills: Vec<String>,
    pub credibility_title: String,
    pub credibility: Vec<Credential>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Validation {
    pub name_required: String,
    pub email_required: String,
    pub email_invalid: String,
    pub message_required: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    pub title: String,
    pub sub: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub send: String,
    pub success: String,
    pub timezone: String,
    pub validation: Validation,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Footer {
    pub copyright: String,
    pub built_with: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotFoundPage {
    pub title: String,
    pub sub: String,
    pub back: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentPage {
    pub title: String,
    pub tagline: String,
    pub back: String,
    pub copy: String,
    pub copied: String,
}

/// All translated content for one locale. Immutable after load.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Translations {
    pub nav: Nav,
    pub hero: Hero,
    pub proof: Proof,
    pub demos: Demos,
    pub services: Services,
    pub work: Work,
    pub about: About,
    pub contact: Contact,
    pub footer: Footer,
    pub not_found: NotFoundPage,
    pub agent: AgentPage,
}

// ─── Catalog ────────────────────────────────────────────────────────

/// The three decoded translation tables. Exactly one is active at a
/// time, selected by the current [`Locale`].
#[derive(Debug, Clone)]
pub struct Catalog {
    en: Translations,
    zh: Translations,
    de: Translations,
}

impl Catalog {
    /// Decode all three embedded locale documents.
    ///
    /// A decode failure in any document is a startup configuration
    /// error; nothing else in the crate touches raw JSON.
    pub fn load() -> Result<Catalog> {
        Ok(Catalog {
            en: decode(Locale::En, EN_JSON)?,
            zh: decode(Locale::Zh, ZH_JSON)?,
            de: decode(Locale::De, DE_JSON)?,
        })
    }

    /// The table for the given locale.
    pub fn get(&self, locale: Locale) -> &Translations {
        match locale {
            Locale::En => &self.en,
            Locale::Zh => &self.zh,
            Locale::De => &self.de,
        }
    }
}

fn decode(locale: Locale, raw: &str) -> Result<Translations> {
    serde_json::from_str(raw)
        .with_context(|| format!("locale document '{}' failed to decode", locale.code()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_locale_documents_decode() {
        let catalog = Catalog::load().expect("embedded locale documents should decode");
        for locale in Locale::all() {
            let t = catalog.get(*locale);
            assert!(!t.hero.headline1.is_empty(), "{locale}: hero headline");
            assert!(!t.footer.copyright.is_empty(), "{locale}: footer");
        }
    }

    #[test]
    fn collection_counts_agree_across_locales() {
        let catalog = Catalog::load().unwrap();
        let en = catalog.get(Locale::En);
        for locale in [Locale::Zh, Locale::De] {
            let t = catalog.get(locale);
            assert_eq!(t.work.cases.len(), en.work.cases.len(), "{locale}: cases");
            assert_eq!(
                t.services.offers.len(),
                en.services.offers.len(),
                "{locale}: offers"
            );
            assert_eq!(
                t.about.principles.len(),
                en.about.principles.len(),
                "{locale}: principles"
            );
            assert_eq!(
                t.about.skills.len(),
                en.about.skills.len(),
                "{locale}: skills"
            );
            assert_eq!(
                t.about.credibility.len(),
                en.about.credibility.len(),
                "{locale}: credentials"
            );
            assert_eq!(t.proof.items.len(), en.proof.items.len(), "{locale}: proof");
            assert_eq!(
                t.demos.videos.len(),
                en.demos.videos.len(),
                "{locale}: videos"
            );
        }
    }

    #[test]
    fn case_studies_have_tags() {
        let catalog = Catalog::load().unwrap();
        for locale in Locale::all() {
            for case in &catalog.get(*locale).work.cases {
                assert!(!case.tags.is_empty(), "{locale}: '{}' has no tags", case.title);
            }
        }
    }

    #[test]
    fn translated_locales_differ_from_english() {
        let catalog = Catalog::load().unwrap();
        let en = catalog.get(Locale::En);
        assert_ne!(en.hero.sub, catalog.get(Locale::Zh).hero.sub);
        assert_ne!(en.hero.sub, catalog.get(Locale::De).hero.sub);
    }

    #[test]
    fn malformed_document_names_the_locale() {
        let err = decode(Locale::Zh, "{\"nav\": {}}").unwrap_err();
        assert!(format!("{err:#}").contains("'zh'"));
    }
}
