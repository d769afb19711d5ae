// SPDX-License-Identifier: MIT

//! Internationalisation module for folio.
//!
//! ## Supported locales
//!
//! | Code | Language            | Switcher label |
//! |------|---------------------|----------------|
//! | en   | English             | EN             |
//! | zh   | Traditional Chinese | 中文            |
//! | de   | German              | DE             |
//!
//! ## Design
//!
//! Each locale ships as a JSON document embedded at compile time and
//! decoded once at startup into one typed record per page section
//! ([`Translations`]). A missing or extra key is a decode error surfaced
//! before any UI comes up — there is no runtime lookup miss and no
//! fallback chain. All three documents must cover identical key paths;
//! the `check` subcommand and the catalog tests enforce this.
//!
//! The active locale is selected by the route's leading path segment,
//! then by the environment's language preference, defaulting to English.

mod catalog;
mod locale;

pub use catalog::{
    About, AgentPage, Catalog, Contact, Credential, Demos, Footer, Hero, Nav, NotFoundPage,
    Principle, Proof, ServiceOffer, Services, Translations, Validation, Video, Work, WorkCase,
};
pub use locale::Locale;
