// SPDX-License-Identifier: MIT

//! Route parsing for the navigation surface.
//!
//! The site's address space is a leading locale segment plus an
//! optional in-page anchor: `/en`, `/zh#work`, `/de#contact`. Anything
//! with an unrecognised leading segment is the not-found view. An
//! unknown anchor inside a known locale is harmless and resolves to
//! the top of the page.

use crate::i18n::Locale;

/// The anchor sections of the single page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Services,
    Work,
    About,
    Contact,
}

impl Section {
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Services => "services",
            Section::Work => "work",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Section> {
        match anchor {
            "hero" => Some(Section::Hero),
            "services" => Some(Section::Services),
            "work" => Some(Section::Work),
            "about" => Some(Section::About),
            "contact" => Some(Section::Contact),
            _ => None,
        }
    }

    pub fn all() -> &'static [Section] {
        &[
            Section::Hero,
            Section::Services,
            Section::Work,
            Section::About,
            Section::Contact,
        ]
    }
}

/// Outcome of parsing a site path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The single page in `locale`, optionally scrolled to `section`.
    Page {
        locale: Locale,
        section: Option<Section>,
    },
    /// Unrecognised leading segment — the dedicated not-found view.
    NotFound,
}

impl Route {
    /// Parse a path like `/zh#work`, `de`, or `/en#contact`.
    ///
    /// An empty path (or bare `/`) falls back to the environment's
    /// language preference via [`Locale::detect`], mirroring the
    /// original redirect from `/` to the visitor's language.
    pub fn parse(path: &str) -> Route {
        let (path_part, anchor) = match path.split_once('#') {
            Some((p, a)) => (p, Some(a)),
            None => (path, None),
        };

        let segment = path_part.trim().trim_matches('/');
        let locale = if segment.is_empty() {
            Locale::detect()
        } else {
            match Locale::from_code(segment) {
                Some(locale) => locale,
                None => return Route::NotFound,
            }
        };

        Route::Page {
            locale,
            section: anchor.and_then(Section::from_anchor),
        }
    }
}
