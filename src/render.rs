// SPDX-License-Identifier: MIT

//! Section content renderer.
//!
//! Projects the active translation table into plain display structures:
//! one `(title, summary, detail lines)` group per named section of the
//! page. The TUI browses these groups, the `render` subcommand prints
//! them, and the locale-switch tests compare them — every visible
//! string flows through here, so switching the table switches all of
//! them at once.

use crate::i18n::Translations;

/// One named section projected to displayable lines.
#[derive(Debug, Clone)]
pub struct SectionView {
    /// Stable section identifier (`hero`, `proof`, `demos`, ...).
    pub id: &'static str,
    pub title: String,
    pub summary: String,
    pub details: Vec<String>,
}

/// All sections of the page, in display order.
pub fn page_views(t: &Translations) -> Vec<SectionView> {
    vec![
        hero_view(t),
        proof_view(t),
        demos_view(t),
        services_view(t),
        work_view(t),
        about_view(t),
        contact_view(t),
    ]
}

/// The view for one section id, if it exists.
pub fn section_view(t: &Translations, id: &str) -> Option<SectionView> {
    page_views(t).into_iter().find(|view| view.id == id)
}

fn hero_view(t: &Translations) -> SectionView {
    let hero = &t.hero;
    SectionView {
        id: "hero",
        title: hero.eyebrow.clone(),
        summary: format!("{} {}", hero.headline1, hero.headline2),
        details: vec![
            hero.sub.clone(),
            format!("→ {}", hero.cta_book),
            format!("→ {}", hero.cta_email),
            format!("→ {}", hero.cta_linkedin),
        ],
    }
}

fn proof_view(t: &Translations) -> SectionView {
    SectionView {
        id: "proof",
        title: t.proof.title.clone(),
        summary: t.proof.items.first().cloned().unwrap_or_default(),
        details: t.proof.items.iter().map(|item| format!("• {item}")).collect(),
    }
}

fn demos_view(t: &Translations) -> SectionView {
    let demos = &t.demos;
    SectionView {
        id: "demos",
        title: demos.title.clone(),
        summary: demos.sub.clone(),
        details: demos
            .videos
            .iter()
            .map(|video| format!("▶ {} — {}", video.title, video.url))
            .collect(),
    }
}

fn services_view(t: &Translations) -> SectionView {
    let services = &t.services;
    let mut details = Vec::new();
    for offer in &services.offers {
        details.push(format!("{} ({})", offer.title, offer.timeline));
        details.push(format!("  {}", offer.desc));
        details.push(format!("  {}", offer.best_for));
        details.push(format!("  {}", offer.deliverables));
    }
    details.push(format!("→ {}", services.cta));
    SectionView {
        id: "services",
        title: services.title.clone(),
        summary: services.sub.clone(),
        details,
    }
}

fn work_view(t: &Translations) -> SectionView {
    let work = &t.work;
    let mut details = Vec::new();
    for case in &work.cases {
        details.push(format!("{} — {}", case.client, case.title));
        details.push(format!("  [{}]", case.tags.join(", ")));
        details.push(format!("  {}: {}", work.problem_label, case.problem));
        details.push(format!("  {}: {}", work.approach_label, case.approach));
        details.push(format!("  {}: {}", work.outcome_label, case.outcome));
        details.push(format!("  {}: {}", work.owned_label, case.owned));
    }
    SectionView {
        id: "work",
        title: work.title.clone(),
        summary: work.sub.clone(),
        details,
    }
}

fn about_view(t: &Translations) -> SectionView {
    let about = &t.about;
    let mut details = vec![about.bio.clone(), about.principles_title.clone()];
    for principle in &about.principles {
        details.push(format!("  {} — {}", principle.title, principle.desc));
    }
    details.push(about.skills_title.clone());
    details.push(format!("  {}", about.skills.join(" · ")));
    details.push(about.credibility_title.clone());
    for credential in &about.credibility {
        details.push(format!("  {}: {}", credential.label, credential.value));
    }
    SectionView {
        id: "about",
        title: about.title.clone(),
        summary: about.bio.chars().take(60).collect(),
        details,
    }
}

fn contact_view(t: &Translations) -> SectionView {
    let contact = &t.contact;
    SectionView {
        id: "contact",
        title: contact.title.clone(),
        summary: contact.sub.clone(),
        details: vec![
            format!("{} / {} / {}", contact.name, contact.email, contact.message),
            contact.timezone.clone(),
            t.footer.copyright.clone(),
            t.footer.built_with.clone(),
        ],
    }
}
