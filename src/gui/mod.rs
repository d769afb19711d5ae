// SPDX-License-Identifier: MIT

//! Desktop window for the site, built on eframe.
//!
//! One fixed header (brand, section nav, locale switcher, theme
//! toggle, agent-page link) over a scrolling body containing every
//! section. Section reveals and the case-study disclosure animate on
//! egui's built-in animation clock; all animation is cosmetic and owns
//! no state of its own.

mod sections;

use crate::agent::AgentSummary;
use crate::disclosure::Disclosure;
use crate::form::ContactForm;
use crate::i18n::{Catalog, Locale};
use crate::route::{Route, Section};
use crate::theme::{Theme, ThemeMode, RECHECK_INTERVAL};
use anyhow::{anyhow, Result};
use chrono::Utc;
use eframe::{egui, App, Frame, NativeOptions};

/// Which top-level view the window is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Site,
    Agent,
    NotFound,
}

pub struct SiteApp {
    catalog: Catalog,
    locale: Locale,
    view: View,
    pending_section: Option<Section>,
    disclosure: Disclosure,
    form: ContactForm,
    theme: ThemeMode,
    summary: AgentSummary,
    summary_copied: bool,
}

impl SiteApp {
    pub fn new(catalog: Catalog, route: Route, summary: AgentSummary) -> SiteApp {
        let (locale, view, pending_section) = match route {
            Route::Page { locale, section } => (locale, View::Site, section),
            Route::NotFound => (Locale::detect(), View::NotFound, None),
        };
        SiteApp {
            catalog,
            locale,
            view,
            pending_section,
            disclosure: Disclosure::new(),
            form: ContactForm::new(),
            theme: ThemeMode::default(),
            summary,
            summary_copied: false,
        }
    }

    pub fn run(catalog: Catalog, route: Route, summary: AgentSummary) -> Result<()> {
        let options = NativeOptions::default();
        let app = SiteApp::new(catalog, route, summary);
        eframe::run_native(
            "Nils — AI Architect & Builder",
            options,
            Box::new(|_cc| Box::new(app)),
        )
        .map_err(|err| anyhow!("failed to launch the site window: {err}"))?;
        Ok(())
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        match self.theme.current(Utc::now()) {
            Theme::Light => ctx.set_visuals(egui::Visuals::light()),
            Theme::Dark => ctx.set_visuals(egui::Visuals::dark()),
        }
        if self.theme == ThemeMode::Auto {
            // Catch the dawn/dusk flip while the window sits idle.
            ctx.request_repaint_after(RECHECK_INTERVAL);
        }
    }

    fn header(&mut self, ctx: &egui::Context) {
        let t = self.catalog.get(self.locale).clone();
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let brand = egui::Label::new(egui::RichText::new("Nils.").heading().strong())
                    .sense(egui::Sense::click());
                if ui.add(brand).clicked() {
                    self.view = View::Site;
                    self.pending_section = Some(Section::Hero);
                }
                ui.separator();

                let nav = [
                    (Section::Hero, &t.nav.home),
                    (Section::Services, &t.nav.services),
                    (Section::Work, &t.nav.work),
                    (Section::About, &t.nav.about),
                    (Section::Contact, &t.nav.contact),
                ];
                for (section, label) in nav {
                    if ui.button(label.as_str()).clicked() {
                        self.view = View::Site;
                        self.pending_section = Some(section);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(t.agent.title.as_str()).clicked() {
                        self.view = View::Agent;
                        self.summary_copied = false;
                    }

                    let icon = match self.theme.current(Utc::now()) {
                        Theme::Light => "☀",
                        Theme::Dark => "🌙",
                    };
                    if ui.button(icon).clicked() {
                        self.theme.toggle(Utc::now());
                    }

                    for locale in Locale::all().iter().rev() {
                        if ui
                            .selectable_label(self.locale == *locale, locale.switcher_label())
                            .clicked()
                        {
                            self.switch_locale(*locale);
                        }
                    }
                });
            });
        });
    }

    /// Re-resolves every on-screen string by swapping the active table
    /// and resets per-locale derived state, mirroring the original's
    /// language switch updating the document language attribute.
    fn switch_locale(&mut self, locale: Locale) {
        self.locale = locale;
        self.form.errors.clear();
        if self.view == View::NotFound {
            self.view = View::Site;
        }
    }

    fn footer(&mut self, ctx: &egui::Context) {
        let t = self.catalog.get(self.locale).clone();
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.weak(t.footer.copyright.as_str());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(format!("lang: {}", self.locale.document_lang()));
                    ui.weak(t.footer.built_with.as_str());
                });
            });
        });
    }
}

impl App for SiteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.apply_theme(ctx);
        self.header(ctx);
        self.footer(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.view {
            View::Site => self.render_site(ui),
            View::Agent => self.render_agent(ui),
            View::NotFound => self.render_not_found(ui),
        });
    }
}
