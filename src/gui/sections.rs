// SPDX-License-Identifier: MIT

//! Section rendering for the site window.

use super::{SiteApp, View};
use crate::blocks::ContentBlock;
use crate::form::ContactField;
use crate::route::Section;
use eframe::egui;

/// Vertical slide distance of a section reveal, in points.
const REVEAL_RISE: f32 = 18.0;
/// Seconds for a section reveal, matching the original's fade timing.
const REVEAL_SECONDS: f32 = 0.7;

impl SiteApp {
    pub(super) fn render_site(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.render_hero(ui);
                self.render_proof(ui);
                self.render_demos(ui);
                self.render_services(ui);
                self.render_work(ui);
                self.render_about(ui);
                self.render_contact(ui);
            });
    }

    /// Heading shared by every section: handles the one-shot reveal
    /// animation and pending scroll-to-anchor requests from the nav.
    fn section_heading(&mut self, ui: &mut egui::Ui, section: Section, title: &str) {
        let reveal = ui.ctx().animate_bool_with_time(
            egui::Id::new(("reveal", section.anchor())),
            true,
            REVEAL_SECONDS,
        );
        ui.add_space(24.0 + REVEAL_RISE * (1.0 - reveal));
        let response = ui.heading(egui::RichText::new(title).size(28.0).strong());
        if self.pending_section == Some(section) {
            response.scroll_to_me(Some(egui::Align::TOP));
            self.pending_section = None;
        }
        ui.add_space(8.0);
    }

    fn render_hero(&mut self, ui: &mut egui::Ui) {
        let hero = self.catalog.get(self.locale).hero.clone();
        self.section_heading(ui, Section::Hero, &hero.eyebrow);
        ui.label(egui::RichText::new(hero.headline1.as_str()).size(40.0).strong());
        ui.label(egui::RichText::new(hero.headline2.as_str()).size(40.0).strong());
        ui.add_space(8.0);
        ui.label(&hero.sub);
        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui.button(&hero.cta_book).clicked() {
                self.pending_section = Some(Section::Contact);
            }
            ui.hyperlink_to(&hero.cta_email, "mailto:hello@example.com");
            ui.hyperlink_to(&hero.cta_linkedin, "https://www.linkedin.com/in/nilsliu/");
        });
    }

    fn render_proof(&mut self, ui: &mut egui::Ui) {
        let proof = self.catalog.get(self.locale).proof.clone();
        ui.add_space(24.0);
        ui.separator();
        ui.horizontal_wrapped(|ui| {
            for item in &proof.items {
                ui.weak(format!("• {item}"));
            }
        });
        ui.separator();
    }

    fn render_demos(&mut self, ui: &mut egui::Ui) {
        let demos = self.catalog.get(self.locale).demos.clone();
        ui.add_space(24.0);
        ui.heading(&demos.title);
        ui.weak(&demos.sub);
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            for video in &demos.videos {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.vertical(|ui| {
                        ui.strong(&video.title);
                        ui.hyperlink(&video.url);
                    });
                });
            }
        });
    }

    fn render_services(&mut self, ui: &mut egui::Ui) {
        let services = self.catalog.get(self.locale).services.clone();
        self.section_heading(ui, Section::Services, &services.title);
        ui.weak(&services.sub);
        ui.add_space(8.0);
        ui.columns(services.offers.len().max(1), |columns| {
            for (column, offer) in columns.iter_mut().zip(&services.offers) {
                egui::Frame::group(column.style()).show(column, |ui| {
                    ui.strong(&offer.title);
                    ui.weak(&offer.timeline);
                    ui.add_space(4.0);
                    ui.label(&offer.desc);
                    ui.add_space(4.0);
                    ui.small(&offer.best_for);
                    ui.small(&offer.deliverables);
                });
            }
        });
        ui.add_space(8.0);
        if ui.button(&services.cta).clicked() {
            self.pending_section = Some(Section::Contact);
        }
    }

    fn render_work(&mut self, ui: &mut egui::Ui) {
        let work = self.catalog.get(self.locale).work.clone();
        self.section_heading(ui, Section::Work, &work.title);
        ui.weak(&work.sub);
        ui.add_space(8.0);

        for (i, case) in work.cases.iter().enumerate() {
            let open = self.disclosure.is_expanded(i);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                let header = ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.weak(case.client.to_uppercase());
                        ui.strong(&case.title);
                        ui.horizontal_wrapped(|ui| {
                            for tag in &case.tags {
                                ui.small(format!("[{tag}]"));
                            }
                        });
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        ui.label(if open { "▲" } else { "▼" });
                    });
                });
                if header.response.interact(egui::Sense::click()).clicked() {
                    self.disclosure.toggle(i);
                }

                let openness = ui.ctx().animate_bool(egui::Id::new(("case", i)), open);
                if openness > 0.0 {
                    ui.add_space(6.0 * openness);
                    ui.separator();
                    let facets = [
                        (&work.problem_label, &case.problem),
                        (&work.approach_label, &case.approach),
                        (&work.outcome_label, &case.outcome),
                        (&work.owned_label, &case.owned),
                    ];
                    for (label, text) in facets {
                        ui.small(label.to_uppercase());
                        ui.label(text.as_str());
                        ui.add_space(4.0 * openness);
                    }
                }
            });
            ui.add_space(6.0);
        }
    }

    fn render_about(&mut self, ui: &mut egui::Ui) {
        let about = self.catalog.get(self.locale).about.clone();
        self.section_heading(ui, Section::About, &about.title);
        ui.label(&about.bio);

        ui.add_space(12.0);
        ui.strong(&about.principles_title);
        ui.columns(about.principles.len().max(1), |columns| {
            for (column, principle) in columns.iter_mut().zip(&about.principles) {
                egui::Frame::group(column.style()).show(column, |ui| {
                    ui.strong(&principle.title);
                    ui.label(&principle.desc);
                });
            }
        });

        ui.add_space(12.0);
        ui.strong(&about.skills_title);
        ui.horizontal_wrapped(|ui| {
            for skill in &about.skills {
                ui.small(format!("({skill})"));
            }
        });

        ui.add_space(12.0);
        ui.strong(&about.credibility_title);
        egui::Grid::new("credentials").striped(true).show(ui, |ui| {
            for credential in &about.credibility {
                ui.small(credential.label.to_uppercase());
                ui.label(&credential.value);
                ui.end_row();
            }
        });
    }

    fn render_contact(&mut self, ui: &mut egui::Ui) {
        let contact = self.catalog.get(self.locale).contact.clone();
        self.section_heading(ui, Section::Contact, &contact.title);
        ui.weak(&contact.sub);
        ui.add_space(8.0);

        if self.form.submitted {
            // Success panel replaces the form, as on the original site.
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.label(egui::RichText::new("✓").size(32.0));
                ui.strong(&contact.success);
            });
        } else {
            ui.label(&contact.name);
            ui.text_edit_singleline(&mut self.form.name);
            if let Some(message) = self.form.error(ContactField::Name) {
                let message = message.to_string();
                ui.colored_label(ui.visuals().error_fg_color, message);
            }

            ui.label(&contact.email);
            ui.text_edit_singleline(&mut self.form.email);
            if let Some(message) = self.form.error(ContactField::Email) {
                let message = message.to_string();
                ui.colored_label(ui.visuals().error_fg_color, message);
            }

            ui.label(&contact.message);
            ui.text_edit_multiline(&mut self.form.message);
            if let Some(message) = self.form.error(ContactField::Message) {
                let message = message.to_string();
                ui.colored_label(ui.visuals().error_fg_color, message);
            }

            ui.add_space(6.0);
            if ui.button(&contact.send).clicked() {
                self.form.submit(&contact.validation);
            }
        }

        ui.add_space(12.0);
        ui.weak(&contact.timezone);
        ui.add_space(24.0);
    }

    pub(super) fn render_agent(&mut self, ui: &mut egui::Ui) {
        let agent = self.catalog.get(self.locale).agent.clone();
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if ui.button(format!("← {}", agent.back)).clicked() {
                    self.view = View::Site;
                    return;
                }
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.heading(&agent.title);
                    ui.weak(&agent.tagline);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let label = if self.summary_copied {
                            &agent.copied
                        } else {
                            &agent.copy
                        };
                        if ui.button(label.as_str()).clicked() {
                            let raw = self.summary.raw.clone();
                            ui.output_mut(|out| out.copied_text = raw);
                            self.summary_copied = true;
                        }
                    });
                });
                ui.separator();

                for block in self.summary.blocks.clone() {
                    match block {
                        ContentBlock::Heading { text } => {
                            ui.add_space(12.0);
                            ui.heading(&text);
                        }
                        ContentBlock::Quote { text } => {
                            ui.weak(egui::RichText::new(text.as_str()).italics());
                        }
                        ContentBlock::List(items) => {
                            for item in items {
                                ui.horizontal_wrapped(|ui| {
                                    ui.label("•");
                                    if let Some(emphasized) = &item.emphasized {
                                        ui.strong(emphasized);
                                    }
                                    ui.label(&item.rest);
                                });
                            }
                            ui.add_space(6.0);
                        }
                        ContentBlock::Paragraph { text } => {
                            ui.label(&text);
                            ui.add_space(4.0);
                        }
                    }
                }
            });
    }

    pub(super) fn render_not_found(&mut self, ui: &mut egui::Ui) {
        let not_found = self.catalog.get(self.locale).not_found.clone();
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.label(egui::RichText::new(not_found.title.as_str()).size(64.0).strong());
            ui.label(&not_found.sub);
            ui.add_space(12.0);
            if ui.button(&not_found.back).clicked() {
                self.view = View::Site;
                self.pending_section = Some(Section::Hero);
            }
        });
    }
}
