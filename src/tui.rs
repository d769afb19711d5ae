// SPDX-License-Identifier: MIT

//! Lightweight terminal browser for the site content.
//!
//! Same projection as the `render` subcommand, but interactive:
//! sections collapse to a title and summary line, and the locale can
//! be cycled live to proof-read translations side by side.

use crate::i18n::{Catalog, Locale};
use crate::render::{page_views, SectionView};
use anyhow::Result;
use colored::*;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{self, ClearType},
};
use std::io::{stdout, Write};
use std::time::Duration;

pub struct SiteTui;

impl SiteTui {
    pub fn run(catalog: &Catalog, locale: Locale) -> Result<()> {
        terminal::enable_raw_mode()?;
        let result = Self::run_inner(catalog, locale);
        terminal::disable_raw_mode()?;
        result
    }

    fn run_inner(catalog: &Catalog, mut locale: Locale) -> Result<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        let mut selected = 0;
        let mut expanded: Vec<bool> = Vec::new();

        loop {
            let sections = page_views(catalog.get(locale));
            if expanded.len() != sections.len() {
                expanded = vec![false; sections.len()];
                selected = selected.min(sections.len().saturating_sub(1));
            }

            Self::render(&mut stdout, &sections, locale, selected, &expanded)?;

            if event::poll(Duration::from_millis(200))? {
                if let Event::Key(KeyEvent { code, .. }) = event::read()? {
                    match code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Tab | KeyCode::Char('j') | KeyCode::Down => {
                            selected = (selected + 1) % sections.len();
                        }
                        KeyCode::BackTab | KeyCode::Char('k') | KeyCode::Up => {
                            selected = (selected + sections.len() - 1) % sections.len();
                        }
                        KeyCode::Char(' ') | KeyCode::Enter => {
                            if let Some(flag) = expanded.get_mut(selected) {
                                *flag = !*flag;
                            }
                        }
                        KeyCode::Char('l') => {
                            locale = next_locale(locale);
                        }
                        _ => {}
                    }
                }
            }
        }

        Ok(())
    }

    fn render(
        stdout: &mut impl Write,
        sections: &[SectionView],
        locale: Locale,
        selected: usize,
        expanded: &[bool],
    ) -> Result<()> {
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        writeln!(
            stdout,
            "{} {}",
            "NILS — AI ARCHITECT & BUILDER".bold().cyan(),
            format!("[{}]", locale.document_lang()).dimmed()
        )?;
        writeln!(stdout)?;

        for (idx, section) in sections.iter().enumerate() {
            let indicator = if idx == selected {
                "➤".green()
            } else {
                "  ".normal()
            };
            writeln!(
                stdout,
                "{} {} {}",
                indicator,
                section.title.bold(),
                section.summary.dimmed()
            )?;
            if expanded.get(idx).copied().unwrap_or(false) {
                for detail in &section.details {
                    writeln!(stdout, "    {}", detail)?;
                }
            }
            writeln!(stdout)?;
        }

        writeln!(
            stdout,
            "{}",
            "Controls: [Tab/j] Next, [Shift+Tab/k] Prev, [Space] Toggle, [l] Locale, [q] Quit"
                .dimmed()
        )?;
        stdout.flush()?;
        Ok(())
    }
}

fn next_locale(locale: Locale) -> Locale {
    let all = Locale::all();
    let position = all.iter().position(|l| *l == locale).unwrap_or(0);
    all[(position + 1) % all.len()]
}
