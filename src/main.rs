// SPDX-License-Identifier: MIT

//! folio: localized single-page portfolio site
//!
//! Launches the site as a desktop window by default; also ships a
//! terminal browser and plain-text render subcommands, plus a `check`
//! command that validates the embedded locale documents.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::*;
use folio::agent::AgentSummary;
use folio::blocks::ContentBlock;
use folio::gui::SiteApp;
use folio::i18n::{Catalog, Locale};
use folio::render::{page_views, section_view};
use folio::route::Route;
use folio::tui::SiteTui;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version = "1.0.2")]
#[command(about = "Localized single-page portfolio site")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the site window (default when no subcommand is given)
    Show {
        /// Site path to open, e.g. "/zh#work"
        #[arg(short, long)]
        route: Option<String>,

        /// Locale override, ignored when --route carries one
        #[arg(short, long, value_enum)]
        locale: Option<LocaleArg>,

        /// Read the agent summary from this file instead of the embedded copy
        #[arg(short, long)]
        asset: Option<PathBuf>,
    },

    /// Browse the site content in the terminal
    Tui {
        /// Starting locale
        #[arg(short, long, value_enum)]
        locale: Option<LocaleArg>,
    },

    /// Print site sections as plain text
    Render {
        /// Locale to render
        #[arg(short, long, value_enum)]
        locale: Option<LocaleArg>,

        /// Single section id (hero, proof, demos, services, work, about, contact)
        #[arg(short, long)]
        section: Option<String>,
    },

    /// Parse and print the agent summary blocks
    Agent {
        /// Read the summary from this file instead of the embedded copy
        #[arg(short, long)]
        asset: Option<PathBuf>,
    },

    /// Validate that all locale documents decode and agree
    Check,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LocaleArg {
    En,
    Zh,
    De,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::En => Locale::En,
            LocaleArg::Zh => Locale::Zh,
            LocaleArg::De => Locale::De,
        }
    }
}

fn resolve_route(route: Option<&str>, locale: Option<LocaleArg>) -> Route {
    match (route, locale) {
        (Some(path), _) => Route::parse(path),
        (None, Some(arg)) => Route::Page {
            locale: arg.into(),
            section: None,
        },
        (None, None) => Route::Page {
            locale: Locale::detect(),
            section: None,
        },
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            let catalog = Catalog::load()?;
            SiteApp::run(catalog, resolve_route(None, None), AgentSummary::load(None))?;
        }

        Some(Commands::Show {
            route,
            locale,
            asset,
        }) => {
            let catalog = Catalog::load()?;
            let route = resolve_route(route.as_deref(), locale);
            let summary = AgentSummary::load(asset.as_deref());
            SiteApp::run(catalog, route, summary)?;
        }

        Some(Commands::Tui { locale }) => {
            let catalog = Catalog::load()?;
            let locale = locale.map(Locale::from).unwrap_or_else(Locale::detect);
            SiteTui::run(&catalog, locale)?;
        }

        Some(Commands::Render { locale, section }) => {
            let catalog = Catalog::load()?;
            let locale = locale.map(Locale::from).unwrap_or_else(Locale::detect);
            let table = catalog.get(locale);

            let views = match section.as_deref() {
                Some(id) => match section_view(table, id) {
                    Some(view) => vec![view],
                    None => bail!(
                        "unknown section '{}'; available: hero, proof, demos, services, work, about, contact",
                        id
                    ),
                },
                None => page_views(table),
            };

            for view in views {
                println!("{} {}", view.title.bold(), view.summary.dimmed());
                for detail in &view.details {
                    println!("  {}", detail);
                }
                println!();
            }
        }

        Some(Commands::Agent { asset }) => {
            let summary = AgentSummary::load(asset.as_deref());
            for block in &summary.blocks {
                match block {
                    ContentBlock::Heading { text } => println!("{}", text.bold().cyan()),
                    ContentBlock::Quote { text } => println!("{}", text.italic().dimmed()),
                    ContentBlock::List(items) => {
                        for item in items {
                            match &item.emphasized {
                                Some(label) => {
                                    println!("  • {}{}", label.bold(), item.rest)
                                }
                                None => println!("  • {}", item.rest),
                            }
                        }
                    }
                    ContentBlock::Paragraph { text } => println!("{}", text),
                }
            }
        }

        Some(Commands::Check) => {
            let catalog = Catalog::load()?;
            for locale in Locale::all() {
                let t = catalog.get(*locale);
                println!(
                    "{} {}: {} cases, {} offers, {} principles, {} skills",
                    "ok".green().bold(),
                    locale.code(),
                    t.work.cases.len(),
                    t.services.offers.len(),
                    t.about.principles.len(),
                    t.about.skills.len()
                );
            }
            let en = catalog.get(Locale::En);
            for locale in [Locale::Zh, Locale::De] {
                let t = catalog.get(locale);
                if t.work.cases.len() != en.work.cases.len()
                    || t.services.offers.len() != en.services.offers.len()
                    || t.about.principles.len() != en.about.principles.len()
                {
                    bail!("locale '{}' disagrees with 'en' on collection sizes", locale);
                }
            }
            println!("{}", "all locale documents agree".green());
        }
    }

    Ok(())
}
