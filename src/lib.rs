// SPDX-License-Identifier: MIT

//! folio — localized single-page portfolio site.
//!
//! The whole site is data plus projection: three embedded locale
//! documents decode into typed section records at startup, and every
//! surface renders from the currently active table.
//!
//! SURFACES:
//! 1. **gui**: the primary eframe window with animated section
//!    reveals, the case-study disclosure, and the contact form.
//! 2. **tui**: a raw-mode terminal browser over the same section
//!    projection, handy for proof-reading translations.
//! 3. **render/agent subcommands**: plain-text output for scripts
//!    and crawlers.

pub mod agent;
pub mod blocks;
pub mod disclosure;
pub mod form;
pub mod gui;
pub mod i18n;
pub mod render;
pub mod route;
pub mod theme;
pub mod tui;
