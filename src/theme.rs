// SPDX-License-Identifier: MIT

//! Time-of-day theme schedule.
//!
//! The site follows daylight at its owner's home timezone: light
//! between 06:00 and 18:00 Taipei time, dark otherwise. The schedule
//! is a pure function over a UTC instant, so tests hand it fixed
//! clocks instead of waiting on a timer. While no manual override is
//! active the UI re-evaluates on a fixed interval to catch the
//! dawn/dusk transitions live.

use chrono::{DateTime, Timelike, Utc};
use std::time::Duration;

/// Taipei is UTC+8 year-round (no daylight saving).
pub const SITE_UTC_OFFSET_HOURS: u32 = 8;

/// Local hour at which the light theme starts, inclusive.
pub const DAYTIME_START_HOUR: u32 = 6;

/// Local hour at which the dark theme starts, inclusive.
pub const DAYTIME_END_HOUR: u32 = 18;

/// How often the auto schedule re-evaluates.
pub const RECHECK_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

/// The scheduled theme for a given UTC instant.
pub fn theme_at(now: DateTime<Utc>) -> Theme {
    let site_hour = (now.hour() + SITE_UTC_OFFSET_HOURS) % 24;
    if (DAYTIME_START_HOUR..DAYTIME_END_HOUR).contains(&site_hour) {
        Theme::Light
    } else {
        Theme::Dark
    }
}

/// Theme selection state: follow the schedule until the visitor uses
/// the manual toggle, which pins a theme for the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Auto,
    Manual(Theme),
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Auto
    }
}

impl ThemeMode {
    /// The effective theme for `now`.
    pub fn current(&self, now: DateTime<Utc>) -> Theme {
        match self {
            ThemeMode::Auto => theme_at(now),
            ThemeMode::Manual(theme) => *theme,
        }
    }

    /// The header's sun/moon button: pins the opposite of whatever is
    /// currently showing.
    pub fn toggle(&mut self, now: DateTime<Utc>) {
        let next = match self.current(now) {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        *self = ThemeMode::Manual(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_utc_hour(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 15, hour, minute, 0).unwrap()
    }

    #[test]
    fn boundaries_at_site_local_time() {
        // 22:00 UTC = 06:00 Taipei: first light minute.
        assert_eq!(theme_at(at_utc_hour(21, 59)), Theme::Dark);
        assert_eq!(theme_at(at_utc_hour(22, 0)), Theme::Light);
        // 10:00 UTC = 18:00 Taipei: first dark minute.
        assert_eq!(theme_at(at_utc_hour(9, 59)), Theme::Light);
        assert_eq!(theme_at(at_utc_hour(10, 0)), Theme::Dark);
    }

    #[test]
    fn midday_in_taipei_is_light() {
        // 04:00 UTC = 12:00 Taipei.
        assert_eq!(theme_at(at_utc_hour(4, 0)), Theme::Light);
    }

    #[test]
    fn auto_mode_follows_the_clock() {
        let mode = ThemeMode::Auto;
        assert_eq!(mode.current(at_utc_hour(4, 0)), Theme::Light);
        assert_eq!(mode.current(at_utc_hour(16, 0)), Theme::Dark);
    }

    #[test]
    fn toggle_pins_the_opposite_theme() {
        let noon = at_utc_hour(4, 0);
        let mut mode = ThemeMode::Auto;
        mode.toggle(noon);
        assert_eq!(mode, ThemeMode::Manual(Theme::Dark));
        // Pinned theme no longer follows the clock.
        assert_eq!(mode.current(at_utc_hour(16, 0)), Theme::Dark);
        mode.toggle(noon);
        assert_eq!(mode.current(noon), Theme::Light);
    }
}
