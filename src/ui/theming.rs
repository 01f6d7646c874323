// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection.
//!
//! The configured mode may be `System`, resolved once at startup through
//! `dark-light`. The header toggle then flips between the two concrete modes
//! for the rest of the session.

use iced::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// System mode falls back to dark when detection fails.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Replaces `System` with the detected concrete mode.
    #[must_use]
    pub fn resolve(self) -> Self {
        if self.is_dark() {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// The opposite concrete mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// i18n key for the toggle button, naming the mode it switches to.
    #[must_use]
    pub fn toggle_label_key(self) -> &'static str {
        if self.is_dark() {
            "theme-toggle-light"
        } else {
            "theme-toggle-dark"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_concrete_modes() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn system_resolves_to_concrete_mode() {
        let resolved = ThemeMode::System.resolve();
        assert_ne!(resolved, ThemeMode::System);
        assert_ne!(resolved.toggled(), resolved);
    }

    #[test]
    fn theme_matches_mode() {
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
        assert_eq!(ThemeMode::Dark.toggle_label_key(), "theme-toggle-light");
    }
}
