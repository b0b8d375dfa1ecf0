//! Theme selection.
//!
//! On disk the theme is stored as `"dark"`, `"light"` or `""`.  The empty
//! string means "follow the operating system"; in memory that is the explicit
//! [`Theme::System`] variant so it can never be confused with an unset value
//! of some other field.
//!
//! The theme picker shows [`Theme::System`] as `"system default"`.  That label
//! is display-only and is never written to the settings file.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Picker label for [`Theme::System`].
pub const SYSTEM_THEME_LABEL: &str = "system default";

/// Error returned when a string does not name a known theme.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown theme name: {0:?}")]
pub struct ParseThemeError(pub String);

/// The active UI theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Theme {
    #[serde(rename = "dark")]
    Dark,
    #[serde(rename = "light")]
    Light,
    /// Follow the platform's light/dark setting.  Persisted as `""`.
    #[default]
    #[serde(rename = "")]
    System,
}

impl Theme {
    /// The string stored in the settings file.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::System => "",
        }
    }

    /// The label shown in the theme picker.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::System => SYSTEM_THEME_LABEL,
        }
    }

    /// Resolves a picker label, normalising `"system default"` to
    /// [`Theme::System`].
    pub fn from_label(label: &str) -> Option<Theme> {
        match label {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            SYSTEM_THEME_LABEL | "" => Some(Theme::System),
            _ => None,
        }
    }

    /// Whether the current platform can detect the system theme.
    ///
    /// Only macOS and Windows report a system-wide light/dark preference that
    /// the host framework follows.
    pub const fn supports_system_theme() -> bool {
        cfg!(any(target_os = "macos", target_os = "windows"))
    }

    /// Themes offered by the picker on this platform, in display order.
    pub fn choices() -> &'static [Theme] {
        if Self::supports_system_theme() {
            &[Theme::Dark, Theme::Light, Theme::System]
        } else {
            &[Theme::Dark, Theme::Light]
        }
    }

    /// The picker entry to preselect for this stored theme.
    ///
    /// Returns `None` for [`Theme::System`] on platforms without system-theme
    /// detection: the picker then starts with nothing selected.
    pub fn initial_choice(self) -> Option<Theme> {
        Self::choices().iter().copied().find(|t| *t == self)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    /// Accepts the stored names, the picker labels, and `"system"` as a
    /// shorthand for the system default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("system") {
            return Ok(Theme::System);
        }
        Theme::from_label(&trimmed.to_ascii_lowercase())
            .ok_or_else(|| ParseThemeError(s.to_string()))
    }
}
