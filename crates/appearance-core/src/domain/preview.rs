//! Which canned preview image the settings screen shows.
//!
//! The preview is a pure function of the theme: the light image for the light
//! theme, the dark image for everything else.  The system theme also maps to
//! the dark image, because the screen cannot know what the platform will pick.

use crate::domain::theme::Theme;

/// One of the two preview images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PreviewVariant {
    #[default]
    Dark,
    Light,
}

impl PreviewVariant {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => PreviewVariant::Light,
            Theme::Dark | Theme::System => PreviewVariant::Dark,
        }
    }

    /// Total mapping from a raw theme name.
    ///
    /// `"light"` selects [`PreviewVariant::Light`]; every other string,
    /// including `""`, `"system default"` and names that are not themes at
    /// all, selects [`PreviewVariant::Dark`].
    pub fn for_theme_name(name: &str) -> Self {
        match Theme::from_label(name) {
            Some(theme) => Self::for_theme(theme),
            None => PreviewVariant::Dark,
        }
    }

    /// File name of the bundled preview image.
    pub fn resource_name(self) -> &'static str {
        match self {
            PreviewVariant::Dark => "theme_dark_preview.png",
            PreviewVariant::Light => "theme_light_preview.png",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_theme_selects_light_preview() {
        assert_eq!(PreviewVariant::for_theme(Theme::Light), PreviewVariant::Light);
        assert_eq!(PreviewVariant::for_theme_name("light"), PreviewVariant::Light);
    }

    #[test]
    fn test_every_other_theme_name_selects_dark_preview() {
        for name in ["dark", "", "system default", "solarized", "LIGHT"] {
            assert_eq!(
                PreviewVariant::for_theme_name(name),
                PreviewVariant::Dark,
                "{name:?} must map to the dark preview"
            );
        }
    }

    #[test]
    fn test_system_theme_selects_dark_preview() {
        assert_eq!(PreviewVariant::for_theme(Theme::System), PreviewVariant::Dark);
    }

    #[test]
    fn test_resource_names_differ_per_variant() {
        assert_ne!(
            PreviewVariant::Dark.resource_name(),
            PreviewVariant::Light.resource_name()
        );
    }
}
