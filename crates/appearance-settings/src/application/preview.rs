//! Preview binding: the preview image shown next to the theme picker.

use appearance_core::{PreviewVariant, Theme};

type PreviewListener = Box<dyn FnMut(PreviewVariant)>;

/// Holds the preview variant derived from the current theme.
///
/// The variant is recomputed on every theme change and the listener (if
/// any) is told to redraw, even when the variant did not change: picking
/// "dark" while "system default" was selected still refreshes the image.
#[derive(Default)]
pub struct PreviewBinding {
    variant: PreviewVariant,
    listener: Option<PreviewListener>,
}

impl PreviewBinding {
    pub fn new(theme: Theme) -> Self {
        Self {
            variant: PreviewVariant::for_theme(theme),
            listener: None,
        }
    }

    pub fn current(&self) -> PreviewVariant {
        self.variant
    }

    /// Recomputes the variant for `theme` and notifies the listener.
    pub fn update(&mut self, theme: Theme) -> PreviewVariant {
        self.variant = PreviewVariant::for_theme(theme);
        if let Some(listener) = self.listener.as_mut() {
            listener(self.variant);
        }
        self.variant
    }

    /// Installs the redraw hook, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl FnMut(PreviewVariant) + 'static) {
        self.listener = Some(Box::new(listener));
    }
}

impl std::fmt::Debug for PreviewBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewBinding")
            .field("variant", &self.variant)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
