//! SettingsStore: the canonical in-memory appearance settings.
//!
//! The store owns the [`SettingsRecord`] for as long as the settings screen is
//! open.  The screen mutates it through three calls (`set_theme`,
//! `set_accent_color`, `set_scale`) and persists it with one (`apply`).
//!
//! # What happens on each call
//!
//! ```text
//! set_theme        ──► record.theme        ──► PreviewBinding::update
//! set_accent_color ──► record.primary_color ──► SelectionObserverSet::broadcast_refresh
//! set_scale        ──► record.scale
//! apply            ──► SettingsRepository::save ──► WindowScaler::apply_scale_to_window
//! ```
//!
//! Nothing is written to disk until `apply`.
//!
//! # Errors are logged, not returned
//!
//! Preferences are best-effort.  A file that cannot be read leaves the screen
//! showing defaults; a file that cannot be written leaves the old file on disk.
//! Either way the failure is logged and the screen keeps working.
//!
//! # Architecture
//!
//! The store depends only on the [`SettingsRepository`] and [`WindowScaler`]
//! traits.  The file-backed repository and the real window live in the
//! infrastructure layer and are injected at construction time.

use std::path::PathBuf;
use std::rc::Rc;

use appearance_core::domain::scale::is_valid_scale;
use appearance_core::{AccentColor, CodecError, PreviewVariant, SettingsRecord, Theme};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::application::preview::PreviewBinding;
use crate::application::selection::{
    AccentSource, PaletteSwatch, SelectionObserver, SelectionObserverSet,
};

/// Error type for settings persistence.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings content could not be encoded or decoded.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Error type for settings mutations that take user-supplied values.
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("invalid scale {0}: must be 0 (platform default) or a finite number greater than 0")]
    InvalidScale(f32),
}

/// Persistence port for the settings record.
///
/// The production implementation reads and writes a JSON file; tests use
/// mocks or the in-memory repository.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsRepository {
    /// Loads the stored record.  A record that was never saved is not an
    /// error: implementations return [`SettingsRecord::default()`].
    fn load(&self) -> Result<SettingsRecord, StorageError>;

    /// Replaces the stored record with `record`.
    fn save(&self, record: &SettingsRecord) -> Result<(), StorageError>;
}

/// Host hook that re-lays out the active window at a new scale.
#[cfg_attr(test, mockall::automock)]
pub trait WindowScaler {
    /// `scale` is the stored value; `0.0` means "platform default".
    fn apply_scale_to_window(&self, scale: f32);
}

/// The appearance settings store.
pub struct SettingsStore {
    record: SettingsRecord,
    repository: Rc<dyn SettingsRepository>,
    window: Rc<dyn WindowScaler>,
    observers: SelectionObserverSet,
    preview: PreviewBinding,
}

impl SettingsStore {
    /// Creates a store and loads the persisted record.
    ///
    /// Never fails: if loading reports an error it is logged and the store
    /// starts from [`SettingsRecord::default()`].
    pub fn new(repository: Rc<dyn SettingsRepository>, window: Rc<dyn WindowScaler>) -> Self {
        let record = match repository.load() {
            Ok(record) => {
                info!(
                    theme = record.theme.as_str(),
                    primary_color = record.primary_color.map(AccentColor::name).unwrap_or(""),
                    scale = record.scale,
                    "appearance settings loaded"
                );
                record
            }
            Err(e) => {
                error!("settings load error, using defaults: {e}");
                SettingsRecord::default()
            }
        };

        Self {
            preview: PreviewBinding::new(record.theme),
            record,
            repository,
            window,
            observers: SelectionObserverSet::new(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The record exactly as it would be persisted.
    pub fn record(&self) -> &SettingsRecord {
        &self.record
    }

    pub fn current_theme(&self) -> Theme {
        self.record.theme
    }

    /// The accent to highlight.  Reports the first palette colour while
    /// [`SettingsRecord::primary_color`] is still unset.
    pub fn current_accent_color(&self) -> AccentColor {
        self.record.accent_or_default()
    }

    /// The stored scale; `0.0` means "platform default".
    pub fn current_scale(&self) -> f32 {
        self.record.scale
    }

    pub fn preview(&self) -> PreviewVariant {
        self.preview.current()
    }

    pub fn observers(&self) -> &SelectionObserverSet {
        &self.observers
    }

    // ── Mutations ─────────────────────────────────────────────────────────────

    /// Selects a theme and recomputes the preview.  Does not persist.
    pub fn set_theme(&mut self, theme: Theme) {
        debug!(theme = theme.as_str(), "theme selected");
        self.record.theme = theme;
        self.preview.update(theme);
    }

    /// Selects a theme by its picker label.
    ///
    /// `"system default"` is normalised to [`Theme::System`].
    ///
    /// # Panics
    ///
    /// Panics if `label` is not one of the labels produced by
    /// [`Theme::label`].  The picker only offers those labels, so anything
    /// else is a bug in the caller.
    pub fn set_theme_label(&mut self, label: &str) {
        match Theme::from_label(label) {
            Some(theme) => self.set_theme(theme),
            None => panic!("unrecognised theme label {label:?}"),
        }
    }

    /// Selects an accent colour and refreshes every palette observer so both
    /// the old and the new swatch redraw.  Does not persist.
    pub fn set_accent_color(&mut self, color: AccentColor) {
        debug!(primary_color = color.name(), "accent colour selected");
        self.record.primary_color = Some(color);
        self.observers.broadcast_refresh(&self.record);
    }

    /// Sets the window scale.  `0.0` resets to the platform default.
    /// Does not persist.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidScale`] for negative, NaN or infinite
    /// values; the stored scale is left unchanged.
    pub fn set_scale(&mut self, scale: f32) -> Result<(), SettingsError> {
        if !is_valid_scale(scale) {
            return Err(SettingsError::InvalidScale(scale));
        }
        debug!(scale, "scale selected");
        self.record.scale = scale;
        Ok(())
    }

    /// Persists the current record, then applies its scale to the window.
    ///
    /// The scale is applied whether or not the save succeeded, and only after
    /// the save attempt returns.  A failed save is logged; the in-memory
    /// record is kept as is.
    ///
    /// Returns `true` when the record was saved.
    pub fn apply(&self) -> bool {
        let saved = match self.repository.save(&self.record) {
            Ok(()) => {
                info!("appearance settings saved");
                true
            }
            Err(e) => {
                error!("failed on saving settings: {e}");
                false
            }
        };

        self.window.apply_scale_to_window(self.record.scale);
        saved
    }

    // ── Observers ─────────────────────────────────────────────────────────────

    /// Registers an observer and brings it up to date immediately.
    pub fn register_observer(&mut self, mut observer: Box<dyn SelectionObserver>) {
        observer.refresh(&self.record);
        self.observers.register(observer);
    }

    /// Registers one [`PaletteSwatch`] per palette entry, in display order.
    pub fn register_palette_swatches(&mut self) {
        for swatch in PaletteSwatch::for_palette() {
            self.register_observer(Box::new(swatch));
        }
    }

    /// Installs the hook called whenever the preview is recomputed.
    pub fn set_preview_listener(&mut self, listener: impl FnMut(PreviewVariant) + 'static) {
        self.preview.set_listener(listener);
    }
}

impl AccentSource for SettingsStore {
    fn current_accent_color(&self) -> AccentColor {
        SettingsStore::current_accent_color(self)
    }
}

impl std::fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore")
            .field("record", &self.record)
            .field("observers", &self.observers)
            .field("preview", &self.preview)
            .finish_non_exhaustive()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
