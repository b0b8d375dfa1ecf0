//! Command bridge: exposes settings-store operations to the presentation layer.
//!
//! The presentation layer (a GUI toolkit, or the bundled command-line host)
//! works with strings: picker labels, palette names, text typed into a scale
//! field.  The settings store works with enums and validated numbers.  This
//! module is the edge where one becomes the other.
//!
//! # Data Transfer Objects (DTOs)
//!
//! [`AppearanceDto`] is a flat, serialisable snapshot of everything the
//! settings screen draws.  [`AppearanceUpdateDto`] carries the user's pending
//! changes.  Both derive `Serialize`/`Deserialize` so a web or scripting front
//! end can exchange them as JSON.
//!
//! # `CommandResult<T>` wrapper
//!
//! Every command returns `CommandResult<T>` rather than `Result<T, E>`, so
//! every response has the same shape:
//! `{ success: bool, data: T | null, error: string | null }`.

use appearance_core::{AccentColor, ScalePreset, Theme, SCALE_PRESETS};
use serde::{Deserialize, Serialize};

use crate::application::settings_store::SettingsStore;
use crate::infrastructure::window::effective_scale;

// ── Data Transfer Objects ─────────────────────────────────────────────────────

/// DTO for one accent swatch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwatchDto {
    pub name: String,
    /// `#rrggbbaa`
    pub rgba: String,
    pub selected: bool,
}

/// DTO snapshot of the appearance settings screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceDto {
    /// Picker label of the current theme.
    pub theme: String,
    /// Picker labels offered on this platform.
    pub theme_choices: Vec<String>,
    /// Label preselected in the picker, if any.
    pub theme_selection: Option<String>,
    /// Accent to highlight (the default accent when none is stored).
    pub accent: String,
    /// `true` while no accent has been stored.
    pub accent_unset: bool,
    pub palette: Vec<SwatchDto>,
    /// Stored scale; `0` means platform default.
    pub scale: f32,
    /// Scale the window will actually use.
    pub effective_scale: f32,
    /// Name of the preset matching the stored scale, if any.
    pub scale_preset: Option<String>,
    pub scale_presets: Vec<String>,
    /// File name of the preview image to show.
    pub preview_image: String,
}

/// DTO with the pending changes from the UI.  `None` leaves a field as is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppearanceUpdateDto {
    pub theme: Option<String>,
    pub accent: Option<String>,
    pub scale: Option<String>,
}

/// Unified response wrapper used by bridge commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResult<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

// ── Parsing helpers ───────────────────────────────────────────────────────────

/// Parses a scale typed by the user: a preset name (`"large"`) or a number.
///
/// # Errors
///
/// Returns a message when the text is neither a preset nor a number.  Range
/// checking is left to [`SettingsStore::set_scale`].
pub fn parse_scale(raw: &str) -> Result<f32, String> {
    if let Some(preset) = ScalePreset::find(raw) {
        return Ok(preset.scale);
    }
    raw.trim().parse::<f32>().map_err(|_| {
        format!(
            "invalid scale {raw:?}: expected a number or one of {}",
            preset_names().join(", ")
        )
    })
}

fn preset_names() -> Vec<String> {
    SCALE_PRESETS.iter().map(|p| p.name.to_string()).collect()
}

// ── Commands ──────────────────────────────────────────────────────────────────

/// Returns a snapshot of the current appearance settings.
///
/// The palette lists the store's registered observers; call
/// [`SettingsStore::register_palette_swatches`] when building the screen.
pub fn get_appearance(store: &SettingsStore) -> CommandResult<AppearanceDto> {
    CommandResult::ok(snapshot(store))
}

/// Applies pending changes to the store without persisting them.
///
/// All fields are validated before any is applied, so a bad value leaves the
/// store untouched.
pub fn update_appearance(
    store: &mut SettingsStore,
    update: AppearanceUpdateDto,
) -> CommandResult<AppearanceDto> {
    let theme = match update.theme.as_deref().map(str::parse::<Theme>).transpose() {
        Ok(t) => t,
        Err(e) => return CommandResult::err(e.to_string()),
    };
    let accent = match update.accent.as_deref().map(str::parse::<AccentColor>).transpose() {
        Ok(a) => a,
        Err(e) => return CommandResult::err(e.to_string()),
    };
    let scale = match update.scale.as_deref().map(parse_scale).transpose() {
        Ok(s) => s,
        Err(e) => return CommandResult::err(e),
    };

    if let Some(scale) = scale {
        if let Err(e) = store.set_scale(scale) {
            return CommandResult::err(e.to_string());
        }
    }
    if let Some(theme) = theme {
        store.set_theme(theme);
    }
    if let Some(accent) = accent {
        store.set_accent_color(accent);
    }

    CommandResult::ok(snapshot(store))
}

/// Persists the settings and applies the scale to the window.
///
/// Reports an error when the save failed; the scale is applied regardless.
pub fn apply_appearance(store: &SettingsStore) -> CommandResult<()> {
    if store.apply() {
        CommandResult::ok(())
    } else {
        CommandResult::err("settings could not be saved; the change lasts for this session only")
    }
}

fn snapshot(store: &SettingsStore) -> AppearanceDto {
    let record = store.record();
    AppearanceDto {
        theme: store.current_theme().label().to_string(),
        theme_choices: Theme::choices().iter().map(|t| t.label().to_string()).collect(),
        theme_selection: store
            .current_theme()
            .initial_choice()
            .map(|t| t.label().to_string()),
        accent: store.current_accent_color().name().to_string(),
        accent_unset: record.primary_color.is_none(),
        palette: store
            .observers()
            .iter()
            .map(|o| SwatchDto {
                name: o.color().name().to_string(),
                rgba: o.color().rgba().to_string(),
                selected: o.is_selected(),
            })
            .collect(),
        scale: record.scale,
        effective_scale: effective_scale(record.scale),
        scale_preset: ScalePreset::matching(record.scale).map(|p| p.name.to_string()),
        scale_presets: preset_names(),
        preview_image: store.preview().resource_name().to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use appearance_core::SettingsRecord;

    use crate::infrastructure::storage::memory::InMemorySettingsRepository;
    use crate::infrastructure::window::mock::RecordingWindowScaler;

    fn make_store(record: SettingsRecord) -> (SettingsStore, Rc<InMemorySettingsRepository>) {
        let repo = Rc::new(InMemorySettingsRepository::with_record(record));
        let mut store = SettingsStore::new(repo.clone(), Rc::new(RecordingWindowScaler::new()));
        store.register_palette_swatches();
        (store, repo)
    }

    #[test]
    fn test_parse_scale_accepts_presets_and_numbers() {
        assert_eq!(parse_scale("Huge"), Ok(1.8));
        assert_eq!(parse_scale("tiny"), Ok(0.5));
        assert_eq!(parse_scale(" 1.25 "), Ok(1.25));
        assert!(parse_scale("enormous").is_err());
    }

    #[test]
    fn test_get_appearance_reports_defaults() {
        // Arrange
        let (store, _repo) = make_store(SettingsRecord::default());

        // Act
        let dto = get_appearance(&store).data.expect("data");

        // Assert
        assert_eq!(dto.theme, "system default");
        assert_eq!(dto.accent, "blue");
        assert!(dto.accent_unset);
        assert_eq!(dto.palette.len(), 6);
        assert_eq!(dto.palette.iter().filter(|s| s.selected).count(), 1);
        assert!(dto.palette[0].selected);
        assert_eq!(dto.palette[0].rgba, "#2196f3ff");
        assert_eq!(dto.scale, 0.0);
        assert_eq!(dto.scale_preset, None);
        assert_eq!(dto.preview_image, "theme_dark_preview.png");
    }

    #[test]
    fn test_update_appearance_applies_all_fields() {
        let (mut store, repo) = make_store(SettingsRecord::default());

        let result = update_appearance(
            &mut store,
            AppearanceUpdateDto {
                theme: Some("light".to_string()),
                accent: Some("red".to_string()),
                scale: Some("large".to_string()),
            },
        );

        assert!(result.success, "error: {:?}", result.error);
        let dto = result.data.unwrap();
        assert_eq!(dto.theme, "light");
        assert_eq!(dto.accent, "red");
        assert!(!dto.accent_unset);
        assert_eq!(dto.scale_preset.as_deref(), Some("Large"));
        assert_eq!(dto.preview_image, "theme_light_preview.png");
        let selected: Vec<_> = dto
            .palette
            .iter()
            .filter(|s| s.selected)
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(selected, vec!["red"]);
        assert_eq!(repo.save_calls(), 0, "update must not persist");
    }

    #[test]
    fn test_update_appearance_rejects_bad_value_without_partial_apply() {
        let (mut store, _repo) = make_store(SettingsRecord::default());

        let result = update_appearance(
            &mut store,
            AppearanceUpdateDto {
                theme: Some("light".to_string()),
                accent: Some("purple".to_string()),
                scale: None,
            },
        );

        assert!(!result.success);
        assert!(result.error.unwrap().contains("purple"));
        assert_eq!(store.current_theme(), Theme::System);
    }

    #[test]
    fn test_update_appearance_rejects_negative_scale() {
        let (mut store, _repo) = make_store(SettingsRecord::default());

        let result = update_appearance(
            &mut store,
            AppearanceUpdateDto {
                scale: Some("-2".to_string()),
                ..AppearanceUpdateDto::default()
            },
        );

        assert!(!result.success);
        assert_eq!(store.current_scale(), 0.0);
    }

    #[test]
    fn test_apply_appearance_reports_save_failure() {
        let (store, repo) = make_store(SettingsRecord::default());
        repo.fail_saves(true);

        let result = apply_appearance(&store);

        assert!(!result.success);
        assert_eq!(repo.save_calls(), 1);
    }

    #[test]
    fn test_apply_appearance_persists_record() {
        let (mut store, repo) = make_store(SettingsRecord::default());
        store.set_accent_color(AccentColor::Green);

        let result = apply_appearance(&store);

        assert!(result.success);
        assert_eq!(repo.stored().unwrap().primary_color, Some(AccentColor::Green));
    }

    #[test]
    fn test_command_result_serialises_uniform_shape() {
        let json = serde_json::to_value(CommandResult::<()>::err("boom")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "boom");
        assert!(json["data"].is_null());
    }
}
