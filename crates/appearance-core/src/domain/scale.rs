//! Window scale factor.
//!
//! A stored scale of `0.0` means "let the environment decide".  Any other
//! stored value must be a finite number greater than zero.
//!
//! The settings screen offers five named presets.  They are shortcuts only:
//! the store accepts any positive scale, and a stored scale that matches no
//! preset simply highlights none of them.

/// Stored scale meaning "use the environment/platform default".
pub const SYSTEM_SCALE: f32 = 0.0;

/// Effective scale when neither the settings file nor the environment sets one.
pub const DEFAULT_EFFECTIVE_SCALE: f32 = 1.0;

/// Tolerance used when matching a stored scale against a preset.
const PRESET_TOLERANCE: f32 = 1e-4;

/// A named scale factor offered by the settings screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalePreset {
    pub name: &'static str,
    pub scale: f32,
}

/// The scale presets, smallest first.
pub const SCALE_PRESETS: [ScalePreset; 5] = [
    ScalePreset { name: "Tiny", scale: 0.5 },
    ScalePreset { name: "Small", scale: 0.8 },
    ScalePreset { name: "Normal", scale: 1.0 },
    ScalePreset { name: "Large", scale: 1.3 },
    ScalePreset { name: "Huge", scale: 1.8 },
];

impl ScalePreset {
    /// Looks up a preset by name, ignoring ASCII case.
    pub fn find(name: &str) -> Option<&'static ScalePreset> {
        SCALE_PRESETS
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }

    /// The preset whose value equals `scale`, if any.
    pub fn matching(scale: f32) -> Option<&'static ScalePreset> {
        SCALE_PRESETS
            .iter()
            .find(|p| (p.scale - scale).abs() < PRESET_TOLERANCE)
    }
}

/// Returns `true` for values the store may hold: [`SYSTEM_SCALE`] or a finite
/// positive number.
pub fn is_valid_scale(scale: f32) -> bool {
    scale == SYSTEM_SCALE || (scale.is_finite() && scale > 0.0)
}

/// Resolves the scale the window should actually use.
///
/// A stored positive scale wins.  Otherwise `env_override` (the raw value of
/// the scale environment variable, if set) is used when it parses to a finite
/// positive number.  Otherwise [`DEFAULT_EFFECTIVE_SCALE`].
pub fn resolve_scale(stored: f32, env_override: Option<&str>) -> f32 {
    if stored.is_finite() && stored > 0.0 {
        return stored;
    }

    env_override
        .and_then(|raw| raw.trim().parse::<f32>().ok())
        .filter(|s| s.is_finite() && *s > 0.0)
        .unwrap_or(DEFAULT_EFFECTIVE_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_preset_is_case_insensitive() {
        let preset = ScalePreset::find("large").expect("Large preset must exist");
        assert_eq!(preset.scale, 1.3);
        assert!(ScalePreset::find("gigantic").is_none());
    }

    #[test]
    fn test_matching_preset_for_stored_scale() {
        assert_eq!(ScalePreset::matching(0.8).map(|p| p.name), Some("Small"));
        assert!(ScalePreset::matching(1.1).is_none());
        assert!(ScalePreset::matching(SYSTEM_SCALE).is_none());
    }

    #[test]
    fn test_matching_tolerates_small_float_drift_only() {
        assert_eq!(ScalePreset::matching(1.3 + 5e-5).map(|p| p.name), Some("Large"));
        assert_eq!(ScalePreset::matching(1.8 - 5e-5).map(|p| p.name), Some("Huge"));
        assert!(ScalePreset::matching(1.3 + 1e-3).is_none());
    }

    #[test]
    fn test_valid_scale_accepts_zero_and_positive_only() {
        assert!(is_valid_scale(0.0));
        assert!(is_valid_scale(2.5));
        assert!(!is_valid_scale(-1.0));
        assert!(!is_valid_scale(f32::NAN));
        assert!(!is_valid_scale(f32::INFINITY));
    }

    #[test]
    fn test_resolve_scale_prefers_stored_value() {
        assert_eq!(resolve_scale(1.3, Some("2.0")), 1.3);
    }

    #[test]
    fn test_resolve_scale_uses_environment_when_unset() {
        assert_eq!(resolve_scale(SYSTEM_SCALE, Some(" 1.5 ")), 1.5);
    }

    #[test]
    fn test_resolve_scale_ignores_unusable_environment_values() {
        assert_eq!(resolve_scale(SYSTEM_SCALE, Some("huge")), DEFAULT_EFFECTIVE_SCALE);
        assert_eq!(resolve_scale(SYSTEM_SCALE, Some("-2")), DEFAULT_EFFECTIVE_SCALE);
        assert_eq!(resolve_scale(SYSTEM_SCALE, None), DEFAULT_EFFECTIVE_SCALE);
    }
}
