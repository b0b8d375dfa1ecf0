//! The persisted settings record.
//!
//! # On-disk shape
//!
//! ```json
//! {
//!   "themeName": "light",
//!   "primaryColor": "red",
//!   "scale": 1.3
//! }
//! ```
//!
//! Every field is optional when reading.  `#[serde(default)]` on the struct
//! fills an absent field from [`SettingsRecord::default()`], so a file written
//! by an older version (or by hand) with only `"scale"` still loads.  Fields
//! the record does not know are skipped, which lets newer files load in older
//! builds.
//!
//! Earlier files used `theme` and `primary_color` as keys; those are accepted
//! as read-side aliases.

use serde::{Deserialize, Serialize};

use crate::domain::palette::AccentColor;
use crate::domain::scale::{is_valid_scale, SYSTEM_SCALE};
use crate::domain::theme::Theme;

/// The user's appearance preferences as stored on disk.
///
/// The default record is the "first run" state: system theme, no accent
/// chosen, and a scale of `0.0` (use the platform default).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsRecord {
    #[serde(rename = "themeName", alias = "theme")]
    pub theme: Theme,

    /// `None` until the user picks an accent.  Stored as `""` when unset.
    #[serde(rename = "primaryColor", alias = "primary_color", with = "accent_field")]
    pub primary_color: Option<AccentColor>,

    /// Window scale multiplier; [`SYSTEM_SCALE`] means "platform default".
    /// Must satisfy [`is_valid_scale`] in both directions.
    #[serde(with = "scale_field")]
    pub scale: f32,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            primary_color: None,
            scale: SYSTEM_SCALE,
        }
    }
}

impl SettingsRecord {
    /// The accent to highlight: the stored one, or the first palette colour
    /// when none is stored.
    pub fn accent_or_default(&self) -> AccentColor {
        self.primary_color.unwrap_or(AccentColor::DEFAULT)
    }
}

/// Serde adapter mapping `Option<AccentColor>` to a palette name or `""`.
mod accent_field {
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    use crate::domain::palette::AccentColor;

    pub fn serialize<S: Serializer>(
        value: &Option<AccentColor>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.map(AccentColor::name).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<AccentColor>, D::Error> {
        // `null` is treated like the empty string.
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(name) => name.parse().map(Some).map_err(D::Error::custom),
        }
    }
}

/// Serde adapter that only lets valid scales through.
///
/// JSON numbers are read as `f64`; one too large for `f32` becomes infinite
/// after narrowing and is rejected along with negative values.  A non-finite
/// scale would otherwise be written as `null`, which cannot be read back.
mod scale_field {
    use serde::{de::Error as _, ser::Error as _, Deserialize, Deserializer, Serializer};

    use super::is_valid_scale;

    pub fn serialize<S: Serializer>(value: &f32, serializer: S) -> Result<S::Ok, S::Error> {
        if !is_valid_scale(*value) {
            return Err(S::Error::custom(format!("invalid scale {value}")));
        }
        serializer.serialize_f32(*value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
        let raw = f64::deserialize(deserializer)?;
        let scale = raw as f32;
        if !is_valid_scale(scale) {
            return Err(D::Error::custom(format!(
                "invalid scale {raw}: expected 0 or a finite positive number"
            )));
        }
        Ok(scale)
    }
}
