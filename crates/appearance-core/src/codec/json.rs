//! JSON codec for [`SettingsRecord`].
//!
//! File format (UTF-8):
//! ```text
//! { "themeName": <string>, "primaryColor": <string>, "scale": <number> }
//! ```
//! All three fields are always written.  On read, each is optional, unknown
//! fields are ignored, and a theme or colour name outside the known set is a
//! decode error, as is a scale that is negative or does not fit an `f32`.
//! No partial parse is attempted: a file that fails to decode yields an
//! error, never a half-filled record.

use thiserror::Error;

use crate::domain::record::SettingsRecord;

/// Errors that can occur while encoding or decoding a settings record.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The bytes are not a valid settings document (malformed JSON, wrong
    /// field type, or a theme/colour name outside the known set).
    #[error("failed to decode settings: {0}")]
    Decode(#[source] serde_json::Error),

    /// The record could not be serialized.
    #[error("failed to encode settings: {0}")]
    Encode(#[source] serde_json::Error),
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Encodes a record as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] if the record holds a scale that could not
/// be read back: negative, NaN or infinite.
///
/// # Examples
///
/// ```rust
/// use appearance_core::{decode_record, encode_record, AccentColor, SettingsRecord, Theme};
///
/// let record = SettingsRecord {
///     theme: Theme::Light,
///     primary_color: Some(AccentColor::Red),
///     scale: 1.3,
/// };
/// let bytes = encode_record(&record).unwrap();
/// assert_eq!(decode_record(&bytes).unwrap(), record);
/// ```
pub fn encode_record(record: &SettingsRecord) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec_pretty(record).map_err(CodecError::Encode)
}

/// Decodes a record from JSON bytes.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed or out-of-range content.
pub fn decode_record(bytes: &[u8]) -> Result<SettingsRecord, CodecError> {
    serde_json::from_slice(bytes).map_err(CodecError::Decode)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
