//! # appearance-core
//!
//! Shared library for the appearance settings screen containing the domain
//! types (theme, accent palette, scale presets, the persisted settings record)
//! and the codec that turns a settings record into bytes and back.
//!
//! It has zero dependencies on file systems, windowing toolkits, or rendering.
//!
//! # Architecture overview (for beginners)
//!
//! A graphical application lets the user pick three visual preferences:
//!
//! - a **theme** (dark, light, or "follow the operating system"),
//! - an **accent colour** from a small fixed palette,
//! - a **scale factor** for the whole window.
//!
//! This crate is the foundation those preferences are built on:
//!
//! - **`domain`** – Plain value types with no I/O.  The closed sets (themes,
//!   palette colours) are Rust enums; their string forms only appear at the
//!   serialization edge.
//!
//! - **`codec`** – How a [`SettingsRecord`] travels to and from disk: a small
//!   JSON object with three optional fields.
//!
//! The `appearance-settings` crate builds the mutable settings store, the
//! palette observers and the file repository on top of these types.

pub mod codec;
pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `appearance_core::Theme` instead of `appearance_core::domain::theme::Theme`.
pub use codec::{decode_record, encode_record, CodecError};
pub use domain::palette::{AccentColor, PaletteEntry, ParseAccentError, Rgba, PALETTE};
pub use domain::preview::PreviewVariant;
pub use domain::record::SettingsRecord;
pub use domain::scale::{is_valid_scale, resolve_scale, ScalePreset, SCALE_PRESETS, SYSTEM_SCALE};
pub use domain::theme::{ParseThemeError, Theme, SYSTEM_THEME_LABEL};
