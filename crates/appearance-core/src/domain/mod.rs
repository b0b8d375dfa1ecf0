//! Domain entities for the appearance settings.
//!
//! This module contains pure value types with no infrastructure dependencies.
//!
//! # Closed sets as enums
//!
//! The theme name and the accent colour are both chosen from a fixed list.
//! Representing them as plain strings would let `"purple"` or `"solarized"`
//! flow through the program unchecked.  Instead each list is an enum, and the
//! only place strings are accepted is at the edges:
//!
//! - the codec, when reading the settings file (unknown names are decode
//!   errors),
//! - `FromStr`, when parsing picker labels or command-line arguments.
//!
//! Code in outer layers (application, infrastructure, CLI) depends on the
//! domain, but the domain never depends on them.

/// Accent colour palette.
pub mod palette;

/// Preview image selection derived from the theme.
pub mod preview;

/// The persisted settings record.
pub mod record;

/// Scale factor presets and effective-scale resolution.
pub mod scale;

/// Theme choice and its display labels.
pub mod theme;
