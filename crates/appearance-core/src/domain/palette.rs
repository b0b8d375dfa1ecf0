//! The fixed accent colour palette.
//!
//! Six named colours, in display order.  The palette swatch grid iterates
//! [`PALETTE`] front to back; the order has no other meaning.  The first entry
//! is the accent used when the user has never picked one.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a string does not name a palette colour.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown accent colour: {0:?}")]
pub struct ParseAccentError(pub String);

/// A colour with 8-bit red, green, blue and alpha channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    /// Formats as `#rrggbbaa`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// One of the accent colours the user can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccentColor {
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
    Grey,
}

/// One fixed (colour, RGBA) pair of the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub color: AccentColor,
    pub rgba: Rgba,
}

/// The accent palette in display order.
pub const PALETTE: [PaletteEntry; 6] = [
    PaletteEntry {
        color: AccentColor::Blue,
        rgba: Rgba::new(0x21, 0x96, 0xf3, 0xff),
    },
    PaletteEntry {
        color: AccentColor::Green,
        rgba: Rgba::new(0x8b, 0xc3, 0x4a, 0xff),
    },
    PaletteEntry {
        color: AccentColor::Yellow,
        rgba: Rgba::new(0xff, 0xeb, 0x3b, 0xff),
    },
    PaletteEntry {
        color: AccentColor::Orange,
        rgba: Rgba::new(0xff, 0x98, 0x00, 0xff),
    },
    PaletteEntry {
        color: AccentColor::Red,
        rgba: Rgba::new(0xf4, 0x43, 0x36, 0xff),
    },
    PaletteEntry {
        color: AccentColor::Grey,
        rgba: Rgba::new(0x9e, 0x9e, 0x9e, 0xff),
    },
];

impl AccentColor {
    /// The accent used when none has been chosen: the first palette entry.
    pub const DEFAULT: AccentColor = PALETTE[0].color;

    /// The name stored in the settings file.
    pub fn name(self) -> &'static str {
        match self {
            AccentColor::Blue => "blue",
            AccentColor::Green => "green",
            AccentColor::Yellow => "yellow",
            AccentColor::Orange => "orange",
            AccentColor::Red => "red",
            AccentColor::Grey => "grey",
        }
    }

    /// The palette entry for this colour.
    pub fn entry(self) -> &'static PaletteEntry {
        &PALETTE[self.index()]
    }

    /// Position of this colour in [`PALETTE`].
    pub fn index(self) -> usize {
        match self {
            AccentColor::Blue => 0,
            AccentColor::Green => 1,
            AccentColor::Yellow => 2,
            AccentColor::Orange => 3,
            AccentColor::Red => 4,
            AccentColor::Grey => 5,
        }
    }

    pub fn rgba(self) -> Rgba {
        self.entry().rgba
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AccentColor {
    type Err = ParseAccentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PALETTE
            .iter()
            .map(|e| e.color)
            .find(|c| c.name() == s)
            .ok_or_else(|| ParseAccentError(s.to_string()))
    }
}
