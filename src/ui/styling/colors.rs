//! Color definitions for the wheel's text layers
//!
//! Colors are configured as 8-bit RGB (the way style attributes are usually
//! written, e.g. `#808080`) and converted to RGB565 for drawing.
//!
//! # RGB565 Format
//! - Red: 5 bits (0-31)
//! - Green: 6 bits (0-63)
//! - Blue: 5 bits (0-31)
//!
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

// ============================================================================
// Text Colors
// ============================================================================

/// Pure white - default color of the selected item
pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);

/// Medium gray - default color of the scale caption and next item
pub const GRAY: Color = Color::new(0x80, 0x80, 0x80);

// ============================================================================
// Color
// ============================================================================

/// An 8-bit-per-channel RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` (or `rrggbb`) color attribute
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidColor`] when the string is not exactly six
    /// hexadecimal digits after the optional `#`.
    pub fn parse_hex(value: &str) -> Result<Self, ConfigError> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ConfigError::invalid_color(value));
        }

        let channel = |range: core::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ConfigError::invalid_color(value))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Convert to the display's RGB565 format
    pub const fn to_rgb565(self) -> Rgb565 {
        Rgb565::new(self.r >> 3, self.g >> 2, self.b >> 3)
    }
}

impl From<Color> for Rgb565 {
    fn from(color: Color) -> Self {
        color.to_rgb565()
    }
}
