//! Style configuration for the wheel
//!
//! Provides the `WheelStyle` struct and builder methods for the visual
//! appearance of the wheel's three text layers (center item, scale caption,
//! next item). Styling only affects rendering, never scroll logic.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, ascii};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::Alignment;
use serde::{Deserialize, Serialize};

use super::colors::{Color, GRAY, WHITE};

/// Default gap between the scale caption and the center text, in pixels
pub const DEFAULT_CENTER_MARGIN_TOP: u32 = 16;

/// Default gap between the center text and the next item, in pixels
pub const DEFAULT_CENTER_MARGIN_BOTTOM: u32 = 18;

// ============================================================================
// Text Size
// ============================================================================

/// Text size variants
///
/// Provides three preset text sizes with corresponding embedded-graphics fonts:
/// - `Small`: 5x8 font
/// - `Medium`: 6x10 font
/// - `Large`: 10x20 font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextSize {
    Small,
    Medium,
    Large,
}

impl TextSize {
    pub fn font(&self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Small => &ascii::FONT_5X8,
            TextSize::Medium => &ascii::FONT_6X10,
            TextSize::Large => &ascii::FONT_10X20,
        }
    }

    /// Pick the preset whose glyph height is closest to a pixel size attribute
    pub fn from_px(px: u32) -> Self {
        match px {
            0..=9 => TextSize::Small,
            10..=15 => TextSize::Medium,
            _ => TextSize::Large,
        }
    }
}

// ============================================================================
// Text Alignment
// ============================================================================

/// Horizontal anchoring of the wheel text around the widget's center line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    /// Map the integer alignment attribute (0 left, 1 center, 2 right)
    ///
    /// Unknown values fall back to center.
    pub fn from_attr(value: u8) -> Self {
        Self::try_from(value).unwrap_or_default()
    }

    /// Alignment used for the scale caption so it sits on the far edge of the
    /// wheel text instead of overlapping it
    pub fn mirrored(self) -> Self {
        match self {
            TextAlign::Left => TextAlign::Right,
            TextAlign::Center => TextAlign::Center,
            TextAlign::Right => TextAlign::Left,
        }
    }

    pub fn to_alignment(self) -> Alignment {
        match self {
            TextAlign::Left => Alignment::Left,
            TextAlign::Center => Alignment::Center,
            TextAlign::Right => Alignment::Right,
        }
    }
}

// ============================================================================
// Wheel Style
// ============================================================================

/// Visual style configuration for a wheel
///
/// Use the builder pattern to construct styles incrementally.
///
/// # Examples
///
/// ```ignore
/// let style = WheelStyle::new()
///     .with_center_text(WHITE, TextSize::Large)
///     .with_side_text(GRAY, TextSize::Small)
///     .with_bottom_text(true)
///     .with_align(TextAlign::Right);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelStyle {
    /// Color of the selected item
    pub center_text_color: Color,

    /// Size of the selected item; also fixes the item height
    pub center_text_size: TextSize,

    /// Color of the scale caption and the next item
    pub side_text_color: Color,

    /// Size of the scale caption and the next item
    pub side_text_size: TextSize,

    /// Gap between the scale caption and the top of the center text
    pub margin_top: u32,

    /// Gap between the bottom of the center text and the next item
    pub margin_bottom: u32,

    /// Whether the next item is drawn below the selected one
    pub show_bottom_text: bool,

    /// Horizontal anchoring of the wheel text
    pub align: TextAlign,
}

impl Default for WheelStyle {
    fn default() -> Self {
        Self {
            center_text_color: WHITE,
            center_text_size: TextSize::Large,
            side_text_color: GRAY,
            side_text_size: TextSize::Small,
            margin_top: DEFAULT_CENTER_MARGIN_TOP,
            margin_bottom: DEFAULT_CENTER_MARGIN_BOTTOM,
            show_bottom_text: false,
            align: TextAlign::Center,
        }
    }
}

impl WheelStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_center_text(mut self, color: Color, size: TextSize) -> Self {
        self.center_text_color = color;
        self.center_text_size = size;
        self
    }

    pub fn with_side_text(mut self, color: Color, size: TextSize) -> Self {
        self.side_text_color = color;
        self.side_text_size = size;
        self
    }

    pub fn with_margins(mut self, top: u32, bottom: u32) -> Self {
        self.margin_top = top;
        self.margin_bottom = bottom;
        self
    }

    pub fn with_bottom_text(mut self, show: bool) -> Self {
        self.show_bottom_text = show;
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Character style for the selected item
    pub fn center_character_style(&self) -> MonoTextStyle<'static, Rgb565> {
        MonoTextStyle::new(
            self.center_text_size.font(),
            self.center_text_color.to_rgb565(),
        )
    }

    /// Character style shared by the scale caption and the next item
    pub fn side_character_style(&self) -> MonoTextStyle<'static, Rgb565> {
        MonoTextStyle::new(self.side_text_size.font(), self.side_text_color.to_rgb565())
    }
}
