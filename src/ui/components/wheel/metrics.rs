// src/ui/components/wheel/metrics.rs
//! Font metrics and baseline geometry for the wheel's text layers

use embedded_graphics::mono_font::MonoFont;

use crate::ui::styling::WheelStyle;

/// Integer font metrics measured relative to the baseline
///
/// Values above the baseline are negative, values below are positive, so
/// `ascent` is negative and `descent` positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    /// Distance from the baseline up to the top of the glyph cell
    pub ascent: i32,
    /// Distance from the baseline down to the bottom of the glyph cell
    pub descent: i32,
    /// Highest extent of any glyph
    pub top: i32,
    /// Lowest extent of any glyph
    pub bottom: i32,
    char_width: u32,
    char_spacing: u32,
}

impl FontMetrics {
    pub fn from_font(font: &MonoFont<'_>) -> Self {
        let baseline = font.baseline as i32;
        let below = font.character_size.height as i32 - baseline;

        // Mono fonts have no glyphs escaping their cell, so top/bottom
        // coincide with ascent/descent.
        Self {
            ascent: -baseline,
            descent: below,
            top: -baseline,
            bottom: below,
            char_width: font.character_size.width,
            char_spacing: font.character_spacing,
        }
    }

    /// Full height of a line of text
    pub fn text_height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Advance width of `text` in pixels
    pub fn measure(&self, text: &str) -> u32 {
        let chars = text.chars().count() as u32;
        if chars == 0 {
            return 0;
        }
        chars * self.char_width + (chars - 1) * self.char_spacing
    }
}

/// Metrics provider for the wheel
///
/// The item height (the pixel distance that moves the wheel by one item) is
/// derived from the center font once, when the metrics are created, and stays
/// fixed afterwards so an in-flight drag always converts pixels to items with
/// the same unit. Restyling refreshes the font metrics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelMetrics {
    center: FontMetrics,
    side: FontMetrics,
    item_height: i32,
    margin_top: i32,
    margin_bottom: i32,
}

impl WheelMetrics {
    pub fn new(style: &WheelStyle) -> Self {
        let center = FontMetrics::from_font(style.center_text_size.font());
        let item_height = -center.ascent;
        debug_assert!(item_height > 0, "item height must be positive");

        Self {
            center,
            side: FontMetrics::from_font(style.side_text_size.font()),
            item_height,
            margin_top: style.margin_top as i32,
            margin_bottom: style.margin_bottom as i32,
        }
    }

    /// Re-read font metrics and margins after a style change
    pub fn refresh(&mut self, style: &WheelStyle) {
        self.center = FontMetrics::from_font(style.center_text_size.font());
        self.side = FontMetrics::from_font(style.side_text_size.font());
        self.margin_top = style.margin_top as i32;
        self.margin_bottom = style.margin_bottom as i32;
    }

    pub fn item_height(&self) -> i32 {
        self.item_height
    }

    pub fn center(&self) -> &FontMetrics {
        &self.center
    }

    pub fn side(&self) -> &FontMetrics {
        &self.side
    }

    /// Baseline of the selected item, moved along with the scroll offset
    pub fn center_baseline(&self, center_y: i32, scroll_offset: i32) -> i32 {
        let fm = &self.center;
        (fm.descent - fm.ascent) / 2 - fm.descent + center_y + scroll_offset
    }

    /// Baseline of the scale caption above the center text
    ///
    /// The caption is a fixed label, so it ignores the scroll offset.
    pub fn top_baseline(&self, center_y: i32) -> i32 {
        let center_text_top = center_y - self.center.text_height() / 2;
        center_text_top - self.margin_top - self.side.bottom
    }

    /// Baseline of the next-item label below the center text
    pub fn bottom_baseline(&self, center_y: i32, scroll_offset: i32) -> i32 {
        let center_text_bottom = center_y + scroll_offset + self.center.text_height() / 2;
        center_text_bottom + self.margin_bottom - self.side.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::styling::{TextSize, WHITE};
    use embedded_graphics::mono_font::ascii::FONT_10X20;

    #[test]
    fn test_font_metrics_from_mono_font() {
        let fm = FontMetrics::from_font(&FONT_10X20);

        assert_eq!(fm.ascent, -(FONT_10X20.baseline as i32));
        assert_eq!(fm.text_height(), FONT_10X20.character_size.height as i32);
        assert!(fm.ascent < 0);
        assert!(fm.descent > 0);
    }

    #[test]
    fn test_measure() {
        let fm = FontMetrics::from_font(&FONT_10X20);
        let w = FONT_10X20.character_size.width;
        let s = FONT_10X20.character_spacing;

        assert_eq!(fm.measure(""), 0);
        assert_eq!(fm.measure("1"), w);
        assert_eq!(fm.measure("12"), 2 * w + s);
    }

    #[test]
    fn test_item_height_is_negative_ascent() {
        let metrics = WheelMetrics::new(&WheelStyle::default());
        assert_eq!(metrics.item_height(), FONT_10X20.baseline as i32);
    }

    #[test]
    fn test_item_height_survives_restyle() {
        let mut metrics = WheelMetrics::new(&WheelStyle::default());
        let before = metrics.item_height();

        let smaller = WheelStyle::default().with_center_text(WHITE, TextSize::Small);
        metrics.refresh(&smaller);

        assert_eq!(metrics.item_height(), before);
        assert_eq!(
            metrics.center().text_height(),
            TextSize::Small.font().character_size.height as i32
        );
    }

    #[test]
    fn test_center_baseline_follows_offset() {
        let metrics = WheelMetrics::new(&WheelStyle::default());
        let resting = metrics.center_baseline(120, 0);

        assert_eq!(metrics.center_baseline(120, 7), resting + 7);
        assert_eq!(metrics.center_baseline(120, -5), resting - 5);
    }

    #[test]
    fn test_side_labels_straddle_center_text() {
        let metrics = WheelMetrics::new(&WheelStyle::default());
        let center_y = 120;
        let half = metrics.center().text_height() / 2;

        // Caption bottom sits margin_top above the center text's top edge
        let caption_bottom = metrics.top_baseline(center_y) + metrics.side().bottom;
        assert_eq!(caption_bottom, center_y - half - 16);

        // Next item top sits margin_bottom below the center text's bottom edge
        let next_top = metrics.bottom_baseline(center_y, 0) + metrics.side().top;
        assert_eq!(next_top, center_y + half + 18);

        // Only the next item follows the scroll offset
        assert_eq!(
            metrics.bottom_baseline(center_y, 4),
            metrics.bottom_baseline(center_y, 0) + 4
        );
    }
}
