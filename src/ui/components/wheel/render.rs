// src/ui/components/wheel/render.rs
//! Drawing the wheel's text layers
//!
//! Three layers are drawn around the widget's center point: the selected item
//! in the center font, the scale caption above it and, when enabled, the next
//! item below it in the side font.

use alloc::string::String;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;

use super::metrics::WheelMetrics;
use crate::ui::styling::{TextAlign, WheelStyle};

/// Everything needed to draw one frame of a wheel
#[derive(Debug, Clone, Copy)]
pub struct WheelFrame<'a> {
    pub items: &'a [String],
    pub caption: &'a str,
    pub selected: usize,
    pub offset: i32,
    pub style: &'a WheelStyle,
    pub metrics: &'a WheelMetrics,
    pub bounds: Rectangle,
}

impl WheelFrame<'_> {
    fn center(&self) -> Point {
        let size = self.bounds.size;
        self.bounds.top_left + Point::new(size.width as i32 / 2, size.height as i32 / 2)
    }

    pub fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let Some(current) = self.items.get(self.selected) else {
            return Ok(());
        };

        let center = self.center();
        self.draw_center_text(display, current, center)?;
        self.draw_scale_text(display, current, center)?;
        if self.style.show_bottom_text {
            self.draw_side_text(display, center)?;
        }

        Ok(())
    }

    fn draw_center_text<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
        text: &str,
        center: Point,
    ) -> Result<(), D::Error> {
        let baseline = self.metrics.center_baseline(center.y, self.offset);
        Text::with_alignment(
            text,
            Point::new(center.x, baseline),
            self.style.center_character_style(),
            self.style.align.to_alignment(),
        )
        .draw(display)?;

        Ok(())
    }

    fn draw_scale_text<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
        current: &str,
        center: Point,
    ) -> Result<(), D::Error> {
        if self.caption.is_empty() {
            return Ok(());
        }

        let align = self.style.align.mirrored();
        let width = self.metrics.center().measure(current) as i32;
        let x = match align {
            TextAlign::Left => center.x - width,
            TextAlign::Center => center.x,
            TextAlign::Right => center.x + width,
        };

        let baseline = self.metrics.top_baseline(center.y);
        Text::with_alignment(
            self.caption,
            Point::new(x, baseline),
            self.style.side_character_style(),
            align.to_alignment(),
        )
        .draw(display)?;

        Ok(())
    }

    fn draw_side_text<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
        center: Point,
    ) -> Result<(), D::Error> {
        let next = (self.selected + 1) % self.items.len();
        let baseline = self.metrics.bottom_baseline(center.y, self.offset);
        Text::with_alignment(
            &self.items[next],
            Point::new(center.x, baseline),
            self.style.side_character_style(),
            self.style.align.to_alignment(),
        )
        .draw(display)?;

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ui::styling::{GRAY, WHITE};
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use core::convert::Infallible;

    /// Draw target that remembers every pixel it was handed
    #[derive(Default)]
    pub(crate) struct PixelRecorder {
        pub pixels: Vec<Pixel<Rgb565>>,
    }

    impl PixelRecorder {
        pub fn of_color(&self, color: Rgb565) -> Vec<Point> {
            self.pixels
                .iter()
                .filter(|Pixel(_, c)| *c == color)
                .map(|Pixel(p, _)| *p)
                .collect()
        }
    }

    impl OriginDimensions for PixelRecorder {
        fn size(&self) -> Size {
            Size::new(320, 240)
        }
    }

    impl DrawTarget for PixelRecorder {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            self.pixels.extend(pixels);
            Ok(())
        }
    }

    fn items(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    fn render(items: &[String], caption: &str, offset: i32, style: &WheelStyle) -> PixelRecorder {
        let metrics = WheelMetrics::new(style);
        let frame = WheelFrame {
            items,
            caption,
            selected: 0,
            offset,
            style,
            metrics: &metrics,
            bounds: Rectangle::new(Point::zero(), Size::new(320, 240)),
        };

        let mut recorder = PixelRecorder::default();
        frame.draw(&mut recorder).unwrap();
        recorder
    }

    fn min_y(points: &[Point]) -> i32 {
        points.iter().map(|p| p.y).min().unwrap_or(i32::MAX)
    }

    fn max_y(points: &[Point]) -> i32 {
        points.iter().map(|p| p.y).max().unwrap_or(i32::MIN)
    }

    #[test]
    fn test_empty_items_draw_nothing() {
        let style = WheelStyle::default().with_bottom_text(true);
        let recorder = render(&[], "hour", 0, &style);
        assert!(recorder.pixels.is_empty());
    }

    #[test]
    fn test_center_text_only() {
        let style = WheelStyle::default();
        let recorder = render(&items(&["08", "09"]), "", 0, &style);

        let white = recorder.of_color(WHITE.into());
        assert!(!white.is_empty());
        assert!(recorder.of_color(GRAY.into()).is_empty());

        // Centered horizontally and vertically around (160, 120)
        let min_x = white.iter().map(|p| p.x).min().unwrap();
        let max_x = white.iter().map(|p| p.x).max().unwrap();
        assert!(min_x < 160 && max_x > 160);
        assert!(min_y(&white) >= 110 && max_y(&white) < 130);
    }

    #[test]
    fn test_caption_above_center_text() {
        let style = WheelStyle::default();
        let recorder = render(&items(&["08"]), "hour", 0, &style);

        let white = recorder.of_color(WHITE.into());
        let gray = recorder.of_color(GRAY.into());
        assert!(!gray.is_empty());
        assert!(max_y(&gray) < min_y(&white));
    }

    #[test]
    fn test_caption_ignores_offset() {
        let style = WheelStyle::default();
        let still = render(&items(&["08"]), "hour", 0, &style);
        let moved = render(&items(&["08"]), "hour", 7, &style);

        assert_eq!(still.of_color(GRAY.into()), moved.of_color(GRAY.into()));
        assert_eq!(
            min_y(&moved.of_color(WHITE.into())) - min_y(&still.of_color(WHITE.into())),
            7
        );
    }

    #[test]
    fn test_bottom_text_shows_next_item() {
        let style = WheelStyle::default().with_bottom_text(true);
        let recorder = render(&items(&["08", "09"]), "", 0, &style);

        let white = recorder.of_color(WHITE.into());
        let gray = recorder.of_color(GRAY.into());
        assert!(!gray.is_empty());
        assert!(min_y(&gray) > max_y(&white));
    }

    #[test]
    fn test_bottom_text_wraps_to_first_item() {
        let style = WheelStyle::default().with_bottom_text(true);
        let labels = items(&["08", "09"]);
        let metrics = WheelMetrics::new(&style);
        let frame = WheelFrame {
            items: &labels,
            caption: "",
            selected: 1,
            offset: 0,
            style: &style,
            metrics: &metrics,
            bounds: Rectangle::new(Point::zero(), Size::new(320, 240)),
        };

        let mut last = PixelRecorder::default();
        frame.draw(&mut last).unwrap();
        let first = render(&labels, "", 0, &style);

        // Selecting "09" shows "08" below; selecting "08" shows "09"
        assert_ne!(last.of_color(GRAY.into()), first.of_color(GRAY.into()));
        assert!(!last.of_color(GRAY.into()).is_empty());
    }

    #[test]
    fn test_caption_moves_outward_when_aligned() {
        let style = WheelStyle::default().with_align(TextAlign::Right);
        let recorder = render(&items(&["08"]), "h", 0, &style);

        let width = WheelMetrics::new(&style).center().measure("08") as i32;
        let gray = recorder.of_color(GRAY.into());
        let white = recorder.of_color(WHITE.into());

        // Right aligned text ends at the center line; the caption starts
        // where the text starts
        assert!(white.iter().all(|p| p.x <= 160));
        assert!(gray.iter().all(|p| p.x >= 160 - width && p.x < 160 - width + 5));
    }
}
