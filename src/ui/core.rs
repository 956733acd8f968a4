// src/ui/core.rs
//! Core UI traits and types for the wheel widget

use embassy_time::Instant;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Represents a 2D touch point on the display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

impl TouchPoint {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}

/// Phase of a pointer in its down → move → up lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// Initial touch press at a point
    Press,
    /// Touch drag to a new point
    Drag,
    /// Finger lifted
    Release,
    /// The host took the pointer away (e.g. a parent grabbed the gesture)
    Cancel,
}

/// A raw pointer sample delivered by the host
///
/// The timestamp comes from the host's clock; the widget never reads a clock
/// itself, so simulators and tests can feed synthetic time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub point: TouchPoint,
    pub time: Instant,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, point: TouchPoint, time: Instant) -> Self {
        Self { phase, point, time }
    }

    pub fn press(point: TouchPoint, time: Instant) -> Self {
        Self::new(TouchPhase::Press, point, time)
    }

    pub fn drag(point: TouchPoint, time: Instant) -> Self {
        Self::new(TouchPhase::Drag, point, time)
    }

    pub fn release(point: TouchPoint, time: Instant) -> Self {
        Self::new(TouchPhase::Release, point, time)
    }

    pub fn cancel(point: TouchPoint, time: Instant) -> Self {
        Self::new(TouchPhase::Cancel, point, time)
    }

    /// True for the phases that end a pointer stream
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, TouchPhase::Release | TouchPhase::Cancel)
    }
}

/// Result from handling a touch event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchResult {
    /// Event was handled by this element
    Handled,
    /// Event was not handled, pass to next element
    NotHandled,
}

/// Dirty region tracking for efficient rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirtyRegion {
    pub bounds: Rectangle,
    pub is_dirty: bool,
}

impl DirtyRegion {
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            is_dirty: true,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.is_dirty = true;
    }

    pub fn mark_clean(&mut self) {
        self.is_dirty = false;
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }
}

/// Trait for any UI element that can be drawn
pub trait Drawable {
    /// Draw the element to the display within its bounds
    fn draw<D: DrawTarget<Color = embedded_graphics::pixelcolor::Rgb565>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error>;

    /// Get the bounds of this drawable element
    fn bounds(&self) -> Rectangle;

    /// Check if this element needs to be redrawn
    fn is_dirty(&self) -> bool;

    /// Mark this element as clean (already drawn)
    fn mark_clean(&mut self);

    /// Mark this element as dirty (needs redraw)
    fn mark_dirty(&mut self);

    /// Get the dirty region for partial updates
    fn dirty_region(&self) -> Option<DirtyRegion> {
        if self.is_dirty() {
            Some(DirtyRegion::new(self.bounds()))
        } else {
            None
        }
    }
}

/// Trait for UI elements that respond to touch events
pub trait Touchable {
    /// Check if a point is within this element's bounds
    fn contains_point(&self, point: TouchPoint) -> bool;

    /// Handle a touch event, returns result indicating if handled
    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_phases() {
        let at = Instant::from_millis(0);
        let point = TouchPoint::new(10, 20);

        assert!(!TouchEvent::press(point, at).is_terminal());
        assert!(!TouchEvent::drag(point, at).is_terminal());
        assert!(TouchEvent::release(point, at).is_terminal());
        assert!(TouchEvent::cancel(point, at).is_terminal());
    }

    #[test]
    fn test_dirty_region_flags() {
        let mut region = DirtyRegion::new(Rectangle::new(Point::zero(), Size::new(10, 10)));
        assert!(region.is_dirty());

        region.mark_clean();
        assert!(!region.is_dirty());

        region.mark_dirty();
        assert!(region.is_dirty());
    }
}
