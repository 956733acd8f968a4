// src/ui/components/wheel/gesture.rs
//! Gesture recognition on raw touch streams
//!
//! [`GestureDetector`] turns press/drag/release samples into the higher level
//! callbacks of [`GestureListener`]: a down, a stream of scroll distances once
//! the finger has left the tap region, and either a fling or a tap when it
//! lifts. Long presses are not recognized.

use embassy_time::{Duration, Instant};

use super::animation::round;
use crate::ui::core::{TouchEvent, TouchPhase};

/// Movement in pixels before a press turns into a scroll
pub const TOUCH_SLOP: i32 = 8;

/// Slowest release that still counts as a fling, pixels per second
pub const MIN_FLING_VELOCITY: f32 = 50.0;

/// Fling velocities are clamped to this, pixels per second
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// A finger resting this long before lifting carries no velocity
const VELOCITY_STALE_AFTER: Duration = Duration::from_millis(100);

/// Samples further apart than this do not contribute to velocity
const VELOCITY_MAX_GAP: Duration = Duration::from_millis(500);

/// Exponential smoothing factor for velocity samples
const VELOCITY_SMOOTHING: f32 = 0.3;

/// Receiver of recognized gestures
///
/// Every callback returns whether it consumed the gesture. The defaults
/// consume nothing.
pub trait GestureListener {
    fn on_down(&mut self, _event: &TouchEvent) -> bool {
        false
    }

    /// `distance_y` is the movement since the previous scroll callback,
    /// positive when the finger moves up
    fn on_scroll(&mut self, _event: &TouchEvent, _distance_y: i32) -> bool {
        false
    }

    /// `velocity_y` is in pixels per second, positive when the finger moves down
    fn on_fling(&mut self, _event: &TouchEvent, _velocity_y: i32) -> bool {
        false
    }

    fn on_single_tap_up(&mut self, _event: &TouchEvent) -> bool {
        false
    }
}

/// Turns touch events into [`GestureListener`] callbacks
pub trait GestureRecognizer {
    /// Feed one touch event; returns whether the listener consumed it
    fn on_touch_event<L: GestureListener>(&mut self, event: TouchEvent, listener: &mut L) -> bool;

    /// True between a press and its release or cancel
    fn is_tracking(&self) -> bool;

    /// Drop any gesture in progress
    fn reset(&mut self);
}

/// Default [`GestureRecognizer`]
#[derive(Debug, Clone)]
pub struct GestureDetector {
    touch_slop: i32,
    min_fling_velocity: f32,
    max_fling_velocity: f32,
    down: Option<TouchEvent>,
    in_tap_region: bool,
    last_scroll_y: i32,
    last_sample_y: i32,
    last_sample_at: Instant,
    velocity_y: Option<f32>,
}

impl Default for GestureDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureDetector {
    pub fn new() -> Self {
        Self {
            touch_slop: TOUCH_SLOP,
            min_fling_velocity: MIN_FLING_VELOCITY,
            max_fling_velocity: MAX_FLING_VELOCITY,
            down: None,
            in_tap_region: false,
            last_scroll_y: 0,
            last_sample_y: 0,
            last_sample_at: Instant::from_ticks(0),
            velocity_y: None,
        }
    }

    pub fn with_touch_slop(mut self, slop: u16) -> Self {
        self.touch_slop = slop as i32;
        self
    }

    pub fn with_fling_velocity(mut self, min: f32, max: f32) -> Self {
        self.min_fling_velocity = min;
        self.max_fling_velocity = max.max(min);
        self
    }

    fn add_sample(&mut self, y: i32, at: Instant) {
        let gap = at.saturating_duration_since(self.last_sample_at);
        // Speed from before a rest does not carry over
        if gap > VELOCITY_STALE_AFTER {
            self.velocity_y = None;
        }

        if gap > Duration::from_ticks(0) && gap < VELOCITY_MAX_GAP {
            let seconds = gap.as_micros() as f32 / 1_000_000.0;
            let sample = (y - self.last_sample_y) as f32 / seconds;
            self.velocity_y = Some(match self.velocity_y {
                Some(v) => v * (1.0 - VELOCITY_SMOOTHING) + sample * VELOCITY_SMOOTHING,
                None => sample,
            });
        }

        self.last_sample_y = y;
        self.last_sample_at = at;
    }

    fn release_velocity(&self, at: Instant) -> f32 {
        if at.saturating_duration_since(self.last_sample_at) > VELOCITY_STALE_AFTER {
            return 0.0;
        }

        self.velocity_y
            .unwrap_or(0.0)
            .clamp(-self.max_fling_velocity, self.max_fling_velocity)
    }

    fn on_press<L: GestureListener>(&mut self, event: TouchEvent, listener: &mut L) -> bool {
        let y = event.point.y as i32;
        self.down = Some(event);
        self.in_tap_region = true;
        self.last_scroll_y = y;
        self.last_sample_y = y;
        self.last_sample_at = event.time;
        self.velocity_y = None;

        listener.on_down(&event)
    }

    fn on_drag<L: GestureListener>(&mut self, event: TouchEvent, listener: &mut L) -> bool {
        let Some(down) = self.down else {
            return false;
        };

        let y = event.point.y as i32;
        self.add_sample(y, event.time);

        let distance_y = self.last_scroll_y - y;
        if self.in_tap_region {
            let dx = event.point.x as i64 - down.point.x as i64;
            let dy = (y - down.point.y as i32) as i64;
            let slop = self.touch_slop as i64;
            if dx * dx + dy * dy > slop * slop {
                self.in_tap_region = false;
                self.last_scroll_y = y;
                return listener.on_scroll(&event, distance_y);
            }
            false
        } else if distance_y != 0 {
            self.last_scroll_y = y;
            listener.on_scroll(&event, distance_y)
        } else {
            false
        }
    }

    fn on_release<L: GestureListener>(&mut self, event: TouchEvent, listener: &mut L) -> bool {
        if self.down.take().is_none() {
            return false;
        }

        if self.in_tap_region {
            return listener.on_single_tap_up(&event);
        }

        let y = event.point.y as i32;
        if y != self.last_sample_y {
            self.add_sample(y, event.time);
        }

        let velocity = self.release_velocity(event.time);
        let magnitude = if velocity < 0.0 { -velocity } else { velocity };
        if magnitude > self.min_fling_velocity {
            listener.on_fling(&event, round(velocity))
        } else {
            false
        }
    }
}

impl GestureRecognizer for GestureDetector {
    fn on_touch_event<L: GestureListener>(&mut self, event: TouchEvent, listener: &mut L) -> bool {
        match event.phase {
            TouchPhase::Press => self.on_press(event, listener),
            TouchPhase::Drag => self.on_drag(event, listener),
            TouchPhase::Release => self.on_release(event, listener),
            TouchPhase::Cancel => {
                self.reset();
                false
            }
        }
    }

    fn is_tracking(&self) -> bool {
        self.down.is_some()
    }

    fn reset(&mut self) {
        self.down = None;
        self.in_tap_region = false;
        self.velocity_y = None;
    }
}
