// src/ui/components/wheel/animation.rs
//! Animation timeline driving flings and settles
//!
//! The wheel only needs a one-dimensional timeline: a position that moves from
//! a start value towards a final value and can be sampled at arbitrary
//! instants. [`ScrollAnimator`] is that capability; [`Scroller`] is the
//! default implementation with a cubic ease-out for timed scrolls and constant
//! deceleration for flings.

use embassy_time::{Duration, Instant};

/// Deceleration applied to flings, in pixels per second squared
pub const DEFAULT_DECELERATION: f32 = 1500.0;

/// A sampled one-dimensional scroll timeline
pub trait ScrollAnimator {
    /// Move from `start_y` by `dy` pixels over `duration`
    fn start_scroll(&mut self, start_y: i32, dy: i32, duration: Duration, now: Instant);

    /// Start a velocity driven transition that stays within `[min_y, max_y]`
    ///
    /// `velocity_y` is in pixels per second.
    fn fling(&mut self, start_y: i32, velocity_y: i32, min_y: i32, max_y: i32, now: Instant);

    /// Advance the timeline to `now`
    ///
    /// Returns false once the animation had already finished before this call.
    fn compute_scroll_offset(&mut self, now: Instant) -> bool;

    fn curr_y(&self) -> i32;

    fn final_y(&self) -> i32;

    fn is_finished(&self) -> bool;

    fn force_finished(&mut self, finished: bool);
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    Scroll { dy: i32 },
    Fling { velocity: f32, min_y: i32, max_y: i32 },
}

/// Default [`ScrollAnimator`]
#[derive(Debug, Clone)]
pub struct Scroller {
    mode: Mode,
    start_y: i32,
    curr_y: i32,
    final_y: i32,
    started_at: Instant,
    duration: Duration,
    deceleration: f32,
    finished: bool,
}

impl Default for Scroller {
    fn default() -> Self {
        Self::new()
    }
}

impl Scroller {
    pub fn new() -> Self {
        Self {
            mode: Mode::Scroll { dy: 0 },
            start_y: 0,
            curr_y: 0,
            final_y: 0,
            started_at: Instant::from_ticks(0),
            duration: Duration::from_ticks(0),
            deceleration: DEFAULT_DECELERATION,
            finished: true,
        }
    }

    /// Use a different fling deceleration (pixels per second squared)
    pub fn with_deceleration(mut self, deceleration: f32) -> Self {
        if deceleration > 0.0 {
            self.deceleration = deceleration;
        }
        self
    }

    /// Total length of the running animation
    pub fn duration(&self) -> Duration {
        self.duration
    }

    fn progress(&self, now: Instant) -> f32 {
        let total = self.duration.as_micros();
        if total == 0 {
            return 1.0;
        }

        let elapsed = now.saturating_duration_since(self.started_at).as_micros();
        if elapsed >= total {
            1.0
        } else {
            elapsed as f32 / total as f32
        }
    }
}

impl ScrollAnimator for Scroller {
    fn start_scroll(&mut self, start_y: i32, dy: i32, duration: Duration, now: Instant) {
        self.mode = Mode::Scroll { dy };
        self.start_y = start_y;
        self.curr_y = start_y;
        self.final_y = start_y.saturating_add(dy);
        self.started_at = now;
        self.duration = duration;
        self.finished = false;
    }

    fn fling(&mut self, start_y: i32, velocity_y: i32, min_y: i32, max_y: i32, now: Instant) {
        let velocity = velocity_y as f32;
        let seconds = abs(velocity) / self.deceleration;
        // v * t / 2 under constant deceleration
        let distance = round(velocity * seconds / 2.0);

        self.mode = Mode::Fling {
            velocity,
            min_y,
            max_y,
        };
        self.start_y = start_y;
        self.curr_y = start_y;
        self.final_y = start_y.saturating_add(distance).clamp(min_y, max_y);
        self.started_at = now;
        self.duration = Duration::from_micros((seconds * 1_000_000.0) as u64);
        self.finished = false;
    }

    fn compute_scroll_offset(&mut self, now: Instant) -> bool {
        if self.finished {
            return false;
        }

        let t = self.progress(now);
        if t >= 1.0 {
            self.curr_y = self.final_y;
            self.finished = true;
            return true;
        }

        match self.mode {
            Mode::Scroll { dy } => {
                let inv = 1.0 - t;
                let eased = 1.0 - inv * inv * inv;
                self.curr_y = self.start_y.saturating_add(round(dy as f32 * eased));
            }
            Mode::Fling {
                velocity,
                min_y,
                max_y,
            } => {
                let secs = self.duration.as_micros() as f32 / 1_000_000.0 * t;
                let braking = signum(velocity) * self.deceleration * secs * secs / 2.0;
                let travelled = velocity * secs - braking;
                self.curr_y = self
                    .start_y
                    .saturating_add(round(travelled))
                    .clamp(min_y, max_y);

                // Hit a bound before running out of speed
                if self.curr_y == self.final_y {
                    self.finished = true;
                }
            }
        }

        true
    }

    fn curr_y(&self) -> i32 {
        self.curr_y
    }

    fn final_y(&self) -> i32 {
        self.final_y
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn force_finished(&mut self, finished: bool) {
        self.finished = finished;
    }
}

fn abs(value: f32) -> f32 {
    if value < 0.0 { -value } else { value }
}

fn signum(value: f32) -> f32 {
    if value < 0.0 { -1.0 } else { 1.0 }
}

/// Round half away from zero (no libm on the target)
pub(crate) fn round(value: f32) -> i32 {
    if value >= 0.0 {
        (value + 0.5) as i32
    } else {
        (value - 0.5) as i32
    }
}
