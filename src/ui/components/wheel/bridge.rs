// src/ui/components/wheel/bridge.rs
//! Glue between recognized gestures, the animation timeline and the scroll
//! state
//!
//! Drags feed [`ScrollState::apply_delta`] directly. Flings and settles run on
//! the [`ScrollAnimator`]; each frame [`GestureBridge::step`] samples it and
//! turns the movement since the previous sample into another delta.

use embassy_time::{Duration, Instant};
use log::{debug, trace};

use super::animation::ScrollAnimator;
use super::gesture::GestureListener;
use super::scroll_state::{Justify, MIN_DELTA_FOR_SCROLLING, ScrollState};
use super::steps::{StepQueue, StepTag};
use crate::ui::core::TouchEvent;

/// Length of the snap onto an item boundary
pub const SCROLLING_DURATION: Duration = Duration::from_millis(400);

#[derive(Debug, Clone)]
pub struct GestureBridge<A: ScrollAnimator> {
    state: ScrollState,
    animator: A,
    steps: StepQueue,
    last_scroll_y: i32,
}

impl<A: ScrollAnimator> GestureBridge<A> {
    pub fn new(state: ScrollState, animator: A) -> Self {
        Self {
            state,
            animator,
            steps: StepQueue::new(),
            last_scroll_y: 0,
        }
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ScrollState {
        &mut self.state
    }

    pub fn steps(&self) -> &StepQueue {
        &self.steps
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// True while a fling or settle still has frames to run
    pub fn is_animating(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Stop any running animation where it is
    pub fn cancel(&mut self) {
        self.animator.force_finished(true);
        self.steps.clear();
    }

    /// Snap onto the nearest item boundary
    pub fn justify(&mut self, now: Instant) {
        self.last_scroll_y = 0;

        match self.state.justify() {
            Justify::Settle { distance } => {
                debug!(
                    "wheel: settling {}px from offset {} at item {}",
                    distance,
                    self.state.offset(),
                    self.state.selected()
                );
                self.animator.start_scroll(0, distance, SCROLLING_DURATION, now);
                self.steps.post(StepTag::Settle);
            }
            Justify::Settled => debug!("wheel: settled on item {}", self.state.selected()),
            Justify::Empty => {}
        }
    }

    /// Run the pending step, if any
    ///
    /// Returns whether another step is pending afterwards.
    pub fn step(&mut self, now: Instant) -> bool {
        let Some(tag) = self.steps.take() else {
            return false;
        };

        self.animator.compute_scroll_offset(now);
        let curr_y = self.animator.curr_y();
        let delta = self.last_scroll_y - curr_y;
        self.last_scroll_y = curr_y;
        if delta != 0 {
            trace!("wheel: {:?} step {}px", tag, delta);
            self.state.apply_delta(delta);
        }

        if curr_y.abs_diff(self.animator.final_y()) < MIN_DELTA_FOR_SCROLLING as u32 {
            self.animator.force_finished(true);
        }

        if !self.animator.is_finished() {
            self.steps.post(tag);
        } else {
            match tag {
                StepTag::Fling => self.justify(now),
                StepTag::Settle => {
                    self.state.finish();
                    debug!("wheel: settled on item {}", self.state.selected());
                }
            }
        }

        !self.steps.is_empty()
    }
}

impl<A: ScrollAnimator> GestureListener for GestureBridge<A> {
    fn on_down(&mut self, _event: &TouchEvent) -> bool {
        if self.state.is_scrolling() {
            trace!("wheel: down interrupts running animation");
            self.cancel();
            return true;
        }
        false
    }

    fn on_scroll(&mut self, _event: &TouchEvent, distance_y: i32) -> bool {
        if !self.state.is_scrolling() {
            debug!("wheel: drag started on item {}", self.state.selected());
        }
        self.state.start_scrolling();
        self.state.apply_delta(distance_y);
        true
    }

    fn on_fling(&mut self, event: &TouchEvent, velocity_y: i32) -> bool {
        self.last_scroll_y = self.state.position();

        let (min_y, max_y) = if self.state.is_cyclic() {
            (-i32::MAX, i32::MAX)
        } else {
            let span = self.state.item_count() as i64 * self.state.item_height() as i64;
            (0, span.min(i32::MAX as i64) as i32)
        };

        debug!(
            "wheel: fling {}px/s from {} within [{}, {}]",
            velocity_y, self.last_scroll_y, min_y, max_y
        );

        self.state.start_scrolling();
        self.animator
            .fling(self.last_scroll_y, velocity_y / 2, min_y, max_y, event.time);
        self.steps.post(StepTag::Fling);
        true
    }
}
