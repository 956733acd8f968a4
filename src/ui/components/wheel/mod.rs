// src/ui/components/wheel/mod.rs
//! Touch wheel picker
//!
//! # Organization
//!
//! - [`metrics`] - font metrics, item height and text baselines
//! - [`scroll_state`] - selected index and sub-item offset bookkeeping
//! - [`gesture`] - press/drag/release to down/scroll/fling/tap recognition
//! - [`animation`] - timed and velocity driven scroll timelines
//! - [`steps`] - the single pending animation step
//! - [`bridge`] - gestures and animation steps applied to the scroll state
//! - [`render`] - the center, caption and next-item text layers
//! - [`view`] - the widget the host talks to
//!
//! # Frame loop
//!
//! ```ignore
//! loop {
//!     let now = Instant::now();
//!     if let Some(event) = touch.poll(now) {
//!         wheel.handle_touch(event);
//!     }
//!     wheel.update(now);
//!     if wheel.is_dirty() {
//!         wheel.draw(&mut display)?;
//!         wheel.mark_clean();
//!     }
//!     Timer::after(FRAME).await;
//! }
//! ```

pub mod animation;
pub mod bridge;
pub mod gesture;
pub mod metrics;
pub mod render;
pub mod scroll_state;
pub mod steps;
pub mod view;

pub use animation::{ScrollAnimator, Scroller};
pub use bridge::GestureBridge;
pub use gesture::{GestureDetector, GestureListener, GestureRecognizer};
pub use metrics::{FontMetrics, WheelMetrics};
pub use render::WheelFrame;
pub use scroll_state::{Justify, ScrollState};
pub use steps::{StepQueue, StepTag};
pub use view::WheelView;
