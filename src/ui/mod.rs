// src/ui/mod.rs
//! Wheel UI - touch wheel picker for embedded displays
//!
//! This module provides:
//! - Core traits for drawable and touchable elements
//! - Styling for the wheel's text layers
//! - The wheel component itself with its gesture, animation and
//!   rendering pieces

pub mod components;
pub mod core;
pub mod styling;

// Re-export commonly used items
pub use components::wheel::{
    GestureDetector, GestureListener, GestureRecognizer, Justify, ScrollAnimator, ScrollState,
    Scroller, StepQueue, StepTag, WheelMetrics, WheelView,
};
pub use core::{DirtyRegion, Drawable, TouchEvent, TouchPhase, TouchPoint, TouchResult, Touchable};
pub use styling::{Color, TextAlign, TextSize, WheelStyle};
