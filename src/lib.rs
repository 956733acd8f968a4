//! Hardware-independent wheel picker widget
//!
//! This crate contains a single touch-driven "wheel" of text items (hours,
//! minutes, ...) rendered with `embedded-graphics`: the selected item is drawn
//! large in the middle, a short scale caption sits above it, and the next item
//! can optionally be drawn below. Drags, flings and taps move the wheel and an
//! animated settle snaps it back onto an item boundary.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the simulator and tests).

#![no_std]

extern crate alloc;

pub mod config;
pub mod ui;
