// src/ui/components/mod.rs
//! UI components library

pub mod wheel;

pub use wheel::WheelView;
