//! Styling system for the wheel
//!
//! # Organization
//!
//! - [`colors`] - 8-bit RGB colors, hex parsing and RGB565 conversion
//! - [`style`] - `WheelStyle`, text sizes and alignment
//!
//! # Examples
//!
//! ```ignore
//! use ui::styling::*;
//!
//! let style = WheelStyle::new()
//!     .with_side_text(Color::parse_hex("#a0a0a0")?, TextSize::Medium)
//!     .with_margins(8, 10);
//! ```

pub mod colors;
pub mod style;

pub use colors::{Color, GRAY, WHITE};
pub use style::{TextAlign, TextSize, WheelStyle};
