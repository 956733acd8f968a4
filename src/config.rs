//! Persistable wheel configuration
//!
//! A [`WheelConfig`] bundles every style attribute plus the cyclic flag so a
//! host can keep the wheel's look in flash or on an SD card. It serializes
//! with `postcard`.

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

use crate::ui::styling::{TextAlign, WheelStyle};

/// Longest attribute text kept in an error message
const ATTR_ECHO_LEN: usize = 16;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid color attribute: {0}")]
    InvalidColor(heapless::String<ATTR_ECHO_LEN>),
    #[error("Invalid alignment attribute: {0}")]
    InvalidAlignment(u8),
    #[error("Config encode failed: {0}")]
    Encode(postcard::Error),
    #[error("Config decode failed: {0}")]
    Decode(postcard::Error),
}

impl ConfigError {
    /// Build an `InvalidColor` error echoing (a prefix of) the bad attribute
    pub(crate) fn invalid_color(value: &str) -> Self {
        let mut echo = heapless::String::new();
        for c in value.chars() {
            if echo.push(c).is_err() {
                break;
            }
        }
        ConfigError::InvalidColor(echo)
    }
}

impl TryFrom<u8> for TextAlign {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TextAlign::Left),
            1 => Ok(TextAlign::Center),
            2 => Ok(TextAlign::Right),
            other => Err(ConfigError::InvalidAlignment(other)),
        }
    }
}

/// Style plus behavior flags for one wheel
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WheelConfig {
    pub style: WheelStyle,
    /// Wrap around past the last item instead of stopping
    pub cyclic: bool,
}

impl WheelConfig {
    pub fn new(style: WheelStyle, cyclic: bool) -> Self {
        Self { style, cyclic }
    }

    /// Encode for persistence
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        postcard::to_allocvec(self).map_err(ConfigError::Encode)
    }

    /// Decode a previously persisted configuration
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(ConfigError::Decode)
    }
}
