//! Turns raw color tokens into validated [`Color`]s.
//!
//! Accepted shapes, after lowercasing, dropping whitespace and one leading `#`:
//! * `rgb`, `rrggbb`, `rrggbbaa` hex
//! * `r,g,b,a` decimal, 1-3 digits per field

use crate::domain::model::Color;
use crate::utils::error::{MixerError, Result};
use regex::Regex;

const HEX_PATTERN: &str = r"^([0-9a-f]{3}|[0-9a-f]{6}|[0-9a-f]{8})$";
const RGBA_PATTERN: &str = r"^([0-9]{1,3},){3}[0-9]{1,3}$";

const CHANNEL_NAMES: [&str; 4] = ["red", "green", "blue", "alpha"];

#[derive(Debug, Clone)]
pub struct ColorParser {
    hex_pattern: Regex,
    rgba_pattern: Regex,
}

impl Default for ColorParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorParser {
    pub fn new() -> Self {
        Self {
            hex_pattern: Regex::new(HEX_PATTERN).expect("hex pattern is a valid regex"),
            rgba_pattern: Regex::new(RGBA_PATTERN).expect("rgba pattern is a valid regex"),
        }
    }

    /// Lowercase, drop all whitespace, then strip a single leading `#`.
    pub fn normalize(token: &str) -> String {
        let cleaned: String = token
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();

        match cleaned.strip_prefix('#') {
            Some(rest) => rest.to_string(),
            None => cleaned,
        }
    }

    pub fn parse(&self, token: &str) -> Result<Color> {
        let normalized = Self::normalize(token);

        let channels = if self.hex_pattern.is_match(&normalized) {
            Self::hex_channels(&normalized)?
        } else if self.rgba_pattern.is_match(&normalized) {
            Self::decimal_channels(&normalized)?
        } else {
            return Err(MixerError::FormatError {
                token: token.to_string(),
            });
        };

        Self::validate_channels(token, channels)
    }

    fn hex_channels(hex: &str) -> Result<[u16; 4]> {
        let expanded = match hex.len() {
            3 => {
                let doubled: String = hex.chars().flat_map(|c| [c, c]).collect();
                format!("{}ff", doubled)
            }
            6 => format!("{}ff", hex),
            _ => hex.to_string(),
        };

        let mut channels = [0u16; 4];
        for (i, channel) in channels.iter_mut().enumerate() {
            let pair = &expanded[i * 2..i * 2 + 2];
            *channel = u16::from_str_radix(pair, 16).map_err(|_| MixerError::FormatError {
                token: hex.to_string(),
            })?;
        }
        Ok(channels)
    }

    fn decimal_channels(rgba: &str) -> Result<[u16; 4]> {
        let mut channels = [0u16; 4];
        for (i, field) in rgba.split(',').enumerate() {
            channels[i] = field.parse().map_err(|_| MixerError::FormatError {
                token: rgba.to_string(),
            })?;
        }
        Ok(channels)
    }

    fn validate_channels(token: &str, channels: [u16; 4]) -> Result<Color> {
        let mut bytes = [0u8; 4];
        for (i, value) in channels.into_iter().enumerate() {
            bytes[i] = u8::try_from(value).map_err(|_| MixerError::RangeError {
                token: token.to_string(),
                channel: CHANNEL_NAMES[i],
                value,
            })?;
        }
        let [red, green, blue, alpha] = bytes;
        Ok(Color::new(red, green, blue, alpha))
    }
}
