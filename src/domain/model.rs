use crate::core::parser::ColorParser;
use crate::utils::error::MixerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An RGBA color, every channel in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 255)
    }

    /// `#rrggbbaa`, lowercase.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Hue in degrees, saturation and lightness in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    #[default]
    Mix,
    Lowest,
    Highest,
    MixSaturate,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Mix, Mode::Lowest, Mode::Highest, Mode::MixSaturate];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Mix => "mix",
            Mode::Lowest => "lowest",
            Mode::Highest => "highest",
            Mode::MixSaturate => "mix-saturate",
        }
    }

    /// Unknown modes fall back to `mix` with a warning.
    pub fn resolve(value: &str) -> Mode {
        match value.parse() {
            Ok(mode) => mode,
            Err(e) => {
                tracing::warn!("⚠️ {}. The mode value was set to the default (mix)", e);
                Mode::Mix
            }
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = MixerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| MixerError::InvalidModeError {
                mode: s.to_string(),
            })
    }
}

/// Where a raw token came from. Line and position are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum TokenOrigin {
    File { line: usize },
    Cli { position: usize },
}

impl fmt::Display for TokenOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenOrigin::File { line } => write!(f, "line {} of the colors file", line),
            TokenOrigin::Cli { position } => write!(f, "CLI argument {}", position),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawToken {
    pub text: String,
    pub origin: TokenOrigin,
}

impl RawToken {
    pub fn new(text: impl Into<String>, origin: TokenOrigin) -> Self {
        Self {
            text: text.into(),
            origin,
        }
    }

    /// Lines of a colors file that are not empty once normalized, numbered from 1.
    pub fn from_lines(content: &str) -> Vec<RawToken> {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !ColorParser::normalize(line).is_empty())
            .map(|(i, line)| RawToken::new(line, TokenOrigin::File { line: i + 1 }))
            .collect()
    }

    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Vec<RawToken> {
        args.iter()
            .enumerate()
            .map(|(i, arg)| RawToken::new(arg.as_ref(), TokenOrigin::Cli { position: i + 1 }))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RejectionKind {
    Format,
    Range,
}

/// A token dropped at the parsing boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub token: String,
    pub origin: TokenOrigin,
    pub kind: RejectionKind,
    pub reason: String,
}

/// Everything the core needs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixRequest {
    pub mode: Mode,
    pub tokens: Vec<RawToken>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
    pub hex: String,
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl AggregationResult {
    pub fn new(color: Color, hsl: Hsl) -> Self {
        Self {
            red: color.red,
            green: color.green,
            blue: color.blue,
            alpha: color.alpha,
            hex: color.to_hex(),
            hue: hsl.hue,
            saturation: hsl.saturation,
            lightness: hsl.lightness,
        }
    }

    pub fn color(&self) -> Color {
        Color::new(self.red, self.green, self.blue, self.alpha)
    }

    /// Copy with the HSL fields rounded to `precision` decimal places.
    pub fn rounded(&self, precision: u32) -> Self {
        let factor = 10f64.powi(precision as i32);
        let round = |value: f64| (value * factor).round_ties_even() / factor;
        Self {
            hue: round(self.hue),
            saturation: round(self.saturation),
            lightness: round(self.lightness),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixOutcome {
    pub mode: Mode,
    pub result: AggregationResult,
    pub accepted: usize,
    pub rejected: Vec<Rejection>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
