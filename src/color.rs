//! RGB color value type and its HEX/RGB/HSL representations.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced when parsing a `#rrggbb` string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("invalid hex length: expected 7 characters, got {0}")]
    Length(usize),
    #[error("invalid hex format: {0:?} must start with '#'")]
    MissingHash(String),
    #[error("invalid hex digits in {0:?}")]
    InvalidDigits(String),
}

/// One of the three color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees, saturation and lightness as fractions in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string like `#ff8800` or `#FF8800`.
    ///
    /// The leading `#` is required and exactly six hex digits must follow.
    pub fn from_hex(hex: &str) -> Result<Self, ParseColorError> {
        if hex.len() != 7 {
            return Err(ParseColorError::Length(hex.len()));
        }
        let Some(digits) = hex.strip_prefix('#') else {
            return Err(ParseColorError::MissingHash(hex.to_string()));
        };
        // from_str_radix accepts a leading '+', so check digits up front
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigits(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ParseColorError::InvalidDigits(hex.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Format as `rgb(255, 0, 0)`.
    pub fn to_rgb_string(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Format as `hsl(0, 100%, 50%)`.
    pub fn to_hsl_string(self) -> String {
        let Hsl { h, s, l } = self.to_hsl();
        // Ties round to even, like printf-style %.0f
        let hue = (h.round_ties_even() as u16) % 360;
        let sat = (s * 100.0).round_ties_even() as u8;
        let light = (l * 100.0).round_ties_even() as u8;
        format!("hsl({}, {}%, {}%)", hue, sat, light)
    }

    /// Convert to HSL.
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // achromatic
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            ((g - b) / d).rem_euclid(6.0)
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl { h: h * 60.0, s, l }
    }

    pub fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Return a copy with one channel replaced.
    pub fn with_channel(self, channel: Channel, value: u8) -> Self {
        match channel {
            Channel::Red => Self { r: value, ..self },
            Channel::Green => Self { g: value, ..self },
            Channel::Blue => Self { b: value, ..self },
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

pub const RED: Color = Color::new(255, 0, 0);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const YELLOW: Color = Color::new(255, 255, 0);
pub const MAGENTA: Color = Color::new(255, 0, 255);
pub const CYAN: Color = Color::new(0, 255, 255);
pub const WHITE: Color = Color::new(255, 255, 255);
pub const BLACK: Color = Color::new(0, 0, 0);

/// Common preset colors, in display order.
pub fn presets() -> [Color; 8] {
    [RED, GREEN, BLUE, YELLOW, MAGENTA, CYAN, WHITE, BLACK]
}
