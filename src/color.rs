//! SwatchColor: the public color representation for floem-hexpicker.
//!
//! Stores RGBA as 8-bit channels so that swatch colors compare exactly, which
//! the selection logic relies on when matching a color back to its swatch.

use crate::error::PickerError;
use crate::math;

/// RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwatchColor {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl SwatchColor {
    pub const TRANSPARENT: Self = Self::from_rgba8(0, 0, 0, 0);
    pub const WHITE: Self = Self::from_rgb8(255, 255, 255);
    pub const GRAY: Self = Self::from_rgb8(136, 136, 136);

    /// Red component (0–255).
    pub fn r(&self) -> u8 {
        self.r
    }
    /// Green component (0–255).
    pub fn g(&self) -> u8 {
        self.g
    }
    /// Blue component (0–255).
    pub fn b(&self) -> u8 {
        self.b
    }
    /// Alpha component (0–255).
    pub fn a(&self) -> u8 {
        self.a
    }

    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create from normalized channels. Values outside 0.0–1.0 are clamped.
    pub fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        fn channel(v: f64) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
            a: channel(a),
        }
    }

    /// Create an opaque color from HSV, with hue in degrees and the
    /// remaining components in 0.0–1.0.
    pub fn from_hsv(hue_degrees: f64, saturation: f64, value: f64) -> Self {
        let (r, g, b) = math::hsb_to_rgb(
            hue_degrees / 360.0,
            saturation.clamp(0.0, 1.0),
            value.clamp(0.0, 1.0),
        );
        Self::from_rgba(r, g, b, 1.0)
    }

    /// Normalized `(r, g, b, a)`, handy for renderers taking floats.
    pub fn to_rgba_f64(&self) -> (f64, f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
            f64::from(self.a) / 255.0,
        )
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Parse a hex string (with or without `#`, 3, 6, or 8 chars).
    ///
    /// 8-char hex is interpreted as RRGGBBAA. 3 and 6-char hex default to full opacity.
    pub fn from_hex(hex: &str) -> Result<Self, PickerError> {
        let invalid = || PickerError::InvalidColor(hex.to_string());
        let stripped = hex.trim().trim_start_matches('#');
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&stripped[range], 16).map_err(|_| invalid())
        };
        match stripped.len() {
            3 => Ok(Self::from_rgb8(
                byte(0..1)? * 17,
                byte(1..2)? * 17,
                byte(2..3)? * 17,
            )),
            6 => Ok(Self::from_rgb8(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
            8 => Ok(Self::from_rgba8(
                byte(0..2)?,
                byte(2..4)?,
                byte(4..6)?,
                byte(6..8)?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Format as uppercase hex (no `#` prefix).
    ///
    /// Returns 6 chars (RRGGBB) for opaque colors, 8 chars (RRGGBBAA) otherwise.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for SwatchColor {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}
