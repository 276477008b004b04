//! Outline Colors
//!
//! Hex parsing for configured outline colors and the animated rainbow used
//! when no color is configured.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Seconds for the rainbow outline to cycle through every hue.
pub const RAINBOW_PERIOD_SECS: f64 = 4.0;

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `RRGGBB` (case-insensitive), fully opaque.
    pub fn from_hex(hex: &str) -> Result<Self, ConfigError> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor(hex.to_string()));
        }
        let packed = u32::from_str_radix(digits, 16)
            .map_err(|_| ConfigError::InvalidColor(hex.to_string()))?;
        let (r, g, b) = unpack_color(packed);
        Ok(Self::new(r, g, b, 255))
    }

    #[must_use]
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Hue cycling over time, full saturation and value.
    pub fn rainbow(time_secs: f64) -> Self {
        let hue = (time_secs / RAINBOW_PERIOD_SECS).rem_euclid(1.0) * 360.0;
        let [r, g, b] = hsv_to_rgb(hue as f32, 1.0, 1.0);
        Self::new(to_u8(r), to_u8(g), to_u8(b), 255)
    }}

/// Unpack a u32 color value (0x00RRGGBB) into RGB components
#[inline]
pub fn unpack_color(packed: u32) -> (u8, u8, u8) {
    let r = ((packed >> 16) & 0xFF) as u8;
    let g = ((packed >> 8) & 0xFF) as u8;
    let b = (packed & 0xFF) as u8;
    (r, g, b)
}

#[inline]
fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert HSV color values to RGB.
///
/// - `h`: hue in degrees (0.0..360.0)
/// - `s`: saturation (0.0..1.0)
/// - `v`: value/brightness (0.0..1.0)
fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let h = h % 360.0;
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r1, g1, b1) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    [r1 + m, g1 + m, b1 + m]
}
