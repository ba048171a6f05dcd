//! RGB and HSV color values.
//!
//! Components live in `[0, 1]`. Constructors clip out-of-range channels;
//! HSV hue wraps around the color wheel instead.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::geometric_utils::{clip, cycle};

/// An RGB color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

/// An HSV color with hue in `[0, 1)` and saturation/value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    /// Hue as a fraction of a full turn.
    pub h: f32,
    /// Saturation.
    pub s: f32,
    /// Value (brightness).
    pub v: f32,
}

impl Rgb {
    /// Creates a color, clipping each channel into `[0, 1]`.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: clip(r, 0.0, 1.0),
            g: clip(g, 0.0, 1.0),
            b: clip(b, 0.0, 1.0),
        }
    }

    /// Creates a color from 8-bit channels.
    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Converts with the six-sector formula on `h * 6`.
    pub fn from_hsv(hsv: Hsv) -> Self {
        let i = hsv.h * 6.0;
        let c = hsv.s * hsv.v;
        let x = c * (1.0 - (i % 2.0 - 1.0).abs());
        let m = hsv.v - c;
        if i < 1.0 {
            Self::new(c + m, x + m, m)
        } else if i < 2.0 {
            Self::new(x + m, c + m, m)
        } else if i < 3.0 {
            Self::new(m, c + m, x + m)
        } else if i < 4.0 {
            Self::new(m, x + m, c + m)
        } else if i < 5.0 {
            Self::new(x + m, m, c + m)
        } else {
            Self::new(c + m, m, x + m)
        }
    }

    /// Converts to HSV.
    pub fn to_hsv(self) -> Hsv {
        Hsv::from_rgb(self)
    }

    /// 8-bit channels, each floored rather than rounded.
    pub fn to_bytes(self) -> [u8; 3] {
        [channel_byte(self.r), channel_byte(self.g), channel_byte(self.b)]
    }

    /// Packs the channels as `0xRRGGBB`.
    pub fn to_integer(self) -> u32 {
        let [r, g, b] = self.to_bytes();
        (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }

    /// Formats as `#rrggbb`.
    pub fn to_hex_code(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Hsv {
    /// Creates a color, wrapping the hue and clipping saturation and value.
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self {
            h: cycle(h, 0.0, 1.0),
            s: clip(s, 0.0, 1.0),
            v: clip(v, 0.0, 1.0),
        }
    }

    /// Creates a color from a hue in degrees and 8-bit saturation/value.
    pub fn from_degrees(h: f32, s: f32, v: f32) -> Self {
        Self::new(h / 360.0, s / 255.0, v / 255.0)
    }

    /// Inverse of [`Rgb::from_hsv`]. Achromatic colors get hue 0.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let max = rgb.r.max(rgb.g).max(rgb.b);
        let min = rgb.r.min(rgb.g).min(rgb.b);
        let s = if max == 0.0 { 0.0 } else { (max - min) / max };
        let h = if max == min {
            0.0
        } else if min == rgb.b {
            (rgb.g - rgb.r) / (6.0 * (max - min)) + 1.0 / 6.0
        } else if min == rgb.r {
            (rgb.b - rgb.g) / (6.0 * (max - min)) + 3.0 / 6.0
        } else {
            (rgb.r - rgb.b) / (6.0 * (max - min)) + 5.0 / 6.0
        };
        Self::new(h, s, max)
    }

    /// Converts to RGB.
    pub fn to_rgb(self) -> Rgb {
        Rgb::from_hsv(self)
    }

    /// Packs the RGB equivalent as `0xRRGGBB`.
    pub fn to_integer(self) -> u32 {
        self.to_rgb().to_integer()
    }

    /// Formats the RGB equivalent as `#rrggbb`.
    pub fn to_hex_code(self) -> String {
        self.to_rgb().to_hex_code()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HSV({}, {}, {})", self.h, self.s, self.v)
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        Self::from_hsv(hsv)
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

fn channel_byte(c: f32) -> u8 {
    (c * 255.0).floor().clamp(0.0, 255.0) as u8
}
