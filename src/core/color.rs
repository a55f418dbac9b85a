/*
 * This module is the color model engine backing the color picker. It converts
 * between the canonical `ColorValue` (integer RGB channels plus a float alpha),
 * its 8-digit hex serialization, and the HSV and HSL cylinders used by the
 * picker's saturation/value plane and sliders.
 *
 * Every function here is pure: no hidden state, no I/O, and alpha is carried
 * through each conversion verbatim. Hex parsing is strict (see `ColorError`), so
 * no `NaN` component can ever enter the model.
 */
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    InvalidLength(usize),
    InvalidDigit(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidLength(len) => {
                write!(f, "Hex color must have 6 or 8 digits, got {len}")
            }
            ColorError::InvalidDigit(segment) => {
                write!(f, "Hex color contains a non-hex segment: '{segment}'")
            }
        }
    }
}

impl std::error::Error for ColorError {}

pub type Result<T> = std::result::Result<T, ColorError>;

/*
 * A color as the caller owns it. Channels are 0..=255, alpha is 0.0..=1.0.
 * The canonical serialized form is `#RRGGBBAA` (see `rgb_to_hex`).
 */
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorValue {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl ColorValue {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        ColorValue { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        ColorValue { r, g, b, a: 1.0 }
    }

    // Shown by consumers when a value cannot be displayed.
    pub const NEUTRAL: ColorValue = ColorValue::opaque(128, 128, 128);
}

impl Default for ColorValue {
    fn default() -> Self {
        ColorValue::opaque(0, 0, 0)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&rgb_to_hex(*self))
    }
}

// Hue in degrees [0, 360), saturation and value in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub a: f64,
}

// Hue in degrees [0, 360), saturation and lightness in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

/*
 * Parses `RRGGBB` or `RRGGBBAA` (a leading `#` is optional, digits are
 * case-insensitive). Alpha defaults to 1.0 when only six digits are given.
 * Any other length, or any segment that is not two hex digits, is rejected.
 */
pub fn hex_to_rgb(hex: &str) -> Result<ColorValue> {
    let digits = hex.trim().trim_start_matches('#');
    if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
        return Err(ColorError::InvalidLength(digits.chars().count()));
    }

    let byte_at = |index: usize| -> Result<u8> {
        let segment = &digits[index * 2..index * 2 + 2];
        // from_str_radix alone would accept a leading '+'.
        if !segment.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit(segment.to_string()));
        }
        u8::from_str_radix(segment, 16).map_err(|_| ColorError::InvalidDigit(segment.to_string()))
    };

    let r = byte_at(0)?;
    let g = byte_at(1)?;
    let b = byte_at(2)?;
    let a = if digits.len() == 8 {
        f64::from(byte_at(3)?) / 255.0
    } else {
        1.0
    };
    Ok(ColorValue { r, g, b, a })
}

/*
 * Formats a color as lowercase `#rrggbbaa`. Alpha is scaled by 255 and rounded
 * to the nearest integer, so `hex_to_rgb(rgb_to_hex(c)) == c` holds for every
 * alpha of the form k/255.
 */
pub fn rgb_to_hex(color: ColorValue) -> String {
    let alpha = unit_to_byte(color.a);
    format!(
        "#{:02x}{:02x}{:02x}{:02x}",
        color.r, color.g, color.b, alpha
    )
}

pub fn rgb_to_hsv(color: ColorValue) -> Hsv {
    let (r, g, b) = unit_channels(color);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };
    Hsv {
        h: hue_from_channels(r, g, b, max, delta),
        s,
        v: max,
        a: color.a,
    }
}

/*
 * Inverse of `rgb_to_hsv`. Hue wraps (360 behaves as 0, negatives wrap
 * upward) and saturation/value are clamped into [0, 1] before conversion.
 */
pub fn hsv_to_rgb(hsv: Hsv) -> ColorValue {
    let h = normalize_hue(hsv.h);
    let s = clamp_unit(hsv.s);
    let v = clamp_unit(hsv.v);

    let chroma = v * s;
    let (r1, g1, b1) = sector_channels(h, chroma);
    let m = v - chroma;
    ColorValue {
        r: unit_to_byte(r1 + m),
        g: unit_to_byte(g1 + m),
        b: unit_to_byte(b1 + m),
        a: hsv.a,
    }
}

pub fn rgb_to_hsl(color: ColorValue) -> Hsl {
    let (r, g, b) = unit_channels(color);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    // l == 0 or l == 1 makes the denominator zero; both are achromatic anyway.
    let s = if delta == 0.0 || l <= 0.0 || l >= 1.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    Hsl {
        h: hue_from_channels(r, g, b, max, delta),
        s: clamp_unit(s),
        l,
        a: color.a,
    }
}

pub fn hsl_to_rgb(hsl: Hsl) -> ColorValue {
    let h = normalize_hue(hsl.h);
    let s = clamp_unit(hsl.s);
    let l = clamp_unit(hsl.l);

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let (r1, g1, b1) = sector_channels(h, chroma);
    let m = l - chroma / 2.0;
    ColorValue {
        r: unit_to_byte(r1 + m),
        g: unit_to_byte(g1 + m),
        b: unit_to_byte(b1 + m),
        a: hsl.a,
    }
}

// Wraps any finite hue into [0, 360). Non-finite hues collapse to 0.
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

fn unit_channels(color: ColorValue) -> (f64, f64, f64) {
    (
        f64::from(color.r) / 255.0,
        f64::from(color.g) / 255.0,
        f64::from(color.b) / 255.0,
    )
}

// Six-sector hue. Achromatic input (delta == 0) has hue 0.
fn hue_from_channels(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let h = if max == r {
        60.0 * ((g - b) / delta)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let h = if h < 0.0 { h + 360.0 } else { h };
    normalize_hue(h)
}

/*
 * Maps a normalized hue and chroma to the (r, g, b) offsets before the
 * lightness/value shift. Sectors are half-open `[low, high)` so a boundary
 * hue such as 120 belongs to exactly one sector.
 */
fn sector_channels(h: f64, chroma: f64) -> (f64, f64, f64) {
    let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    if (0.0..60.0).contains(&h) {
        (chroma, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, chroma, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, chroma, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, chroma)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn unit_to_byte(value: f64) -> u8 {
    (clamp_unit(value) * 255.0).round() as u8
}
