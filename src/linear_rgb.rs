//! A [`ColorMixer`] averaging [`RGB8`] colors in linear light.
//!
//! This is additive mixing: yellow and blue give gray, not green.
//! Pigment-like mixers plug in through the same trait.

use std::fmt;
use lazy_static::lazy_static;
use rgb::RGB8;
use crate::ColorMixer;

lazy_static! {
    /// sRGB component → linear light in \[0, 1\].
    static ref SRGB_TO_LINEAR: [f64; 256] = {
        let mut t = [0.; 256];
        for (v, lin) in t.iter_mut().enumerate() {
            let x = v as f64 / 255.;
            *lin = if x <= 0.04045 { x / 12.92 }
                   else { ((x + 0.055) / 1.055).powf(2.4) };
        }
        t
    };
}

#[inline]
fn decode(c: u8) -> f64 { SRGB_TO_LINEAR[c as usize] }

fn encode(lin: f64) -> u8 {
    let l = lin.clamp(0., 1.);
    let x = if l <= 0.003_130_8 { 12.92 * l }
            else { 1.055 * l.powf(1. / 2.4) - 0.055 };
    (x * 255. + 0.5).floor().clamp(0., 255.) as u8
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    Empty,
    InvalidLength,
    InvalidHex,
    InvalidFunc,
    OutOfRange,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ColorParseError::*;
        let msg = match self {
            Empty => "empty color string",
            InvalidLength => "invalid hex length",
            InvalidHex => "invalid hex digits",
            InvalidFunc => "invalid rgb() function",
            OutOfRange => "component out of range",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ColorParseError {}

/// `RRGGBB` or `RGB`, without the leading `#`.
fn parse_hex(hex: &str) -> Result<RGB8, ColorParseError> {
    use ColorParseError::*;
    let nibble = |c: u8| (c as char).to_digit(16).map(|d| d as u8);
    let b = hex.as_bytes();
    let byte = |i: usize| -> Result<u8, ColorParseError> {
        let hi = nibble(b[i]).ok_or(InvalidHex)?;
        let lo = nibble(b[i + 1]).ok_or(InvalidHex)?;
        Ok(hi << 4 | lo)
    };
    match b.len() {
        3 => {
            let r = nibble(b[0]).ok_or(InvalidHex)?;
            let g = nibble(b[1]).ok_or(InvalidHex)?;
            let bl = nibble(b[2]).ok_or(InvalidHex)?;
            Ok(RGB8 { r: r * 17, g: g * 17, b: bl * 17 })
        }
        6 => Ok(RGB8 { r: byte(0)?, g: byte(2)?, b: byte(4)? }),
        _ => Err(InvalidLength),
    }
}

/// Arguments of `rgb(r, g, b)`, each an integer in 0 ..= 255.
fn parse_css_rgb(args: &str) -> Result<RGB8, ColorParseError> {
    use ColorParseError::*;
    let nums: Vec<&str> = args.split(',').map(|t| t.trim()).collect();
    if nums.len() != 3 {
        return Err(InvalidFunc);
    }
    let mut c = [0u8; 3];
    for (ci, n) in c.iter_mut().zip(nums) {
        let v: i64 = n.parse().map_err(|_| InvalidFunc)?;
        *ci = u8::try_from(v).map_err(|_| OutOfRange)?;
    }
    Ok(RGB8 { r: c[0], g: c[1], b: c[2] })
}

/// Mixes [`RGB8`] colors by averaging their linear-light components.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearRgbMixer;

impl ColorMixer for LinearRgbMixer {
    type Color = RGB8;
    type Error = ColorParseError;

    /// Accepts `#RRGGBB`, `#RGB` (the `#` is optional, digits are
    /// case-insensitive) and `rgb(r, g, b)`.  Surrounding spaces are
    /// ignored.
    fn parse(&self, text: &str) -> Result<RGB8, ColorParseError> {
        let s = text.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty)
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex)
        }
        let lower = s.to_ascii_lowercase();
        match lower.strip_prefix("rgb(").and_then(|a| a.strip_suffix(')')) {
            Some(args) => parse_css_rgb(args),
            None => parse_hex(s),
        }
    }

    /// Weighted mean in linear light.  Weights are relative: they are
    /// divided by their sum.  Without positive weight, black.
    fn mix(&self, colors: &[(&RGB8, f64)]) -> RGB8 {
        let total: f64 = colors.iter().map(|&(_, w)| w.max(0.)).sum();
        if !(total > 0.) {
            return RGB8 { r: 0, g: 0, b: 0 }
        }
        let (mut r, mut g, mut b) = (0., 0., 0.);
        for &(c, w) in colors {
            let w = w.max(0.) / total;
            r += w * decode(c.r);
            g += w * decode(c.g);
            b += w * decode(c.b);
        }
        RGB8 { r: encode(r), g: encode(g), b: encode(b) }
    }

    fn to_hex(&self, c: &RGB8) -> String {
        format!("#{:02X}{:02X}{:02X}", c.r, c.g, c.b)
    }
}
