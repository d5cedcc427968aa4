//! Color tuple codec
//!
//! Colors cross the API boundary in two representations: traditional
//! integer channels (0-255) and normalized float channels (0.0-1.0), each
//! with an optional alpha channel. [`ColorTuple`] tags the four possible
//! shapes explicitly so no caller ever has to guess which reading a bare
//! sequence of numbers was meant to have.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A transient color value: 3 or 4 channels, integer or float representation.
///
/// Transforms that accept a `ColorTuple` return their result in the same
/// representation they were given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ColorTuple {
    /// Integer RGB, channels 0-255.
    Rgb([u8; 3]),
    /// Integer RGBA, channels 0-255.
    Rgba([u8; 4]),
    /// Normalized float RGB, channels 0.0-1.0.
    FloatRgb([f64; 3]),
    /// Normalized float RGBA, channels 0.0-1.0.
    FloatRgba([f64; 4]),
}

/// Returns true iff every element reads as a normalized float channel
/// (nothing below 0.0 or above 1.0).
///
/// For the edge cases where all elements are exactly 0 or exactly 1, the
/// tie goes to "float": all 0's and 1's is rare for an integer tuple but
/// quite common for a float tuple (white, red, green, blue, cyan, ...).
pub fn is_float_slice(values: &[f64]) -> bool {
    values.iter().all(|v| (0.0..=1.0).contains(v))
}

/// Returns true iff `values` could properly represent a color: 3 or 4
/// elements, all of which fit a single consistent reading (integers 0-255,
/// or floats 0.0-1.0).
pub fn is_color_slice(values: &[f64]) -> bool {
    if !(3..=4).contains(&values.len()) {
        return false;
    }
    if values.iter().any(|&v| !(0.0..=255.0).contains(&v)) {
        return false;
    }
    let above_one = values.iter().any(|&v| v > 1.0);
    let fractional = values.iter().any(|&v| v.fract() != 0.0);
    !above_one || !fractional
}

fn float_channel(v: u8) -> f64 {
    (f64::from(v) / 255.0).min(1.0)
}

fn int_channel(v: f64) -> u8 {
    (v * 255.0).clamp(0.0, 255.0) as u8
}

impl ColorTuple {
    /// Integer RGB constructor.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb([r, g, b])
    }

    /// Integer RGBA constructor.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::Rgba([r, g, b, a])
    }

    /// Classifies a raw numeric sequence as a color tuple.
    ///
    /// An empty input yields `Ok(None)` rather than an error; a length
    /// other than 3 or 4 is a hard [`Error::InvalidArity`]. Integer-read
    /// elements outside 0-255 are clamped, not rejected.
    pub fn classify(values: &[f64]) -> Result<Option<Self>> {
        if values.is_empty() {
            return Ok(None);
        }
        if !(3..=4).contains(&values.len()) {
            return Err(Error::InvalidArity { len: values.len() });
        }
        let tuple = if is_float_slice(values) {
            match values {
                [r, g, b] => Self::FloatRgb([*r, *g, *b]),
                _ => Self::FloatRgba([values[0], values[1], values[2], values[3]]),
            }
        } else {
            let ch = |v: f64| v.clamp(0.0, 255.0) as u8;
            match values {
                [r, g, b] => Self::Rgb([ch(*r), ch(*g), ch(*b)]),
                _ => Self::Rgba([ch(values[0]), ch(values[1]), ch(values[2]), ch(values[3])]),
            }
        };
        Ok(Some(tuple))
    }

    /// True for the normalized float representations.
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::FloatRgb(_) | Self::FloatRgba(_))
    }

    /// True when an alpha channel is present.
    pub const fn is_rgba(&self) -> bool {
        matches!(self, Self::Rgba(_) | Self::FloatRgba(_))
    }

    /// Number of channels (3 or 4).
    pub const fn len(&self) -> usize {
        if self.is_rgba() { 4 } else { 3 }
    }

    /// Always false; a tuple has at least its three color channels.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Converts to the normalized float representation.
    ///
    /// A float tuple passes through unchanged, except that supplying
    /// `alpha` overrides (or appends) the alpha channel. Integer channels
    /// divide by 255; an existing integer alpha converts along with the
    /// RGB when not overridden.
    pub fn to_float(self, alpha: Option<f64>) -> Self {
        match self {
            Self::FloatRgb([r, g, b]) => match alpha {
                Some(a) => Self::FloatRgba([r, g, b, a]),
                None => self,
            },
            Self::FloatRgba([r, g, b, _]) => match alpha {
                Some(a) => Self::FloatRgba([r, g, b, a]),
                None => self,
            },
            Self::Rgb([r, g, b]) => {
                let (r, g, b) = (float_channel(r), float_channel(g), float_channel(b));
                match alpha {
                    Some(a) => Self::FloatRgba([r, g, b, a]),
                    None => Self::FloatRgb([r, g, b]),
                }
            }
            Self::Rgba([r, g, b, old]) => {
                let a = alpha.unwrap_or_else(|| float_channel(old));
                Self::FloatRgba([float_channel(r), float_channel(g), float_channel(b), a])
            }
        }
    }

    /// Converts to the integer representation; the inverse of
    /// [`to_float`](Self::to_float).
    ///
    /// Float channels multiply by 255 and truncate, clamped to 0-255.
    pub fn to_int(self, alpha: Option<u8>) -> Self {
        match self {
            Self::Rgb([r, g, b]) => match alpha {
                Some(a) => Self::Rgba([r, g, b, a]),
                None => self,
            },
            Self::Rgba([r, g, b, _]) => match alpha {
                Some(a) => Self::Rgba([r, g, b, a]),
                None => self,
            },
            Self::FloatRgb([r, g, b]) => {
                let (r, g, b) = (int_channel(r), int_channel(g), int_channel(b));
                match alpha {
                    Some(a) => Self::Rgba([r, g, b, a]),
                    None => Self::Rgb([r, g, b]),
                }
            }
            Self::FloatRgba([r, g, b, old]) => {
                let a = alpha.unwrap_or_else(|| int_channel(old));
                Self::Rgba([int_channel(r), int_channel(g), int_channel(b), a])
            }
        }
    }

    /// The integer RGB channels, converting and dropping alpha as needed.
    pub fn int_rgb(&self) -> [u8; 3] {
        match *self {
            Self::Rgb(rgb) => rgb,
            Self::Rgba([r, g, b, _]) => [r, g, b],
            Self::FloatRgb([r, g, b]) | Self::FloatRgba([r, g, b, _]) => {
                [int_channel(r), int_channel(g), int_channel(b)]
            }
        }
    }

    /// The alpha channel in integer form, if one is present.
    pub fn int_alpha(&self) -> Option<u8> {
        match self {
            Self::Rgba([.., a]) => Some(*a),
            Self::FloatRgba([.., a]) => Some(int_channel(*a)),
            Self::Rgb(_) | Self::FloatRgb(_) => None,
        }
    }

    /// The average of the integer RGB channels, truncated.
    ///
    /// The alpha channel is ignored. This is the mean-based brightness
    /// used for light/dark decisions, distinct from HSV "Value" (the max
    /// channel).
    pub fn brightness(&self) -> u8 {
        let [r, g, b] = self.int_rgb();
        ((u16::from(r) + u16::from(g) + u16::from(b)) / 3) as u8
    }
}

impl From<[u8; 3]> for ColorTuple {
    fn from(rgb: [u8; 3]) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<[u8; 4]> for ColorTuple {
    fn from(rgba: [u8; 4]) -> Self {
        Self::Rgba(rgba)
    }
}

impl From<[f64; 3]> for ColorTuple {
    fn from(rgb: [f64; 3]) -> Self {
        Self::FloatRgb(rgb)
    }
}

impl From<[f64; 4]> for ColorTuple {
    fn from(rgba: [f64; 4]) -> Self {
        Self::FloatRgba(rgba)
    }
}

impl From<(u8, u8, u8)> for ColorTuple {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::Rgb([r, g, b])
    }
}

impl From<(u8, u8, u8, u8)> for ColorTuple {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::Rgba([r, g, b, a])
    }
}
