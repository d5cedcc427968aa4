//! Color parsing
//!
//! Accepts the textual color encodings that show up in theme files and
//! declarative widget configuration (registry names, hex strings, and
//! parenthesized channel lists) and normalizes them to a [`ColorTuple`].
//! Parsing is advisory: an unrecognized string yields `None` (or a
//! caller-supplied default), never an error, except through [`FromStr`]
//! for callers that demand resolution.

use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::registry::lookup_by_name;
use crate::tuple::ColorTuple;

/// An ordered, caller-defined name → color map (e.g. palette roles like
/// "primary" or "accent") consulted before the registry, letting custom
/// names resolve through the same machinery as built-in ones.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    colors: IndexMap<String, ColorTuple>,
}

impl Palette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a named color. Names are matched the way the
    /// parser matches registry names (case-insensitive, separators
    /// ignored).
    pub fn insert(&mut self, name: &str, color: ColorTuple) {
        self.colors.insert(normalize_color_name(name), color);
    }

    /// Looks up a name, with the parser's normalization applied.
    pub fn get(&self, name: &str) -> Option<ColorTuple> {
        self.colors.get(&normalize_color_name(name)).copied()
    }

    /// Number of defined colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True when no colors are defined.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Defined names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    /// Loads a palette from a JSON object whose values are color strings
    /// in any form [`parse_color`] accepts, preserving definition order.
    ///
    /// ```
    /// use colorkit::parse::Palette;
    ///
    /// let palette = Palette::from_json_str(r##"{"accent": "#6495ED", "paper": "ivory"}"##)?;
    /// assert_eq!(palette.len(), 2);
    /// # Ok::<(), colorkit::Error>(())
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: IndexMap<String, String> = serde_json::from_str(json)?;
        let mut palette = Self::new();
        for (name, value) in raw {
            let color = parse_color(&value).ok_or_else(|| Error::Unparseable(value.clone()))?;
            palette.insert(&name, color);
        }
        Ok(palette)
    }
}

/// Lowercases a candidate color name and strips whitespace and the usual
/// separators, so "Alice Blue", "ALICE_BLUE", and "alice-blue" all reach
/// the registry as "aliceblue".
fn normalize_color_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn parse_hex(input: &str) -> Option<ColorTuple> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if !matches!(digits.len(), 6 | 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte_at = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    let (r, g, b) = (byte_at(0)?, byte_at(2)?, byte_at(4)?);
    Some(match digits.len() {
        6 => ColorTuple::Rgb([r, g, b]),
        _ => ColorTuple::Rgba([r, g, b, byte_at(6)?]),
    })
}

fn parse_numeric(input: &str) -> Option<ColorTuple> {
    let inner = input
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(input);
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if !matches!(parts.len(), 3 | 4) {
        return None;
    }
    let mut channels = [0u8; 4];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        let value: i64 = part.parse().ok()?;
        *slot = value.clamp(0, 255) as u8;
    }
    let [r, g, b, a] = channels;
    Some(match parts.len() {
        3 => ColorTuple::Rgb([r, g, b]),
        _ => ColorTuple::Rgba([r, g, b, a]),
    })
}

/// Parses any recognized textual color encoding, trying in order: a
/// registry name, a hex string (`#RRGGBB` / `#RRGGBBAA`, `#` optional),
/// and a comma-separated integer list (optionally parenthesized).
///
/// Returns `None` for anything unrecognized; parsing is advisory, not
/// safety-critical.
pub fn parse_color(input: &str) -> Option<ColorTuple> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(entry) = lookup_by_name(&normalize_color_name(trimmed)) {
        tracing::trace!("parsed {:?} as registry name {}", input, entry.name);
        return Some(entry.tuple());
    }
    if let Some(tuple) = parse_hex(trimmed) {
        return Some(tuple);
    }
    if let Some(tuple) = parse_numeric(trimmed) {
        return Some(tuple);
    }
    tracing::debug!("no color encoding matched {:?}", input);
    None
}

/// Like [`parse_color`], but consults the caller's palette before the
/// registry.
pub fn parse_color_with(input: &str, palette: &Palette) -> Option<ColorTuple> {
    palette.get(input).or_else(|| parse_color(input))
}

/// Like [`parse_color`], but an unrecognized input yields `default`.
pub fn parse_color_or(input: &str, default: ColorTuple) -> ColorTuple {
    parse_color(input).unwrap_or(default)
}

impl FromStr for ColorTuple {
    type Err = Error;

    /// Strict parsing for callers that demand resolution; the failure
    /// carries the attempted input.
    fn from_str(s: &str) -> Result<Self> {
        parse_color(s).ok_or_else(|| Error::Unparseable(s.to_string()))
    }
}
