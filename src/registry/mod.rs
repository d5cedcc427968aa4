//! Named color registry
//!
//! A fixed, process-wide table of 550+ named colors: the ~140 web-standard
//! names followed by the extended X11-style palette. The table is built
//! once as constant data and never mutated, so it is safe to share across
//! threads without locking. Definition order is part of the contract:
//! exact-valued duplicates (aqua/cyan, fuchsia/magenta) resolve to the
//! earliest entry.

mod data;
mod nearest;

pub use nearest::{distance, find_nearest, find_nearest_str, find_nearest_tuple};

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::tuple::ColorTuple;

/// One named color: a stable identifier, its exact RGB triple, and the
/// standard/extended classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorEntry {
    /// Stable identifier, unique within the registry case-insensitively.
    pub name: &'static str,
    /// Exact channel values, 0-255.
    pub rgb: [u8; 3],
    /// True for the web-standard names, false for the extended palette.
    pub standard: bool,
}

impl ColorEntry {
    /// True iff all three channels are equal.
    pub const fn is_gray(&self) -> bool {
        self.rgb[0] == self.rgb[1] && self.rgb[1] == self.rgb[2]
    }

    /// The average of the RGB channels, truncated.
    pub fn brightness(&self) -> u8 {
        self.tuple().brightness()
    }

    /// The `#RRGGBB` form of this entry's value.
    pub fn hex_format(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// This entry's value as an integer [`ColorTuple`].
    pub const fn tuple(&self) -> ColorTuple {
        ColorTuple::Rgb(self.rgb)
    }

    /// This entry's value as normalized floats.
    pub fn float_rgb(&self) -> [f64; 3] {
        let [r, g, b] = self.rgb;
        [f64::from(r) / 255.0, f64::from(g) / 255.0, f64::from(b) / 255.0]
    }

    /// This entry's value as normalized floats with the given alpha.
    pub fn float_rgba(&self, alpha: f64) -> [f64; 4] {
        let [r, g, b] = self.float_rgb();
        [r, g, b, alpha]
    }
}

/// All registry entries in definition order, optionally restricted to the
/// web-standard block.
pub fn all_entries(only_standard: bool) -> impl Iterator<Item = &'static ColorEntry> {
    data::NAMED_COLORS
        .iter()
        .filter(move |entry| !only_standard || entry.standard)
}

/// The first entry in definition order, the graceful fallback for callers
/// that want *some* color rather than an error.
pub fn default_entry() -> &'static ColorEntry {
    &data::NAMED_COLORS[0]
}

fn name_index() -> &'static HashMap<String, &'static ColorEntry> {
    static INDEX: OnceLock<HashMap<String, &'static ColorEntry>> = OnceLock::new();
    INDEX.get_or_init(|| {
        data::NAMED_COLORS
            .iter()
            .map(|entry| (entry.name.to_ascii_lowercase(), entry))
            .collect()
    })
}

/// Case-insensitive exact-name lookup. Surrounding whitespace is ignored.
pub fn lookup_by_name(name: &str) -> Option<&'static ColorEntry> {
    name_index().get(&name.trim().to_ascii_lowercase()).copied()
}

/// Like [`lookup_by_name`], but a miss is a hard [`Error::NoSuchColor`]
/// carrying the attempted value.
pub fn require(name: &str) -> Result<&'static ColorEntry> {
    lookup_by_name(name).ok_or_else(|| Error::NoSuchColor(name.to_string()))
}
