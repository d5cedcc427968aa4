//! Nearest-color matching
//!
//! Maps an arbitrary RGB value to the closest registry entry by Euclidean
//! distance. Exact matches are detected by integer equality before any
//! floating-point distance is computed, and both exact and near ties
//! resolve to the earliest entry in definition order.

use super::{ColorEntry, all_entries, default_entry};
use crate::parse::parse_color;
use crate::tuple::ColorTuple;

fn squared_distance(a: [u8; 3], b: [u8; 3]) -> u32 {
    let dr = i32::from(a[0]) - i32::from(b[0]);
    let dg = i32::from(a[1]) - i32::from(b[1]);
    let db = i32::from(a[2]) - i32::from(b[2]);
    (dr * dr + dg * dg + db * db) as u32
}

/// Euclidean distance between two RGB triples.
///
/// Ranges from 0.0 (equal) to ~441.67 (pure black to pure white).
pub fn distance(a: [u8; 3], b: [u8; 3]) -> f64 {
    f64::from(squared_distance(a, b)).sqrt()
}

/// Finds the registry entry closest to `rgb`.
///
/// The scan runs in definition order: the first exact match returns
/// immediately, and near ties are compared with strict `<` so the first
/// entry at a minimal distance wins. With `only_standard` the search is
/// restricted to the web-standard block. Always returns an entry.
pub fn find_nearest(rgb: [u8; 3], only_standard: bool) -> &'static ColorEntry {
    let mut best = default_entry();
    let mut best_d = u32::MAX;
    for entry in all_entries(only_standard) {
        if entry.rgb == rgb {
            tracing::trace!("exact color match for {:?}: {}", rgb, entry.name);
            return entry;
        }
        let d = squared_distance(entry.rgb, rgb);
        if d < best_d {
            best = entry;
            best_d = d;
        }
    }
    tracing::trace!(
        "nearest color to {:?}: {} at distance {:.3}",
        rgb,
        best.name,
        distance(best.rgb, rgb)
    );
    best
}

/// Finds the registry entry closest to a [`ColorTuple`].
///
/// The tuple is normalized to integer channels first; alpha never
/// participates in the distance.
pub fn find_nearest_tuple(tuple: &ColorTuple, only_standard: bool) -> &'static ColorEntry {
    find_nearest(tuple.int_rgb(), only_standard)
}

/// Parses `input` (name, hex, or numeric form) and finds the closest
/// registry entry, or `None` if the string resolves to no color at all.
pub fn find_nearest_str(input: &str, only_standard: bool) -> Option<&'static ColorEntry> {
    parse_color(input).map(|tuple| find_nearest_tuple(&tuple, only_standard))
}
