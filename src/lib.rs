//! # colorkit
//!
//! A pure-Rust library for the color layer of GUI theming: a fixed
//! registry of 550+ named colors, parsing of the usual textual color
//! encodings, nearest-named-color lookup, and representation-preserving
//! color transforms.
//!
//! ## Capabilities
//!
//! - **Named colors** - the ~140 web-standard names plus the extended
//!   X11-style palette, with case-insensitive lookup
//! - **Parsing** - hex strings, comma-separated channel lists, registry
//!   names, and caller-defined palette roles
//! - **Nearest match** - map any RGB value to the closest named color by
//!   Euclidean distance
//! - **Transforms** - lighten, darken, subdued, outline, monochrome, and
//!   hue-wheel complements, preserving int/float representation
//! - **Tuple codec** - lossless-as-possible conversion between 0-255
//!   integer and 0.0-1.0 float channels
//!
//! ## Quick Start
//!
//! ### Resolving colors
//!
//! ```
//! use colorkit::prelude::*;
//!
//! // any recognized encoding normalizes to the same tuple
//! let navy: ColorTuple = "navy".parse()?;
//! assert_eq!(navy, parse_color("#000080").unwrap());
//! assert_eq!(navy, parse_color("(0, 0, 128)").unwrap());
//!
//! // nearest named color by Euclidean distance
//! assert_eq!(find_nearest([0, 0, 130], false).name, "navy");
//! # Ok::<(), colorkit::Error>(())
//! ```
//!
//! ### Deriving variants
//!
//! ```
//! use colorkit::prelude::*;
//!
//! let badge = ColorTuple::rgb(0, 0, 0);
//! assert_eq!(lighter(badge), ColorTuple::rgb(127, 127, 127));
//! assert_eq!(outline(badge), ColorTuple::rgb(255, 255, 255));
//!
//! // complements come back in the representation you gave
//! let complement = complementary(ColorTuple::rgb(255, 0, 0), 0.0);
//! assert_eq!(complement, vec![ColorTuple::rgb(0, 255, 255)]);
//! ```
//!
//! ### Using the Prelude
//!
//! The prelude provides convenient access to commonly used items:
//!
//! ```
//! use colorkit::prelude::*;
//!
//! // Now you have access to:
//! // - ColorTuple, ColorEntry, Palette
//! // - parse_color, find_nearest, the transform functions
//! // - Error, Result, and more
//! ```

pub mod error;
pub mod parse;
pub mod registry;
pub mod transform;
pub mod tuple;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::parse::{Palette, parse_color, parse_color_or, parse_color_with};
    pub use crate::registry::{
        ColorEntry, all_entries, default_entry, distance, find_nearest, find_nearest_str,
        find_nearest_tuple, lookup_by_name, require,
    };
    pub use crate::transform::{
        complementary, darker, hsv_to_rgb, lighter, monochrome, outline, rgb_to_hsv, subdued,
    };
    pub use crate::tuple::{ColorTuple, is_color_slice, is_float_slice};
}
