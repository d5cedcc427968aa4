//! Error types for `colorkit`

use thiserror::Error;

/// The error type for `colorkit` operations.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ==================== Tuple Shape Errors ====================
    /// A color tuple had a length other than 3 (RGB) or 4 (RGBA).
    #[error("a color tuple requires 3 or 4 elements, but {len} were given")]
    InvalidArity {
        /// The number of elements that were actually given.
        len: usize,
    },

    // ==================== Lookup Errors ====================
    /// A registry lookup was required to succeed but the name matched
    /// no entry.
    #[error("no such named color as {0:?}")]
    NoSuchColor(String),

    /// A string matched none of the recognized color encodings.
    #[error("cannot interpret {0:?} as a color")]
    Unparseable(String),

    // ==================== Palette Errors ====================
    /// A palette definition was not a valid JSON object of color strings.
    #[error("invalid palette JSON: {0}")]
    PaletteJson(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::PaletteJson(err.to_string())
    }
}

/// A specialized Result type for `colorkit` operations.
pub type Result<T> = std::result::Result<T, Error>;
