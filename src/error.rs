//! Crate error and result types.

use derive_more::{Display, Error};

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors surfaced at construction time.
///
/// Drawing itself never fails: out-of-bounds pixels are silently dropped and
/// unknown characters fall back to the reserved glyph. Everything that can go
/// wrong is caught before the first pixel is written.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// A width, height, or tile count of zero was supplied.
    #[display("matrix dimensions must be nonzero")]
    ZeroDimension,

    /// The strip holds a different number of pixels than the canvas needs.
    #[display("strip holds {actual} pixels but the canvas needs {expected}")]
    PixelCountMismatch {
        /// Pixels the configured canvas requires.
        expected: usize,
        /// Pixels the strip actually holds.
        actual: usize,
    },

    /// Only the 5-row and 7-row bitmap fonts exist.
    #[display("no bitmap font with {height} rows (supported: 5 and 7)")]
    UnsupportedFontHeight {
        /// The rejected row count.
        height: u8,
    },
}
