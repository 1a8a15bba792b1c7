//! Drive single and tiled NeoPixel-style LED matrices as a 2-D canvas.
//!
//! Physically, a NeoPixel panel is one long strip of individually addressable
//! LEDs that happens to be folded into a rectangle — often snaking back and
//! forth, entering from any corner, and sometimes chained with more panels
//! into a larger array. `neogrid` hides that wiring: describe it once with a
//! [`Topology`] (and a [`Tiling`] for arrays), then draw in `(x, y)` space.
//!
//! - [`NeoGrid`] — the canvas: pixel writes, full-surface fill, rotation,
//!   pass-through raw color, custom [`Remap`] strategies, and an
//!   [`embedded-graphics`](https://docs.rs/embedded-graphics) `DrawTarget`
//!   so the whole shapes/lines/text ecosystem draws through it.
//! - [`topology`] — corner / axis / sequence wiring descriptions, applied
//!   independently at the pixel and tile level.
//! - [`font`] — two packed bitmap faces (5-row and 7-row) with per-glyph
//!   variable widths, rendered by [`NeoGrid::draw_text`].
//! - [`strip`] — the [`PixelSink`] boundary to the transmission layer, plus
//!   the in-memory [`StripFrame`].
//!
//! # Example
//!
//! ```
//! use neogrid::{Font, NeoGrid, StripFrame, Topology, rgb565};
//!
//! // A 32×8 sign: strip enters top-left, snakes along rows.
//! let topology = Topology::default().serpentine();
//! let mut sign = NeoGrid::new(32, 8, topology, StripFrame::<256>::new())?;
//!
//! sign.draw_text(0, 0, "Hi!", rgb565(255, 40, 0), Font::Tall);
//! # Ok::<(), neogrid::Error>(())
//! ```
//!
//! # Features
//!
//! - `defmt` — `defmt::Format` impls on configuration and error types.
//! - `log` — construction-time diagnostics through the `log` facade.
#![no_std]

pub mod color;
mod error;
pub mod font;
pub mod grid;
pub mod strip;
pub mod topology;

pub use crate::color::rgb565;
pub use crate::error::{Error, Result};
pub use crate::font::Font;
pub use crate::grid::{NeoGrid, Remap, Rotation};
pub use crate::strip::{PixelSink, StripFrame};
pub use crate::topology::{Axis, Corner, Sequence, TileFlip, Tiling, Topology};

/// Predefined RGB color constants re-exported from the `smart_leds` crate.
///
/// These are 24-bit [`smart_leds::RGB8`] values, usable as pass-through
/// colors and for inspecting resolved strip frames.
#[doc(inline)]
pub use smart_leds::colors;
