//! The 2-D canvas over a wired LED strip.
//!
//! [`NeoGrid`] owns a [`PixelSink`] and exposes a conventional raster surface:
//! callers draw at `(x, y)` with 16-bit colors and the grid resolves each
//! coordinate to the correct strip index for the configured wiring — single
//! panel or tiled array, any corner of entry, row- or column-first, serpentine
//! or progressive, at both the pixel and the tile level.
//!
//! Every drawing operation (text, images, `embedded-graphics` primitives)
//! funnels through [`set_pixel`](NeoGrid::set_pixel), so rotation, topology,
//! pass-through color, and custom remapping apply uniformly.
//!
//! # Example
//!
//! ```
//! use neogrid::{NeoGrid, StripFrame, Topology, rgb565};
//! use smart_leds::colors;
//!
//! // 8×8 panel, strip entering top-left and snaking across rows.
//! let topology = Topology::default().serpentine();
//! let mut grid = NeoGrid::new(8, 8, topology, StripFrame::<64>::new())?;
//!
//! // Row 1 runs right-to-left on this wiring.
//! assert_eq!(grid.resolve(0, 1), Some(15));
//!
//! grid.set_pixel(0, 1, rgb565(255, 255, 255));
//! assert_eq!(grid.strip()[15], colors::WHITE);
//! # Ok::<(), neogrid::Error>(())
//! ```

use core::convert::Infallible;

use embedded_graphics::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::Rgb565,
    prelude::IntoStorage,
};
use smart_leds::RGB8;

use crate::color;
use crate::error::{Error, Result};
use crate::font::Font;
use crate::strip::PixelSink;
use crate::topology::{Tiling, Topology};

/// Display rotation applied ahead of all coordinate resolution.
///
/// Rotation is a logical-surface concern: it remaps `(x, y)` before wiring
/// math and swaps the reported canvas dimensions for the quarter turns. The
/// strip order underneath never changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    /// No rotation (the default).
    #[default]
    Deg0,
    /// 90° clockwise.
    Deg90,
    /// 180°.
    Deg180,
    /// 270° clockwise.
    Deg270,
}

/// A custom coordinate-to-index strategy, replacing topology math entirely.
///
/// Install one with [`NeoGrid::set_remap`] for wiring too irregular for
/// [`Topology`] to describe. Implementations may carry state; plain
/// `Fn(u16, u16) -> u16` closures work through the blanket impl.
pub trait Remap {
    /// Strip index for the (already rotated) coordinate `(x, y)`.
    fn index(&self, x: u16, y: u16) -> u16;
}

impl<F: Fn(u16, u16) -> u16> Remap for F {
    fn index(&self, x: u16, y: u16) -> u16 {
        self(x, y)
    }
}

/// A single panel or tiled array of NeoPixel-style LEDs, drawn as a 2-D canvas.
///
/// See the [module documentation](mod@crate::grid) for an overview and the
/// [`topology`](crate::topology) module for wiring descriptions.
pub struct NeoGrid<'a, S> {
    strip: S,
    matrix_width: u16,
    matrix_height: u16,
    tiling: Option<Tiling>,
    topology: Topology,
    rotation: Rotation,
    pass_through: Option<RGB8>,
    remap: Option<&'a dyn Remap>,
}

impl<S: core::fmt::Debug> core::fmt::Debug for NeoGrid<'_, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NeoGrid")
            .field("strip", &self.strip)
            .field("matrix_width", &self.matrix_width)
            .field("matrix_height", &self.matrix_height)
            .field("tiling", &self.tiling)
            .field("topology", &self.topology)
            .field("rotation", &self.rotation)
            .field("pass_through", &self.pass_through)
            .field("remap", &self.remap.map(|_| "dyn Remap"))
            .finish()
    }
}

impl<'a, S: PixelSink> NeoGrid<'a, S> {
    /// Canvas over a single `width` × `height` panel.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroDimension`] for an empty panel;
    /// [`Error::PixelCountMismatch`] when the strip's pixel count is not
    /// `width * height`.
    pub fn new(width: u16, height: u16, topology: Topology, strip: S) -> Result<Self> {
        Self::build(width, height, None, topology, strip)
    }

    /// Canvas over an array of `tile_width` × `tile_height` panels arranged
    /// per `tiling`. `topology` describes the wiring inside each tile.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroDimension`] for an empty tile or tile count;
    /// [`Error::PixelCountMismatch`] when the strip does not hold exactly one
    /// pixel per cell of the full array.
    pub fn tiled(
        tile_width: u16,
        tile_height: u16,
        tiling: Tiling,
        topology: Topology,
        strip: S,
    ) -> Result<Self> {
        Self::build(tile_width, tile_height, Some(tiling), topology, strip)
    }

    fn build(
        width: u16,
        height: u16,
        tiling: Option<Tiling>,
        topology: Topology,
        strip: S,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::ZeroDimension);
        }
        let (tiles_x, tiles_y) = match &tiling {
            Some(tiling) if tiling.tiles_x == 0 || tiling.tiles_y == 0 => {
                return Err(Error::ZeroDimension);
            }
            Some(tiling) => (tiling.tiles_x, tiling.tiles_y),
            None => (1, 1),
        };

        let expected =
            width as usize * height as usize * tiles_x as usize * tiles_y as usize;
        let actual = strip.pixel_count();
        if expected != actual {
            return Err(Error::PixelCountMismatch { expected, actual });
        }

        #[cfg(feature = "log")]
        log::debug!(
            "neogrid canvas {}x{} over {expected} pixels",
            width as usize * tiles_x as usize,
            height as usize * tiles_y as usize,
        );

        Ok(Self {
            strip,
            matrix_width: width,
            matrix_height: height,
            tiling,
            topology,
            rotation: Rotation::Deg0,
            pass_through: None,
            remap: None,
        })
    }

    /// Canvas width in pixels, honoring the current rotation.
    #[must_use]
    pub fn width(&self) -> u16 {
        match self.rotation {
            Rotation::Deg0 | Rotation::Deg180 => self.native_width(),
            Rotation::Deg90 | Rotation::Deg270 => self.native_height(),
        }
    }

    /// Canvas height in pixels, honoring the current rotation.
    #[must_use]
    pub fn height(&self) -> u16 {
        match self.rotation {
            Rotation::Deg0 | Rotation::Deg180 => self.native_height(),
            Rotation::Deg90 | Rotation::Deg270 => self.native_width(),
        }
    }

    /// Canvas width as physically wired, before rotation.
    #[must_use]
    pub fn native_width(&self) -> u16 {
        match &self.tiling {
            Some(tiling) => self.matrix_width * tiling.tiles_x,
            None => self.matrix_width,
        }
    }

    /// Canvas height as physically wired, before rotation.
    #[must_use]
    pub fn native_height(&self) -> u16 {
        match &self.tiling {
            Some(tiling) => self.matrix_height * tiling.tiles_y,
            None => self.matrix_height,
        }
    }

    /// Total pixels on the underlying strip.
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.strip.pixel_count()
    }

    /// Current display rotation.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Rotate the logical surface. Takes effect on the next write.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// Write `raw` to every subsequent pixel regardless of the 16-bit color
    /// argument, bypassing gamma expansion, until
    /// [`clear_pass_through`](Self::clear_pass_through).
    pub fn set_pass_through(&mut self, raw: RGB8) {
        self.pass_through = Some(raw);
    }

    /// Restore gamma-expanded 16-bit color for the next write.
    pub fn clear_pass_through(&mut self) {
        self.pass_through = None;
    }

    /// Install a custom coordinate-to-index strategy, bypassing topology
    /// math. The reference must outlive the grid's drawing calls.
    pub fn set_remap(&mut self, remap: &'a dyn Remap) {
        self.remap = Some(remap);
    }

    /// Return to topology-based resolution.
    pub fn clear_remap(&mut self) {
        self.remap = None;
    }

    /// Shared view of the underlying strip.
    pub fn strip(&self) -> &S {
        &self.strip
    }

    /// Mutable access to the underlying strip, e.g. to hand a frame to a
    /// hardware driver.
    pub fn strip_mut(&mut self) -> &mut S {
        &mut self.strip
    }

    /// Consume the grid and return the strip.
    pub fn into_strip(self) -> S {
        self.strip
    }

    /// Resolve a logical coordinate to its strip index.
    ///
    /// `None` for coordinates outside the (rotated) canvas — the write that
    /// would have followed is dropped. The mapping is a bijection: within
    /// bounds, distinct coordinates always yield distinct indices covering
    /// the whole strip.
    #[must_use]
    pub fn resolve(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= i32::from(self.width()) || y >= i32::from(self.height()) {
            return None;
        }
        let (mut x, mut y) = (x as u16, y as u16);

        // Rotation pre-transform, relative to the native dimensions.
        let native_width = self.native_width();
        let native_height = self.native_height();
        match self.rotation {
            Rotation::Deg0 => {}
            Rotation::Deg90 => {
                let swap = x;
                x = native_width - 1 - y;
                y = swap;
            }
            Rotation::Deg180 => {
                x = native_width - 1 - x;
                y = native_height - 1 - y;
            }
            Rotation::Deg270 => {
                let swap = x;
                x = y;
                y = native_height - 1 - swap;
            }
        }

        // A custom remap replaces all topology math, tiling included.
        if let Some(remap) = self.remap {
            return Some(usize::from(remap.index(x, y)));
        }

        let mut topology = self.topology;
        let mut tile_offset = 0usize;

        if let Some(tiling) = &self.tiling {
            // Subtraction instead of modulo: one division per axis.
            let tile_col = x / self.matrix_width;
            let tile_row = y / self.matrix_height;
            x -= tile_col * self.matrix_width;
            y -= tile_row * self.matrix_height;

            let (tile, flip) = tiling.tile_index(tile_col, tile_row);
            if flip {
                topology.corner = topology.corner.diagonal();
            }
            tile_offset =
                tile * usize::from(self.matrix_width) * usize::from(self.matrix_height);
        }

        Some(tile_offset + topology.offset(x, y, self.matrix_width, self.matrix_height))
    }

    /// The single pixel-write entry point.
    ///
    /// Resolves `(x, y)` through rotation, remap or topology, then writes the
    /// resolved color (pass-through or gamma-expanded `color`) to the strip.
    /// Out-of-bounds coordinates are silently dropped.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u16) {
        if let Some(index) = self.resolve(x, y) {
            let resolved = self.resolve_color(color);
            self.strip.set_pixel(index, resolved);
        }
    }

    /// Set every pixel on the strip to `color`.
    ///
    /// A pure index sweep: fill touches every physical pixel exactly once and
    /// ignores rotation, topology, and remapping entirely.
    pub fn fill(&mut self, color: u16) {
        let resolved = self.resolve_color(color);
        for index in 0..self.strip.pixel_count() {
            self.strip.set_pixel(index, resolved);
        }
    }

    /// Draw `text` left to right with its top-left corner at `(x, y)`.
    ///
    /// Each glyph's cell (its width × the font height) is erased to
    /// background (color 0) before painting, so redrawing in place
    /// overwrites. Glyphs are variable width and advance by one cleared
    /// spacing column; characters outside printable ASCII render the
    /// fallback glyph. Pixels clipped by the canvas edge are dropped.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, color: u16, font: Font) {
        let mut x = x;
        for ch in text.chars() {
            x = self.rasterize_glyph(x, y, ch, color, font);
        }
    }

    /// Draw a single character; see [`draw_text`](Self::draw_text).
    pub fn draw_char(&mut self, x: i32, y: i32, ch: char, color: u16, font: Font) {
        self.rasterize_glyph(x, y, ch, color, font);
    }

    /// Paint one glyph cell and its spacing column; returns the next cursor x.
    fn rasterize_glyph(&mut self, x: i32, y: i32, ch: char, color: u16, font: Font) -> i32 {
        let (width, rows) = font.glyph(ch);
        let height = i32::from(font.height());
        let width_px = i32::from(width);

        self.fill_rect(x, y, width_px, height, 0);
        for (line, &row) in rows.iter().enumerate() {
            for bit in 0..width {
                if row & (1 << bit) != 0 {
                    // Rows pack LSB-first; bit k lights column width-1-k.
                    self.set_pixel(x + i32::from(width - 1 - bit), y + line as i32, color);
                }
            }
        }

        let next = x + width_px;
        self.fill_rect(next, y, 1, height, 0);
        next + 1
    }

    /// Blit a packed 24-bit image with its top-left corner at `(x, y)`.
    ///
    /// `pixels` is row-major, `pixels[col + row * width]`, each value
    /// `0x00RRGGBB`. Pixels whose value is exactly zero are treated as
    /// transparent and skipped unless `cover_transparent` asks for an opaque
    /// fill including black. A source slice shorter than `width * height`
    /// drops the missing pixels.
    pub fn draw_image(
        &mut self,
        x: i32,
        y: i32,
        pixels: &[u32],
        width: usize,
        height: usize,
        cover_transparent: bool,
    ) {
        for col in 0..width {
            for row in 0..height {
                let Some(&value) = pixels.get(col + row * width) else {
                    continue;
                };
                if value == 0 && !cover_transparent {
                    continue;
                }
                let (r, g, b) = ((value >> 16) as u8, (value >> 8) as u8, value as u8);
                self.set_pixel(x + col as i32, y + row as i32, color::rgb565(r, g, b));
            }
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u16) {
        for dx in 0..width {
            for dy in 0..height {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    fn resolve_color(&self, color: u16) -> RGB8 {
        match self.pass_through {
            Some(raw) => raw,
            None => color::expand(color),
        }
    }
}

impl<S: PixelSink> OriginDimensions for NeoGrid<'_, S> {
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}

impl<S: PixelSink> DrawTarget for NeoGrid<'_, S> {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.into_storage());
        }
        Ok(())
    }
}
