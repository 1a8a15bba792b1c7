//! Wiring descriptions for panels and tiled arrays.
//!
//! A [`Topology`] says how a rectangular block of LEDs is physically chained:
//! which corner the strip enters at, whether it runs along rows or columns,
//! and whether alternate lines reverse direction (serpentine) or all run the
//! same way (progressive). The same description applies at two levels —
//! pixels within one panel, and panels ([tiles](`Tiling`)) within an array —
//! and every flag combination is a valid bijection onto strip order.
//!
//! Coordinates use a screen-style convention: `(0, 0)` is the logical
//! top-left corner, `x` increases to the right, and `y` increases downward.

/// Physical corner of a panel or array where the strip wiring enters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Corner {
    /// Wiring starts at the logical top-left (the default).
    #[default]
    TopLeft,
    /// Wiring starts at the top-right.
    TopRight,
    /// Wiring starts at the bottom-left.
    BottomLeft,
    /// Wiring starts at the bottom-right.
    BottomRight,
}

impl Corner {
    /// True when the first LED sits on the right edge.
    #[must_use]
    pub const fn is_right(self) -> bool {
        matches!(self, Self::TopRight | Self::BottomRight)
    }

    /// True when the first LED sits on the bottom edge.
    #[must_use]
    pub const fn is_bottom(self) -> bool {
        matches!(self, Self::BottomLeft | Self::BottomRight)
    }

    /// The diagonally opposite corner.
    ///
    /// Used when a serpentine tile row turns a panel upside down, so its
    /// internal wiring effectively enters from the other side.
    #[must_use]
    pub const fn diagonal(self) -> Self {
        match self {
            Self::TopLeft => Self::BottomRight,
            Self::TopRight => Self::BottomLeft,
            Self::BottomLeft => Self::TopRight,
            Self::BottomRight => Self::TopLeft,
        }
    }
}

/// Direction the strip runs first: along rows or along columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// The strip runs across a full row before moving to the next (the default).
    #[default]
    Rows,
    /// The strip runs down a full column before moving to the next.
    Columns,
}

/// Whether consecutive lines of the strip run the same way or alternate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sequence {
    /// Every line is wired in the same direction (the default).
    #[default]
    Progressive,
    /// Alternate lines reverse direction, minimizing wire runs.
    Serpentine,
}

/// One level of wiring description: corner of entry, major axis, sequence.
///
/// The three choices are orthogonal; all 16 combinations map every `(x, y)`
/// cell to a distinct strip index. Compose two of these — one for pixels
/// within a tile, one for tiles within an array — to describe a tiled panel.
///
/// # Example
///
/// ```
/// use neogrid::{Axis, Corner, Sequence, Topology};
///
/// // The common NeoPixel panel: strip enters top-left and snakes across rows.
/// let topology = Topology::new(Corner::TopLeft, Axis::Rows, Sequence::Serpentine);
/// assert_eq!(topology, Topology::default().serpentine());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Topology {
    /// Corner the wiring enters at.
    pub corner: Corner,
    /// Axis the wiring runs along first.
    pub axis: Axis,
    /// Progressive or serpentine line order.
    pub sequence: Sequence,
}

impl Topology {
    /// Describe a wiring level from its three orthogonal choices.
    #[must_use]
    pub const fn new(corner: Corner, axis: Axis, sequence: Sequence) -> Self {
        Self {
            corner,
            axis,
            sequence,
        }
    }

    /// This topology with the sequence switched to serpentine.
    #[must_use]
    pub const fn serpentine(mut self) -> Self {
        self.sequence = Sequence::Serpentine;
        self
    }

    /// Linear offset of `(x, y)` within a `width` × `height` block wired
    /// this way. Caller guarantees `x < width` and `y < height`.
    ///
    /// Computed in `usize`: the largest expressible block is 65535 × 65535
    /// and its offsets do not fit the coordinate type.
    pub(crate) const fn offset(self, x: u16, y: u16, width: u16, height: u16) -> usize {
        let width = width as usize;
        let height = height as usize;
        // Presume row major; swap below if the wiring runs along columns.
        let mut minor = x as usize;
        let mut major = y as usize;

        if self.corner.is_right() {
            minor = width - 1 - minor;
        }
        if self.corner.is_bottom() {
            major = height - 1 - major;
        }

        let scale = match self.axis {
            Axis::Rows => width,
            Axis::Columns => {
                let swap = major;
                major = minor;
                minor = swap;
                height
            }
        };

        match self.sequence {
            Sequence::Progressive => major * scale + minor,
            Sequence::Serpentine => {
                if major % 2 == 1 {
                    // Odd lines run backwards.
                    (major + 1) * scale - 1 - minor
                } else {
                    major * scale + minor
                }
            }
        }
    }
}

/// Whether serpentine tile rows also flip each odd-row tile's own corner.
///
/// With `Disabled` (the default) odd tile rows reverse only the *order* of
/// tiles; each tile keeps its declared internal wiring. This matches arrays
/// whose panels are all mounted the same way up with longer return wires.
/// `Enabled` additionally treats odd-row panels as installed rotated 180°,
/// entering from the diagonally opposite corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TileFlip {
    /// Odd tile rows reverse tile order only (the default).
    #[default]
    Disabled,
    /// Odd tile rows also flip each tile's corner of entry.
    Enabled,
}

/// Arrangement of identical panels chained into one larger array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tiling {
    /// Tile count across.
    pub tiles_x: u16,
    /// Tile count down.
    pub tiles_y: u16,
    /// How the tiles themselves are chained.
    pub topology: Topology,
    /// Corner handling on odd serpentine tile rows.
    pub flip: TileFlip,
}

impl Tiling {
    /// Describe a `tiles_x` × `tiles_y` array chained with `topology`.
    ///
    /// Serpentine tile rows keep each tile's own corner ([`TileFlip::Disabled`]);
    /// use [`with_flip`](Self::with_flip) for arrays with alternate rows of
    /// panels mounted upside down.
    #[must_use]
    pub const fn new(tiles_x: u16, tiles_y: u16, topology: Topology) -> Self {
        Self {
            tiles_x,
            tiles_y,
            topology,
            flip: TileFlip::Disabled,
        }
    }

    /// Same as [`new`](Self::new) with an explicit [`TileFlip`] choice.
    #[must_use]
    pub const fn with_flip(tiles_x: u16, tiles_y: u16, topology: Topology, flip: TileFlip) -> Self {
        Self {
            tiles_x,
            tiles_y,
            topology,
            flip,
        }
    }

    /// Chained tile number for tile coordinate `(col, row)`, plus whether the
    /// pixel-level corner flips inside that tile. Caller guarantees
    /// `col < tiles_x` and `row < tiles_y`.
    pub(crate) const fn tile_index(&self, col: u16, row: u16) -> (usize, bool) {
        let tiles_x = self.tiles_x as usize;
        let tiles_y = self.tiles_y as usize;
        let mut minor = col as usize;
        let mut major = row as usize;

        if self.topology.corner.is_right() {
            minor = tiles_x - 1 - minor;
        }
        if self.topology.corner.is_bottom() {
            major = tiles_y - 1 - major;
        }

        let scale = match self.topology.axis {
            Axis::Rows => tiles_x,
            Axis::Columns => {
                let swap = major;
                major = minor;
                minor = swap;
                tiles_y
            }
        };

        match self.topology.sequence {
            Sequence::Progressive => (major * scale + minor, false),
            Sequence::Serpentine => {
                if major % 2 == 1 {
                    // Reversed tile order; corner flip only when configured.
                    (
                        (major + 1) * scale - 1 - minor,
                        matches!(self.flip, TileFlip::Enabled),
                    )
                } else {
                    (major * scale + minor, false)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, Corner, Sequence, TileFlip, Tiling, Topology};

    #[test]
    fn identity_topology_is_row_major() {
        let topology = Topology::default();
        assert_eq!(topology.offset(0, 0, 4, 2), 0);
        assert_eq!(topology.offset(3, 0, 4, 2), 3);
        assert_eq!(topology.offset(0, 1, 4, 2), 4);
        assert_eq!(topology.offset(3, 1, 4, 2), 7);
    }

    #[test]
    fn serpentine_reverses_odd_rows() {
        let topology = Topology::default().serpentine();
        assert_eq!(topology.offset(0, 1, 4, 2), 7);
        assert_eq!(topology.offset(3, 1, 4, 2), 4);
        // Even rows are untouched.
        assert_eq!(topology.offset(1, 0, 4, 2), 1);
    }

    #[test]
    fn column_major_swaps_axes() {
        let topology = Topology::new(Corner::TopLeft, Axis::Columns, Sequence::Progressive);
        // Column 1 starts after a full column of height 3.
        assert_eq!(topology.offset(1, 0, 2, 3), 3);
        assert_eq!(topology.offset(0, 2, 2, 3), 2);
    }

    #[test]
    fn bottom_right_corner_mirrors_both_axes() {
        let topology = Topology::new(Corner::BottomRight, Axis::Rows, Sequence::Progressive);
        assert_eq!(topology.offset(3, 1, 4, 2), 0);
        assert_eq!(topology.offset(0, 0, 4, 2), 7);
    }

    #[test]
    fn offsets_on_large_blocks_exceed_the_coordinate_range() {
        let topology = Topology::default().serpentine();
        // Row 299 is odd, so it runs backwards: (299+1)*300 - 1 - 0.
        assert_eq!(topology.offset(0, 299, 300, 300), 89_999);
        assert_eq!(topology.offset(299, 298, 300, 300), 89_699);
    }

    #[test]
    fn diagonal_corner_round_trips() {
        for corner in [
            Corner::TopLeft,
            Corner::TopRight,
            Corner::BottomLeft,
            Corner::BottomRight,
        ] {
            assert_eq!(corner.diagonal().diagonal(), corner);
        }
    }

    #[test]
    fn serpentine_tiling_reverses_order_without_flip() {
        let tiling = Tiling::new(2, 2, Topology::default().serpentine());
        assert_eq!(tiling.tile_index(0, 0), (0, false));
        assert_eq!(tiling.tile_index(1, 0), (1, false));
        // Second tile row is reversed but no tile flips its corner.
        assert_eq!(tiling.tile_index(0, 1), (3, false));
        assert_eq!(tiling.tile_index(1, 1), (2, false));
    }

    #[test]
    fn serpentine_tiling_flips_corner_when_enabled() {
        let tiling = Tiling::with_flip(
            2,
            2,
            Topology::default().serpentine(),
            TileFlip::Enabled,
        );
        assert_eq!(tiling.tile_index(1, 0), (1, false));
        assert_eq!(tiling.tile_index(0, 1), (3, true));
    }
}
