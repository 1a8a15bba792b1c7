//! Packed bitmap glyph tables and text metrics.
//!
//! Two fixed-width fonts cover printable ASCII (0x20..=0x7E): a 5-row compact
//! face and a 7-row tall face. Each glyph record is its column width (1..=5,
//! or 1..=7 for the tall face) plus one packed bitmask per scan line. Table
//! index 0 is the reserved fallback glyph; any character outside the printable
//! range clamps there rather than reading out of bounds.
//!
//! Row bits are stored least-significant-bit-first while glyphs render left to
//! right: bit `k` of a row lights column `width - 1 - k`. The rasterizer in
//! [`grid`](crate::grid) reproduces that mirroring exactly.

use crate::error::{Error, Result};

/// One of the two supported bitmap faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// 5 scan lines, glyphs up to 5 columns wide.
    Compact,
    /// 7 scan lines, glyphs up to 5 columns wide with a descender row.
    Tall,
}

impl Font {
    /// Select a face by scan-line count.
    ///
    /// Only 5 and 7 exist; anything else is a configuration error, reported
    /// instead of degrading to garbage pixels.
    ///
    /// ```
    /// use neogrid::{Error, Font};
    ///
    /// assert_eq!(Font::from_height(5), Ok(Font::Compact));
    /// assert_eq!(Font::from_height(7), Ok(Font::Tall));
    /// assert_eq!(
    ///     Font::from_height(6),
    ///     Err(Error::UnsupportedFontHeight { height: 6 })
    /// );
    /// ```
    pub const fn from_height(height: u8) -> Result<Self> {
        match height {
            5 => Ok(Self::Compact),
            7 => Ok(Self::Tall),
            _ => Err(Error::UnsupportedFontHeight { height }),
        }
    }

    /// Scan lines per glyph, which is also the cell height cleared behind
    /// every character drawn.
    #[must_use]
    pub const fn height(self) -> u8 {
        match self {
            Self::Compact => 5,
            Self::Tall => 7,
        }
    }

    /// Glyph record for `ch`: column width and one packed row per scan line.
    pub(crate) fn glyph(self, ch: char) -> (u8, &'static [u8]) {
        let index = glyph_index(ch);
        match self {
            Self::Compact => {
                let (width, rows) = &FONT5[index];
                (*width, rows)
            }
            Self::Tall => {
                let (width, rows) = &FONT7[index];
                (*width, rows)
            }
        }
    }
}

/// Table slot for `ch`, clamping everything outside printable ASCII to the
/// fallback glyph at index 0.
const fn glyph_index(ch: char) -> usize {
    let code = ch as u32;
    if code < 0x20 || code > 0x7E {
        0
    } else {
        (code - 0x20 + 1) as usize
    }
}

const FONT7: [(u8, [u8; 7]); 96] = [
    (4, [0b1111, 0b1001, 0b1001, 0b1001, 0b1001, 0b1111, 0b0000]), // fallback glyph
    (1, [0b0, 0b0, 0b0, 0b0, 0b0, 0b0, 0b0]), // " "
    (1, [0b1, 0b1, 0b1, 0b1, 0b0, 0b1, 0b0]), // !
    (3, [0b101, 0b101, 0b000, 0b000, 0b000, 0b000, 0b000]), // "
    (5, [0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010, 0b00000]), // #
    (4, [0b0010, 0b0111, 0b1000, 0b1111, 0b0001, 0b1110, 0b0100]), // $
    (5, [0b11000, 0b11001, 0b00010, 0b00100, 0b01000, 0b10011, 0b00011]), // %
    (5, [0b01000, 0b10100, 0b01000, 0b10101, 0b10010, 0b10010, 0b00000]), // &
    (1, [0b1, 0b1, 0b0, 0b0, 0b0, 0b0, 0b0]), // '
    (2, [0b01, 0b10, 0b10, 0b10, 0b10, 0b01, 0b00]), // (
    (2, [0b10, 0b01, 0b01, 0b01, 0b01, 0b10, 0b00]), // )
    (5, [0b00000, 0b10101, 0b01110, 0b00100, 0b01110, 0b10101, 0b00000]), // *
    (5, [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000]), // +
    (2, [0b00, 0b00, 0b00, 0b00, 0b00, 0b01, 0b10]), // ,
    (5, [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000]), // -
    (1, [0b0, 0b0, 0b0, 0b0, 0b0, 0b1, 0b0]), // .
    (5, [0b00000, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b00000]), // /
    (5, [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]), // 0
    (5, [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111]), // 1
    (5, [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111]), // 2
    (5, [0b01110, 0b10001, 0b00001, 0b00110, 0b00001, 0b10001, 0b01110]), // 3
    (5, [0b00011, 0b00101, 0b01001, 0b10001, 0b11111, 0b00001, 0b00001]), // 4
    (5, [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]), // 5
    (5, [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]), // 6
    (5, [0b11111, 0b10001, 0b00001, 0b00010, 0b00100, 0b00100, 0b00100]), // 7
    (5, [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]), // 8
    (5, [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]), // 9
    (1, [0b0, 0b1, 0b0, 0b0, 0b1, 0b0, 0b0]), // :
    (2, [0b00, 0b01, 0b00, 0b00, 0b01, 0b10, 0b00]), // ;
    (3, [0b000, 0b001, 0b010, 0b100, 0b010, 0b001, 0b000]), // <
    (5, [0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000]), // =
    (3, [0b000, 0b100, 0b010, 0b001, 0b010, 0b100, 0b000]), // >
    (3, [0b110, 0b001, 0b010, 0b010, 0b000, 0b010, 0b000]), // ?
    (5, [0b01110, 0b10001, 0b10101, 0b10110, 0b10000, 0b01111, 0b00000]), // @
    (4, [0b0110, 0b1001, 0b1001, 0b1111, 0b1001, 0b1001, 0b0000]), // A
    (4, [0b1110, 0b1001, 0b1110, 0b1001, 0b1001, 0b1110, 0b0000]), // B
    (4, [0b0110, 0b1001, 0b1000, 0b1000, 0b1001, 0b0110, 0b0000]), // C
    (4, [0b1110, 0b1001, 0b1001, 0b1001, 0b1001, 0b1110, 0b0000]), // D
    (4, [0b1111, 0b1000, 0b1110, 0b1000, 0b1000, 0b1111, 0b0000]), // E
    (4, [0b1111, 0b1000, 0b1110, 0b1000, 0b1000, 0b1000, 0b0000]), // F
    (4, [0b0110, 0b1001, 0b1000, 0b1011, 0b1001, 0b0110, 0b0000]), // G
    (4, [0b1001, 0b1001, 0b1111, 0b1001, 0b1001, 0b1001, 0b0000]), // H
    (3, [0b111, 0b010, 0b010, 0b010, 0b010, 0b111, 0b000]), // I
    (4, [0b0001, 0b0001, 0b0001, 0b1001, 0b1001, 0b0110, 0b0000]), // J
    (4, [0b1001, 0b1010, 0b1010, 0b1100, 0b1010, 0b1001, 0b0000]), // K
    (4, [0b1000, 0b1000, 0b1000, 0b1000, 0b1000, 0b1111, 0b0000]), // L
    (5, [0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b00000]), // M
    (4, [0b1001, 0b1001, 0b1101, 0b1011, 0b1001, 0b1001, 0b0000]), // N
    (4, [0b0110, 0b1001, 0b1001, 0b1001, 0b1001, 0b0110, 0b0000]), // O
    (4, [0b1110, 0b1001, 0b1001, 0b1110, 0b1000, 0b1000, 0b0000]), // P
    (5, [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b01110, 0b00001]), // Q
    (4, [0b1110, 0b1001, 0b1001, 0b1110, 0b1010, 0b1001, 0b0000]), // R
    (4, [0b0110, 0b1001, 0b0100, 0b0010, 0b1001, 0b0110, 0b0000]), // S
    (5, [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000]), // T
    (4, [0b1001, 0b1001, 0b1001, 0b1001, 0b1001, 0b0110, 0b0000]), // U
    (4, [0b1001, 0b1001, 0b1001, 0b1001, 0b1010, 0b0100, 0b0000]), // V
    (5, [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b01010, 0b00000]), // W
    (4, [0b1001, 0b1001, 0b0110, 0b1001, 0b1001, 0b1001, 0b0000]), // X
    (5, [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00000]), // Y
    (4, [0b1111, 0b0001, 0b0010, 0b0100, 0b1000, 0b1111, 0b0000]), // Z
    (2, [0b11, 0b10, 0b10, 0b10, 0b10, 0b11, 0b00]), // [
    (5, [0b00000, 0b10000, 0b01000, 0b00100, 0b00010, 0b00001, 0b00000]), // \
    (2, [0b11, 0b01, 0b01, 0b01, 0b01, 0b11, 0b00]), // ]
    (3, [0b010, 0b101, 0b000, 0b000, 0b000, 0b000, 0b000]), // ^
    (4, [0b0000, 0b0000, 0b0000, 0b0000, 0b0000, 0b1111, 0b0000]), // _
    (2, [0b10, 0b01, 0b00, 0b00, 0b00, 0b00, 0b00]), // `
    (4, [0b0000, 0b0000, 0b0111, 0b1001, 0b1001, 0b0111, 0b0000]), // a
    (4, [0b0000, 0b1000, 0b1110, 0b1001, 0b1001, 0b1110, 0b0000]), // b
    (3, [0b000, 0b000, 0b011, 0b100, 0b100, 0b011, 0b000]), // c
    (4, [0b0000, 0b0001, 0b0111, 0b1001, 0b1001, 0b0111, 0b0000]), // d
    (4, [0b0000, 0b0000, 0b0110, 0b1011, 0b1100, 0b0110, 0b0000]), // e
    (3, [0b000, 0b001, 0b010, 0b111, 0b010, 0b010, 0b000]), // f
    (4, [0b0000, 0b0111, 0b1001, 0b1001, 0b0111, 0b0001, 0b0110]), // g
    (4, [0b0000, 0b1000, 0b1110, 0b1001, 0b1001, 0b1001, 0b0000]), // h
    (1, [0b0, 0b1, 0b0, 0b1, 0b1, 0b1, 0b0]), // i
    (2, [0b01, 0b00, 0b01, 0b01, 0b01, 0b10, 0b00]), // j
    (4, [0b0000, 0b1000, 0b1001, 0b1010, 0b1110, 0b1001, 0b0000]), // k
    (1, [0b0, 0b1, 0b1, 0b1, 0b1, 0b1, 0b0]), // l
    (5, [0b00000, 0b00000, 0b11110, 0b10101, 0b10101, 0b10101, 0b00000]), // m
    (4, [0b0000, 0b0000, 0b1110, 0b1001, 0b1001, 0b1001, 0b0000]), // n
    (4, [0b0000, 0b0000, 0b0110, 0b1001, 0b1001, 0b0110, 0b0000]), // o
    (4, [0b0000, 0b0000, 0b0110, 0b1001, 0b1001, 0b1110, 0b1000]), // p
    (4, [0b0000, 0b0000, 0b0110, 0b1001, 0b1001, 0b0111, 0b0001]), // q
    (3, [0b000, 0b000, 0b101, 0b110, 0b100, 0b100, 0b000]), // r
    (4, [0b0000, 0b0000, 0b0111, 0b1100, 0b0011, 0b1110, 0b0000]), // s
    (3, [0b000, 0b010, 0b111, 0b010, 0b010, 0b001, 0b000]), // t
    (4, [0b0000, 0b0000, 0b1001, 0b1001, 0b1001, 0b0111, 0b0000]), // u
    (4, [0b0000, 0b0000, 0b1001, 0b1001, 0b1010, 0b0100, 0b0000]), // v
    (5, [0b00000, 0b00000, 0b10101, 0b10101, 0b01010, 0b01010, 0b00000]), // w
    (3, [0b000, 0b000, 0b101, 0b010, 0b010, 0b101, 0b000]), // x
    (4, [0b0000, 0b1001, 0b1001, 0b0111, 0b0001, 0b0110, 0b0000]), // y
    (4, [0b0000, 0b0000, 0b1111, 0b0010, 0b0100, 0b1111, 0b0000]), // z
    (3, [0b001, 0b010, 0b010, 0b100, 0b010, 0b010, 0b001]), // {
    (1, [0b1, 0b1, 0b1, 0b1, 0b1, 0b1, 0b1]), // |
    (3, [0b100, 0b010, 0b010, 0b001, 0b010, 0b010, 0b100]), // }
    (5, [0b00000, 0b00000, 0b01000, 0b10101, 0b00010, 0b00000, 0b00000]), // ~
];

const FONT5: [(u8, [u8; 5]); 96] = [
    (4, [0b1111, 0b1001, 0b1001, 0b1001, 0b1111]), // fallback glyph
    (1, [0b0, 0b0, 0b0, 0b0, 0b0]), // " "
    (1, [0b1, 0b1, 0b1, 0b0, 0b1]), // !
    (3, [0b101, 0b101, 0b000, 0b000, 0b000]), // "
    (5, [0b01010, 0b11111, 0b01010, 0b11111, 0b01010]), // #
    (4, [0b1111, 0b1001, 0b1001, 0b1001, 0b1111]), // $
    (4, [0b0000, 0b1001, 0b0010, 0b0100, 0b1001]), // %
    (4, [0b1111, 0b1001, 0b1001, 0b1001, 0b1111]), // &
    (1, [0b1, 0b1, 0b0, 0b0, 0b0]), // '
    (2, [0b01, 0b10, 0b10, 0b10, 0b01]), // (
    (2, [0b10, 0b01, 0b01, 0b01, 0b10]), // )
    (5, [0b10101, 0b01110, 0b00100, 0b01110, 0b10101]), // *
    (3, [0b000, 0b010, 0b111, 0b010, 0b000]), // +
    (2, [0b00, 0b00, 0b00, 0b01, 0b10]), // ,
    (3, [0b000, 0b000, 0b111, 0b000, 0b000]), // -
    (1, [0b0, 0b0, 0b0, 0b1, 0b0]), // .
    (4, [0b0000, 0b0001, 0b0010, 0b0100, 0b1000]), // /
    (4, [0b0111, 0b1001, 0b1001, 0b1001, 0b1111]), // 0
    (2, [0b01, 0b11, 0b01, 0b01, 0b01]), // 1
    (4, [0b1110, 0b0001, 0b0111, 0b1000, 0b1111]), // 2
    (4, [0b1110, 0b0001, 0b0110, 0b0001, 0b1111]), // 3
    (4, [0b0011, 0b0101, 0b1001, 0b1111, 0b0001]), // 4
    (4, [0b1110, 0b1000, 0b1111, 0b0001, 0b1111]), // 5
    (4, [0b0110, 0b1000, 0b1111, 0b1001, 0b1111]), // 6
    (4, [0b1111, 0b0001, 0b0001, 0b0010, 0b0100]), // 7
    (4, [0b0111, 0b1001, 0b1111, 0b1001, 0b1111]), // 8
    (4, [0b1111, 0b1001, 0b1111, 0b0001, 0b0110]), // 9
    (1, [0b0, 0b1, 0b0, 0b1, 0b0]), // :
    (2, [0b00, 0b01, 0b00, 0b01, 0b10]), // ;
    (3, [0b001, 0b010, 0b100, 0b010, 0b001]), // <
    (4, [0b0000, 0b1111, 0b0000, 0b1111, 0b0000]), // =
    (3, [0b100, 0b010, 0b001, 0b010, 0b100]), // >
    (3, [0b110, 0b001, 0b111, 0b000, 0b010]), // ?
    (3, [0b100, 0b010, 0b001, 0b010, 0b100]), // @
    (4, [0b0111, 0b1001, 0b1001, 0b1111, 0b1001]), // A
    (4, [0b1110, 0b1001, 0b1111, 0b1001, 0b1111]), // B
    (4, [0b0110, 0b1001, 0b1000, 0b1001, 0b0110]), // C
    (4, [0b1110, 0b1001, 0b1001, 0b1001, 0b1110]), // D
    (4, [0b0111, 0b1000, 0b1110, 0b1000, 0b1111]), // E
    (4, [0b1111, 0b1000, 0b1110, 0b1000, 0b1000]), // F
    (4, [0b0110, 0b1000, 0b1011, 0b1001, 0b0111]), // G
    (4, [0b1001, 0b1001, 0b1111, 0b1001, 0b1001]), // H
    (3, [0b111, 0b010, 0b010, 0b010, 0b111]), // I
    (4, [0b0001, 0b0001, 0b0001, 0b1001, 0b0110]), // J
    (4, [0b1001, 0b1001, 0b1110, 0b1001, 0b1001]), // K
    (4, [0b1000, 0b1000, 0b1000, 0b1000, 0b1111]), // L
    (5, [0b10001, 0b11011, 0b10101, 0b10101, 0b10001]), // M
    (4, [0b1001, 0b1101, 0b1011, 0b1001, 0b1001]), // N
    (4, [0b0110, 0b1001, 0b1001, 0b1001, 0b0110]), // O
    (4, [0b1110, 0b1001, 0b1001, 0b1110, 0b1000]), // P
    (4, [0b0110, 0b1001, 0b1001, 0b1010, 0b0101]), // Q
    (4, [0b0110, 0b1001, 0b1001, 0b1110, 0b1001]), // R
    (4, [0b0111, 0b1000, 0b1111, 0b0001, 0b1111]), // S
    (5, [0b11111, 0b00100, 0b00100, 0b00100, 0b00100]), // T
    (4, [0b1001, 0b1001, 0b1001, 0b1001, 0b0110]), // U
    (4, [0b1001, 0b1001, 0b1001, 0b1010, 0b0100]), // V
    (5, [0b10001, 0b10101, 0b10101, 0b10101, 0b01111]), // W
    (4, [0b1001, 0b1001, 0b0110, 0b1001, 0b1001]), // X
    (4, [0b1001, 0b1001, 0b1001, 0b0111, 0b0001]), // Y
    (4, [0b1111, 0b0001, 0b0110, 0b1000, 0b1111]), // Z
    (2, [0b11, 0b10, 0b10, 0b10, 0b11]), // [
    (4, [0b0000, 0b1000, 0b0100, 0b0010, 0b0001]), // \
    (2, [0b11, 0b01, 0b01, 0b01, 0b11]), // ]
    (3, [0b010, 0b101, 0b000, 0b000, 0b000]), // ^
    (3, [0b000, 0b000, 0b000, 0b000, 0b111]), // _
    (2, [0b10, 0b01, 0b00, 0b00, 0b00]), // `
    (4, [0b0111, 0b1001, 0b1001, 0b1111, 0b1001]), // A
    (4, [0b1110, 0b1001, 0b1111, 0b1001, 0b1111]), // B
    (4, [0b0110, 0b1001, 0b1000, 0b1001, 0b0110]), // C
    (4, [0b1110, 0b1001, 0b1001, 0b1001, 0b1110]), // D
    (4, [0b0111, 0b1000, 0b1110, 0b1000, 0b1111]), // E
    (4, [0b1111, 0b1000, 0b1110, 0b1000, 0b1000]), // F
    (4, [0b0110, 0b1000, 0b1011, 0b1001, 0b0111]), // G
    (4, [0b1001, 0b1001, 0b1111, 0b1001, 0b1001]), // H
    (3, [0b111, 0b010, 0b010, 0b010, 0b111]), // I
    (4, [0b0001, 0b0001, 0b0001, 0b1001, 0b0110]), // J
    (4, [0b1001, 0b1001, 0b1110, 0b1001, 0b1001]), // K
    (4, [0b1000, 0b1000, 0b1000, 0b1000, 0b1111]), // L
    (5, [0b10001, 0b11011, 0b10101, 0b10101, 0b10001]), // M
    (4, [0b1001, 0b1101, 0b1011, 0b1001, 0b1001]), // N
    (4, [0b0110, 0b1001, 0b1001, 0b1001, 0b0110]), // O
    (4, [0b1110, 0b1001, 0b1001, 0b1110, 0b1000]), // P
    (4, [0b0110, 0b1001, 0b1001, 0b1010, 0b0101]), // Q
    (4, [0b0110, 0b1001, 0b1001, 0b1110, 0b1001]), // R
    (4, [0b0111, 0b1000, 0b1111, 0b0001, 0b1111]), // S
    (5, [0b11111, 0b00100, 0b00100, 0b00100, 0b00100]), // T
    (4, [0b1001, 0b1001, 0b1001, 0b1001, 0b0110]), // U
    (4, [0b1001, 0b1001, 0b1001, 0b1010, 0b0100]), // V
    (5, [0b10001, 0b10101, 0b10101, 0b10101, 0b01111]), // W
    (4, [0b1001, 0b1001, 0b0110, 0b1001, 0b1001]), // X
    (4, [0b1001, 0b1001, 0b1001, 0b0111, 0b0001]), // Y
    (4, [0b1111, 0b0001, 0b0110, 0b1000, 0b1111]), // Z
    (3, [0b001, 0b010, 0b110, 0b010, 0b001]), // {
    (1, [0b1, 0b1, 0b1, 0b1, 0b1]), // |
    (3, [0b100, 0b010, 0b011, 0b010, 0b100]), // }
    (4, [0b0000, 0b0101, 0b1010, 0b0000, 0b0000]), // ~
];
