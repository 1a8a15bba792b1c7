//! 16-bit canvas color handling: RGB565 packing and gamma expansion.
//!
//! The drawing surface speaks 16-bit RGB565 (the convention of the
//! `embedded-graphics` ecosystem); the strip speaks 24-bit [`RGB8`]. Between
//! the two sit fixed per-channel gamma tables, so mid-range canvas colors come
//! out perceptually even on LEDs instead of washed out.

use smart_leds::RGB8;

/// Pack 8-bit channels into a 16-bit RGB565 color.
///
/// Standard lossy 5/6/5 quantization: the low 3 bits of red and blue and the
/// low 2 bits of green are truncated. This is the documented precision
/// contract of the 16-bit surface, not a rounding bug.
///
/// ```
/// use neogrid::rgb565;
///
/// assert_eq!(rgb565(255, 255, 255), 0xFFFF);
/// assert_eq!(rgb565(255, 0, 0), 0xF800);
/// assert_eq!(rgb565(0, 255, 0), 0x07E0);
/// assert_eq!(rgb565(0, 0, 255), 0x001F);
/// ```
#[must_use]
pub const fn rgb565(r: u8, g: u8, b: u8) -> u16 {
    ((r & 0xF8) as u16) << 8 | ((g & 0xFC) as u16) << 3 | (b >> 3) as u16
}

/// Gamma 2.2 lookup table for 5-bit channels (red, blue).
/// Pre-computed to avoid floating point math: corrected = (value/31)^2.2 * 255
const GAMMA5: [u8; 32] = [
    0, 0, 1, 1, 3, 5, 7, 10, 13, 17, 21, 26, 32, 38, 44, 52, 60, 68, 77, 87, 97, 108, 120, 132,
    145, 159, 173, 188, 204, 220, 237, 255,
];

/// Gamma 2.2 lookup table for the 6-bit green channel.
/// Pre-computed to avoid floating point math: corrected = (value/63)^2.2 * 255
const GAMMA6: [u8; 64] = [
    0, 0, 0, 0, 1, 1, 1, 2, 3, 4, 4, 5, 7, 8, 9, 11, 13, 14, 16, 18, 20, 23, 25, 28, 31, 33, 36,
    40, 43, 46, 50, 54, 57, 61, 66, 70, 74, 79, 84, 89, 94, 99, 105, 110, 116, 122, 128, 134, 140,
    147, 153, 160, 167, 174, 182, 189, 197, 205, 213, 221, 229, 238, 246, 255,
];

/// Expand a 16-bit RGB565 color to the strip's 24-bit color space through the
/// per-channel gamma tables.
pub(crate) const fn expand(color: u16) -> RGB8 {
    RGB8::new(
        GAMMA5[(color >> 11) as usize],
        GAMMA6[((color >> 5) & 0x3F) as usize],
        GAMMA5[(color & 0x1F) as usize],
    )
}

#[cfg(test)]
mod tests {
    use super::{GAMMA5, GAMMA6, expand, rgb565};
    use smart_leds::RGB8;

    #[test]
    fn expand_preserves_black_and_white() {
        assert_eq!(expand(0x0000), RGB8::new(0, 0, 0));
        assert_eq!(expand(0xFFFF), RGB8::new(255, 255, 255));
    }

    #[test]
    fn expand_places_red_in_high_bits() {
        let red = expand(rgb565(255, 0, 0));
        assert_eq!(red, RGB8::new(255, 0, 0));
    }

    #[test]
    fn gamma_tables_are_monotonic() {
        assert!(GAMMA5.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(GAMMA6.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn rgb565_truncates_low_bits() {
        // 0b0000_0111 of red is below one 5-bit step.
        assert_eq!(rgb565(7, 3, 7), 0);
        assert_eq!(rgb565(8, 4, 8), 0x0821);
    }
}
