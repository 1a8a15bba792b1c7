//! The linear strip boundary: where resolved pixels leave the crate.
//!
//! The physical transmission protocol (WS2812 timing, DMA, PIO) lives in a
//! collaborator crate behind [`PixelSink`]. [`StripFrame`] is the in-memory
//! implementation, useful as a staging buffer for a hardware driver and as
//! the observable surface in host tests.

use core::ops::{Deref, DerefMut};

use smart_leds::RGB8;

/// A linear run of individually addressable pixels.
///
/// This is the whole contract the addressing engine needs from the hardware
/// side: a total count and "set pixel `i` to a 24-bit color". Writes with an
/// out-of-range index must be ignored, not trapped — a misconfigured custom
/// remap degrades to dropped pixels, never to a crash.
pub trait PixelSink {
    /// Total number of pixels on the strip.
    fn pixel_count(&self) -> usize;

    /// Set pixel `index` to `color`, ignoring out-of-range indices.
    fn set_pixel(&mut self, index: usize, color: RGB8);
}

impl<T: PixelSink + ?Sized> PixelSink for &mut T {
    fn pixel_count(&self) -> usize {
        (**self).pixel_count()
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) {
        (**self).set_pixel(index, color);
    }
}

/// [`RGB8`] pixel data for a strip of `N` LEDs, in wiring order.
///
/// Frames deref to `[RGB8; N]`, so resolved pixels can be inspected or handed
/// to a driver's write call directly.
///
/// ```
/// use neogrid::StripFrame;
/// use smart_leds::colors;
///
/// let frame = StripFrame::<8>::filled(colors::BLUE);
/// assert_eq!(frame[7], colors::BLUE);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct StripFrame<const N: usize>(pub [RGB8; N]);

impl<const N: usize> StripFrame<N> {
    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([RGB8::new(0, 0, 0); N])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: RGB8) -> Self {
        Self([color; N])
    }
}

impl<const N: usize> Default for StripFrame<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Deref for StripFrame<N> {
    type Target = [RGB8; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for StripFrame<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[RGB8; N]> for StripFrame<N> {
    fn from(array: [RGB8; N]) -> Self {
        Self(array)
    }
}

impl<const N: usize> From<StripFrame<N>> for [RGB8; N] {
    fn from(frame: StripFrame<N>) -> Self {
        frame.0
    }
}

impl<const N: usize> PixelSink for StripFrame<N> {
    fn pixel_count(&self) -> usize {
        N
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = color;
        }
    }
}
