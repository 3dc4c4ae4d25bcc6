//! Solid-color strip rendering.

use crate::{OutputDriver, Rgb};

/// Owns the strip frame buffer and flushes it through an [`OutputDriver`].
///
/// The buffer is sized at compile time; the configured strip length selects
/// the active prefix. Every flush writes exactly that many pixels.
pub struct StripRenderer<const MAX_LEDS: usize> {
    frame: [Rgb; MAX_LEDS],
    len: usize,
}

impl<const MAX_LEDS: usize> StripRenderer<MAX_LEDS> {
    /// Create a renderer for a strip of `len` pixels, capped at `MAX_LEDS`.
    pub fn new(len: usize) -> Self {
        Self {
            frame: [Rgb { r: 0, g: 0, b: 0 }; MAX_LEDS],
            len: len.min(MAX_LEDS),
        }
    }

    /// Configured strip length.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Set every pixel to `color` and flush to hardware.
    pub fn solid<D: OutputDriver>(&mut self, color: Rgb, driver: &mut D) {
        for pixel in &mut self.frame[..self.len] {
            *pixel = color;
        }
        driver.write(&self.frame[..self.len]);
    }
}
