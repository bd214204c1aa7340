//! Owned RGBA pixel surface.

use crate::color::Rgba8;
use crate::error::EngineError;

/// A width × height grid of straight-alpha [`Rgba8`] pixels, row-major from
/// the top-left corner.
///
/// The surface is plain memory: it knows nothing about gradients or
/// encoders. Rendering writes pixels through [`pixels_mut`], export reads
/// them back through [`as_bytes`].
///
/// [`pixels_mut`]: Surface::pixels_mut
/// [`as_bytes`]: Surface::as_bytes
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl Surface {
    /// Allocates a transparent surface.
    ///
    /// Fails with [`EngineError::SurfaceUnavailable`] when either dimension
    /// is zero; callers that accept free-form sizes coerce first (see
    /// `export`).
    pub fn new(width: u32, height: u32) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::SurfaceUnavailable { width, height });
        }
        let Some(area) = (width as usize).checked_mul(height as usize) else {
            return Err(EngineError::SurfaceUnavailable { width, height });
        };
        Ok(Self { width, height, pixels: vec![Rgba8::transparent(); area] })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resets every pixel to transparent black.
    pub fn clear(&mut self) {
        self.pixels.fill(Rgba8::transparent());
    }

    /// Sets every pixel to `color`.
    pub fn fill(&mut self, color: Rgba8) {
        self.pixels.fill(color);
    }

    /// Reads one pixel. Coordinates must be in bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgba8 {
        self.pixels[(y * self.width + x) as usize]
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba8] {
        &mut self.pixels
    }

    /// The pixel grid as raw `r g b a` bytes, suitable for image encoders.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}
