//! Image export: render a description at a target size and encode it.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, ImageEncoder};
use log::info;

use crate::error::EngineError;
use crate::gradient::Gradient;
use crate::raster::{Renderer, Surface};

/// Encodings the exporter can produce.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ExportFormat {
    /// Lossless, keeps the alpha channel. Quality is ignored.
    Png,
    /// Lossy, no alpha channel; transparent pixels flatten onto black.
    Jpeg,
    /// Lossless WebP. The encoder has no lossy path, so quality is
    /// ignored here as well.
    Webp,
}

impl ExportFormat {
    #[inline]
    pub const fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
            ExportFormat::Webp => "image/webp",
        }
    }

    /// Filename extension, without the dot.
    #[inline]
    pub const fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpeg",
            ExportFormat::Webp => "webp",
        }
    }
}

/// A finished export: encoded bytes plus the parameters that shaped them.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub format: ExportFormat,
    pub width: u32,
    pub height: u32,
}

/// Renders gradients into encoded images.
///
/// The exporter owns its [`Renderer`], so a batch of exports shares one
/// dither tile and a given description encodes to the same bytes every
/// time.
#[derive(Debug, Default)]
pub struct Exporter {
    renderer: Renderer,
}

impl Exporter {
    pub fn new() -> Self {
        Self { renderer: Renderer::new() }
    }

    /// Renders `gradient` at `width` × `height` and encodes it as `format`.
    ///
    /// Zero dimensions coerce to 1 rather than failing. `quality` is
    /// clamped to `[0, 1]` and only affects JPEG output.
    pub fn export(
        &mut self,
        gradient: &Gradient,
        width: u32,
        height: u32,
        format: ExportFormat,
        quality: f32,
    ) -> Result<EncodedImage, EngineError> {
        let width = width.max(1);
        let height = height.max(1);
        let mut surface = Surface::new(width, height)?;
        self.renderer.render(&mut surface, gradient);

        let mut bytes = Vec::new();
        match format {
            ExportFormat::Png => {
                PngEncoder::new(&mut bytes).write_image(
                    surface.as_bytes(),
                    width,
                    height,
                    ExtendedColorType::Rgba8,
                )?;
            }
            ExportFormat::Jpeg => {
                let rgb = flatten_to_rgb(&surface);
                JpegEncoder::new_with_quality(&mut bytes, jpeg_quality(quality)).write_image(
                    &rgb,
                    width,
                    height,
                    ExtendedColorType::Rgb8,
                )?;
            }
            ExportFormat::Webp => {
                WebPEncoder::new_lossless(&mut bytes).write_image(
                    surface.as_bytes(),
                    width,
                    height,
                    ExtendedColorType::Rgba8,
                )?;
            }
        }
        info!(
            "exported {}x{} {} ({} bytes)",
            width,
            height,
            format.extension(),
            bytes.len()
        );
        Ok(EncodedImage { bytes, format, width, height })
    }
}

/// Maps the `[0, 1]` quality knob onto the JPEG encoder's `1..=100` scale.
#[inline]
fn jpeg_quality(quality: f32) -> u8 {
    ((quality.clamp(0.0, 1.0) * 100.0).round() as u8).clamp(1, 100)
}

// JPEG carries no alpha. Multiplying through mirrors what flattening a
// transparent bitmap onto a black backdrop does.
fn flatten_to_rgb(surface: &Surface) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(surface.pixels().len() * 3);
    for px in surface.pixels() {
        let a = px.a as u16;
        for c in [px.r, px.g, px.b] {
            rgb.push(((c as u16 * a + 127) / 255) as u8);
        }
    }
    rgb
}
