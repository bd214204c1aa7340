//! Gradient rasterization.
//!
//! One pass per paint source: linear and radial descriptions are a single
//! fill, a mesh is background + one pass per blob + vignette + noise. Every
//! pass walks the surface once and composites through [`blend`].
//!
//! [`blend`]: super::blend

use log::debug;

use super::blend::composite;
use super::noise::NoiseTile;
use super::ramp::Ramp;
use super::surface::Surface;
use crate::color::{Rgba8, parse_hex};
use crate::gradient::{BlendMode, Gradient, LinearGradient, MeshGradient, RadialGradient};

// Paint-time substitutes for absent mesh fields.
const DEFAULT_BLEND: BlendMode = BlendMode::Screen;
const DEFAULT_SOFTNESS: f32 = 0.75;
const DEFAULT_BLOB_ALPHA: f32 = 0.9;
const DEFAULT_NOISE: f32 = 0.03;
const MAX_NOISE: f32 = 0.25;

/// Rasterizes [`Gradient`] descriptions onto [`Surface`]s.
///
/// The renderer owns its dither tile: the first noisy render generates it,
/// later renders reuse it. Rendering the same description twice through the
/// same renderer therefore produces identical pixels.
#[derive(Debug, Default)]
pub struct Renderer {
    noise: Option<NoiseTile>,
}

impl Renderer {
    pub fn new() -> Self {
        Self { noise: None }
    }

    /// Clears `surface` and paints `gradient` over the full extent.
    ///
    /// Never fails: colors that do not parse degrade to black and
    /// degenerate geometry paints nothing, both logged at debug level.
    pub fn render(&mut self, surface: &mut Surface, gradient: &Gradient) {
        debug!(
            "rendering {:?} gradient at {}x{}",
            gradient.kind(),
            surface.width(),
            surface.height()
        );
        surface.clear();
        match gradient {
            Gradient::Linear(linear) => paint_linear(surface, linear),
            Gradient::Radial(radial) => paint_radial(surface, radial),
            Gradient::Mesh(mesh) => self.paint_mesh(surface, mesh),
        }
    }

    fn paint_mesh(&mut self, surface: &mut Surface, mesh: &MeshGradient) {
        let (w, h) = (surface.width() as f32, surface.height() as f32);
        let min_dim = w.min(h);

        surface.fill(opaque_or_black(&mesh.background));

        let mode = mesh.blend_mode.unwrap_or(DEFAULT_BLEND);
        let softness = mesh.softness.unwrap_or(DEFAULT_SOFTNESS).clamp(0.0, 1.0);
        // Falloff knees move outward with softness, so soft blobs hold
        // their color longer before fading.
        let mid = 0.45 + softness * 0.25;
        let soft = 0.78 + softness * 0.12;
        let edge = 0.92 + softness * 0.05;

        for blob in &mesh.blobs {
            let alpha = blob.alpha.unwrap_or(DEFAULT_BLOB_ALPHA);
            let [r, g, b, _] = opaque_or_black(&blob.color).channels();
            let ramp = Ramp::new(vec![
                (0.0, [r, g, b, alpha]),
                (mid, [r, g, b, alpha * 0.55]),
                (soft, [r, g, b, alpha * 0.16]),
                (edge, [r, g, b, alpha * 0.04]),
                (1.0, [r, g, b, 0.0]),
            ]);
            composite_radial(
                surface,
                mode,
                blob.x * w,
                blob.y * h,
                0.0,
                blob.r * min_dim,
                &ramp,
            );
        }

        if mesh.vignette.unwrap_or(true) {
            let ramp = Ramp::new(vec![
                (0.0, [0.0, 0.0, 0.0, 0.0]),
                (1.0, [0.0, 0.0, 0.0, 0.55]),
            ]);
            // Center sits below the midline; the inner circle stays clear
            // and darkness builds toward the frame.
            composite_radial(
                surface,
                BlendMode::Multiply,
                w * 0.5,
                h * 0.55,
                min_dim * 0.4,
                w.max(h) * 0.9,
                &ramp,
            );
        }

        let strength = mesh.noise.unwrap_or(DEFAULT_NOISE).clamp(0.0, MAX_NOISE);
        if strength > 0.0 {
            let tile = self.noise.get_or_insert_with(|| {
                debug!("generating {size}x{size} noise tile", size = super::noise::TILE_SIZE);
                NoiseTile::generate(&mut rand::thread_rng())
            });
            for_each_pixel(surface, |x, y, px| {
                let gray = tile.value(x, y) as f32 / 255.0;
                *px = composite(BlendMode::Overlay, *px, [gray, gray, gray, strength]);
            });
        }
    }
}

// ── passes ──────────────────────────────────────────────────────────────────

fn paint_linear(surface: &mut Surface, linear: &LinearGradient) {
    let ramp = Ramp::from_stops(&linear.stops);
    if ramp.is_empty() {
        return;
    }
    let (w, h) = (surface.width() as f32, surface.height() as f32);
    let rad = linear.angle_deg.to_radians();
    let (dx, dy) = (rad.cos(), rad.sin());
    // The axis runs through the surface center, long enough to cover any
    // rotation of the larger dimension.
    let len = w.max(h);
    let (x0, y0) = (w * 0.5 - dx * len * 0.5, h * 0.5 - dy * len * 0.5);
    let (ax, ay) = (dx * len, dy * len);
    // len >= 1, so the squared length never vanishes.
    let len2 = ax * ax + ay * ay;
    for_each_pixel(surface, |x, y, px| {
        let t = ((x as f32 + 0.5 - x0) * ax + (y as f32 + 0.5 - y0) * ay) / len2;
        *px = composite(BlendMode::SourceOver, *px, ramp.sample(t));
    });
}

fn paint_radial(surface: &mut Surface, radial: &RadialGradient) {
    let (w, h) = (surface.width() as f32, surface.height() as f32);
    let ramp = Ramp::from_stops(&radial.stops);
    composite_radial(
        surface,
        BlendMode::SourceOver,
        radial.cx * w,
        radial.cy * h,
        0.0,
        radial.r * w.min(h),
        &ramp,
    );
}

/// Composites a concentric two-circle radial ramp over the whole surface.
///
/// The ramp parameter is the distance from the center, remapped so `inner`
/// is 0 and `outer` is 1; sampling pads beyond both ends.
fn composite_radial(
    surface: &mut Surface,
    mode: BlendMode,
    cx: f32,
    cy: f32,
    inner: f32,
    outer: f32,
    ramp: &Ramp,
) {
    if outer <= inner {
        // Coincident (or inverted) circles paint nothing.
        debug!("radial with inner {inner} outer {outer} paints nothing");
        return;
    }
    if ramp.is_empty() {
        return;
    }
    let span = outer - inner;
    for_each_pixel(surface, |x, y, px| {
        let dx = x as f32 + 0.5 - cx;
        let dy = y as f32 + 0.5 - cy;
        let t = ((dx * dx + dy * dy).sqrt() - inner) / span;
        *px = composite(mode, *px, ramp.sample(t));
    });
}

// ── helpers ─────────────────────────────────────────────────────────────────

fn opaque_or_black(color: &str) -> Rgba8 {
    match parse_hex(color) {
        Some((r, g, b)) => Rgba8::opaque(r, g, b),
        None => {
            debug!("color {color:?} is not hex, painting it black");
            Rgba8::opaque(0, 0, 0)
        }
    }
}

fn for_each_pixel(surface: &mut Surface, mut f: impl FnMut(u32, u32, &mut Rgba8)) {
    let width = surface.width() as usize;
    for (y, row) in surface.pixels_mut().chunks_exact_mut(width).enumerate() {
        for (x, px) in row.iter_mut().enumerate() {
            f(x as u32, y as u32, px);
        }
    }
}
