//! Randomized gradient generation.
//!
//! Every function comes in two forms: one that draws from a caller-supplied
//! [`Rng`] (seed it for reproducible output) and a convenience wrapper over
//! [`rand::thread_rng`]. Distributions are biased toward cool hues and
//! mid-range saturation so that unseeded output looks like a wallpaper, not
//! like channel noise.

use rand::Rng;

use crate::color::hsl_to_hex;
use crate::gradient::{
    Blob, BlendMode, ColorStop, Gradient, GradientKind, LinearGradient, MeshGradient,
    RadialGradient,
};

// ── palettes ────────────────────────────────────────────────────────────────

/// Picks three related hex colors around `base_hue` (degrees; drawn from the
/// cool band `[200, 340)` when absent).
///
/// The three hues are the base jittered by `[-25, 25)`, an analogous offset
/// `[20, 60)`, and its mirror `[-60, -20)`. Saturation lands in
/// `[0.6, 0.95)` and lightness in `[0.45, 0.68)`, so none of the entries
/// degenerate to gray, near-black, or near-white.
pub fn palette_with(rng: &mut impl Rng, base_hue: Option<f32>) -> [String; 3] {
    let h = match base_hue {
        Some(h) => h,
        None => rng.gen_range(200.0..340.0),
    };
    let hues = [
        h + rng.gen_range(-25.0..25.0),
        h + rng.gen_range(20.0..60.0),
        h + rng.gen_range(-60.0..-20.0),
    ];
    hues.map(|hue| hsl_to_hex(hue, rng.gen_range(0.6..0.95), rng.gen_range(0.45..0.68)))
}

/// [`palette_with`] over the thread-local generator.
#[inline]
pub fn palette(base_hue: Option<f32>) -> [String; 3] {
    palette_with(&mut rand::thread_rng(), base_hue)
}

// ── gradients ───────────────────────────────────────────────────────────────

/// Generates a random gradient of the requested kind.
///
/// Stop lists always start at offset 0 and end at offset 1 with interior
/// stops sorted between them, so the result renders edge to edge without
/// flat bands at the extremes.
pub fn gradient_with(rng: &mut impl Rng, kind: GradientKind) -> Gradient {
    match kind {
        GradientKind::Linear => Gradient::Linear(random_linear(rng)),
        GradientKind::Radial => Gradient::Radial(random_radial(rng)),
        GradientKind::Mesh => Gradient::Mesh(random_mesh(rng)),
    }
}

/// [`gradient_with`] over the thread-local generator.
#[inline]
pub fn gradient(kind: GradientKind) -> Gradient {
    gradient_with(&mut rand::thread_rng(), kind)
}

fn random_linear(rng: &mut impl Rng) -> LinearGradient {
    let palette = palette_with(rng, None);
    let count = rng.gen_range(2..=4usize);
    let mut stops: Vec<ColorStop> = (0..count)
        .map(|i| {
            let offset = if i == 0 {
                0.0
            } else if i == count - 1 {
                1.0
            } else {
                rng.gen_range(0.15..0.85)
            };
            ColorStop::new(offset, palette[i % palette.len()].clone())
        })
        .collect();
    stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
    // Interior offsets cannot stray past the ends, but keep the ends pinned
    // explicitly in case the distribution above ever widens.
    if let Some(first) = stops.first_mut() {
        first.offset = 0.0;
    }
    if let Some(last) = stops.last_mut() {
        last.offset = 1.0;
    }
    LinearGradient { angle_deg: rng.gen_range(0.0..360.0), stops }
}

fn random_radial(rng: &mut impl Rng) -> RadialGradient {
    let palette = palette_with(rng, None);
    let count = rng.gen_range(2..=3usize);
    let mut stops: Vec<ColorStop> = (0..count)
        .map(|i| {
            let offset = if i == 0 {
                0.0
            } else if i == count - 1 {
                1.0
            } else {
                rng.gen_range(0.2..0.85)
            };
            ColorStop::new(offset, palette[i % palette.len()].clone())
        })
        .collect();
    stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
    RadialGradient {
        cx: rng.gen_range(0.35..0.65),
        cy: rng.gen_range(0.35..0.65),
        r: rng.gen_range(0.6..0.95),
        stops,
    }
}

fn random_mesh(rng: &mut impl Rng) -> MeshGradient {
    let base_hue = rng.gen_range(200.0..320.0);
    // A very dark, saturated background; blobs brighten it from there.
    let background = hsl_to_hex(
        base_hue + rng.gen_range(-10.0..10.0),
        rng.gen_range(0.6..0.85),
        rng.gen_range(0.06..0.12),
    );
    let blob_count = rng.gen_range(3..=5usize);
    let palette = palette_with(rng, Some(base_hue));
    let blobs = (0..blob_count)
        .map(|_| {
            let x = rng.gen_range(0.1..0.9);
            let y = rng.gen_range(0.1..0.9);
            let r = rng.gen_range(0.35..0.7);
            let color = palette[rng.gen_range(0..palette.len())].clone();
            let alpha = rng.gen_range(0.8..0.95);
            Blob { x, y, r, color, alpha: Some(alpha) }
        })
        .collect();
    MeshGradient {
        background,
        blobs,
        blend_mode: Some(BlendMode::Lighter),
        softness: None,
        vignette: None,
        noise: None,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::color::parse_hex;

    // Reconstructs HSL lightness from a hex color. Only tests need the
    // inverse direction, so it lives here.
    fn hex_lightness(hex: &str) -> f32 {
        let (r, g, b) = parse_hex(hex).unwrap();
        let max = r.max(g).max(b) as f32;
        let min = r.min(g).min(b) as f32;
        (max + min) / 2.0 / 255.0
    }

    #[test]
    fn generation_is_deterministic_under_a_fixed_seed() {
        for kind in [GradientKind::Linear, GradientKind::Radial, GradientKind::Mesh] {
            let a = gradient_with(&mut StdRng::seed_from_u64(7), kind);
            let b = gradient_with(&mut StdRng::seed_from_u64(7), kind);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn palette_entries_are_vivid_hex() {
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            for color in palette_with(&mut rng, None) {
                let (r, g, b) = parse_hex(&color).expect("palette must emit parseable hex");
                let max = r.max(g).max(b);
                let min = r.min(g).min(b);
                // s >= 0.6 and l in [0.45, 0.68) force a wide channel spread.
                assert!(max - min >= 90, "washed-out palette entry {color}");
            }
        }
    }

    #[test]
    fn palette_honors_an_explicit_base_hue() {
        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);
        // Same seed, but an explicit hue skips the base-hue draw, so the
        // streams diverge immediately.
        assert_ne!(palette_with(&mut a, Some(220.0)), palette_with(&mut b, None));
    }

    #[test]
    fn linear_stops_span_zero_to_one_sorted() {
        for seed in 0..128 {
            let mut rng = StdRng::seed_from_u64(seed);
            let linear = match gradient_with(&mut rng, GradientKind::Linear) {
                Gradient::Linear(linear) => linear,
                other => panic!("wrong variant: {other:?}"),
            };
            assert!((2..=4).contains(&linear.stops.len()));
            assert!((0.0..360.0).contains(&linear.angle_deg));
            assert_eq!(linear.stops.first().map(|s| s.offset), Some(0.0));
            assert_eq!(linear.stops.last().map(|s| s.offset), Some(1.0));
            for pair in linear.stops.windows(2) {
                assert!(pair[0].offset <= pair[1].offset);
            }
        }
    }

    #[test]
    fn radial_geometry_stays_in_band() {
        for seed in 0..128 {
            let mut rng = StdRng::seed_from_u64(seed);
            let radial = match gradient_with(&mut rng, GradientKind::Radial) {
                Gradient::Radial(radial) => radial,
                other => panic!("wrong variant: {other:?}"),
            };
            assert!((2..=3).contains(&radial.stops.len()));
            assert!((0.35..0.65).contains(&radial.cx));
            assert!((0.35..0.65).contains(&radial.cy));
            assert!((0.6..0.95).contains(&radial.r));
            assert_eq!(radial.stops.first().map(|s| s.offset), Some(0.0));
            assert_eq!(radial.stops.last().map(|s| s.offset), Some(1.0));
        }
    }

    #[test]
    fn mesh_background_is_dark_and_blobs_are_translucent() {
        for seed in 0..128 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mesh = match gradient_with(&mut rng, GradientKind::Mesh) {
                Gradient::Mesh(mesh) => mesh,
                other => panic!("wrong variant: {other:?}"),
            };
            let l = hex_lightness(&mesh.background);
            // Quantization to 8-bit can nudge the reconstructed lightness
            // slightly past the sampled band.
            assert!((0.05..0.13).contains(&l), "background {} too bright", mesh.background);
            assert_eq!(mesh.blend_mode, Some(BlendMode::Lighter));
            assert!((3..=5).contains(&mesh.blobs.len()));
            for blob in &mesh.blobs {
                assert!((0.1..0.9).contains(&blob.x) && (0.1..0.9).contains(&blob.y));
                assert!((0.35..0.7).contains(&blob.r));
                let alpha = blob.alpha.unwrap();
                assert!((0.8..0.95).contains(&alpha));
                assert!(parse_hex(&blob.color).is_some());
            }
        }
    }
}
