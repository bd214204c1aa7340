//! Per-pixel compositing.
//!
//! All math runs on straight-alpha channels in `[0, 1]` and quantizes back
//! to [`Rgba8`] per pass; the surface is the 8-bit store, so each pass
//! accumulates its rounding there. No gamma conversion happens here;
//! channels blend in display space.

use crate::color::Rgba8;
use crate::gradient::BlendMode;

/// Composites `src` (straight channels, already scaled by any global alpha)
/// onto `dst` under `mode`.
pub(crate) fn composite(mode: BlendMode, dst: Rgba8, src: [f32; 4]) -> Rgba8 {
    let sa = src[3];
    // A fully transparent source leaves the destination untouched under
    // every mode handled here; skip the round trip through f32.
    if sa <= 0.0 {
        return dst;
    }
    let d = dst.channels();
    let da = d[3];

    let out = match mode {
        BlendMode::SourceOver => {
            let ao = sa + da * (1.0 - sa);
            let mut out = [0.0; 4];
            if ao > 0.0 {
                for i in 0..3 {
                    out[i] = (src[i] * sa + d[i] * da * (1.0 - sa)) / ao;
                }
                out[3] = ao;
            }
            out
        }
        BlendMode::Lighter => {
            // Porter-Duff plus: premultiplied sums, clamped per component.
            let ao = (sa + da).min(1.0);
            let mut out = [0.0; 4];
            if ao > 0.0 {
                for i in 0..3 {
                    out[i] = (src[i] * sa + d[i] * da).min(1.0) / ao;
                }
                out[3] = ao;
            }
            out
        }
        BlendMode::Screen | BlendMode::Multiply | BlendMode::Overlay => {
            // Separable blend function B, then the usual premultiplied
            // combination; sa > 0 keeps ao strictly positive.
            let ao = sa + da * (1.0 - sa);
            let mut out = [0.0; 4];
            for i in 0..3 {
                let b = mix(mode, src[i], d[i]);
                out[i] =
                    (src[i] * sa * (1.0 - da) + d[i] * da * (1.0 - sa) + b * sa * da) / ao;
            }
            out[3] = ao;
            out
        }
    };
    Rgba8::from_channels(out)
}

/// The separable blend function `B(source, backdrop)` per channel.
#[inline]
fn mix(mode: BlendMode, s: f32, d: f32) -> f32 {
    match mode {
        BlendMode::Multiply => s * d,
        BlendMode::Screen => 1.0 - (1.0 - s) * (1.0 - d),
        BlendMode::Overlay => {
            if d <= 0.5 {
                2.0 * s * d
            } else {
                1.0 - 2.0 * (1.0 - s) * (1.0 - d)
            }
        }
        // Non-separable modes never reach `mix`.
        BlendMode::SourceOver | BlendMode::Lighter => s,
    }
}
