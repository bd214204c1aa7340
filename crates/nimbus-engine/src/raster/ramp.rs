//! Color ramps: preprocessed stop lists ready for sampling.

use log::debug;

use crate::color::{Rgba8, hex_to_translucent};
use crate::gradient::ColorStop;

/// Substitute for stop colors that do not parse. Opaque black keeps the
/// rest of the image intact instead of aborting the render.
const FALLBACK: Rgba8 = Rgba8::opaque(0, 0, 0);

/// An immutable gradient ramp.
///
/// Construction clamps every offset to `[0, 1]` and stable-sorts, so equal
/// offsets keep their given order. Sampling pads: parameters outside the
/// stop range take the nearest end color.
#[derive(Debug, Clone)]
pub(crate) struct Ramp {
    stops: Vec<(f32, [f32; 4])>,
}

impl Ramp {
    /// Builds a ramp from raw offset/channel pairs.
    pub(crate) fn new(mut stops: Vec<(f32, [f32; 4])>) -> Self {
        for stop in &mut stops {
            stop.0 = stop.0.clamp(0.0, 1.0);
        }
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { stops }
    }

    /// Builds an opaque ramp from description stops, degrading unparseable
    /// colors to [`FALLBACK`].
    pub(crate) fn from_stops(stops: &[ColorStop]) -> Self {
        Self::new(
            stops
                .iter()
                .map(|stop| {
                    let expr = hex_to_translucent(&stop.color, 1.0);
                    if expr.is_raw() {
                        debug!("stop color {:?} is not hex, painting it black", stop.color);
                    }
                    (stop.offset, expr.channels_or(FALLBACK))
                })
                .collect(),
        )
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Straight-alpha interpolation at `t`, padded outside `[0, 1]`.
    pub(crate) fn sample(&self, t: f32) -> [f32; 4] {
        let Some(first) = self.stops.first() else {
            return [0.0; 4];
        };
        if t <= first.0 {
            return first.1;
        }
        for pair in self.stops.windows(2) {
            let (o0, c0) = pair[0];
            let (o1, c1) = pair[1];
            if t <= o1 {
                let span = o1 - o0;
                if span <= 0.0 {
                    continue;
                }
                let k = (t - o0) / span;
                let mut out = [0.0; 4];
                for i in 0..4 {
                    out[i] = c0[i] + (c1[i] - c0[i]) * k;
                }
                return out;
            }
        }
        // t past the last stop, including t > 1 after clamping offsets.
        self.stops[self.stops.len() - 1].1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    #[test]
    fn empty_ramp_samples_transparent() {
        let ramp = Ramp::new(Vec::new());
        assert!(ramp.is_empty());
        assert_eq!(ramp.sample(0.5), [0.0; 4]);
    }

    #[test]
    fn midpoint_is_halfway() {
        let ramp = Ramp::new(vec![(0.0, BLACK), (1.0, WHITE)]);
        let mid = ramp.sample(0.5);
        for channel in mid {
            assert!((channel - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn pads_outside_the_stop_range() {
        let ramp = Ramp::new(vec![(0.25, BLACK), (0.75, WHITE)]);
        assert_eq!(ramp.sample(-1.0), BLACK);
        assert_eq!(ramp.sample(0.0), BLACK);
        assert_eq!(ramp.sample(1.0), WHITE);
        assert_eq!(ramp.sample(9.0), WHITE);
    }

    #[test]
    fn offsets_clamp_and_order_is_stable() {
        // The out-of-range stop clamps onto 1.0 behind the white stop that
        // was already there: at the shared offset the earlier stop still
        // holds, and only the padding region beyond shows the later one.
        let ramp = Ramp::new(vec![(0.0, BLACK), (1.0, WHITE), (3.0, BLACK)]);
        assert_eq!(ramp.sample(1.0), WHITE);
        assert_eq!(ramp.sample(2.0), BLACK);
        let almost = ramp.sample(0.999);
        assert!(almost[0] > 0.99);
    }

    #[test]
    fn unparseable_stop_goes_black() {
        let stops = vec![
            ColorStop::new(0.0, "definitely-not-hex"),
            ColorStop::new(1.0, "#ffffff"),
        ];
        let ramp = Ramp::from_stops(&stops);
        assert_eq!(ramp.sample(0.0), BLACK);
        assert_eq!(ramp.sample(1.0), WHITE);
    }

    #[test]
    fn alpha_interpolates_like_any_channel() {
        let ramp = Ramp::new(vec![(0.0, [1.0, 0.0, 0.0, 0.8]), (1.0, [1.0, 0.0, 0.0, 0.0])]);
        let half = ramp.sample(0.5);
        assert!((half[3] - 0.4).abs() < 1e-6);
        assert!((half[0] - 1.0).abs() < 1e-6);
    }
}
