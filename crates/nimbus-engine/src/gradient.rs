//! Gradient description model.
//!
//! A [`Gradient`] is immutable value data: the UI or the random generator
//! builds one, the rasterizer and the exporter read it, edits produce a new
//! value. Nothing here touches pixels.
//!
//! Colors are CSS-style strings (see [`crate::color`] for what is parsed and
//! what degrades).

/// Compositing operator: the rule for combining a newly painted color with
/// what is already on the surface.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BlendMode {
    /// Plain painter's algorithm (Porter-Duff over).
    SourceOver,
    /// Additive; clamps per channel.
    Lighter,
    /// Inverted multiply; brightens, order-insensitive.
    Screen,
    /// Darkens; used by the vignette pass.
    Multiply,
    /// Screen in highlights, multiply in shadows; used by the noise pass.
    Overlay,
}

/// A single gradient stop.
///
/// `offset` is expected in `[0, 1]` in typical usage, but is not enforced
/// here; the rasterizer clamps at paint time. Stop order is preserved as
/// given, and only the random generator sorts.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: String,
}

impl ColorStop {
    #[inline]
    pub fn new(offset: f32, color: impl Into<String>) -> Self {
        Self { offset, color: color.into() }
    }
}

/// A mesh primitive: a soft circular color field.
///
/// `x`/`y` are fractions of the surface; `r` is a fraction of
/// `min(width, height)`. `alpha` defaults to 0.9 at paint time.
#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub color: String,
    pub alpha: Option<f32>,
}

impl Blob {
    #[inline]
    pub fn new(x: f32, y: f32, r: f32, color: impl Into<String>, alpha: f32) -> Self {
        Self { x, y, r, color: color.into(), alpha: Some(alpha) }
    }
}

/// Straight color sweep along an axis through the surface center.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    /// Axis direction in degrees, `[0, 360)`.
    pub angle_deg: f32,
    pub stops: Vec<ColorStop>,
}

/// Color sweep radiating from a center point.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    /// Center as fractions of the surface width/height.
    pub cx: f32,
    pub cy: f32,
    /// Radius as a fraction of `min(width, height)`.
    pub r: f32,
    pub stops: Vec<ColorStop>,
}

/// Multi-blob composition over a dark background, with vignette and noise.
///
/// The `Option` fields distinguish "absent" from an explicit value: the
/// rasterizer substitutes its own defaults (`Screen`, 0.75, true, 0.03)
/// only when a field is `None`. The random generator fills `blend_mode`
/// with `Lighter` and leaves the rest absent.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshGradient {
    pub background: String,
    pub blobs: Vec<Blob>,
    pub blend_mode: Option<BlendMode>,
    /// How slowly blobs fade toward their edge, `[0, 1]`.
    pub softness: Option<f32>,
    /// Darken toward the frame edges for depth.
    pub vignette: Option<bool>,
    /// Dither strength to fight banding, `[0, 0.25]`.
    pub noise: Option<f32>,
}

/// Discriminant for the three gradient kinds.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GradientKind {
    Linear,
    Radial,
    Mesh,
}

/// A complete, declarative gradient description.
///
/// Rendering dispatches on the variant with a single exhaustive match;
/// there is no open-ended paint source set beyond these three.
#[derive(Debug, Clone, PartialEq)]
pub enum Gradient {
    Linear(LinearGradient),
    Radial(RadialGradient),
    Mesh(MeshGradient),
}

impl Gradient {
    #[inline]
    pub fn kind(&self) -> GradientKind {
        match self {
            Gradient::Linear(_) => GradientKind::Linear,
            Gradient::Radial(_) => GradientKind::Radial,
            Gradient::Mesh(_) => GradientKind::Mesh,
        }
    }

    /// Deterministic starting description for `kind`.
    ///
    /// This is what an editing surface shows before any randomization: a
    /// cyan→violet diagonal, a centered blue glow, and a three-blob mesh on
    /// a deep navy background.
    pub fn default_for(kind: GradientKind) -> Self {
        match kind {
            GradientKind::Linear => Gradient::Linear(LinearGradient {
                angle_deg: 45.0,
                stops: vec![
                    ColorStop::new(0.0, "#06b6d4"),
                    ColorStop::new(1.0, "#7c3aed"),
                ],
            }),
            GradientKind::Radial => Gradient::Radial(RadialGradient {
                cx: 0.5,
                cy: 0.5,
                r: 0.7,
                stops: vec![
                    ColorStop::new(0.0, "#3b82f6"),
                    ColorStop::new(1.0, "#111827"),
                ],
            }),
            GradientKind::Mesh => Gradient::Mesh(MeshGradient {
                background: "#0b1026".to_owned(),
                blobs: vec![
                    Blob::new(0.2, 0.8, 0.6, "#06b6d4", 0.95),
                    Blob::new(0.35, 0.35, 0.45, "#1e40af", 0.85),
                    Blob::new(0.72, 0.35, 0.45, "#7c3aed", 0.9),
                ],
                blend_mode: Some(BlendMode::Lighter),
                softness: None,
                vignette: None,
                noise: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_kind_round_trip() {
        for kind in [GradientKind::Linear, GradientKind::Radial, GradientKind::Mesh] {
            assert_eq!(Gradient::default_for(kind).kind(), kind);
        }
    }

    #[test]
    fn default_linear_spans_full_axis() {
        let Gradient::Linear(linear) = Gradient::default_for(GradientKind::Linear) else {
            unreachable!()
        };
        assert_eq!(linear.stops.first().map(|s| s.offset), Some(0.0));
        assert_eq!(linear.stops.last().map(|s| s.offset), Some(1.0));
    }

    #[test]
    fn default_mesh_prefers_additive_blending() {
        let Gradient::Mesh(mesh) = Gradient::default_for(GradientKind::Mesh) else {
            unreachable!()
        };
        assert_eq!(mesh.blend_mode, Some(BlendMode::Lighter));
        assert_eq!(mesh.blobs.len(), 3);
        assert!(mesh.softness.is_none() && mesh.vignette.is_none() && mesh.noise.is_none());
    }
}
