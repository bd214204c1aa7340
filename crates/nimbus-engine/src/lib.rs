//! Nimbus engine crate.
//!
//! This crate owns the gradient pipeline: descriptions, random generation,
//! CPU rasterization, and image export. Frontends stay thin on top of it.

pub mod color;
pub mod error;
pub mod export;
pub mod gradient;
pub mod random;
pub mod raster;

pub mod logging;

pub use error::EngineError;
pub use export::{EncodedImage, ExportFormat, Exporter};
pub use gradient::{
    Blob, BlendMode, ColorStop, Gradient, GradientKind, LinearGradient, MeshGradient,
    RadialGradient,
};
pub use raster::{Renderer, Surface};
