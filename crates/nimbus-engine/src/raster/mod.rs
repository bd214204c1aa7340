//! CPU rasterization pipeline.
//!
//! Scope:
//! - `surface`: the owned RGBA pixel grid renders land on
//! - `ramp`: gradient stop preprocessing and sampling
//! - `blend`: per-pixel compositing operators
//! - `noise`: the repeating dither tile
//! - `render`: the passes that turn a description into pixels
//!
//! Convention: top-left origin, +Y down, samples taken at pixel centers
//! `(x + 0.5, y + 0.5)`.

mod blend;
mod noise;
mod ramp;
mod render;
mod surface;

pub use render::Renderer;
pub use surface::Surface;
