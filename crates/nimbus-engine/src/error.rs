use std::fmt;

/// Failure raised by the render and export paths.
///
/// Every error is scoped to the single call that produced it; there is no
/// global error state and no retry policy.
///
/// Malformed color strings are NOT errors: they degrade to an opaque
/// fallback at paint time (see [`crate::color::ColorExpr`]).
#[derive(Debug)]
pub enum EngineError {
    /// A drawable target could not be allocated (zero-sized request).
    SurfaceUnavailable { width: u32, height: u32 },
    /// The encoder rejected the surface or produced no data.
    EncodingFailed(image::ImageError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::SurfaceUnavailable { width, height } => {
                write!(f, "surface unavailable: {width}x{height} is not drawable")
            }
            EngineError::EncodingFailed(err) => write!(f, "image encoding failed: {err}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::SurfaceUnavailable { .. } => None,
            EngineError::EncodingFailed(err) => Some(err),
        }
    }
}

impl From<image::ImageError> for EngineError {
    fn from(err: image::ImageError) -> Self {
        EngineError::EncodingFailed(err)
    }
}
