#![doc = include_str!("../README.md")]

pub mod buffer;
pub mod error;
pub mod gradient;
pub mod ring;
pub mod types;

// --- High-level re-exports -------------------------------------------------

pub use crate::buffer::{
    Argb32, Channels, ChannelsAlpha, DecodedImage, PixelBuffer, PixelSource, PixelSurface, Rect,
    RectSpec, Rgb24, SurfaceId,
};
pub use crate::error::SourceError;
pub use crate::gradient::{max_gradient, min_gradient, RingParams};
pub use crate::types::GradientResult;

/// Small prelude for quick experiments.
///
/// ```
/// use pixel_probe::prelude::*;
///
/// let mut buf = PixelBuffer::new(5, 5);
/// buf.set_color(4, 2, 0x00FF00);
/// let hit = max_gradient(&buf, 2, 2, None, &RingParams { radius: 2.0, samples: 4 });
/// assert!(hit.unwrap().direction.x > 0.9);
/// ```
pub mod prelude {
    pub use crate::buffer::{PixelBuffer, PixelSource};
    pub use crate::gradient::{max_gradient, min_gradient, RingParams};
}
