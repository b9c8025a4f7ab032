pub mod color;
pub mod rgba;
pub mod source;

pub use self::color::{Argb32, Channels, ChannelsAlpha, Rgb24};
pub use self::rgba::PixelBuffer;
pub use self::source::{DecodedImage, PixelSource, PixelSurface, Rect, RectSpec, SurfaceId};
