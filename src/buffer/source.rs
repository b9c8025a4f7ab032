//! Construction sources for [`PixelBuffer`].
//!
//! The four recognized source shapes form a closed enum, each variant
//! carrying exactly the fields it needs; the choice is made at the call
//! site, not by inspecting the object at runtime.

use log::debug;
use serde::{Deserialize, Serialize};

use super::rgba::PixelBuffer;
use crate::error::SourceError;

/// Sub-rectangle of a surface, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// Partial size description for raw channel data.
///
/// At least one dimension must be present; a missing one is derived as
/// `(data.len() / 4) / given`.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct RectSpec {
    pub width: Option<usize>,
    pub height: Option<usize>,
}

/// Opaque, non-owning handle naming a surface. The buffer stores it for the
/// caller's benefit and never resolves it, so a surface may be dropped
/// independently of buffers extracted from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SurfaceId(pub u64);

/// A decoded full-frame image: RGBA bytes plus explicit dimensions.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

/// A drawing surface able to hand out tightly-packed RGBA for a
/// sub-rectangle of itself.
pub trait PixelSurface {
    /// Surface width in pixels
    fn width(&self) -> usize;

    /// Surface height in pixels
    fn height(&self) -> usize;

    /// Produce RGBA bytes for `region`, row-major, four bytes per pixel.
    ///
    /// Implementations return [`SourceError::UnsupportedSource`] for
    /// requests they cannot serve, e.g. a region outside the surface.
    fn extract_rgba(&self, region: Rect) -> Result<Vec<u8>, SourceError>;

    /// Stable handle recorded on extracted buffers as a back-reference.
    fn id(&self) -> Option<SurfaceId> {
        None
    }
}

/// The recognized construction sources for a [`PixelBuffer`].
pub enum PixelSource<'a> {
    /// Adopt an existing buffer unchanged.
    Buffer(PixelBuffer),
    /// A decoded full-frame image.
    Decoded(DecodedImage),
    /// Extract a region from a drawing surface (the whole surface when
    /// `region` is `None`).
    Surface {
        surface: &'a dyn PixelSurface,
        region: Option<Rect>,
    },
    /// Bare channel data with a partial size description.
    Raw { data: Vec<u8>, size: RectSpec },
}

impl PixelBuffer {
    /// Build a buffer from exactly one source.
    ///
    /// # Errors
    ///
    /// [`SourceError::Configuration`] when raw or decoded data carries no
    /// usable size, and [`SourceError::UnsupportedSource`] when a surface
    /// declines or bungles the extraction.
    pub fn from_source(source: PixelSource<'_>) -> Result<PixelBuffer, SourceError> {
        match source {
            PixelSource::Buffer(buffer) => Ok(buffer),
            PixelSource::Decoded(image) => from_decoded(image),
            PixelSource::Surface { surface, region } => from_surface(surface, region),
            PixelSource::Raw { data, size } => from_raw(data, size),
        }
    }
}

fn from_decoded(image: DecodedImage) -> Result<PixelBuffer, SourceError> {
    let expected = image.width * image.height * 4;
    if image.width == 0 || image.height == 0 || image.rgba.len() != expected {
        return Err(SourceError::configuration(format!(
            "decoded image claims {}x{} but holds {} bytes",
            image.width,
            image.height,
            image.rgba.len()
        )));
    }
    Ok(PixelBuffer::with_metadata(
        image.width,
        image.height,
        image.rgba,
        None,
        None,
    ))
}

fn from_surface(
    surface: &dyn PixelSurface,
    region: Option<Rect>,
) -> Result<PixelBuffer, SourceError> {
    let region = region.unwrap_or(Rect {
        x: 0,
        y: 0,
        width: surface.width(),
        height: surface.height(),
    });
    if region.width == 0 || region.height == 0 {
        return Err(SourceError::unsupported(format!(
            "surface region {}x{} is empty",
            region.width, region.height
        )));
    }
    let data = surface.extract_rgba(region)?;
    let expected = region.width * region.height * 4;
    if data.len() != expected {
        return Err(SourceError::unsupported(format!(
            "surface produced {} bytes for a {}x{} region (expected {expected})",
            data.len(),
            region.width,
            region.height
        )));
    }
    Ok(PixelBuffer::with_metadata(
        region.width,
        region.height,
        data,
        Some(region),
        surface.id(),
    ))
}

fn from_raw(mut data: Vec<u8>, size: RectSpec) -> Result<PixelBuffer, SourceError> {
    let pixels = data.len() / 4;
    let (width, height) = match (size.width, size.height) {
        (Some(w), Some(h)) => (w, h),
        (Some(w), None) if w > 0 => (w, pixels / w),
        (None, Some(h)) if h > 0 => (pixels / h, h),
        _ => {
            return Err(SourceError::configuration(
                "raw data needs at least one nonzero dimension",
            ))
        }
    };
    if width == 0 || height == 0 {
        return Err(SourceError::configuration(format!(
            "derived size {width}x{height} from {} bytes is unusable",
            data.len()
        )));
    }
    let expected = width * height * 4;
    if data.len() < expected {
        return Err(SourceError::configuration(format!(
            "raw data holds {} bytes, {width}x{height} needs {expected}",
            data.len()
        )));
    }
    if data.len() > expected {
        debug!(
            "raw source: keeping {expected} of {} bytes for {width}x{height}",
            data.len()
        );
        data.truncate(expected);
    }
    Ok(PixelBuffer::with_metadata(width, height, data, None, None))
}
