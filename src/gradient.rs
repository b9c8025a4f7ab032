//! Directional divergence search over a ring of samples.
//!
//! Both searches walk `samples` equally spaced directions at a fixed
//! `radius` around a center pixel and measure how much the pixel under each
//! candidate differs from a reference color (the center's own color unless
//! an explicit one is given). [`min_gradient`] reports the direction of the
//! most similar sample, [`max_gradient`] of the most different one.
//! Candidates falling outside the buffer are skipped; when every candidate
//! is out of bounds there is no direction to report and the searches return
//! `None`.

use log::debug;
use serde::Deserialize;

use crate::buffer::{PixelBuffer, Rgb24};
use crate::ring::{ring_angles, ring_offset, unit_direction};
use crate::types::GradientResult;

/// Parameters for one ring probe.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct RingParams {
    /// Distance from the center to each sample point, in pixels.
    pub radius: f32,
    /// Number of equally spaced sample directions on the ring.
    pub samples: usize,
}

impl Default for RingParams {
    fn default() -> Self {
        Self {
            radius: 4.0,
            samples: 12,
        }
    }
}

/// Direction toward the ring sample least different from the reference.
///
/// The reference is `reference` when given, otherwise the color at
/// `(x, y)`. Ties keep the earliest angle in iteration order.
pub fn min_gradient(
    buffer: &PixelBuffer,
    x: usize,
    y: usize,
    reference: Option<Rgb24>,
    params: &RingParams,
) -> Option<GradientResult> {
    probe(buffer, x, y, reference, params, |candidate, best| {
        candidate < best
    })
}

/// Direction toward the ring sample most different from the reference.
///
/// Same contract as [`min_gradient`] with the comparison flipped.
pub fn max_gradient(
    buffer: &PixelBuffer,
    x: usize,
    y: usize,
    reference: Option<Rgb24>,
    params: &RingParams,
) -> Option<GradientResult> {
    probe(buffer, x, y, reference, params, |candidate, best| {
        candidate > best
    })
}

fn probe(
    buffer: &PixelBuffer,
    x: usize,
    y: usize,
    reference: Option<Rgb24>,
    params: &RingParams,
    replaces: impl Fn(u32, u32) -> bool,
) -> Option<GradientResult> {
    let reference = reference.unwrap_or_else(|| buffer.color(x, y));
    let mut best: Option<GradientResult> = None;

    for theta in ring_angles(params.samples) {
        let (dx, dy) = ring_offset(theta, params.radius);
        let candidate = nearest_in_bounds(
            x as f32 + dx,
            y as f32 + dy,
            buffer.width(),
            buffer.height(),
        );
        let (sx, sy) = match candidate {
            Some(p) => p,
            None => continue,
        };
        let divergence = buffer.absolute_diff(sx, sy, reference);
        let replace = match &best {
            None => true,
            Some(current) => replaces(divergence, current.divergence),
        };
        if replace {
            best = Some(GradientResult {
                direction: unit_direction(theta),
                divergence,
            });
        }
    }

    if best.is_none() {
        debug!(
            "ring probe at ({x}, {y}): none of {} samples at radius {} landed inside {}x{}",
            params.samples,
            params.radius,
            buffer.width(),
            buffer.height()
        );
    }
    best
}

/// Round to the nearest pixel; `None` for coordinates outside the grid.
#[inline]
fn nearest_in_bounds(x: f32, y: f32, width: usize, height: usize) -> Option<(usize, usize)> {
    let cx = x.round();
    let cy = y.round();
    if cx < 0.0 || cy < 0.0 || cx >= width as f32 || cy >= height as f32 {
        return None;
    }
    Some((cx as usize, cy as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_in_bounds_rejects_negative_and_past_the_edge() {
        assert_eq!(nearest_in_bounds(-0.6, 1.0, 4, 4), None);
        assert_eq!(nearest_in_bounds(1.0, 4.2, 4, 4), None);
        assert_eq!(nearest_in_bounds(-0.4, 3.4, 4, 4), Some((0, 3)));
    }

    #[test]
    fn probe_never_mutates_the_buffer() {
        let mut buf = PixelBuffer::new(5, 5);
        buf.set_color(3, 2, 0x80FF40);
        let before = buf.as_raw().to_vec();
        let _ = max_gradient(&buf, 2, 2, None, &RingParams::default());
        let _ = min_gradient(&buf, 2, 2, Some(0x123456), &RingParams::default());
        assert_eq!(buf.as_raw(), &before[..]);
    }
}
