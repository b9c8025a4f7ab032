//! Ring-sampling math for the gradient probe.

use nalgebra::Vector2;

/// Angles partitioning the full turn into `samples` equal steps, iterated
/// from 2π downward. The first yielded angle is exactly 2π.
#[inline]
pub fn ring_angles(samples: usize) -> impl Iterator<Item = f32> {
    let step = std::f32::consts::TAU / samples as f32;
    (0..samples).map(move |k| std::f32::consts::TAU - k as f32 * step)
}

/// Offset of the ring sample at `theta` on a circle of `radius`.
#[inline]
pub fn ring_offset(theta: f32, radius: f32) -> (f32, f32) {
    (radius * theta.cos(), radius * theta.sin())
}

/// Unit direction (cos θ, sin θ).
#[inline]
pub fn unit_direction(theta: f32) -> Vector2<f32> {
    Vector2::new(theta.cos(), theta.sin())
}
