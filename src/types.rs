use nalgebra::Vector2;
use serde::Serialize;

/// Winning sample of a ring gradient probe.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct GradientResult {
    /// Unit direction (cos θ, sin θ) toward the winning sample.
    pub direction: Vector2<f32>,
    /// Absolute channel divergence between that sample and the reference.
    pub divergence: u32,
}
