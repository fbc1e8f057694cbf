use crate::core::data::vector2::Vector2;

pub const DEFAULT_MAX_DEPTH: u32 = 15;
pub const DEFAULT_STARTUP_ALPHA: f32 = 0.01;
pub const DEFAULT_REGENERATE_ALPHA: f32 = 0.1;

/// Parameters of the point-cloud expansion and of the vertex colours built from it.
///
/// The first build after startup and every later regeneration use separate
/// alpha values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IfsConfig {
    pub max_depth: u32,
    pub seed: Vector2,
    pub startup_alpha: f32,
    pub regenerate_alpha: f32,
}

impl Default for IfsConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            seed: Vector2::ZERO,
            startup_alpha: DEFAULT_STARTUP_ALPHA,
            regenerate_alpha: DEFAULT_REGENERATE_ALPHA,
        }
    }
}

impl IfsConfig {
    /// Number of points an expansion to `max_depth` produces: `(3^(D+1) - 3) / 2`.
    #[must_use]
    pub fn expected_point_count(&self) -> usize {
        expected_point_count(self.max_depth)
    }
}

#[must_use]
pub fn expected_point_count(max_depth: u32) -> usize {
    (3usize.pow(max_depth + 1) - 3) / 2
}
