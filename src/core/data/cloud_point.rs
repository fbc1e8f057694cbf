use crate::core::data::vector2::Vector2;

/// One point of the attractor. `lightness` encodes how deep in the
/// expansion tree the point was produced, in `[0, 1)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CloudPoint {
    pub position: Vector2,
    pub lightness: f64,
}

pub type PointCloud = Vec<CloudPoint>;
