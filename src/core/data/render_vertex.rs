use crate::core::data::colour::ColourRgba;

/// GPU-style vertex: position with `z = 0` plus an RGBA colour.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderVertex {
    pub position: [f32; 3],
    pub colour: ColourRgba,
}
