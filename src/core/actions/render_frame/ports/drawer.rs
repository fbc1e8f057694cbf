use crate::core::data::colour::ColourRgba;
use crate::core::data::render_vertex::RenderVertex;
use crate::core::data::vector2::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawPrimitive {
    /// One unstroked dot per vertex, no connecting edges.
    Points,
}

/// How fragments are coloured. Lighting is never applied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ShadeStyle {
    /// Fill each fragment with its vertex colour.
    #[default]
    VertexColour,
    /// Fill every fragment with one colour.
    Uniform(ColourRgba),
}

/// Immediate-mode drawing surface with a model transform.
///
/// `translate` and `scale` compose on the right of the current transform, so
/// the last call is the first one applied to a vertex.
pub trait Drawer {
    fn reset_transform(&mut self);
    fn clear(&mut self, colour: ColourRgba);
    fn set_shade_style(&mut self, style: ShadeStyle);
    fn translate(&mut self, offset: Vector2);
    fn scale(&mut self, factor: f64);
    fn draw(&mut self, vertices: &[RenderVertex], primitive: DrawPrimitive);
}
