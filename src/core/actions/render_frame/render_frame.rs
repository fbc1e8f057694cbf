use crate::core::actions::render_frame::ports::drawer::{DrawPrimitive, Drawer, ShadeStyle};
use crate::core::data::colour::ColourRgba;
use crate::core::data::render_vertex::RenderVertex;
use crate::core::data::vector2::Vector2;
use crate::core::viewport::viewport_state::ViewportState;

/// Draws one live frame through the viewport.
///
/// Composition: `T(center) · T(-pan) · S(zoom) · T(pan) · S(center.y)`.
/// Scaling by half the screen height keeps the attractor's unit square
/// proportional regardless of window width.
pub fn render_frame<D: Drawer + ?Sized>(
    drawer: &mut D,
    viewport: &ViewportState,
    vertices: &[RenderVertex],
    screen_center: Vector2,
) {
    drawer.reset_transform();
    drawer.clear(ColourRgba::BLACK);
    drawer.set_shade_style(ShadeStyle::VertexColour);
    drawer.translate(screen_center);
    drawer.translate(-viewport.pan_offset);
    drawer.scale(viewport.zoom_factor);
    drawer.translate(viewport.pan_offset);
    drawer.scale(screen_center.y);
    drawer.draw(vertices, DrawPrimitive::Points);
}

/// Draws the export image: centred on the target and scaled by half its
/// height, ignoring pan and zoom.
pub fn render_snapshot<D: Drawer + ?Sized>(
    drawer: &mut D,
    vertices: &[RenderVertex],
    target_center: Vector2,
) {
    drawer.reset_transform();
    drawer.clear(ColourRgba::BLACK);
    drawer.set_shade_style(ShadeStyle::VertexColour);
    drawer.translate(target_center);
    drawer.scale(target_center.y);
    drawer.draw(vertices, DrawPrimitive::Points);
}
