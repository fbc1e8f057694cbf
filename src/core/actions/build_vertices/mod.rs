pub mod build_render_vertices;
pub mod ports;
