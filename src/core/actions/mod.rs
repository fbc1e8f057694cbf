pub mod build_vertices;
pub mod generate_points;
pub mod generate_transform;
pub mod render_frame;
