pub mod affine_transform;
pub mod cloud_point;
pub mod colour;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
pub mod render_vertex;
pub mod transform_set;
pub mod vector2;
