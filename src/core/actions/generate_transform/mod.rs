pub mod generate_affine_transform;
pub mod ports;
