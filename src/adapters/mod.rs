//! Concrete backends for the ports declared in `core`.

pub mod random;
pub mod raster;
