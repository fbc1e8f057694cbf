//! Software rendering backend: a CPU point rasteriser and an in-memory vertex buffer.

pub mod canvas;
pub mod vertex_buffer;
