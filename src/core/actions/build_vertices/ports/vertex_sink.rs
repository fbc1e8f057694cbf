use std::error::Error;
use std::fmt;

use crate::core::data::render_vertex::RenderVertex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexUploadError {
    CapacityExceeded { requested: usize, capacity: usize },
}

impl fmt::Display for VertexUploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "vertex buffer holds at most {} vertices, {} requested",
                    capacity, requested
                )
            }
        }
    }
}

impl Error for VertexUploadError {}

/// Destination for a complete vertex stream, standing in for a GPU vertex buffer.
///
/// An upload replaces the whole contents. A failed upload must leave the
/// previous contents in place.
pub trait VertexSink {
    fn upload(&mut self, vertices: Vec<RenderVertex>) -> Result<(), VertexUploadError>;

    fn vertices(&self) -> &[RenderVertex];
}
