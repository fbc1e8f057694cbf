use crate::core::actions::build_vertices::ports::vertex_sink::{VertexSink, VertexUploadError};
use crate::core::data::render_vertex::RenderVertex;

/// In-memory vertex storage with an optional capacity limit.
#[derive(Debug, Default)]
pub struct VertexBuffer {
    vertices: Vec<RenderVertex>,
    max_vertices: Option<usize>,
}

impl VertexBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_vertices(max_vertices: usize) -> Self {
        Self::with_limit(Some(max_vertices))
    }

    #[must_use]
    pub fn with_limit(max_vertices: Option<usize>) -> Self {
        Self {
            vertices: Vec::new(),
            max_vertices,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl VertexSink for VertexBuffer {
    fn upload(&mut self, vertices: Vec<RenderVertex>) -> Result<(), VertexUploadError> {
        if let Some(capacity) = self.max_vertices.filter(|&capacity| vertices.len() > capacity) {
            return Err(VertexUploadError::CapacityExceeded {
                requested: vertices.len(),
                capacity,
            });
        }

        self.vertices = vertices;
        Ok(())
    }

    fn vertices(&self) -> &[RenderVertex] {
        &self.vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::ColourRgba;

    fn vertices(count: usize, alpha: f32) -> Vec<RenderVertex> {
        (0..count)
            .map(|i| RenderVertex {
                position: [i as f32, 0.0, 0.0],
                colour: ColourRgba::WHITE.with_alpha(alpha),
            })
            .collect()
    }

    #[test]
    fn upload_replaces_contents() {
        let mut buffer = VertexBuffer::new();

        buffer.upload(vertices(5, 0.01)).unwrap();
        buffer.upload(vertices(3, 0.1)).unwrap();

        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.vertices(), vertices(3, 0.1).as_slice());
    }

    #[test]
    fn upload_over_capacity_keeps_previous_contents() {
        let mut buffer = VertexBuffer::with_max_vertices(4);
        buffer.upload(vertices(4, 0.01)).unwrap();

        let result = buffer.upload(vertices(5, 0.1));

        assert_eq!(
            result,
            Err(VertexUploadError::CapacityExceeded {
                requested: 5,
                capacity: 4
            })
        );
        assert_eq!(buffer.vertices(), vertices(4, 0.01).as_slice());
    }

    #[test]
    fn empty_upload_is_accepted() {
        let mut buffer = VertexBuffer::with_max_vertices(0);

        assert!(buffer.upload(Vec::new()).is_ok());
        assert!(buffer.is_empty());
    }
}
