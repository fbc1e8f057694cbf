use rayon::prelude::*;

use crate::core::data::cloud_point::CloudPoint;
use crate::core::data::colour::ColourRgba;
use crate::core::data::render_vertex::RenderVertex;

/// Maps every point to a white vertex at `(x, y, 0)` with the given alpha.
///
/// Lightness is not folded into the colour. Order is preserved.
pub fn build_render_vertices(points: &[CloudPoint], alpha: f32) -> Vec<RenderVertex> {
    let colour = ColourRgba::WHITE.with_alpha(alpha);

    points
        .par_iter()
        .map(|point| RenderVertex {
            position: [point.position.x as f32, point.position.y as f32, 0.0],
            colour,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::vector2::Vector2;

    fn point(x: f64, y: f64, lightness: f64) -> CloudPoint {
        CloudPoint {
            position: Vector2::new(x, y),
            lightness,
        }
    }

    #[test]
    fn test_maps_positions_with_zero_z() {
        let points = vec![point(0.5, -0.25, 0.0), point(-1.0, 2.0, 0.6)];

        let vertices = build_render_vertices(&points, 0.1);

        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[0].position, [0.5, -0.25, 0.0]);
        assert_eq!(vertices[1].position, [-1.0, 2.0, 0.0]);
    }

    #[test]
    fn test_colour_is_white_with_requested_alpha() {
        let points = vec![point(0.0, 0.0, 0.0), point(1.0, 1.0, 0.9)];

        let startup = build_render_vertices(&points, 0.01);
        let regenerated = build_render_vertices(&points, 0.1);

        assert!(startup.iter().all(|v| v.colour == ColourRgba::WHITE.with_alpha(0.01)));
        assert!(regenerated.iter().all(|v| v.colour == ColourRgba::WHITE.with_alpha(0.1)));
    }

    #[test]
    fn test_lightness_does_not_change_colour() {
        let vertices = build_render_vertices(&[point(0.0, 0.0, 0.0), point(0.0, 0.0, 0.99)], 0.5);

        assert_eq!(vertices[0], vertices[1]);
    }

    #[test]
    fn test_preserves_point_order() {
        let points: Vec<CloudPoint> = (0..10_000).map(|i| point(f64::from(i), 0.0, 0.0)).collect();

        let vertices = build_render_vertices(&points, 0.1);

        assert!(
            vertices
                .iter()
                .enumerate()
                .all(|(i, v)| v.position[0] == i as f32)
        );
    }

    #[test]
    fn test_empty_cloud_gives_empty_stream() {
        assert!(build_render_vertices(&[], 0.1).is_empty());
    }
}
