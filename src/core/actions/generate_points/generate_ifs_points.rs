use crate::core::data::cloud_point::PointCloud;
use crate::core::data::transform_set::TransformSet;
use crate::core::data::vector2::Vector2;
use crate::core::fractals::ifs::algorithm::IfsAlgorithm;
use crate::core::fractals::ifs::ifs_config::expected_point_count;

/// Expands `seed` into the full point cloud of depth `max_depth` on the
/// calling thread.
pub fn generate_ifs_points(transforms: &TransformSet, seed: Vector2, max_depth: u32) -> PointCloud {
    let algorithm = IfsAlgorithm::new(transforms, max_depth);
    let mut points = Vec::with_capacity(expected_point_count(max_depth));

    algorithm.expand_into(seed, max_depth, &mut points);

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::random::rng_source::RngRandomSource;
    use crate::core::actions::generate_transform::generate_affine_transform::generate_transform_set;
    use crate::core::data::affine_transform::AffineTransform;

    const EPSILON: f64 = 1e-12;

    fn random_transforms(seed: u64) -> TransformSet {
        generate_transform_set(&mut RngRandomSource::seeded(seed))
    }

    #[test]
    fn test_point_count_matches_geometric_series() {
        let transforms = random_transforms(1);

        for depth in 0..=7 {
            let points = generate_ifs_points(&transforms, Vector2::ZERO, depth);

            assert_eq!(points.len(), (3usize.pow(depth + 1) - 3) / 2, "depth {}", depth);
        }
    }

    #[test]
    fn test_point_count_is_independent_of_transform_values() {
        let shrinking = TransformSet::new([AffineTransform::scaling(0.0); 3]);

        assert_eq!(
            generate_ifs_points(&shrinking, Vector2::ZERO, 5).len(),
            generate_ifs_points(&random_transforms(2), Vector2::new(3.0, 4.0), 5).len()
        );
    }

    #[test]
    fn test_zero_depth_yields_empty_cloud() {
        let points = generate_ifs_points(&random_transforms(3), Vector2::ZERO, 0);

        assert!(points.is_empty());
    }

    #[test]
    fn test_depth_two_lightness_levels() {
        let points = generate_ifs_points(&random_transforms(4), Vector2::ZERO, 2);
        let expected_second_level = 0.5_f64.powf(0.7);

        assert_eq!(points.len(), 12);
        assert!(points[..3].iter().all(|p| p.lightness == 0.0));
        assert!(
            points[3..]
                .iter()
                .all(|p| (p.lightness - expected_second_level).abs() < EPSILON)
        );
        assert!((expected_second_level - 0.6156).abs() < 1e-4);
    }

    #[test]
    fn test_lightness_levels_have_ternary_population() {
        let depth = 6;
        let points = generate_ifs_points(&random_transforms(5), Vector2::ZERO, depth);

        let mut levels: Vec<f64> = points.iter().map(|p| p.lightness).collect();
        levels.sort_by(f64::total_cmp);
        levels.dedup();

        assert_eq!(levels.len(), depth as usize);
        assert_eq!(levels[0], 0.0);
        assert!(levels.iter().all(|&l| (0.0..1.0).contains(&l)));

        for (level, lightness) in levels.iter().enumerate() {
            let count = points.iter().filter(|p| p.lightness == *lightness).count();
            assert_eq!(count, 3usize.pow(level as u32 + 1));
        }
    }

    fn expand_recursively(
        algorithm: &IfsAlgorithm<'_>,
        point: Vector2,
        remaining: u32,
        parent_lightness: f64,
        out: &mut PointCloud,
    ) {
        if remaining == 0 {
            return;
        }

        let children = algorithm.children(point, remaining);
        for child in &children {
            assert!(child.lightness >= parent_lightness);
        }
        out.extend_from_slice(&children);

        for child in &children {
            expand_recursively(algorithm, child.position, remaining - 1, child.lightness, out);
        }
    }

    #[test]
    fn test_matches_recursive_walk_with_non_decreasing_lightness() {
        let depth = 6;
        let transforms = random_transforms(6);
        let seed = Vector2::new(-0.2, 0.4);
        let algorithm = IfsAlgorithm::new(&transforms, depth);
        let mut expected = Vec::new();

        expand_recursively(&algorithm, seed, depth, 0.0, &mut expected);

        assert_eq!(generate_ifs_points(&transforms, seed, depth), expected);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let transforms = random_transforms(7);
        let seed = Vector2::new(0.25, -0.5);

        let first = generate_ifs_points(&transforms, seed, 6);
        let second = generate_ifs_points(&transforms, seed, 6);

        assert_eq!(first, second);
    }

    #[test]
    fn test_first_level_applies_each_transform_to_seed() {
        let transforms = random_transforms(8);
        let seed = Vector2::new(0.1, 0.2);

        let points = generate_ifs_points(&transforms, seed, 3);

        for (point, transform) in points.iter().zip(transforms.iter()) {
            assert_eq!(point.position, transform.apply(seed));
        }
    }
}
