use rayon::prelude::*;

use crate::core::data::cloud_point::PointCloud;
use crate::core::data::transform_set::TransformSet;
use crate::core::data::vector2::Vector2;
use crate::core::fractals::ifs::algorithm::IfsAlgorithm;
use crate::core::fractals::ifs::ifs_config::expected_point_count;

/// Generates the same cloud as `generate_ifs_points`, expanding the three
/// root branches on rayon's thread pool.
///
/// The root children are emitted first and the branch subtrees are
/// concatenated in transform order, so the layout is identical to the
/// sequential walk.
pub fn generate_ifs_points_rayon(
    transforms: &TransformSet,
    seed: Vector2,
    max_depth: u32,
) -> PointCloud {
    if max_depth == 0 {
        return Vec::new();
    }

    let algorithm = IfsAlgorithm::new(transforms, max_depth);
    let roots = algorithm.children(seed, max_depth);
    let branch_depth = max_depth - 1;

    let branches: Vec<PointCloud> = roots
        .par_iter()
        .map(|root| {
            let mut branch = Vec::with_capacity(expected_point_count(branch_depth));
            algorithm.expand_into(root.position, branch_depth, &mut branch);
            branch
        })
        .collect();

    let mut points = Vec::with_capacity(expected_point_count(max_depth));
    points.extend_from_slice(&roots);

    for branch in branches {
        points.extend(branch);
    }

    points
}
