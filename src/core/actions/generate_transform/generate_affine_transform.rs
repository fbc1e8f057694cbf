use std::ops::Range;

use crate::core::actions::generate_transform::ports::random_source::RandomSource;
use crate::core::data::affine_transform::AffineTransform;
use crate::core::data::transform_set::TransformSet;
use crate::core::data::vector2::Vector2;

pub const ANGLE_DEGREES_RANGE: Range<f64> = 0.0..360.0;
pub const SCALE_RANGE: Range<f64> = 0.2..1.0;
pub const TRANSLATION_RANGE: Range<f64> = -0.5..0.5;

/// Draws angle, scale, tx and ty (in that order) and builds the matching
/// rotation-scale-translation matrix.
pub fn generate_affine_transform<R: RandomSource + ?Sized>(random: &mut R) -> AffineTransform {
    let angle = random
        .uniform(ANGLE_DEGREES_RANGE.start, ANGLE_DEGREES_RANGE.end)
        .to_radians();
    let scale = random.uniform(SCALE_RANGE.start, SCALE_RANGE.end);
    let tx = random.uniform(TRANSLATION_RANGE.start, TRANSLATION_RANGE.end);
    let ty = random.uniform(TRANSLATION_RANGE.start, TRANSLATION_RANGE.end);

    AffineTransform::from_rotation_scale_translation(angle, scale, Vector2 { x: tx, y: ty })
}

pub fn generate_transform_set<R: RandomSource + ?Sized>(random: &mut R) -> TransformSet {
    TransformSet::new([
        generate_affine_transform(random),
        generate_affine_transform(random),
        generate_affine_transform(random),
    ])
}
