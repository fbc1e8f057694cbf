use crate::core::data::affine_transform::AffineTransform;

/// The three maps of one iterated function system.
///
/// The count is fixed by the array type; a set is replaced as a whole and
/// never edited in place.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransformSet {
    transforms: [AffineTransform; 3],
}

impl TransformSet {
    #[must_use]
    pub const fn new(transforms: [AffineTransform; 3]) -> Self {
        Self { transforms }
    }

    #[must_use]
    pub fn transforms(&self) -> &[AffineTransform; 3] {
        &self.transforms
    }

    pub fn iter(&self) -> impl Iterator<Item = &AffineTransform> {
        self.transforms.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::vector2::Vector2;

    #[test]
    fn test_iter_preserves_order() {
        let first = AffineTransform::translation(Vector2::new(1.0, 0.0));
        let second = AffineTransform::translation(Vector2::new(0.0, 1.0));
        let third = AffineTransform::scaling(0.5);
        let set = TransformSet::new([first, second, third]);

        let collected: Vec<&AffineTransform> = set.iter().collect();

        assert_eq!(collected, vec![&first, &second, &third]);
        assert_eq!(set.transforms().len(), 3);
    }
}
