use crate::core::data::cloud_point::CloudPoint;
use crate::core::data::transform_set::TransformSet;
use crate::core::data::vector2::Vector2;

const LIGHTNESS_EXPONENT: f64 = 0.7;

/// Deterministic full-tree expansion of an iterated function system.
///
/// Every node applies all three transforms to its point, emits the three
/// children (in transform order) and then descends into each child, so the
/// output is a depth-first pre-order walk of a ternary tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IfsAlgorithm<'a> {
    transforms: &'a TransformSet,
    max_depth: u32,
}

impl<'a> IfsAlgorithm<'a> {
    #[must_use]
    pub fn new(transforms: &'a TransformSet, max_depth: u32) -> Self {
        Self {
            transforms,
            max_depth,
        }
    }

    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Lightness of the children produced while `remaining` levels are left.
    ///
    /// Zero at the first level, approaching one towards the leaves.
    #[must_use]
    pub fn lightness(&self, remaining: u32) -> f64 {
        if self.max_depth == 0 {
            return 0.0;
        }

        let consumed = f64::from(self.max_depth.saturating_sub(remaining));
        (consumed / f64::from(self.max_depth)).powf(LIGHTNESS_EXPONENT)
    }

    #[must_use]
    pub fn children(&self, point: Vector2, remaining: u32) -> [CloudPoint; 3] {
        let lightness = self.lightness(remaining);
        let transforms = *self.transforms.transforms();

        transforms.map(|transform| CloudPoint {
            position: transform.apply(point),
            lightness,
        })
    }

    /// Appends the subtree below `point` to `out`, using an explicit work
    /// stack instead of recursion.
    pub fn expand_into(&self, point: Vector2, remaining: u32, out: &mut Vec<CloudPoint>) {
        let mut stack: Vec<(Vector2, u32)> = vec![(point, remaining)];

        while let Some((point, remaining)) = stack.pop() {
            if remaining == 0 {
                continue;
            }

            let children = self.children(point, remaining);
            out.extend_from_slice(&children);

            if remaining > 1 {
                // reversed so the first child is expanded first
                stack.extend(
                    children
                        .iter()
                        .rev()
                        .map(|child| (child.position, remaining - 1)),
                );
            }
        }
    }
}
