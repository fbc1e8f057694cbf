use std::ops::Mul;
use crate::core::data::vector2::Vector2;

/// A 2D affine map stored as a row-major 3x3 homogeneous matrix.
///
/// The upper-left 2x2 block holds rotation and scale, the third column holds
/// the translation and the bottom row is always `[0, 0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AffineTransform {
    m: [[f64; 3]; 3],
}

impl AffineTransform {
    pub const IDENTITY: Self = Self {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Builds `[a b tx; c d ty; 0 0 1]`.
    #[must_use]
    pub const fn new(a: f64, b: f64, tx: f64, c: f64, d: f64, ty: f64) -> Self {
        Self {
            m: [[a, b, tx], [c, d, ty], [0.0, 0.0, 1.0]],
        }
    }

    /// Rotation by `angle_radians` with uniform `scale`, followed by a translation.
    #[must_use]
    pub fn from_rotation_scale_translation(
        angle_radians: f64,
        scale: f64,
        translation: Vector2,
    ) -> Self {
        let c = angle_radians.cos() * scale;
        let s = angle_radians.sin() * scale;

        Self::new(c, -s, translation.x, s, c, translation.y)
    }

    #[must_use]
    pub const fn translation(offset: Vector2) -> Self {
        Self::new(1.0, 0.0, offset.x, 0.0, 1.0, offset.y)
    }

    #[must_use]
    pub const fn scaling(factor: f64) -> Self {
        Self::new(factor, 0.0, 0.0, 0.0, factor, 0.0)
    }

    #[must_use]
    pub fn matrix(&self) -> [[f64; 3]; 3] {
        self.m
    }

    /// Lifts `point` to `(x, y, 1)`, multiplies and drops the homogeneous coordinate.
    #[inline]
    #[must_use]
    pub fn apply(&self, point: Vector2) -> Vector2 {
        Vector2 {
            x: self.m[0][0] * point.x + self.m[0][1] * point.y + self.m[0][2],
            y: self.m[1][0] * point.x + self.m[1][1] * point.y + self.m[1][2],
        }
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// `a * b` applies `b` first, then `a`.
impl Mul for AffineTransform {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let mut m = [[0.0; 3]; 3];

        for (row, out_row) in m.iter_mut().enumerate() {
            for (col, out) in out_row.iter_mut().enumerate() {
                *out = (0..3).map(|k| self.m[row][k] * other.m[k][col]).sum();
            }
        }

        Self { m }
    }
}
