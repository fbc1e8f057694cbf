use std::error::Error;
use std::fmt;
use crate::core::data::point::Point;
use crate::core::data::vector2::Vector2;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: i32, height: i32 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel rect size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelRectError {}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        let dx = (bottom_right.x as i64) - (top_left.x as i64);
        let dy = (bottom_right.y as i64) - (top_left.y as i64);

        let width  = (dx + if dx >= 0 { 1 } else { -1 }) as i32;
        let height = (dy + if dy >= 0 { 1 } else { -1 }) as i32;

        if width < 2 || height < 2 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Rectangle anchored at the origin covering `width` x `height` pixels.
    pub fn from_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        let to_i32 = |extent: u32| i32::try_from(extent).unwrap_or(i32::MAX);
        let (width, height) = (to_i32(width), to_i32(height));

        if width < 2 || height < 2 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Self::new(
            Point { x: 0, y: 0 },
            Point {
                x: width - 1,
                y: height - 1,
            },
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (self.bottom_right.x - self.top_left.x + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom_right.y - self.top_left.y + 1) as u32
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Geometric centre in continuous pixel space, e.g. `(640, 360)` for 1280x720.
    #[must_use]
    pub fn center(&self) -> Vector2 {
        Vector2 {
            x: f64::from(self.top_left.x) + f64::from(self.width()) / 2.0,
            y: f64::from(self.top_left.y) + f64::from(self.height()) / 2.0,
        }
    }
}
