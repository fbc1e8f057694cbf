use std::error::Error;
use std::fmt;

use crate::core::actions::render_frame::ports::drawer::{DrawPrimitive, Drawer, ShadeStyle};
use crate::core::data::affine_transform::AffineTransform;
use crate::core::data::colour::ColourRgba;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;
use crate::core::data::render_vertex::RenderVertex;
use crate::core::data::vector2::Vector2;

#[derive(Debug, Clone, PartialEq)]
pub enum CanvasError {
    Size(PixelRectError),
    Allocation(PixelBufferError),
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Size(err) => write!(f, "invalid canvas size: {}", err),
            Self::Allocation(err) => write!(f, "canvas allocation failed: {}", err),
        }
    }
}

impl Error for CanvasError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Size(err) => Some(err),
            Self::Allocation(err) => Some(err),
        }
    }
}

/// CPU render target implementing `Drawer` over an RGB pixel buffer.
///
/// A point covers the pixel its transformed position falls into and is
/// blended source-over with its alpha. Vertices are blended in stream order,
/// so identical input always gives identical pixels.
#[derive(Debug)]
pub struct Canvas {
    pixels: PixelBuffer,
    transform: AffineTransform,
    shade_style: ShadeStyle,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        let pixel_rect = PixelRect::from_size(width, height).map_err(CanvasError::Size)?;
        let pixels = PixelBuffer::try_new(pixel_rect).map_err(CanvasError::Allocation)?;

        Ok(Self {
            pixels,
            transform: AffineTransform::IDENTITY,
            shade_style: ShadeStyle::default(),
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.pixel_rect().width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.pixel_rect().height()
    }

    #[must_use]
    pub fn center(&self) -> Vector2 {
        self.pixels.pixel_rect().center()
    }

    #[must_use]
    pub fn transform(&self) -> AffineTransform {
        self.transform
    }

    #[must_use]
    pub fn pixel_buffer(&self) -> &PixelBuffer {
        &self.pixels
    }

    #[must_use]
    pub fn into_pixel_buffer(self) -> PixelBuffer {
        self.pixels
    }

    fn draw_points(&mut self, vertices: &[RenderVertex]) {
        for vertex in vertices {
            let position = self.transform.apply(Vector2 {
                x: f64::from(vertex.position[0]),
                y: f64::from(vertex.position[1]),
            });

            if !position.is_finite() {
                continue;
            }

            let colour = match self.shade_style {
                ShadeStyle::VertexColour => vertex.colour,
                ShadeStyle::Uniform(colour) => colour,
            };
            let pixel = Point {
                x: position.x.floor() as i32,
                y: position.y.floor() as i32,
            };

            // points outside the target are clipped
            let _ = self.pixels.blend_pixel(pixel, colour);
        }
    }
}

impl Drawer for Canvas {
    fn reset_transform(&mut self) {
        self.transform = AffineTransform::IDENTITY;
    }

    fn clear(&mut self, colour: ColourRgba) {
        self.pixels.fill(colour.to_colour());
    }

    fn set_shade_style(&mut self, style: ShadeStyle) {
        self.shade_style = style;
    }

    fn translate(&mut self, offset: Vector2) {
        self.transform = self.transform * AffineTransform::translation(offset);
    }

    fn scale(&mut self, factor: f64) {
        self.transform = self.transform * AffineTransform::scaling(factor);
    }

    fn draw(&mut self, vertices: &[RenderVertex], primitive: DrawPrimitive) {
        match primitive {
            DrawPrimitive::Points => self.draw_points(vertices),
        }
    }
}
