use crate::core::data::colour::{Colour, ColourRgba};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.width() as usize * pixel_rect.height() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        pixel_rect: PixelRect
    },
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
    AllocationFailed {
        bytes: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_rect_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "pixel rect size {} does not match buffer size {}",
                    pixel_rect_size, buffer_size
                )
            }
            Self::AllocationFailed { bytes } => {
                write!(f, "could not allocate {} bytes for pixel buffer", bytes)
            }
            Self::PixelOutsideBounds { pixel, pixel_rect } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of PixelRect bounds top:{}, left:{}, bottom:{}, right:{}",
                    pixel.x,
                    pixel.y,
                    pixel_rect.top_left().y,
                    pixel_rect.top_left().x,
                    pixel_rect.bottom_right().y,
                    pixel_rect.bottom_right().x
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

#[derive(Debug)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        let total_bytes = pixel_rect_to_buffer_size(pixel_rect);

        Self {
            pixel_rect,
            buffer: vec![0; total_bytes],
        }
    }

    /// Like `new`, but reports allocation failure instead of aborting.
    ///
    /// Used for large offscreen targets whose size depends on configuration.
    pub fn try_new(pixel_rect: PixelRect) -> Result<Self, PixelBufferError> {
        let total_bytes = pixel_rect
            .width()
            .checked_mul(pixel_rect.height())
            .and_then(|pixels| (pixels as usize).checked_mul(BYTES_PER_PIXEL))
            .ok_or(PixelBufferError::AllocationFailed { bytes: usize::MAX })?;

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(total_bytes)
            .map_err(|_| PixelBufferError::AllocationFailed { bytes: total_bytes })?;
        buffer.resize(total_bytes, 0);

        Ok(Self { pixel_rect, buffer })
    }

    pub fn from_data(
        pixel_rect: PixelRect,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let buffer_size = pixel_rect_to_buffer_size(pixel_rect);

        if buffer_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: buffer_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    /// Source-over blend of `colour` onto the pixel, weighted by its alpha.
    pub fn blend_pixel(&mut self, pixel: Point, colour: ColourRgba) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;
        let alpha = colour.a.clamp(0.0, 1.0);

        for (offset, source) in [colour.r, colour.g, colour.b].into_iter().enumerate() {
            let destination = f32::from(self.buffer[index + offset]);
            let blended = source.clamp(0.0, 1.0) * 255.0 * alpha + destination * (1.0 - alpha);
            self.buffer[index + offset] = blended.round().clamp(0.0, 255.0) as u8;
        }

        Ok(())
    }

    pub fn fill(&mut self, colour: Colour) {
        for pixel in self.buffer.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel[0] = colour.r;
            pixel[1] = colour.g;
            pixel[2] = colour.b;
        }
    }

    /// Expands the RGB contents into an opaque RGBA destination, e.g. a `pixels` frame.
    pub fn write_rgba_into(&self, destination: &mut [u8]) -> Result<(), PixelBufferError> {
        let expected = self.buffer.len() / BYTES_PER_PIXEL * 4;

        if destination.len() != expected {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: expected,
                buffer_size: destination.len(),
            });
        }

        for (src_pixel, dst_pixel) in self
            .buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(destination.chunks_exact_mut(4))
        {
            dst_pixel[..3].copy_from_slice(src_pixel);
            dst_pixel[3] = 255;
        }

        Ok(())
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.pixel_rect.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            });
        }

        let relative_x = (pixel.x - self.pixel_rect.top_left().x) as usize;
        let relative_y = (pixel.y - self.pixel_rect.top_left().y) as usize;

        Ok((relative_y * self.pixel_rect.width() as usize + relative_x) * BYTES_PER_PIXEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_pixel_rect(width: i32, height: i32) -> PixelRect {
        PixelRect::new(
            Point { x: 0, y: 0 },
            Point {
                x: width - 1,
                y: height - 1,
            },
        )
        .unwrap()
    }

    fn create_offset_pixel_rect(x: i32, y: i32, width: i32, height: i32) -> PixelRect {
        PixelRect::new(
            Point { x, y },
            Point {
                x: x + width - 1,
                y: y + height - 1,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let pixel_rect = create_pixel_rect(10, 10);
        let buffer = PixelBuffer::new(pixel_rect);

        assert_eq!(buffer.pixel_rect(), pixel_rect);
        assert_eq!(buffer.buffer().len(), 300); // 10 * 10 * 3
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_data_valid() {
        let pixel_rect = create_pixel_rect(2, 2);
        let data: Vec<u8> = vec![
            255, 0, 0, // pixel (0,0) - red
            0, 255, 0, // pixel (1,0) - green
            0, 0, 255, // pixel (0,1) - blue
            255, 255, 0, // pixel (1,1) - yellow
        ];

        let buffer = PixelBuffer::from_data(pixel_rect, data.clone());

        assert!(buffer.is_ok());
        let buffer = buffer.unwrap();
        assert_eq!(buffer.pixel_rect(), pixel_rect);
        assert_eq!(buffer.buffer(), &data);
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let pixel_rect = create_pixel_rect(2, 2);
        let data: Vec<u8> = vec![255, 0, 0]; // Only 3 bytes, need 12

        let result = PixelBuffer::from_data(pixel_rect, data);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                pixel_rect_size: 12,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_pixel_rect_getter() {
        let pixel_rect = create_offset_pixel_rect(10, 20, 30, 40);
        let buffer = PixelBuffer::new(pixel_rect);

        assert_eq!(buffer.pixel_rect(), pixel_rect);
    }

    #[test]
    fn test_set_pixel_valid() {
        let pixel_rect = create_pixel_rect(3, 3);
        let mut buffer = PixelBuffer::new(pixel_rect);
        let red = Colour { r: 255, g: 0, b: 0 };
        let result = buffer.set_pixel(Point { x: 1, y: 1 }, red);

        assert!(result.is_ok());
        assert_eq!(buffer.buffer()[12], 255);
        assert_eq!(buffer.buffer()[13], 0);
        assert_eq!(buffer.buffer()[14], 0);
    }

    #[test]
    fn test_set_pixel_with_offset_rect() {
        let pixel_rect = create_offset_pixel_rect(10, 20, 3, 3);
        let mut buffer = PixelBuffer::new(pixel_rect);

        let white = Colour {
            r: 255,
            g: 255,
            b: 255,
        };

        let result = buffer.set_pixel(Point { x: 11, y: 21 }, white);

        assert!(result.is_ok());
        assert_eq!(buffer.buffer()[12], 255);
        assert_eq!(buffer.buffer()[13], 255);
        assert_eq!(buffer.buffer()[14], 255);
    }

    #[test]
    fn test_set_pixel_outside_bounds_right() {
        let pixel_rect = create_pixel_rect(3, 3);
        let mut buffer = PixelBuffer::new(pixel_rect);
        let colour = Colour { r: 255, g: 0, b: 0 };
        let result = buffer.set_pixel(Point { x: 5, y: 1 }, colour);

        assert_eq!(
            result,
            Err(PixelBufferError::PixelOutsideBounds {
                pixel: Point { x: 5, y: 1 },
                pixel_rect
            })
        );
    }

    #[test]
    fn test_set_pixel_outside_bounds_negative() {
        let pixel_rect = create_pixel_rect(3, 3);
        let mut buffer = PixelBuffer::new(pixel_rect);
        let colour = Colour { r: 255, g: 0, b: 0 };
        let result = buffer.set_pixel(Point { x: -1, y: -1 }, colour);

        assert_eq!(
            result,
            Err(PixelBufferError::PixelOutsideBounds {
                pixel: Point { x: -1, y: -1 },
                pixel_rect
            })
        );
    }

    #[test]
    fn test_try_new_matches_new() {
        let pixel_rect = create_pixel_rect(16, 9);

        let buffer = PixelBuffer::try_new(pixel_rect).unwrap();

        assert_eq!(buffer.buffer(), PixelBuffer::new(pixel_rect).buffer());
    }

    #[test]
    fn test_pixel_reads_back_set_pixel() {
        let pixel_rect = create_offset_pixel_rect(5, 5, 3, 3);
        let mut buffer = PixelBuffer::new(pixel_rect);
        let colour = Colour { r: 1, g: 2, b: 3 };

        buffer.set_pixel(Point { x: 7, y: 6 }, colour).unwrap();

        assert_eq!(buffer.pixel(Point { x: 7, y: 6 }), Ok(colour));
        assert_eq!(buffer.pixel(Point { x: 5, y: 5 }), Ok(Colour::BLACK));
    }

    #[test]
    fn test_fill_sets_every_pixel() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(4, 3));

        buffer.fill(Colour { r: 9, g: 8, b: 7 });

        assert!(buffer.buffer().chunks_exact(3).all(|p| p == [9, 8, 7]));
    }

    #[test]
    fn test_blend_pixel_weights_by_alpha() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(2, 2));
        let pixel = Point { x: 1, y: 0 };

        buffer.blend_pixel(pixel, ColourRgba::WHITE.with_alpha(0.1)).unwrap();
        assert_eq!(buffer.pixel(pixel).unwrap(), Colour { r: 26, g: 26, b: 26 });

        buffer.blend_pixel(pixel, ColourRgba::WHITE.with_alpha(0.1)).unwrap();
        assert_eq!(buffer.pixel(pixel).unwrap(), Colour { r: 49, g: 49, b: 49 });
    }

    #[test]
    fn test_blend_pixel_opaque_replaces() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(2, 2));
        let pixel = Point { x: 0, y: 1 };

        buffer.blend_pixel(pixel, ColourRgba::WHITE).unwrap();

        assert_eq!(buffer.pixel(pixel).unwrap(), Colour::WHITE);
    }

    #[test]
    fn test_blend_pixel_outside_bounds() {
        let pixel_rect = create_pixel_rect(2, 2);
        let mut buffer = PixelBuffer::new(pixel_rect);

        let result = buffer.blend_pixel(Point { x: 2, y: 0 }, ColourRgba::WHITE);

        assert_eq!(
            result,
            Err(PixelBufferError::PixelOutsideBounds {
                pixel: Point { x: 2, y: 0 },
                pixel_rect
            })
        );
    }

    #[test]
    fn test_write_rgba_into_sets_opaque_alpha() {
        let pixel_rect = create_pixel_rect(2, 2);
        let data: Vec<u8> = vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
        let buffer = PixelBuffer::from_data(pixel_rect, data).unwrap();
        let mut rgba = vec![0; 16];

        buffer.write_rgba_into(&mut rgba).unwrap();

        assert_eq!(
            rgba,
            vec![255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255]
        );
    }

    #[test]
    fn test_write_rgba_into_rejects_wrong_length() {
        let buffer = PixelBuffer::new(create_pixel_rect(2, 2));
        let mut rgba = vec![0; 12];

        assert_eq!(
            buffer.write_rgba_into(&mut rgba),
            Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: 16,
                buffer_size: 12
            })
        );
    }
}
