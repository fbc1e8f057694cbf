use std::path::Path;

use crate::controllers::ports::snapshot_writer::{SnapshotWriteError, SnapshotWriterPort};
use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes RGB pixel buffers as PNG files.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngFilePresenter;

impl PngFilePresenter {
    pub fn new() -> Self {
        Self
    }
}

impl SnapshotWriterPort for PngFilePresenter {
    fn write(&self, buffer: &PixelBuffer, path: &Path) -> Result<(), SnapshotWriteError> {
        let pixel_rect = buffer.pixel_rect();

        image::save_buffer_with_format(
            path,
            buffer.buffer(),
            pixel_rect.width(),
            pixel_rect.height(),
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )
        .map_err(|err| SnapshotWriteError::new(path, err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::data::point::Point;

    #[test]
    fn test_writes_readable_png() {
        let path = std::env::temp_dir().join("ifs_explorer_png_presenter_test.png");
        let mut buffer = PixelBuffer::new(PixelRect::from_size(4, 3).unwrap());
        buffer
            .set_pixel(Point { x: 2, y: 1 }, Colour { r: 10, g: 200, b: 30 })
            .unwrap();

        PngFilePresenter::new().write(&buffer, &path).unwrap();

        let image = image::open(&path).unwrap().to_rgb8();
        assert_eq!(image.dimensions(), (4, 3));
        assert_eq!(image.get_pixel(2, 1).0, [10, 200, 30]);
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0]);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_directory_is_reported() {
        let path = std::env::temp_dir()
            .join("ifs_explorer_missing_dir")
            .join("nested")
            .join("out.png");
        let buffer = PixelBuffer::new(PixelRect::from_size(2, 2).unwrap());

        let err = PngFilePresenter::new().write(&buffer, &path).unwrap_err();

        assert_eq!(err.path, path);
        assert!(!err.message.is_empty());
    }
}
