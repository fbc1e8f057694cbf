use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::adapters::raster::canvas::{Canvas, CanvasError};
use crate::controllers::explorer::data::explorer_config::ExplorerConfig;
use crate::controllers::ports::snapshot_writer::{SnapshotWriteError, SnapshotWriterPort};
use crate::core::actions::generate_transform::ports::random_source::RandomSource;
use crate::core::actions::render_frame::render_frame::render_snapshot;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_vertex::RenderVertex;

#[derive(Debug, Clone, PartialEq)]
pub enum ExportError {
    TargetSize {
        screen_width: u32,
        screen_height: u32,
        scale_factor: u32,
    },
    Target(CanvasError),
    Write(SnapshotWriteError),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TargetSize {
                screen_width,
                screen_height,
                scale_factor,
            } => write!(
                f,
                "export target {}x{} scaled by {} is too large",
                screen_width, screen_height, scale_factor
            ),
            Self::Target(err) => write!(f, "{}", err),
            Self::Write(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::TargetSize { .. } => None,
            Self::Target(err) => Some(err),
            Self::Write(err) => Some(err),
        }
    }
}

/// Renders the vertex stream offscreen at export resolution and hands the
/// image to a writer.
///
/// The export transform only depends on the target size, so every export of
/// the same vertices produces the same image whatever the viewport shows.
pub struct ExportService<W: SnapshotWriterPort> {
    writer: W,
    screen_width: u32,
    screen_height: u32,
    scale_factor: u32,
    directory: PathBuf,
}

impl<W: SnapshotWriterPort> ExportService<W> {
    pub fn new(writer: W, config: &ExplorerConfig) -> Self {
        Self {
            writer,
            screen_width: config.screen_width,
            screen_height: config.screen_height,
            scale_factor: config.export_scale_factor,
            directory: config.export_directory.clone(),
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    #[must_use]
    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn target_size(&self) -> Result<(u32, u32), ExportError> {
        let size_error = || ExportError::TargetSize {
            screen_width: self.screen_width,
            screen_height: self.screen_height,
            scale_factor: self.scale_factor,
        };

        let width = self
            .screen_width
            .checked_mul(self.scale_factor)
            .ok_or_else(size_error)?;
        let height = self
            .screen_height
            .checked_mul(self.scale_factor)
            .ok_or_else(size_error)?;

        Ok((width, height))
    }

    /// Draws `vertices` into a fresh offscreen target.
    pub fn render(&self, vertices: &[RenderVertex]) -> Result<PixelBuffer, ExportError> {
        let (width, height) = self.target_size()?;
        let mut canvas = Canvas::new(width, height).map_err(ExportError::Target)?;
        let target_center = canvas.center();

        render_snapshot(&mut canvas, vertices, target_center);

        Ok(canvas.into_pixel_buffer())
    }

    /// Renders and writes `<token>.png` into the export directory, returning
    /// the written path.
    pub fn export<R: RandomSource + ?Sized>(
        &self,
        vertices: &[RenderVertex],
        random: &mut R,
    ) -> Result<PathBuf, ExportError> {
        let image = self.render(vertices)?;
        let path = self
            .directory
            .join(format!("{}.png", random.unique_token()));

        self.writer
            .write(&image, &path)
            .map_err(ExportError::Write)?;

        Ok(path)
    }
}
