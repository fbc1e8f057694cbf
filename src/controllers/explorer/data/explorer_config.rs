use std::path::PathBuf;

use crate::core::data::vector2::Vector2;
use crate::core::fractals::ifs::ifs_config::IfsConfig;
use crate::core::viewport::viewport_controller::DEFAULT_ZOOM_SENSITIVITY;

pub const DEFAULT_SCREEN_WIDTH: u32 = 1280;
pub const DEFAULT_SCREEN_HEIGHT: u32 = 720;
pub const DEFAULT_EXPORT_SCALE_FACTOR: u32 = 6;

/// Session settings for one explorer window.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    /// Export target size as a multiple of the screen size.
    pub export_scale_factor: u32,
    pub export_directory: PathBuf,
    pub zoom_sensitivity: f64,
    /// Upper bound on uploaded vertices, `None` for unbounded.
    pub max_vertices: Option<usize>,
    pub ifs: IfsConfig,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            export_scale_factor: DEFAULT_EXPORT_SCALE_FACTOR,
            export_directory: PathBuf::from("."),
            zoom_sensitivity: DEFAULT_ZOOM_SENSITIVITY,
            max_vertices: None,
            ifs: IfsConfig::default(),
        }
    }
}

impl ExplorerConfig {
    #[must_use]
    pub fn screen_center(&self) -> Vector2 {
        Vector2::new(
            f64::from(self.screen_width) / 2.0,
            f64::from(self.screen_height) / 2.0,
        )
    }
}
