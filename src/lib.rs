mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use adapters::random::rng_source::RngRandomSource;
pub use adapters::raster::canvas::{Canvas, CanvasError};
pub use adapters::raster::vertex_buffer::VertexBuffer;
pub use controllers::cli::snapshot::SnapshotCliController;
pub use controllers::explorer::{
    ExplorerConfig, ExplorerController, ExportError, ExportService, InputEvent, Key,
    SessionError, SessionEvent,
};
pub use controllers::ports::snapshot_writer::{SnapshotWriteError, SnapshotWriterPort};
pub use crate::core::actions::build_vertices::build_render_vertices::build_render_vertices;
pub use crate::core::actions::build_vertices::ports::vertex_sink::{VertexSink, VertexUploadError};
pub use crate::core::actions::generate_points::generate_ifs_points::generate_ifs_points;
pub use crate::core::actions::generate_points::generate_ifs_points_rayon::generate_ifs_points_rayon;
pub use crate::core::actions::generate_transform::generate_affine_transform::{
    generate_affine_transform, generate_transform_set,
};
pub use crate::core::actions::generate_transform::ports::random_source::RandomSource;
pub use crate::core::actions::render_frame::ports::drawer::{DrawPrimitive, Drawer, ShadeStyle};
pub use crate::core::actions::render_frame::render_frame::{render_frame, render_snapshot};
pub use crate::core::data::affine_transform::AffineTransform;
pub use crate::core::data::cloud_point::{CloudPoint, PointCloud};
pub use crate::core::data::colour::{Colour, ColourRgba};
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::render_vertex::RenderVertex;
pub use crate::core::data::transform_set::TransformSet;
pub use crate::core::data::vector2::Vector2;
pub use crate::core::fractals::ifs::ifs_config::IfsConfig;
pub use crate::core::viewport::{ViewportController, ViewportMode, ViewportState};
pub use presenters::file::png::PngFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
