use std::path::PathBuf;
use std::time::Instant;

use crate::controllers::explorer::data::explorer_config::ExplorerConfig;
use crate::controllers::explorer::errors::session_error::SessionError;
use crate::controllers::explorer::events::input_event::{InputEvent, Key};
use crate::controllers::explorer::events::session_event::SessionEvent;
use crate::controllers::explorer::export_service::ExportService;
use crate::controllers::ports::snapshot_writer::SnapshotWriterPort;
use crate::core::actions::build_vertices::build_render_vertices::build_render_vertices;
use crate::core::actions::build_vertices::ports::vertex_sink::VertexSink;
use crate::core::actions::generate_points::generate_ifs_points_rayon::generate_ifs_points_rayon;
use crate::core::actions::generate_transform::generate_affine_transform::generate_transform_set;
use crate::core::actions::generate_transform::ports::random_source::RandomSource;
use crate::core::actions::render_frame::ports::drawer::Drawer;
use crate::core::actions::render_frame::render_frame::render_frame;
use crate::core::data::render_vertex::RenderVertex;
use crate::core::data::transform_set::TransformSet;
use crate::core::data::vector2::Vector2;
use crate::core::viewport::viewport_controller::ViewportController;
use crate::core::viewport::viewport_state::ViewportState;

pub struct ExplorerController<S: VertexSink, W: SnapshotWriterPort, R: RandomSource> {
    config: ExplorerConfig,
    transforms: TransformSet,
    viewport: ViewportController,
    pointer: Vector2,
    sink: S,
    export: ExportService<W>,
    random: R,
}

impl<S: VertexSink, W: SnapshotWriterPort, R: RandomSource> ExplorerController<S, W, R> {
    /// Draws the first transform set and uploads its vertices with the
    /// startup alpha.
    pub fn new(
        config: ExplorerConfig,
        sink: S,
        writer: W,
        mut random: R,
    ) -> Result<Self, SessionError> {
        let transforms = generate_transform_set(&mut random);
        let export = ExportService::new(writer, &config);
        let viewport = ViewportController::new(Vector2::ZERO, config.zoom_sensitivity);

        let mut controller = Self {
            config,
            transforms,
            viewport,
            pointer: Vector2::ZERO,
            sink,
            export,
            random,
        };

        let start = Instant::now();
        let point_count = controller.upload(&transforms, controller.config.ifs.startup_alpha)?;

        log::info!(
            "initial fractal: {} points at depth {} in {:?}",
            point_count,
            controller.config.ifs.max_depth,
            start.elapsed()
        );

        Ok(controller)
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Result<Option<SessionEvent>, SessionError> {
        match event {
            InputEvent::PointerDown => self.viewport.pointer_down(),
            InputEvent::PointerUp => self.viewport.pointer_up(),
            InputEvent::PointerMoved { position } => self.pointer = position,
            InputEvent::Scrolled { rotation } => self.viewport.scroll(rotation),
            InputEvent::KeyDown(Key::Space) => {
                return self.regenerate().map(Some).inspect_err(|err| {
                    log::error!("{}", err);
                });
            }
            InputEvent::KeyDown(Key::Enter) => {
                let start = Instant::now();
                let path = self.export_snapshot().inspect_err(|err| {
                    log::error!("{}", err);
                })?;

                return Ok(Some(SessionEvent::Exported {
                    path,
                    duration: start.elapsed(),
                }));
            }
            InputEvent::KeyDown(Key::Other) => {}
        }

        Ok(None)
    }

    /// Replaces the transform set and the vertex stream. On failure the
    /// previous fractal stays in place.
    pub fn regenerate(&mut self) -> Result<SessionEvent, SessionError> {
        let start = Instant::now();
        let transforms = generate_transform_set(&mut self.random);
        let point_count = self.upload(&transforms, self.config.ifs.regenerate_alpha)?;
        let duration = start.elapsed();

        self.transforms = transforms;

        log::info!("regenerated {} points in {:?}", point_count, duration);

        Ok(SessionEvent::Regenerated {
            point_count,
            duration,
        })
    }

    pub fn export_snapshot(&mut self) -> Result<PathBuf, SessionError> {
        let start = Instant::now();
        let path = self.export.export(self.sink.vertices(), &mut self.random)?;

        log::info!("exported {} in {:?}", path.display(), start.elapsed());

        Ok(path)
    }

    /// Per-frame viewport step; call after the frame's events.
    pub fn advance_frame(&mut self) {
        self.viewport.update_frame(self.pointer);
    }

    pub fn render_frame<D: Drawer + ?Sized>(&self, drawer: &mut D) {
        render_frame(
            drawer,
            self.viewport.state(),
            self.sink.vertices(),
            self.config.screen_center(),
        );
    }

    #[must_use]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    #[must_use]
    pub fn transforms(&self) -> &TransformSet {
        &self.transforms
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        self.viewport.state()
    }

    #[must_use]
    pub fn vertices(&self) -> &[RenderVertex] {
        self.sink.vertices()
    }

    #[must_use]
    pub fn export_service(&self) -> &ExportService<W> {
        &self.export
    }

    fn upload(&mut self, transforms: &TransformSet, alpha: f32) -> Result<usize, SessionError> {
        let ifs = self.config.ifs;
        let points = generate_ifs_points_rayon(transforms, ifs.seed, ifs.max_depth);
        let vertices = build_render_vertices(&points, alpha);
        let point_count = vertices.len();

        self.sink.upload(vertices)?;

        Ok(point_count)
    }
}
