use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::Window;

use crate::controllers::explorer::ExplorerController;
use crate::controllers::explorer::events::input_event::InputEvent;
use crate::controllers::ports::snapshot_writer::SnapshotWriterPort;
use crate::core::actions::build_vertices::ports::vertex_sink::VertexSink;
use crate::core::actions::generate_transform::ports::random_source::RandomSource;
use crate::input::gui::app::overlay_status::OverlayStatus;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::input_mapping::{map_cursor, map_key, map_mouse_button, map_scroll};

pub struct GuiApp<P, S, W, R>
where
    P: GuiPresenterPort,
    S: VertexSink,
    W: SnapshotWriterPort,
    R: RandomSource,
{
    pub scale_factor: f64,
    presenter: P,
    controller: ExplorerController<S, W, R>,
    status: OverlayStatus,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<P, S, W, R> GuiApp<P, S, W, R>
where
    P: GuiPresenterPort,
    S: VertexSink,
    W: SnapshotWriterPort,
    R: RandomSource,
{
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: P,
        controller: ExplorerController<S, W, R>,
    ) -> Self {
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            scale_factor,
            presenter,
            controller,
            status: OverlayStatus::default(),
            egui_ctx,
            egui_state,
        }
    }

    /// Forwards the event to egui, then to the session unless egui used it.
    /// Returns whether egui asked for a repaint.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(window, event);

        if let Some(input) = self.map_window_event(event, response.consumed) {
            let outcome = self.controller.handle_event(input);
            self.status.record(&outcome);
        }

        response.repaint
    }

    /// One frame: viewport step, session render into the canvas, overlay, present.
    pub fn redraw(&mut self, window: &Window) -> Result<(), P::Error> {
        self.controller.advance_frame();
        self.controller.render_frame(self.presenter.canvas_mut());

        let egui_output = self.update_ui(window);
        self.egui_state
            .handle_platform_output(window, egui_output.platform_output.clone());

        self.presenter.render(egui_output, &self.egui_ctx)
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), P::Error> {
        self.presenter.resize_surface(width, height)
    }

    fn map_window_event(&self, event: &WindowEvent, egui_consumed: bool) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(map_cursor(*position, self.scale_factor))
            }
            // releases always reach the session so a drag cannot get stuck
            WindowEvent::MouseInput { state, .. } => {
                let input = map_mouse_button(*state);
                (!egui_consumed || input == InputEvent::PointerUp).then_some(input)
            }
            WindowEvent::MouseWheel { delta, .. } if !egui_consumed => Some(map_scroll(*delta)),
            WindowEvent::KeyboardInput { event, .. } if !egui_consumed => match event.physical_key {
                PhysicalKey::Code(key_code) => map_key(key_code, event.state, event.repeat),
                PhysicalKey::Unidentified(_) => None,
            },
            _ => None,
        }
    }

    fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let viewport = *self.controller.viewport();
        let point_count = self.controller.vertices().len();
        let max_depth = self.controller.config().ifs.max_depth;
        let status = &self.status;

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("IFS Explorer")
                .default_pos([10.0, 10.0])
                .default_size([260.0, 180.0])
                .show(ctx, |ui| {
                    ui.label("Space: new fractal");
                    ui.label("Enter: export snapshot");
                    ui.label("Drag: pan, wheel: zoom");
                    ui.separator();

                    ui.label(format!("Points: {} (depth {})", point_count, max_depth));
                    ui.label(format!("Zoom: {:.3}", viewport.zoom_factor));
                    ui.label(format!(
                        "Pan: ({:.1}, {:.1})",
                        viewport.pan_offset.x, viewport.pan_offset.y
                    ));

                    if let Some(message) = &status.message {
                        ui.separator();
                        ui.label(message);
                    }
                    if let Some(error) = &status.error {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, error);
                    }
                });
        })
    }
}
