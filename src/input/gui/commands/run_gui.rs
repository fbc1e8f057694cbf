use std::error::Error;

use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use crate::adapters::random::rng_source::RngRandomSource;
use crate::adapters::raster::vertex_buffer::VertexBuffer;
use crate::controllers::explorer::{ExplorerConfig, ExplorerController};
use crate::input::gui::app::GuiApp;
use crate::presenters::file::png::PngFilePresenter;
use crate::presenters::pixels::presenter::PixelsPresenter;

/// Opens the explorer window and runs the frame loop until it is closed.
pub struct RunGuiCommand {
    config: ExplorerConfig,
}

impl RunGuiCommand {
    pub fn new(config: ExplorerConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        // pixels needs a 'static surface target
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("IFS Explorer")
                .with_inner_size(LogicalSize::new(
                    self.config.screen_width,
                    self.config.screen_height,
                ))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let controller = ExplorerController::new(
            self.config.clone(),
            VertexBuffer::with_limit(self.config.max_vertices),
            PngFilePresenter::new(),
            RngRandomSource::from_entropy(),
        )?;
        let presenter =
            PixelsPresenter::new(window, self.config.screen_width, self.config.screen_height)?;
        let mut app = GuiApp::new(window, &event_loop, presenter, controller);

        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                app.handle_window_event(window, event);

                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::RedrawRequested => {
                        if let Err(e) = app.redraw(window) {
                            log::error!("render error: {}", e);
                            elwt.exit();
                        }
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.scale_factor = *scale_factor;
                        app.egui_ctx.set_pixels_per_point(*scale_factor as f32);

                        let size = window.inner_size();
                        if let Err(e) = app.resize_surface(size.width, size.height) {
                            log::error!("resize error: {}", e);
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(e) = app.resize_surface(size.width, size.height) {
                            log::error!("resize error: {}", e);
                            elwt.exit();
                        }
                    }
                    _ => {}
                }
            }
            // the viewport advances every frame, so redraw continuously
            Event::AboutToWait => window.request_redraw(),
            _ => {}
        })?;

        Ok(())
    }
}
