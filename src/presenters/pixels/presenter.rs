use std::error::Error;
use std::fmt;

use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::adapters::raster::canvas::{Canvas, CanvasError};
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

#[derive(Debug)]
pub enum PresenterError {
    Surface(pixels::Error),
    Texture(pixels::TextureError),
    Canvas(CanvasError),
    Frame(PixelBufferError),
}

impl fmt::Display for PresenterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(err) => write!(f, "pixels surface error: {}", err),
            Self::Texture(err) => write!(f, "pixels texture error: {}", err),
            Self::Canvas(err) => write!(f, "{}", err),
            Self::Frame(err) => write!(f, "frame copy failed: {}", err),
        }
    }
}

impl Error for PresenterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Surface(err) => Some(err),
            Self::Texture(err) => Some(err),
            Self::Canvas(err) => Some(err),
            Self::Frame(err) => Some(err),
        }
    }
}

/// Shows the software canvas through a pixels framebuffer with the egui
/// overlay drawn on top.
///
/// The canvas and framebuffer use logical screen size; pixels scales them to
/// the physical surface.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    canvas: Canvas,
    surface_width: u32,
    surface_height: u32,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        buffer_width: u32,
        buffer_height: u32,
    ) -> Result<Self, PresenterError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(buffer_width, buffer_height, surface_texture)
            .map_err(PresenterError::Surface)?;
        let canvas = Canvas::new(buffer_width, buffer_height).map_err(PresenterError::Canvas)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            canvas,
            surface_width: size.width,
            surface_height: size.height,
        })
    }
}

impl GuiPresenterPort for PixelsPresenter {
    type Canvas = Canvas;
    type Error = PresenterError;

    fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), PresenterError> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        self.canvas
            .pixel_buffer()
            .write_rgba_into(self.pixels.frame_mut())
            .map_err(PresenterError::Frame)?;

        let surface_size = [self.surface_width, self.surface_height];
        let egui_renderer = &mut self.egui_renderer;

        self.pixels
            .render_with(|encoder, render_target, context| {
                context.scaling_renderer.render(encoder, render_target);

                let clipped_primitives =
                    egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

                let screen_descriptor = egui_wgpu::ScreenDescriptor {
                    size_in_pixels: surface_size,
                    pixels_per_point: egui_ctx.pixels_per_point(),
                };

                let textures_delta = egui_output.textures_delta;

                for (id, delta) in &textures_delta.set {
                    egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
                }

                egui_renderer.update_buffers(
                    &context.device,
                    &context.queue,
                    encoder,
                    &clipped_primitives,
                    &screen_descriptor,
                );

                {
                    let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: Some("egui"),
                        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                            view: render_target,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                // keep the canvas underneath
                                load: wgpu::LoadOp::Load,
                                store: wgpu::StoreOp::Store,
                            },
                        })],
                        depth_stencil_attachment: None,
                        ..Default::default()
                    });

                    egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
                }

                for id in &textures_delta.free {
                    egui_renderer.free_texture(id);
                }

                Ok(())
            })
            .map_err(PresenterError::Surface)
    }

    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), PresenterError> {
        self.surface_width = width;
        self.surface_height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels
            .resize_surface(width, height)
            .map_err(PresenterError::Texture)
    }
}
