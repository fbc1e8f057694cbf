use std::fmt;

use egui::Context as EguiContext;

use crate::core::actions::render_frame::ports::drawer::Drawer;

/// Window-side output of the GUI: a drawer the session renders into and the
/// step that puts it on screen together with the egui overlay.
pub trait GuiPresenterPort {
    type Canvas: Drawer;
    type Error: fmt::Display;

    fn canvas_mut(&mut self) -> &mut Self::Canvas;

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), Self::Error>;

    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), Self::Error>;
}
