mod gui_app;
pub mod overlay_status;
pub mod ports;

pub use gui_app::GuiApp;
