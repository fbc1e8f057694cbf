pub mod viewport_controller;
pub mod viewport_state;

pub use viewport_controller::ViewportController;
pub use viewport_state::{ViewportMode, ViewportState};
