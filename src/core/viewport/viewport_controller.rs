use crate::core::data::vector2::Vector2;
use crate::core::viewport::viewport_state::{ViewportMode, ViewportState};

pub const DEFAULT_ZOOM_SENSITIVITY: f64 = 10.0;

/// Pan and zoom state machine driven by pointer and scroll input.
///
/// Zoom is not clamped: enough negative scroll drives it to
/// zero or below, which collapses or mirrors the view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    state: ViewportState,
    zoom_sensitivity: f64,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(Vector2::ZERO, DEFAULT_ZOOM_SENSITIVITY)
    }
}

impl ViewportController {
    #[must_use]
    pub fn new(initial_pointer: Vector2, zoom_sensitivity: f64) -> Self {
        Self {
            state: ViewportState {
                last_pointer_pos: initial_pointer,
                current_pointer_pos: initial_pointer,
                ..ViewportState::default()
            },
            zoom_sensitivity,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    #[must_use]
    pub fn mode(&self) -> ViewportMode {
        self.state.mode()
    }

    pub fn pointer_down(&mut self) {
        self.state.is_dragging = true;
    }

    pub fn pointer_up(&mut self) {
        self.state.is_dragging = false;
    }

    /// Applies `zoom += (rotation.y / sensitivity) * zoom` in either mode.
    pub fn scroll(&mut self, rotation: Vector2) {
        let zoom = self.state.zoom_factor;
        self.state.zoom_factor = zoom + (rotation.y / self.zoom_sensitivity) * zoom;

        log::debug!("zoom factor {} -> {}", zoom, self.state.zoom_factor);

        if self.state.zoom_factor <= 0.0 {
            log::warn!(
                "zoom factor {} is no longer positive, the view is degenerate",
                self.state.zoom_factor
            );
        }
    }

    /// Per-frame step. The drag delta is taken between the pointer positions
    /// of two consecutive frames.
    pub fn update_frame(&mut self, pointer: Vector2) {
        self.state.last_pointer_pos = self.state.current_pointer_pos;
        self.state.current_pointer_pos = pointer;

        if self.state.is_dragging {
            let delta = self.state.last_pointer_pos - self.state.current_pointer_pos;
            self.state.pan_offset -= delta / self.state.zoom_factor;
        }
    }
}
