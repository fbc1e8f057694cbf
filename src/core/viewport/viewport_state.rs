use crate::core::data::vector2::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    Idle,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub zoom_factor: f64,
    pub pan_offset: Vector2,
    pub is_dragging: bool,
    pub last_pointer_pos: Vector2,
    pub current_pointer_pos: Vector2,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom_factor: 1.0,
            pan_offset: Vector2::ZERO,
            is_dragging: false,
            last_pointer_pos: Vector2::ZERO,
            current_pointer_pos: Vector2::ZERO,
        }
    }
}

impl ViewportState {
    #[must_use]
    pub fn mode(&self) -> ViewportMode {
        if self.is_dragging {
            ViewportMode::Dragging
        } else {
            ViewportMode::Idle
        }
    }
}
