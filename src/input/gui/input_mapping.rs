//! Translation of winit input into session `InputEvent`s.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseScrollDelta};
use winit::keyboard::KeyCode;

use crate::controllers::explorer::events::input_event::{InputEvent, Key};
use crate::core::data::vector2::Vector2;

/// Pixel-precise scroll deltas (touchpads) are divided by this to get wheel lines.
pub const PIXELS_PER_SCROLL_LINE: f64 = 20.0;

/// Key presses only; releases and auto-repeats are dropped.
#[must_use]
pub fn map_key(key_code: KeyCode, state: ElementState, repeat: bool) -> Option<InputEvent> {
    if state != ElementState::Pressed || repeat {
        return None;
    }

    let key = match key_code {
        KeyCode::Space => Key::Space,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        _ => Key::Other,
    };

    Some(InputEvent::KeyDown(key))
}

/// Any mouse button starts or ends a drag.
#[must_use]
pub fn map_mouse_button(state: ElementState) -> InputEvent {
    match state {
        ElementState::Pressed => InputEvent::PointerDown,
        ElementState::Released => InputEvent::PointerUp,
    }
}

#[must_use]
pub fn map_scroll(delta: MouseScrollDelta) -> InputEvent {
    let rotation = match delta {
        MouseScrollDelta::LineDelta(x, y) => Vector2::new(f64::from(x), f64::from(y)),
        MouseScrollDelta::PixelDelta(position) => Vector2::new(
            position.x / PIXELS_PER_SCROLL_LINE,
            position.y / PIXELS_PER_SCROLL_LINE,
        ),
    };

    InputEvent::Scrolled { rotation }
}

/// Converts a physical cursor position into logical screen pixels.
#[must_use]
pub fn map_cursor(position: PhysicalPosition<f64>, scale_factor: f64) -> InputEvent {
    let logical = position.to_logical::<f64>(scale_factor);

    InputEvent::PointerMoved {
        position: Vector2::new(logical.x, logical.y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_and_enter_presses_map_to_actions() {
        assert_eq!(
            map_key(KeyCode::Space, ElementState::Pressed, false),
            Some(InputEvent::KeyDown(Key::Space))
        );
        assert_eq!(
            map_key(KeyCode::Enter, ElementState::Pressed, false),
            Some(InputEvent::KeyDown(Key::Enter))
        );
        assert_eq!(
            map_key(KeyCode::NumpadEnter, ElementState::Pressed, false),
            Some(InputEvent::KeyDown(Key::Enter))
        );
    }

    #[test]
    fn other_keys_map_to_other() {
        assert_eq!(
            map_key(KeyCode::KeyW, ElementState::Pressed, false),
            Some(InputEvent::KeyDown(Key::Other))
        );
    }

    #[test]
    fn releases_and_repeats_are_ignored() {
        assert_eq!(map_key(KeyCode::Space, ElementState::Released, false), None);
        assert_eq!(map_key(KeyCode::Space, ElementState::Pressed, true), None);
    }

    #[test]
    fn mouse_buttons_drive_dragging() {
        assert_eq!(map_mouse_button(ElementState::Pressed), InputEvent::PointerDown);
        assert_eq!(map_mouse_button(ElementState::Released), InputEvent::PointerUp);
    }

    #[test]
    fn line_scroll_is_passed_through() {
        assert_eq!(
            map_scroll(MouseScrollDelta::LineDelta(0.0, 2.0)),
            InputEvent::Scrolled {
                rotation: Vector2::new(0.0, 2.0)
            }
        );
    }

    #[test]
    fn pixel_scroll_is_converted_to_lines() {
        assert_eq!(
            map_scroll(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -40.0))),
            InputEvent::Scrolled {
                rotation: Vector2::new(0.0, -2.0)
            }
        );
    }

    #[test]
    fn cursor_is_converted_to_logical_pixels() {
        assert_eq!(
            map_cursor(PhysicalPosition::new(300.0, 100.0), 2.0),
            InputEvent::PointerMoved {
                position: Vector2::new(150.0, 50.0)
            }
        );
    }
}
