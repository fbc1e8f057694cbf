use crate::core::data::vector2::Vector2;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    Space,
    Enter,
    Other,
}

/// Input delivered to the session, already translated out of the windowing
/// library's types. Positions are logical screen pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown,
    PointerUp,
    PointerMoved { position: Vector2 },
    /// Wheel rotation in lines; only `y` drives the zoom.
    Scrolled { rotation: Vector2 },
    KeyDown(Key),
}
