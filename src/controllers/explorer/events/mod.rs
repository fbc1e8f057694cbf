pub mod input_event;
pub mod session_event;
