//! Input adapters for the explorer.
//!
//! Adapters receive input from a windowing system and translate it into
//! session `InputEvent`s.

#[cfg(feature = "gui")]
pub mod gui;
