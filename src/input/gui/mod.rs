//! GUI input adapter for the interactive explorer.
//!
//! winit delivers window input, which is mapped to `InputEvent`s for the
//! session; pixels shows the software canvas and egui draws the overlay.

pub mod app;
pub mod commands;
pub mod input_mapping;
