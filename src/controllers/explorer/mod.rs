//! Application layer of the interactive explorer.
//!
//! `ExplorerController` owns the live session: the current transform set,
//! the uploaded vertex stream and the viewport. Input arrives as
//! `InputEvent`s; the window loop then calls `advance_frame` and
//! `render_frame` once per frame.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod export_service;

pub use controller::ExplorerController;
pub use data::explorer_config::ExplorerConfig;
pub use errors::session_error::SessionError;
pub use events::input_event::{InputEvent, Key};
pub use events::session_event::SessionEvent;
pub use export_service::{ExportError, ExportService};
