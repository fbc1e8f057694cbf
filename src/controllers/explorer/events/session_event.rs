use std::path::PathBuf;
use std::time::Duration;

/// Outcome of an action triggered from the keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Regenerated { point_count: usize, duration: Duration },
    Exported { path: PathBuf, duration: Duration },
}
