use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotWriteError {
    pub path: PathBuf,
    pub message: String,
}

impl SnapshotWriteError {
    pub fn new(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SnapshotWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not write {}: {}", self.path.display(), self.message)
    }
}

impl Error for SnapshotWriteError {}

/// Encodes a finished pixel buffer and stores it at `path`.
pub trait SnapshotWriterPort {
    fn write(&self, buffer: &PixelBuffer, path: &Path) -> Result<(), SnapshotWriteError>;
}

impl<W: SnapshotWriterPort + ?Sized> SnapshotWriterPort for &W {
    fn write(&self, buffer: &PixelBuffer, path: &Path) -> Result<(), SnapshotWriteError> {
        (**self).write(buffer, path)
    }
}
