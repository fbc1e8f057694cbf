use std::error::Error;
use std::fmt;

use crate::controllers::explorer::export_service::ExportError;
use crate::core::actions::build_vertices::ports::vertex_sink::VertexUploadError;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    Upload(VertexUploadError),
    Export(ExportError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upload(err) => write!(f, "regeneration failed: {}", err),
            Self::Export(err) => write!(f, "export failed: {}", err),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Upload(err) => Some(err),
            Self::Export(err) => Some(err),
        }
    }
}

impl From<VertexUploadError> for SessionError {
    fn from(err: VertexUploadError) -> Self {
        Self::Upload(err)
    }
}

impl From<ExportError> for SessionError {
    fn from(err: ExportError) -> Self {
        Self::Export(err)
    }
}
