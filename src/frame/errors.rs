//! # Frame Errors
//!
//! Error types for column dtype documents.

use thiserror::Error;

/// Result type for frame operations
pub type FrameResult<T> = Result<T, FrameError>;

/// Errors raised while building column dtype listings
#[derive(Debug, Error)]
pub enum FrameError {
    /// Dtype name or kind code is not recognised
    #[error("Unknown dtype: '{0}'")]
    UnknownDType(String),

    /// Column document is not valid JSON or has the wrong shape
    #[error("Malformed column document: {0}")]
    Malformed(String),
}

impl FrameError {
    /// Returns the error code string
    pub fn code(&self) -> &'static str {
        match self {
            FrameError::UnknownDType(_) => "GBQ_FRAME_UNKNOWN_DTYPE",
            FrameError::Malformed(_) => "GBQ_FRAME_MALFORMED",
        }
    }
}

impl From<serde_json::Error> for FrameError {
    fn from(e: serde_json::Error) -> Self {
        FrameError::Malformed(e.to_string())
    }
}
