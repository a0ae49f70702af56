use thiserror::Error;

/// bookdash error types
#[derive(Error, Debug)]
pub enum BookdashError {
    /// Endpoint unreachable, network error or non-success status
    #[error("transport error: {message}")]
    Transport {
        source_name: &'static str,
        message: String,
    },

    /// Payload not parseable into the expected record shape
    #[error("decode error: {message}")]
    Decode {
        source_name: &'static str,
        message: String,
    },

    /// Configuration error (e.g. HTTP client could not be built)
    #[error("config error: {0}")]
    Config(String),

    /// Report serialization failed
    #[error("render error: {0}")]
    Render(String),
}

impl BookdashError {
    /// Name of the source that failed, if the error came from a fetch
    pub fn source_name(&self) -> Option<&'static str> {
        match self {
            Self::Transport { source_name, .. } | Self::Decode { source_name, .. } => {
                Some(*source_name)
            }
            Self::Config(_) | Self::Render(_) => None,
        }
    }
}

/// Result type alias for bookdash
pub type Result<T> = std::result::Result<T, BookdashError>;
