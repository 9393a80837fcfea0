//! Error types for Folio.

/// Errors that can occur while loading or rendering site content.
///
/// Parsing never fails: malformed lines are skipped, not reported here.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A content file could not be retrieved.
    #[error("Failed to fetch {path}: {message}")]
    Fetch {
        /// Path of the file, relative to the content root
        path: String,
        /// What went wrong
        message: String,
    },

    /// I/O error outside of content retrieval (config files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

/// Convenience `Result` type alias for Folio operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new fetch error for `path`.
    pub fn fetch<P, M>(path: P, message: M) -> Self
    where
        P: Into<String>,
        M: Into<String>,
    {
        Error::Fetch {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns the content path for fetch errors.
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::Fetch { path, .. } => Some(path),
            _ => None,
        }
    }
}
