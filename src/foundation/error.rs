use std::path::{Path, PathBuf};

/// Convenience result type used across the crate.
pub type WavyteResult<T> = Result<T, WavyteError>;

/// Error taxonomy for cache population and draw calls.
#[derive(thiserror::Error, Debug)]
pub enum WavyteError {
    /// A font or image file does not exist at the resolved path.
    #[error("resource not found: {}", path.display())]
    ResourceNotFound {
        /// Resolved filesystem path that was requested.
        path: PathBuf,
    },

    /// The file exists but is not a usable font or image.
    #[error("invalid resource: {0}")]
    InvalidResource(String),

    /// A caller-supplied argument cannot be honored (zero size, bad identifier, ...).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WavyteError {
    /// Build a [`WavyteError::InvalidResource`] value.
    pub fn invalid_resource(msg: impl Into<String>) -> Self {
        Self::InvalidResource(msg.into())
    }

    /// Build a [`WavyteError::InvalidParameter`] value.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Build a [`WavyteError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Classify an IO failure for `path`.
    ///
    /// `NotFound` becomes [`WavyteError::ResourceNotFound`]; everything else is kept as
    /// [`WavyteError::Other`] with the path attached as context.
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            return Self::ResourceNotFound {
                path: path.to_path_buf(),
            };
        }
        Self::Other(anyhow::Error::new(err).context(format!("read '{}'", path.display())))
    }

    /// Whether this error reports a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ResourceNotFound { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
