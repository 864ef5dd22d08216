/// Convenience result type used across pathbrush.
pub type BrushResult<T> = Result<T, BrushError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum BrushError {
    /// Malformed path string; no partial path is produced.
    #[error("path parse error: {0}")]
    Parse(String),

    /// A drawing command outside the supported primitive set.
    #[error("unsupported path command: {0}")]
    UnsupportedCommand(String),

    /// Synthesis requested for a path id with no captured columns.
    #[error("unknown path id: {0}")]
    UnknownPathId(String),

    /// Invalid user-provided options or raster data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BrushError {
    /// Build a [`BrushError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`BrushError::UnsupportedCommand`] value.
    pub fn unsupported_command(msg: impl Into<String>) -> Self {
        Self::UnsupportedCommand(msg.into())
    }

    /// Build a [`BrushError::UnknownPathId`] value.
    pub fn unknown_path_id(msg: impl Into<String>) -> Self {
        Self::UnknownPathId(msg.into())
    }

    /// Build a [`BrushError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
