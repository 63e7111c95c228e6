/// Convenience result type used across sidle.
pub type SidleResult<T> = Result<T, SidleError>;

/// Top-level error taxonomy used by the library.
///
/// Every variant carries a stable display prefix so the CLI diagnostic identifies the error
/// category on a single line.
#[derive(thiserror::Error, Debug)]
pub enum SidleError {
    /// The manifest could not be opened or read.
    #[error("io error: {0}")]
    Io(String),

    /// The manifest is not syntactically valid JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// Required fields are missing, mistyped, or semantically invalid.
    #[error("invalid description: {0}")]
    Schema(String),

    /// A colour string is not 3, 4, 6, or 8 hex digits.
    #[error("invalid colour \"{0}\"")]
    InvalidColour(String),

    /// An output directory cannot be created or used.
    #[error("filesystem error: {0}")]
    Filesystem(String),

    /// The raster encoder rejected a frame or could not write it.
    #[error("encode error: {0}")]
    Encode(String),

    /// Invalid caller-provided parameters (threads, canvas size, ...).
    #[error("validation error: {0}")]
    Validation(String),
}

impl SidleError {
    /// Build a [`SidleError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Build a [`SidleError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`SidleError::Schema`] value.
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    /// Build a [`SidleError::InvalidColour`] value.
    pub fn invalid_colour(text: impl Into<String>) -> Self {
        Self::InvalidColour(text.into())
    }

    /// Build a [`SidleError::Filesystem`] value.
    pub fn filesystem(msg: impl Into<String>) -> Self {
        Self::Filesystem(msg.into())
    }

    /// Build a [`SidleError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`SidleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
