/// Convenience result type used across reveal.
pub type RevealResult<T> = Result<T, RevealError>;

/// Top-level error taxonomy of the crate.
#[derive(thiserror::Error, Debug)]
pub enum RevealError {
    /// Invalid user-provided configuration or choreography data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A required visual target or measurement was unavailable at mount time.
    #[error("setup error: {0}")]
    Setup(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RevealError {
    /// Build a [`RevealError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RevealError::Setup`] value.
    pub fn setup(msg: impl Into<String>) -> Self {
        Self::Setup(msg.into())
    }

    /// Build a [`RevealError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
