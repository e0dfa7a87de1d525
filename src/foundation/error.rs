/// Convenience result type used across tagtext.
pub type TagTextResult<T> = Result<T, TagTextError>;

/// Top-level error taxonomy used by the public APIs.
///
/// Markup text never produces one of these: malformed tags, colors and effect
/// names are absorbed during layout. Errors only come from invalid
/// configuration or from a rendering surface.
#[derive(thiserror::Error, Debug)]
pub enum TagTextError {
    /// Invalid caller-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failure reported by a rendering surface while replaying a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TagTextError {
    /// Build a [`TagTextError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TagTextError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`TagTextError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for TagTextError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
