/// Convenience result type used across scrollmotion.
pub type MotionResult<T> = Result<T, MotionError>;

/// Top-level error taxonomy used by scrollmotion APIs.
///
/// Errors only surface while building configuration (curves, channels, scenes). Sampling a
/// validated configuration is total and never returns an error.
#[derive(thiserror::Error, Debug)]
pub enum MotionError {
    /// Invalid user-provided configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed keyframe curve (ordering, range, mixed units).
    #[error("curve error: {0}")]
    Curve(String),

    /// Malformed scroll offset or tracked range.
    #[error("scroll error: {0}")]
    Scroll(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotionError {
    /// Build a [`MotionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MotionError::Curve`] value.
    pub fn curve(msg: impl Into<String>) -> Self {
        Self::Curve(msg.into())
    }

    /// Build a [`MotionError::Scroll`] value.
    pub fn scroll(msg: impl Into<String>) -> Self {
        Self::Scroll(msg.into())
    }

    /// Build a [`MotionError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
