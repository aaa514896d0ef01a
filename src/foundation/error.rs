/// Convenience result type used across Scrim.
pub type ScrimResult<T> = Result<T, ScrimError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Resolution of a transition never fails; errors only surface from
/// construction-time validation and from misuse of the presentation
/// lifecycle protocol.
#[derive(thiserror::Error, Debug)]
pub enum ScrimError {
    /// Invalid user-provided configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while validating animation descriptors or spring parameters.
    #[error("animation error: {0}")]
    Animation(String),

    /// Presentation lifecycle protocol violations (phase entry called out of order).
    #[error("presentation error: {0}")]
    Presentation(String),

    /// Wrapped lower-level error from the host or dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrimError {
    /// Build a [`ScrimError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrimError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`ScrimError::Presentation`] value.
    pub fn presentation(msg: impl Into<String>) -> Self {
        Self::Presentation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
