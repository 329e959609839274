/// Convenience result type used across panegrid.
pub type PanegridResult<T> = Result<T, PanegridError>;

/// Top-level error taxonomy used by panegrid APIs.
///
/// "No cell matched" outcomes are deliberately not errors; they surface as
/// booleans, options or fallback values on the query paths.
#[derive(thiserror::Error, Debug)]
pub enum PanegridError {
    /// Invalid caller-provided data, e.g. a grid shape with zero rows.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PanegridError {
    /// Build a [`PanegridError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
