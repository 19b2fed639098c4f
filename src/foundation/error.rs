/// Convenience result type used across pinstudio.
pub type PinResult<T> = Result<T, PinError>;

/// Error taxonomy for the fallible edges of the editor.
///
/// Editing operations themselves are total; only configuration, snapshot
/// validation, (de)serialization and the submission hand-off can fail.
#[derive(thiserror::Error, Debug)]
pub enum PinError {
    /// Invalid user-provided configuration, preset or snapshot data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// The pin-submission collaborator rejected or failed a publish.
    #[error("submission error: {0}")]
    Submission(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PinError {
    /// Build a [`PinError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PinError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`PinError::Submission`] value.
    pub fn submission(msg: impl Into<String>) -> Self {
        Self::Submission(msg.into())
    }
}

impl From<serde_json::Error> for PinError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
