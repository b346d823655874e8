use thiserror::Error;

/// Errors raised while building the lives HUD
#[derive(Debug, Error)]
pub enum HeartError {
    /// The heart icon texture or the label font could not be loaded
    #[error("failed to load asset {path}: {reason}")]
    AssetLoadFailure { path: String, reason: String },

    /// Config file parsed but holds unusable values
    #[error("invalid HUD config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HeartError {
    pub fn asset(path: impl Into<String>, reason: impl Into<String>) -> Self {
        HeartError::AssetLoadFailure {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl From<HeartError> for String {
    fn from(error: HeartError) -> Self {
        error.to_string()
    }
}
