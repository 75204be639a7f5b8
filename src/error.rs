use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CallRubricError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid rubric: {0}")]
    InvalidRubric(String),

    #[error("invalid label pattern for {key}: {source}")]
    Pattern {
        key: String,
        #[source]
        source: regex::Error,
    },
}

impl CallRubricError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CallRubricError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CallRubricError>;
