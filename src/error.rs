#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("validation error: {reason}")]
    Validation { reason: String },

    #[error("transport error: {reason}")]
    Transport { reason: String },

    #[error("invalid listing id: {id}")]
    InvalidId { id: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }
}
