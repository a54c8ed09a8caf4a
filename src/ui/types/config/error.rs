use crate::estimation::EstimationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Estimation(#[from] EstimationError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}
