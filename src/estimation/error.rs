use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EstimationError {
    #[error("invalid argument: {name} must be >= 1, got {value}")]
    InvalidArgument { name: &'static str, value: i128 },

    #[error("random source unavailable: {0}")]
    RandomSource(String),
}

impl EstimationError {
    pub(crate) fn invalid<V: Into<i128>>(name: &'static str, value: V) -> Self {
        EstimationError::InvalidArgument {
            name,
            value: value.into(),
        }
    }
}
