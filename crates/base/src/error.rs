use serde::{Deserialize, Serialize};
use thiserror::Error;

#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CreateError {
    #[error("Invalid argument: {reason}.")]
    InvalidArgument { reason: String },
}

#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum UpdateError {
    #[error("Value is absent.")]
    NullValue,
}
