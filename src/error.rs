//! Error type for needle simulations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type BuffonResult<T> = Result<T, BuffonError>;

#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BuffonError {
    /// A simulation parameter would produce a degenerate sampling region.
    #[error("Invalid parameter '{name}': {value} - {reason}")]
    InvalidParameter {
        name: String,
        value: String,
        reason: String,
    },
}

impl BuffonError {
    pub fn invalid_parameter(
        name: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        BuffonError::InvalidParameter {
            name: name.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Short code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BuffonError::InvalidParameter { .. } => "INVALID_PARAMETER",
        }
    }
}
