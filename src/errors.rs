use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Shown when a request fails and the server gave no reason.
pub const CONNECTIVITY_ERROR_MESSAGE: &str = "Could not reach the server. Please try again later.";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Reqwest: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server rejected the request with status {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected {
        status: StatusCode,
        detail: Option<String>,
    },

    #[error("Serde: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Parse: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// Message that can be put in front of a user. Raw transport errors are never shown.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected { detail: Some(detail), .. } => detail.clone(),
            _ => CONNECTIVITY_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Error body as sent by the backend.
#[derive(Deserialize, Debug)]
pub(crate) struct ErrorBody {
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Only a string `detail` is meant for users.
    pub(crate) fn parse_detail(bytes: &[u8]) -> Option<String> {
        let body = serde_json::from_slice::<ErrorBody>(bytes).ok()?;
        match body.detail {
            Some(serde_json::Value::String(detail)) if !detail.trim().is_empty() => Some(detail),
            _ => None,
        }
    }
}
