//! Error taxonomy for the analysis client boundary.
//!
//! Every failure surfaced to the user flows through [`ApiError`]: local
//! validation failures, an unusable server body, or a transport-level
//! failure carrying the HTTP status when one exists.

use thiserror::Error;

use crate::form::MIN_TEXT_CHARS;

/// Local, pre-network validation failures. These never reach the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please provide either article text or select a file")]
    MissingInput,

    #[error("article text must be at least {MIN_TEXT_CHARS} characters long (got {len})")]
    TextTooShort { len: usize },
}

/// Uniform error shape consumed by the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Rejected before any network activity.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The server answered 2xx but with no usable body.
    #[error("no data received from server")]
    EmptyResponse,

    /// Network failure, timeout, or non-2xx response.
    ///
    /// `status` is absent when no HTTP response existed at all (pure
    /// network errors such as connection refused or a client timeout).
    #[error("{message}")]
    Transport {
        message: String,
        status: Option<u16>,
    },
}

impl ApiError {
    pub fn transport(message: impl Into<String>, status: Option<u16>) -> Self {
        ApiError::Transport {
            message: message.into(),
            status,
        }
    }

    /// HTTP status code, when the failure came with a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport { status, .. } => *status,
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}
