// src/error.rs

//! Unified error handling for the bot application.

use thiserror::Error;

/// Result type alias for bot operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Upstream API did not answer with HTTP 200.
    ///
    /// `status` is `None` when no response was obtainable at all
    /// (connect failure, timeout).
    #[error("unexpected API response status: {}", status_label(.status))]
    ResponseStatus { status: Option<u16> },

    /// Response body could not be decoded as JSON
    #[error("malformed API payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// Decoded payload fails a structural check
    #[error("unexpected API payload shape: {0}")]
    Shape(&'static str),

    /// A homework record lacks a required field
    #[error("homework record is missing field '{0}'")]
    MissingField(&'static str),

    /// Status value outside the known enumeration
    #[error("unknown homework status: {0:?}")]
    UnknownStatus(String),

    /// Telegram message could not be delivered
    #[error("delivery error: {0}")]
    Delivery(String),

    /// HTTP transport failed before any status was observed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL construction failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a delivery error.
    pub fn delivery(message: impl Into<String>) -> Self {
        Self::Delivery(message.into())
    }
}

fn status_label(status: &Option<u16>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "no response".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_status_display() {
        let err = AppError::ResponseStatus { status: Some(503) };
        assert_eq!(err.to_string(), "unexpected API response status: 503");

        let err = AppError::ResponseStatus { status: None };
        assert_eq!(
            err.to_string(),
            "unexpected API response status: no response"
        );
    }

    #[test]
    fn test_shape_reasons_are_distinguishable() {
        let a = AppError::Shape("not a mapping").to_string();
        let b = AppError::Shape("missing key").to_string();
        let c = AppError::Shape("homeworks not a list").to_string();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }
}
