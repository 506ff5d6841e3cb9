// src/config.rs

//! Startup configuration: credentials and fixed polling parameters.
//!
//! The three secrets are read from the process environment exactly once,
//! before the supervisor loop starts. A missing or empty value is fatal
//! at startup; it is never retried per cycle.

use std::env;
use std::time::Duration;

use crate::error::{AppError, Result};

/// Upstream review API endpoint.
pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Delay between poll cycles, and between retries after a failure.
pub const RETRY_TIME: Duration = Duration::from_secs(600);

/// Request timeout for outbound HTTP calls.
///
/// Bounded well below [`RETRY_TIME`] so a stalled call cannot delay the
/// failure notification into the next poll window.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
const CHAT_ID: &str = "CHAT_ID";

/// Immutable process-wide secrets.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// OAuth token for the review API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Telegram chat that receives every notification
    pub chat_id: String,
}

impl Credentials {
    /// Load credentials from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load credentials through an arbitrary lookup function.
    ///
    /// All three values must be present and non-empty.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |name: &'static str| -> Result<String> {
            match lookup(name) {
                Some(value) if !value.trim().is_empty() => Ok(value),
                _ => Err(AppError::config(format!(
                    "required environment variable {name} is missing or empty"
                ))),
            }
        };

        Ok(Self {
            practicum_token: required(PRACTICUM_TOKEN)?,
            telegram_token: required(TELEGRAM_TOKEN)?,
            chat_id: required(CHAT_ID)?,
        })
    }
}
