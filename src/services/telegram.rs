// src/services/telegram.rs

//! Telegram delivery channel.
//!
//! The bot talks to the Bot API directly over HTTPS; the only operation
//! the rest of the application needs is "deliver this text".

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::{Credentials, REQUEST_TIMEOUT};
use crate::error::{AppError, Result};

const BOT_API_BASE: &str = "https://api.telegram.org";

/// Outbound notification channel.
///
/// Implemented by [`TelegramNotifier`] in production and by recording
/// doubles in tests.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one text message to the configured recipient.
    async fn deliver(&self, text: &str) -> Result<()>;
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct BotApiReply {
    ok: bool,
    description: Option<String>,
}

/// Notifier backed by the Telegram Bot API `sendMessage` method.
pub struct TelegramNotifier {
    client: Client,
    send_message_url: Url,
    chat_id: String,
}

impl TelegramNotifier {
    /// Create a notifier against the production Bot API.
    pub fn new(credentials: &Credentials) -> Result<Self> {
        Self::with_base_url(credentials, BOT_API_BASE)
    }

    /// Create a notifier against an arbitrary Bot API base URL.
    pub fn with_base_url(credentials: &Credentials, base: &str) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let send_message_url = Url::parse(&format!(
            "{base}/bot{}/sendMessage",
            credentials.telegram_token
        ))?;

        Ok(Self {
            client,
            send_message_url,
            chat_id: credentials.chat_id.clone(),
        })
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn deliver(&self, text: &str) -> Result<()> {
        let body = SendMessage {
            chat_id: &self.chat_id,
            text,
        };

        let response = self
            .client
            .post(self.send_message_url.clone())
            .json(&body)
            .send()
            .await
            .map_err(|error| AppError::delivery(format!("sendMessage failed: {error}")))?;

        let status = response.status();
        let reply: BotApiReply = response
            .json()
            .await
            .map_err(|error| AppError::delivery(format!("sendMessage reply unreadable: {error}")))?;

        if !reply.ok {
            let description = reply
                .description
                .unwrap_or_else(|| format!("HTTP {status}"));
            return Err(AppError::delivery(format!(
                "sendMessage rejected: {description}"
            )));
        }

        log::info!("Delivered notification to chat {}", self.chat_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            practicum_token: "practicum".to_string(),
            telegram_token: "123:abc".to_string(),
            chat_id: "42".to_string(),
        }
    }

    #[test]
    fn test_send_message_url_contains_token() {
        let notifier = TelegramNotifier::new(&credentials()).unwrap();
        assert_eq!(
            notifier.send_message_url.as_str(),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn test_send_message_body_shape() {
        let body = SendMessage {
            chat_id: "42",
            text: "hello",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["chat_id"], "42");
        assert_eq!(json["text"], "hello");
    }
}
