// src/services/mod.rs

//! External collaborators: the review API and the Telegram channel.

pub mod api;
pub mod telegram;

pub use api::ReviewApiClient;
pub use telegram::{Notifier, TelegramNotifier};
