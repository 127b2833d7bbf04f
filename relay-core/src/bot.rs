//! Bot abstraction for the platform calls the relay depends on.
//!
//! [`Bot`] is transport-agnostic; relay-telegram implements it via teloxide and tests substitute a recording mock.

use crate::error::Result;
use crate::types::{Chat, Message, User};
use async_trait::async_trait;

/// Platform operations used by the handlers. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Returns the bot's own identity.
    async fn me(&self) -> Result<User>;
    /// Sends an HTML-formatted message to the given chat.
    async fn send_html(&self, chat: &Chat, html: &str) -> Result<()>;
    /// Sends a plain text reply into the chat the message came from.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Sends a plain text message and returns the id of the sent message.
    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<i32>;
    /// Copies `message` verbatim into `to`, threaded as a reply to `reply_to_message_id`. Returns the id of the copy.
    async fn copy_message(&self, to: &Chat, message: &Message, reply_to_message_id: i32)
        -> Result<i32>;
}
