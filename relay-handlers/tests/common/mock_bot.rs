//! Mock implementation of [`relay_core::Bot`] for integration tests.
//!
//! Records every platform call so tests can assert on what was sent where, and hands out
//! increasing message ids for announcements and copies. Sends and copies can be made to fail.

use async_trait::async_trait;
use relay_core::{Bot, Chat, DbotError, Message, Result, User};
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::Mutex;

/// One recorded platform call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCall {
    SendHtml { chat_id: i64, html: String },
    Reply { chat_id: i64, text: String },
    Announce { chat_id: i64, text: String, id: i32 },
    Copy { to_chat_id: i64, from_chat_id: i64, message_id: i32, reply_to: i32 },
}

pub struct MockBot {
    me: User,
    calls: Mutex<Vec<BotCall>>,
    next_id: AtomicI32,
    fail_copy: AtomicBool,
    fail_send: AtomicBool,
}

impl MockBot {
    /// Ids handed out by the mock start here.
    pub const FIRST_ID: i32 = 1000;

    pub fn new(me: User) -> Self {
        Self {
            me,
            calls: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(Self::FIRST_ID),
            fail_copy: AtomicBool::new(false),
            fail_send: AtomicBool::new(false),
        }
    }

    pub fn fail_copies(&self, fail: bool) {
        self.fail_copy.store(fail, Ordering::SeqCst);
    }

    /// Makes `send_html` and `send_message_and_return_id` fail without recording anything.
    pub fn fail_sends(&self, fail: bool) {
        self.fail_send.store(fail, Ordering::SeqCst);
    }

    fn check_send(&self) -> Result<()> {
        if self.fail_send.load(Ordering::SeqCst) {
            return Err(DbotError::Bot("Forbidden: bot is not a member of the group chat".to_string()));
        }
        Ok(())
    }

    pub fn calls(&self) -> Vec<BotCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn copies(&self) -> Vec<BotCall> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, BotCall::Copy { .. }))
            .collect()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: BotCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn next_id(&self) -> i32 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn me(&self) -> Result<User> {
        Ok(self.me.clone())
    }

    async fn send_html(&self, chat: &Chat, html: &str) -> Result<()> {
        self.check_send()?;
        self.record(BotCall::SendHtml {
            chat_id: chat.id,
            html: html.to_string(),
        });
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.record(BotCall::Reply {
            chat_id: message.chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<i32> {
        self.check_send()?;
        let id = self.next_id();
        self.record(BotCall::Announce {
            chat_id: chat.id,
            text: text.to_string(),
            id,
        });
        Ok(id)
    }

    async fn copy_message(
        &self,
        to: &Chat,
        message: &Message,
        reply_to_message_id: i32,
    ) -> Result<i32> {
        if self.fail_copy.load(Ordering::SeqCst) {
            return Err(DbotError::Bot("Bad Request: message to copy not found".to_string()));
        }
        self.record(BotCall::Copy {
            to_chat_id: to.id,
            from_chat_id: message.chat.id,
            message_id: message.id,
            reply_to: reply_to_message_id,
        });
        Ok(self.next_id())
    }
}
