//! Per-user relay state.

use serde::{Deserialize, Serialize};

/// One registered user. Field names on disk are camelCase (`username`, `firstMessageId`, `messageCount`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Display name captured at registration; never updated afterwards.
    pub username: String,
    /// Id of the announcement posted in the destination group; every relayed message replies to it.
    pub first_message_id: i32,
    /// Starts at 1 on registration; +1 per successfully relayed message.
    pub message_count: u32,
}

impl UserRecord {
    /// Record for a freshly registered user anchored at `first_message_id`.
    pub fn new(username: impl Into<String>, first_message_id: i32) -> Self {
        Self {
            username: username.into(),
            first_message_id,
            message_count: 1,
        }
    }

    /// True once the user may not relay any more messages under `limit`.
    pub fn has_reached(&self, limit: u32) -> bool {
        self.message_count >= limit
    }
}
