//! The full set of per-user records, persisted as one unit.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::UserRecord;

/// Mapping from user id to [`UserRecord`]. Serialises as a JSON object keyed by the stringified user id.
///
/// Records are only ever added (never replaced or removed) and only `message_count` changes afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    users: BTreeMap<i64, UserRecord>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, user_id: i64) -> Option<&UserRecord> {
        self.users.get(&user_id)
    }

    pub fn contains(&self, user_id: i64) -> bool {
        self.users.contains_key(&user_id)
    }

    /// Adds a record for a user that has none. Returns false and leaves the existing record untouched otherwise.
    pub fn insert_new(&mut self, user_id: i64, record: UserRecord) -> bool {
        if self.users.contains_key(&user_id) {
            return false;
        }
        self.users.insert(user_id, record);
        true
    }

    /// Adds one to the user's message count. Returns the new count, or None for an unknown user.
    pub fn increment(&mut self, user_id: i64) -> Option<u32> {
        self.users.get_mut(&user_id).map(|record| {
            record.message_count += 1;
            record.message_count
        })
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Records ordered by user id.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &UserRecord)> {
        self.users.iter().map(|(id, record)| (*id, record))
    }
}
