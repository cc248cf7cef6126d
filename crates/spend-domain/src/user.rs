//! Users and the static data snapshot they are loaded from.

use serde::{Deserialize, Serialize};

use crate::record::Record;

pub type UserId = u64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// The records belonging to one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub user_id: UserId,
    #[serde(default)]
    pub items: Vec<Record>,
}

/// The whole data document: every user and every user's records.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DataSnapshot {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub data: Vec<UserData>,
}

impl DataSnapshot {
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Records for `id`; empty when the user has no data entry.
    pub fn records_for(&self, id: UserId) -> &[Record] {
        self.data
            .iter()
            .find(|entry| entry.user_id == id)
            .map(|entry| entry.items.as_slice())
            .unwrap_or(&[])
    }

    pub fn record_count(&self) -> usize {
        self.data.iter().map(|entry| entry.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
