use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifier of a user record.
pub type UserId = u64;

/// One person's entry as received from the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Record id (unique across the dataset)
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Ids of this user's friends, in source order
    pub friends: Vec<UserId>,
}

/// Per-user data stored in the index (everything but the id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub name: String,

    /// Ids of this user's friends, in source order
    pub friends: Vec<UserId>,
}

/// How often one id appears across all friends lists, with its resolved name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceCount {
    /// The referenced id
    pub id: UserId,

    /// Number of friends-list occurrences (at least 1)
    pub count: u64,

    /// Display name of the referenced user
    pub name: String,
}

/// Lookup from user id to profile.
///
/// Built once per load and only read afterward.
#[derive(Debug, Clone)]
pub struct UserIndex {
    users: HashMap<UserId, UserProfile>,
}

impl UserIndex {
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
        }
    }

    /// Insert a profile, returning the previous profile if the id was
    /// already present.
    pub fn insert(&mut self, id: UserId, profile: UserProfile) -> Option<UserProfile> {
        self.users.insert(id, profile)
    }

    /// Look up a profile by id
    pub fn get(&self, id: UserId) -> Option<&UserProfile> {
        self.users.get(&id)
    }

    /// Resolve an id to its display name
    pub fn name_of(&self, id: UserId) -> Option<&str> {
        self.users.get(&id).map(|profile| profile.name.as_str())
    }

    /// All known ids, in no particular order
    pub fn ids(&self) -> impl Iterator<Item = UserId> + '_ {
        self.users.keys().copied()
    }

    /// Number of indexed users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserIndex {
    fn default() -> Self {
        Self::new()
    }
}
