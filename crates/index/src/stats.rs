use serde::{Deserialize, Serialize};

/// Summary of one index build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of user records indexed
    pub users: usize,

    /// Total friend-id occurrences across all records
    pub friend_links: usize,

    /// Distinct ids referenced by at least one friends list
    pub distinct_referenced: usize,
}
