use crate::error::{IndexError, Result};
use crate::stats::IndexStats;
use directory_model::{ReferenceCount, UserId, UserIndex, UserProfile, UserRecord};
use std::collections::HashMap;

/// Everything derived from one load of the user list.
#[derive(Debug, Clone)]
pub struct IndexedDirectory {
    /// Lookup from id to profile
    pub index: UserIndex,

    /// One entry per id referenced in any friends list, ordered by id
    pub references: Vec<ReferenceCount>,

    /// Build summary
    pub stats: IndexStats,
}

struct Tally {
    count: u64,
    first_referrer: UserId,
}

/// Build the id lookup and friend-reference counts in a single pass.
///
/// Every id occurring in a friends list must resolve to a record id; the
/// first unresolvable id aborts the build with [`IndexError::UnknownFriend`].
/// An id may reference itself, and repeated occurrences within one friends
/// list each count separately.
pub fn build_index(records: &[UserRecord]) -> Result<IndexedDirectory> {
    let mut index = UserIndex::new();
    let mut tallies: HashMap<UserId, Tally> = HashMap::new();
    let mut friend_links = 0usize;

    for record in records {
        let replaced = index.insert(
            record.id,
            UserProfile {
                name: record.name.clone(),
                friends: record.friends.clone(),
            },
        );
        if replaced.is_some() {
            log::warn!("Duplicate user id {}, keeping the later record", record.id);
        }

        for &friend in &record.friends {
            tallies
                .entry(friend)
                .and_modify(|tally| tally.count += 1)
                .or_insert(Tally {
                    count: 1,
                    first_referrer: record.id,
                });
            friend_links += 1;
        }
    }

    let mut references = Vec::with_capacity(tallies.len());
    for (id, tally) in tallies {
        let name = index
            .name_of(id)
            .ok_or(IndexError::UnknownFriend {
                friend: id,
                referenced_by: tally.first_referrer,
            })?
            .to_string();
        references.push(ReferenceCount {
            id,
            count: tally.count,
            name,
        });
    }
    references.sort_by_key(|reference| reference.id);

    let stats = IndexStats {
        users: index.len(),
        friend_links,
        distinct_referenced: references.len(),
    };
    log::debug!(
        "Indexed {} users, {} friend links ({} distinct referenced)",
        stats.users,
        stats.friend_links,
        stats.distinct_referenced
    );

    Ok(IndexedDirectory {
        index,
        references,
        stats,
    })
}
