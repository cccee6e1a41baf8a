use directory_model::{UserId, UserIndex};
use rand::seq::IteratorRandom;
use rand::Rng;
use std::collections::HashSet;

/// Draw up to `k` distinct ids from `candidates`, skipping `exclude`.
///
/// Sampling is uniform and without replacement, so the call always
/// terminates: fewer than `k` eligible candidates yields the whole eligible
/// set, and none at all yields an empty vector.
pub fn sample_non_friends<I, R>(
    candidates: I,
    exclude: &HashSet<UserId>,
    k: usize,
    rng: &mut R,
) -> Vec<UserId>
where
    I: IntoIterator<Item = UserId>,
    R: Rng + ?Sized,
{
    candidates
        .into_iter()
        .filter(|id| !exclude.contains(id))
        .choose_multiple(rng, k)
}

/// Suggest up to `k` users the given user is not connected to.
///
/// The exclusion set is the user's friends plus the user itself. Candidates
/// are the ids known to the index, sorted before sampling so the outcome
/// depends only on the RNG state.
pub fn suggest_strangers<R>(
    index: &UserIndex,
    user_id: UserId,
    k: usize,
    rng: &mut R,
) -> Vec<UserId>
where
    R: Rng + ?Sized,
{
    let mut exclude: HashSet<UserId> = index
        .get(user_id)
        .map(|profile| profile.friends.iter().copied().collect())
        .unwrap_or_default();
    exclude.insert(user_id);

    let mut candidates: Vec<UserId> = index.ids().collect();
    candidates.sort_unstable();

    let suggestions = sample_non_friends(candidates, &exclude, k, rng);
    log::debug!(
        "Suggesting {} of {} requested strangers for user {user_id}",
        suggestions.len(),
        k
    );
    suggestions
}
