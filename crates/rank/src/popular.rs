use directory_model::ReferenceCount;

/// Sort reference counts for display: count descending, ties broken by name
/// ascending. The sort is stable, so entries equal on both keys keep their
/// input order.
pub fn sort_by_references(references: &[ReferenceCount]) -> Vec<ReferenceCount> {
    let mut ranked = references.to_vec();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    ranked
}

/// Names of the `n` most-referenced users.
///
/// Fewer than `n` entries returns all of them.
pub fn rank_top(references: &[ReferenceCount], n: usize) -> Vec<String> {
    sort_by_references(references)
        .into_iter()
        .take(n)
        .map(|entry| entry.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reference(id: u64, count: u64, name: &str) -> ReferenceCount {
        ReferenceCount {
            id,
            count,
            name: name.to_string(),
        }
    }

    #[test]
    fn orders_by_count_then_name() {
        let references = vec![
            reference(2, 1, "B"),
            reference(3, 1, "C"),
            reference(1, 2, "A"),
        ];

        assert_eq!(rank_top(&references, 3), vec!["A", "B", "C"]);
    }

    #[test]
    fn tie_break_is_deterministic_regardless_of_input_order() {
        let forward = vec![reference(1, 5, "Alice"), reference(2, 5, "Bob")];
        let reversed = vec![reference(2, 5, "Bob"), reference(1, 5, "Alice")];

        assert_eq!(rank_top(&forward, 2), vec!["Alice", "Bob"]);
        assert_eq!(rank_top(&reversed, 2), vec!["Alice", "Bob"]);
    }

    #[test]
    fn short_input_returns_everything_without_padding() {
        let references = vec![reference(1, 1, "A")];

        assert_eq!(rank_top(&references, 3), vec!["A"]);
        assert!(rank_top(&[], 3).is_empty());
    }

    #[test]
    fn sorting_is_idempotent() {
        let references = vec![
            reference(4, 2, "D"),
            reference(1, 7, "A"),
            reference(3, 2, "C"),
            reference(2, 7, "B"),
        ];

        let once = sort_by_references(&references);
        let twice = sort_by_references(&once);
        assert_eq!(once, twice);
    }
}
