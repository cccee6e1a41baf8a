use directory_index::build_index;
use directory_model::UserRecord;
use pretty_assertions::assert_eq;

fn records_from_json(raw: &str) -> Vec<UserRecord> {
    serde_json::from_str(raw).expect("decode records")
}

#[test]
fn decoded_source_payload_indexes_end_to_end() {
    let records = records_from_json(
        r#"[
            {"id": 1, "name": "Ivan",  "friends": [2, 3, 4]},
            {"id": 2, "name": "Maria", "friends": [1, 4]},
            {"id": 3, "name": "Oleg",  "friends": [1]},
            {"id": 4, "name": "Anna",  "friends": [1, 2, 3]}
        ]"#,
    );

    let directory = build_index(&records).expect("build");

    assert_eq!(directory.index.len(), 4);
    assert_eq!(directory.index.name_of(3), Some("Oleg"));

    // One entry per distinct referenced id, ordered by id.
    let ids: Vec<_> = directory.references.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    let total: u64 = directory.references.iter().map(|r| r.count).sum();
    assert_eq!(total as usize, directory.stats.friend_links);
    assert_eq!(directory.stats.friend_links, 9);
}

#[test]
fn count_sum_matches_total_friend_occurrences() {
    let records = records_from_json(
        r#"[
            {"id": 10, "name": "Nina", "friends": [10, 10, 11]},
            {"id": 11, "name": "Pavel", "friends": []},
            {"id": 12, "name": "Vera", "friends": [10, 11, 11]}
        ]"#,
    );

    let directory = build_index(&records).expect("build");

    let total: u64 = directory.references.iter().map(|r| r.count).sum();
    let occurrences: usize = records.iter().map(|r| r.friends.len()).sum();
    assert_eq!(total as usize, occurrences);

    // 12 is never referenced, so it carries no entry.
    assert!(directory.references.iter().all(|r| r.id != 12));
    assert_eq!(directory.stats.distinct_referenced, 2);
}

#[test]
fn unresolvable_friend_id_is_a_clear_error() {
    let records = records_from_json(
        r#"[
            {"id": 1, "name": "Ivan", "friends": [2]},
            {"id": 2, "name": "Maria", "friends": [99]}
        ]"#,
    );

    let err = build_index(&records).expect_err("must fail");
    let message = err.to_string();
    assert!(message.contains("99"), "unexpected message: {message}");
    assert!(message.contains("user 2"), "unexpected message: {message}");
}
