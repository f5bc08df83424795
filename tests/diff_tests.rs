use gendiff::{compare, parse_file, parse_json, DiffTree, Document, Payload, Scalar, Status};
use std::path::Path;

fn fixture(name: &str) -> Document {
    parse_file(&Path::new("tests/fixtures").join(name)).unwrap()
}

fn keys(tree: &DiffTree) -> Vec<&str> {
    tree.iter().map(|node| node.key.as_str()).collect()
}

/// Asserts that every level of the tree is sorted by key.
fn assert_sorted(tree: &DiffTree) {
    let level = keys(tree);
    let mut sorted = level.clone();
    sorted.sort();
    assert_eq!(level, sorted);

    for node in tree {
        match &node.status {
            Status::Added(p) | Status::Removed(p) | Status::Unchanged(p) => {
                if let Payload::Children(children) = p {
                    assert_sorted(children);
                }
            }
            Status::Updated { from, to } => {
                for side in [from, to] {
                    if let Payload::Children(children) = side {
                        assert_sorted(children);
                    }
                }
            }
        }
    }
}

#[test]
fn test_key_order_is_stable_and_sorted() {
    let old = fixture("file1.json");
    let new = fixture("file2.json");

    let first = compare(&old, &new).unwrap();
    let second = compare(&old, &new).unwrap();
    assert_eq!(first, second);
    assert_eq!(keys(&first), ["common", "group1", "group2", "group3"]);
    assert_sorted(&first);
}

#[test]
fn test_added_and_removed_are_symmetric() {
    let a = fixture("file1.json");
    let b = fixture("file2.json");
    let forward = compare(&a, &b).unwrap();
    let backward = compare(&b, &a).unwrap();

    fn check(forward: &DiffTree, backward: &DiffTree) {
        for node in forward {
            let mirror = &backward.get(&node.key).unwrap().status;
            match (&node.status, mirror) {
                (Status::Added(p), Status::Removed(q)) | (Status::Removed(p), Status::Added(q)) => {
                    assert_eq!(p, q, "payload mismatch at {}", node.key)
                }
                (Status::Added(_), other) | (Status::Removed(_), other) => {
                    panic!("{} is not mirrored: {:?}", node.key, other)
                }
                (
                    Status::Unchanged(Payload::Children(x)),
                    Status::Unchanged(Payload::Children(y)),
                ) => check(x, y),
                _ => {}
            }
        }
    }

    check(&forward, &backward);
}

#[test]
fn test_nested_mappings_never_update_flat() {
    let tree = compare(&fixture("file1.json"), &fixture("file2.json")).unwrap();

    match &tree.get("common").unwrap().status {
        Status::Unchanged(Payload::Children(children)) => {
            assert!(children.has_changes());
            assert!(matches!(
                children.get("setting6").unwrap().status,
                Status::Unchanged(Payload::Children(_))
            ));
        }
        other => panic!("Expected common to recurse, got {:?}", other),
    }
}

#[test]
fn test_mapping_becomes_scalar() {
    let tree = compare(&fixture("file1.json"), &fixture("file2.json")).unwrap();
    let group1 = match &tree.get("group1").unwrap().status {
        Status::Unchanged(Payload::Children(children)) => children,
        other => panic!("Expected group1 to recurse, got {:?}", other),
    };

    match &group1.get("nest").unwrap().status {
        Status::Updated {
            from: Payload::Children(from),
            to: Payload::Scalar(to),
        } => {
            assert_eq!(keys(from), ["key"]);
            assert!(!from.has_changes());
            assert_eq!(to, &Scalar::String("str".to_string()));
        }
        other => panic!("Expected nest to be updated, got {:?}", other),
    }
}

#[test]
fn test_identical_documents_are_all_unchanged() {
    let doc = fixture("file1.json");
    let tree = compare(&doc, &doc).unwrap();
    assert!(!tree.has_changes());
    assert!(tree.stats().is_empty());
    assert_eq!(tree.stats().unchanged, 10);
}

#[test]
fn test_json_and_yaml_fixtures_agree() {
    let from_json = compare(&fixture("file1.json"), &fixture("file2.json")).unwrap();
    let from_yaml = compare(&fixture("file1.yml"), &fixture("file2.yaml")).unwrap();
    assert_eq!(from_json, from_yaml);
}

#[test]
fn test_stats_for_nested_fixture() {
    let stats = compare(&fixture("file1.json"), &fixture("file2.json"))
        .unwrap()
        .stats();
    assert_eq!(stats.added, 5);
    assert_eq!(stats.removed, 2);
    assert_eq!(stats.updated, 4);
    assert_eq!(stats.total_changes(), 11);
}

#[test]
fn test_numbers_compare_exactly() {
    let tree = compare(
        &parse_json(r#"{"a": 1, "b": 0.1, "c": 2}"#).unwrap(),
        &parse_json(r#"{"a": 1.0, "b": 0.10000000000000002, "c": "2"}"#).unwrap(),
    )
    .unwrap();
    assert!(matches!(tree.get("a").unwrap().status, Status::Unchanged(_)));
    assert!(matches!(tree.get("b").unwrap().status, Status::Updated { .. }));
    assert!(matches!(tree.get("c").unwrap().status, Status::Updated { .. }));
}
