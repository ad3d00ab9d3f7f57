//! Knowledgebase Core Tests
//!
//! Exercises construction, duplicate rejection and lookup through the public API.

use std::sync::Arc;

use sivrad_knowledgebase_core::{
    Collection, CollectionRecord, CoreConfig, KnowledgebaseCore, KnowledgebaseError,
    LookupStrategy,
};

const STRATEGIES: [LookupStrategy; 2] = [LookupStrategy::Scan, LookupStrategy::Index];

fn records(ids: &[&str]) -> Vec<CollectionRecord> {
    ids.iter().map(|id| CollectionRecord::new(*id)).collect()
}

fn build(
    ids: &[&str],
    lookup: LookupStrategy,
) -> Result<KnowledgebaseCore<CollectionRecord>, KnowledgebaseError<CollectionRecord>> {
    KnowledgebaseCore::with_lookup(records(ids), lookup)
}

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn test_unique_identifiers_all_exist() {
    let ids: Vec<String> = (0..100).map(|i| format!("collection-{}", i)).collect();
    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();

    for lookup in STRATEGIES {
        let core = build(&id_refs, lookup).unwrap();
        assert_eq!(core.len(), ids.len());
        for id in &ids {
            assert!(core.collection_exists(id), "{} missing with {:?}", id, lookup);
        }
    }
}

#[test]
fn test_duplicate_references_later_record() {
    for lookup in STRATEGIES {
        let input = vec![
            CollectionRecord::new("a").with_metadata(serde_json::json!({ "n": 1 })),
            CollectionRecord::new("b"),
            CollectionRecord::new("a").with_metadata(serde_json::json!({ "n": 3 })),
        ];

        match KnowledgebaseCore::<CollectionRecord>::with_lookup(input, lookup) {
            Err(KnowledgebaseError::CollectionDuplicate { duplicate }) => {
                assert_eq!(duplicate.identifier(), "a");
                assert_eq!(duplicate.metadata["n"], 3);
            }
            other => panic!("Expected CollectionDuplicate, got {:?}", other),
        }
    }
}

#[test]
fn test_duplicate_error_message() {
    let err = build(&["a", "b", "a"], LookupStrategy::Scan).unwrap_err();
    assert_eq!(
        err.to_string(),
        "CollectionDuplicate: A collection with the id 'a' was already given to SKB core."
    );
}

#[test]
fn test_empty_construction() {
    for lookup in STRATEGIES {
        let core = build(&[], lookup).unwrap();
        assert!(core.is_empty());
        for id in ["", "x", "books"] {
            assert!(!core.collection_exists(id));
            assert!(core.get_collection(id).is_none());
        }
    }
}

#[test]
fn test_with_loaded_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("skb.toml");
    std::fs::write(&path, "[registry]\nlookup = \"index\"\n").unwrap();

    let config = CoreConfig::load_from(Some(path.as_path())).unwrap();
    let core =
        KnowledgebaseCore::<CollectionRecord>::with_config(records(&["x", "y"]), &config).unwrap();
    assert!(core.collection_exists("y"));
}

// =============================================================================
// Lookup Tests
// =============================================================================

#[test]
fn test_lookup_and_existence() {
    for lookup in STRATEGIES {
        let core = build(&["x", "y", "z"], lookup).unwrap();

        assert_eq!(core.get_collection("y").map(|c| c.identifier()), Some("y"));
        assert!(core.get_collection("w").is_none());
        assert!(core.collection_exists("x"));
        assert!(!core.collection_exists("q"));
        assert!(!core.collection_exists("Y"));
    }
}

#[test]
fn test_shared_handles_not_copied() {
    let books = Arc::new(CollectionRecord::new("books").with_name("Books"));
    let core: KnowledgebaseCore<CollectionRecord> =
        KnowledgebaseCore::new(vec![Arc::clone(&books)]).unwrap();

    let stored = core.get_collection("books").unwrap();
    assert!(Arc::ptr_eq(stored, &books));
    assert_eq!(Arc::strong_count(&books), 2);

    drop(core);
    assert_eq!(Arc::strong_count(&books), 1);
}

#[test]
fn test_collections_in_input_order() {
    let core = build(&["z", "x", "y"], LookupStrategy::Index).unwrap();
    let ids: Vec<&str> = core.collections().map(|c| c.identifier()).collect();
    assert_eq!(ids, vec!["z", "x", "y"]);
}

// =============================================================================
// Foreign Collection Types
// =============================================================================

#[derive(Debug)]
struct Shelf {
    code: String,
    capacity: usize,
}

impl Collection for Shelf {
    fn identifier(&self) -> &str {
        &self.code
    }
}

#[test]
fn test_foreign_collection_type() {
    let shelves = vec![
        Shelf {
            code: "A1".to_string(),
            capacity: 40,
        },
        Shelf {
            code: "B2".to_string(),
            capacity: 25,
        },
    ];

    let core: KnowledgebaseCore<Shelf> = KnowledgebaseCore::new(shelves).unwrap();
    assert_eq!(core.get_collection("B2").unwrap().capacity, 25);
    assert!(!core.collection_exists("a1"));

    let dupes = vec![
        Shelf {
            code: "A1".to_string(),
            capacity: 1,
        },
        Shelf {
            code: "A1".to_string(),
            capacity: 2,
        },
    ];
    let err = KnowledgebaseCore::<Shelf>::new(dupes).unwrap_err();
    assert_eq!(err.duplicate().unwrap().capacity, 2);
}
