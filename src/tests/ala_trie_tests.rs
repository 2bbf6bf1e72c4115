//! Scenario and property tests for the Ala Trie.

use std::collections::HashSet;

use proptest::prelude::*;
use test_case::test_case;

use super::test_utils::{probe_strategy, sequences_strategy};
use crate::data_structures::AlaTrie;

/// Record type with several fields, all of which take part in equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TestRecord {
    a: i32,
    b: String,
    c: [i64; 4],
}

impl TestRecord {
    fn new(a: i32, b: &str, c: [i64; 4]) -> Self {
        Self {
            a,
            b: b.to_string(),
            c,
        }
    }
}

fn number_words_trie() -> AlaTrie<String> {
    let mut trie = AlaTrie::new();
    for sequence in [
        ["one", "two", "three"],
        ["four", "five", "six"],
        ["seven", "eight", "nine"],
    ] {
        trie.add(sequence.map(String::from));
    }
    trie
}

fn records_trie() -> AlaTrie<TestRecord> {
    let mut trie = AlaTrie::new();
    trie.add([TestRecord::new(1, "one", [1, 2, 3, 4])]);
    trie.add([TestRecord::new(2, "two", [2, 3, 4, 5])]);
    trie.add([TestRecord::new(3, "three", [3, 4, 5, 6])]);
    trie
}

#[test_case(&["one", "two", "three"], true ; "full sequence")]
#[test_case(&["seven", "eight", "nine"], true ; "last inserted sequence")]
#[test_case(&["one", "two"], false ; "proper prefix")]
#[test_case(&["one", "five"], false ; "invalid combination")]
#[test_case(&["one", "two", "three", "four"], false ; "extension")]
#[test_case(&["ten"], false ; "unknown first value")]
#[test_case(&[], false ; "empty sequence")]
fn test_search_words(query: &[&str], expected: bool) {
    let trie = number_words_trie();
    assert_eq!(trie.search(query.iter().copied()), expected);
}

#[test_case("one", true ; "existing string")]
#[test_case("on", false ; "prefix of existing string")]
#[test_case("four", false ; "non existent string")]
fn test_search_chars(query: &str, expected: bool) {
    let mut trie = AlaTrie::<char>::new();
    for word in ["one", "two", "three"] {
        trie.add(word.chars());
    }

    let query: Vec<char> = query.chars().collect();
    assert_eq!(trie.search(&query), expected);
}

#[test_case(TestRecord::new(2, "two", [2, 3, 4, 5]), true ; "record exists")]
#[test_case(TestRecord::new(2, "two", [2, 9, 4, 5]), false ; "nested field differs")]
#[test_case(TestRecord::new(2, "Two", [2, 3, 4, 5]), false ; "string field differs")]
#[test_case(TestRecord::new(4, "two", [2, 3, 4, 5]), false ; "integer field differs")]
fn test_search_records(query: TestRecord, expected: bool) {
    let trie = records_trie();
    assert_eq!(trie.search(&[query]), expected);
}

#[test]
fn test_long_sequence_and_prefix() {
    let values: Vec<u32> = (1..=1000).collect();
    let mut trie = AlaTrie::new();
    trie.add(values.iter().copied());

    assert!(trie.search(&values));
    assert!(!trie.search(&values[..999]));
    assert!(!trie.search(&values[..1]));
}

#[test]
fn test_empty_add_never_found() {
    let mut trie = AlaTrie::<String>::new();
    trie.add(Vec::new());
    trie.add(["x".to_string()]);

    assert!(!trie.search(&[] as &[String]));
    assert!(trie.search(["x"]));
}

proptest! {
    /// Membership matches a set of the inserted non-empty sequences
    #[test]
    fn proptest_matches_reference_model(
        (inserted, probes) in sequences_strategy()
            .prop_flat_map(|inserted| (Just(inserted.clone()), probe_strategy(inserted)))
    ) {
        let mut trie: AlaTrie<u8> = AlaTrie::new();
        let mut model = HashSet::new();
        for sequence in &inserted {
            trie.add(sequence.iter().copied());
            model.insert(sequence.clone());
        }

        for probe in inserted.iter().chain(probes.iter()) {
            let expected = !probe.is_empty() && model.contains(probe);
            prop_assert_eq!(trie.search(probe), expected, "probe {:?}", probe);
        }
    }

    /// Adding sequences a second time changes no lookup result
    #[test]
    fn proptest_add_is_idempotent(
        (inserted, probes) in sequences_strategy()
            .prop_flat_map(|inserted| (Just(inserted.clone()), probe_strategy(inserted)))
    ) {
        let mut once: AlaTrie<u8> = AlaTrie::new();
        once.extend(inserted.iter().cloned());

        let mut twice: AlaTrie<u8> = AlaTrie::new();
        twice.extend(inserted.iter().cloned());
        twice.extend(inserted.iter().cloned());

        for probe in &probes {
            prop_assert_eq!(once.search(probe), twice.search(probe));
        }
    }

    /// Insertion order does not affect membership
    #[test]
    fn proptest_insertion_order_irrelevant(inserted in sequences_strategy()) {
        let forward: AlaTrie<u8> = inserted.iter().cloned().collect();
        let backward: AlaTrie<u8> = inserted.iter().rev().cloned().collect();

        for sequence in &inserted {
            prop_assert_eq!(forward.search(sequence), backward.search(sequence));
        }
    }
}
