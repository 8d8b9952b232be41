// Copyright (c) 2025 Hantrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit and property tests for the search trie.


use test_case::test_case;

use crate::phonetic::{MockPhoneticDict, PhoneticError};
use crate::trie::{SearchTrie, SearchTrieConfig};

fn insurance_trie() -> SearchTrie<&'static str> {
    let mut trie = SearchTrie::new(true);
    trie.put("保险", "A");
    trie.put("保险箱", "B");
    trie.put("保安", "C");
    trie
}

#[test]
fn test_literal_search() {
    let trie = insurance_trie();

    assert_eq!(trie.search("保险", None), vec![&"A", &"B"]);
    assert_eq!(trie.search("保", None), vec![&"A", &"B", &"C"]);
    assert!(trie.search("险", None).is_empty());
}

#[test_case("bx", &["A", "B"] ; "initial letters")]
#[test_case("baoxian", &["A", "B"] ; "full pinyin")]
#[test_case("baoxi", &["A", "B"] ; "pinyin cut mid syllable")]
#[test_case("bxian", &["A", "B"] ; "initial then full syllable")]
#[test_case("ba", &["A", "B", "C"] ; "shared syllable prefix")]
fn test_phonetic_search(prefix: &str, expected: &[&str]) {
    let trie = insurance_trie();

    let hits: Vec<&str> = trie.search(prefix, None).into_iter().copied().collect();
    assert_eq!(hits, expected);
}

#[test]
fn test_blank_input_is_noop() {
    let mut trie = insurance_trie();
    trie.put("", "X");
    trie.put("   ", "Y");

    assert_eq!(trie.word_count(), 3);
    assert!(trie.search("", None).is_empty());
    assert!(trie.search("  \t ", None).is_empty());
}

#[test]
fn test_reinsertion_overwrites_payload_only() {
    let mut trie = SearchTrie::new(false);
    trie.put("电脑", 1);
    trie.put("电脑", 2);

    assert_eq!(trie.word_count(), 1);
    let nodes = trie.search_nodes("电脑", None);
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].payload(), Some(&2));
    assert_eq!(nodes[0].count(), 2);
}

#[test]
fn test_word_ending_on_interior_node_counts() {
    let mut trie = SearchTrie::new(false);
    trie.put("保险", "long");
    // terminates on a node that already exists as an interior node
    trie.put("保", "short");

    assert_eq!(trie.word_count(), 2);
    assert_eq!(trie.search("保", None), vec![&"short", &"long"]);
}

#[test]
fn test_limit_bounds_and_short_circuits() {
    let trie = insurance_trie();

    let unbounded = trie.search("保", None);
    assert_eq!(unbounded.len(), 3);

    let two = trie.search("保", Some(2));
    assert_eq!(two, unbounded[..2].to_vec());

    assert!(trie.search("保", Some(0)).is_empty());
    assert_eq!(trie.search("保", Some(10)).len(), 3);
}

#[test]
fn test_phonetic_mode_off_never_falls_back() {
    let mut trie = SearchTrie::new(false);
    trie.put("保险", "A");

    assert_eq!(trie.search("保险", None), vec![&"A"]);
    assert!(trie.search("baoxian", None).is_empty());
    assert!(trie.search("bx", None).is_empty());
}

#[test]
fn test_literal_match_shadows_phonetic_fallback() {
    let mut trie = SearchTrie::new(true);
    trie.put("保险", "hanzi");
    // an ascii word that collides with the pinyin of 保险
    trie.put("baozi", "ascii");

    // literal walk consumes "bao"; the phonetic strategies must not run
    assert_eq!(trie.search("bao", None), vec![&"ascii"]);
    // no literal path for the full pinyin, so the fallback takes over
    assert_eq!(trie.search("baoxian", None), vec![&"hanzi"]);
}

#[test]
fn test_empty_trie_queries() {
    let trie: SearchTrie<u32> = SearchTrie::new(true);

    assert!(trie.is_empty());
    assert_eq!(trie.word_count(), 0);
    assert!(trie.search("anything", None).is_empty());
    assert!(trie.search_nodes("保", None).is_empty());
}

#[test]
fn test_failing_dict_degrades_to_no_readings() {
    let mut dict = MockPhoneticDict::new();
    dict.expect_readings().returning(|ch| {
        Err(PhoneticError::Lookup {
            ch,
            reason: "backend offline".to_string(),
        })
    });

    let config = SearchTrieConfig::new().with_phonetic(true);
    let mut trie = SearchTrie::with_dict(config, Box::new(dict));
    trie.put("保险", "A");

    // insertion survived, literal matching is unaffected
    assert_eq!(trie.word_count(), 1);
    assert_eq!(trie.search("保险", None), vec![&"A"]);
    // no readings were attached, so phonetic queries find nothing
    assert!(trie.search("baoxian", None).is_empty());
    assert!(trie.search("bx", None).is_empty());
}

#[test]
fn test_dict_not_consulted_when_phonetic_off() {
    let mut dict = MockPhoneticDict::new();
    dict.expect_readings().never();

    let mut trie = SearchTrie::with_dict(SearchTrieConfig::new(), Box::new(dict));
    trie.put("保险", "A");

    assert_eq!(trie.search("保险", None), vec![&"A"]);
}

#[test]
fn test_node_handles_expose_words() {
    let trie = insurance_trie();

    let nodes = trie.search_nodes("bx", None);
    let words: Vec<String> = nodes.iter().map(|n| n.word()).collect();
    assert_eq!(words, vec!["保险", "保险箱"]);
    assert!(nodes.iter().all(|n| n.is_word_end()));
}
