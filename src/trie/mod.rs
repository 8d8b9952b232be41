// Copyright (c) 2025 Hantrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix-search trie with literal, pinyin and initial-letter query modes.
//!
//! One index answers three kinds of prefix queries:
//!
//! * literal character prefixes — `保险` finds `保险`, `保险箱`, …
//! * full-pronunciation prefixes — `baoxian` (or `baoxi`, `bxian`) finds the
//!   same words;
//! * first-letter abbreviations — `bx` finds them too.
//!
//! A query tries the literal walk first; only when no literal path consumes
//! the whole prefix do the two phonetic strategies run, and their anchor
//! sets are merged. Pronunciations come from a [`PhoneticDict`] collaborator
//! at insertion time, so heteronyms (多音字) keep all their readings.
//!
//! # Example
//!
//! ```
//! use hantrie::SearchTrie;
//!
//! let mut trie = SearchTrie::new(true);
//! trie.put("保险", "insurance");
//! trie.put("保险箱", "safe box");
//!
//! assert_eq!(trie.search("保险", None), vec![&"insurance", &"safe box"]);
//! assert_eq!(trie.search("baoxian", None), vec![&"insurance", &"safe box"]);
//! assert_eq!(trie.search("bx", None), vec![&"insurance", &"safe box"]);
//! ```
//!
//! The trie is not safe for concurrent mutation; `put` takes `&mut self` and
//! queries take `&self`, so the borrow checker enforces the
//! build-then-query discipline. A frozen trie can be shared across threads
//! for reads.

mod config;
mod matchers;
mod node;

#[cfg(test)]
mod tests;

use std::fmt;

use fnv::{FnvHashMap, FnvHashSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::phonetic::{CharReadings, MandarinDict, PhoneticDict};

pub use config::SearchTrieConfig;
pub use node::NodeRef;

use node::{NodeId, TrieNode, ROOT};

fn bundled_dict() -> Box<dyn PhoneticDict> {
    Box::new(MandarinDict::new())
}

/// In-memory prefix-search index over short text labels.
///
/// Each indexed word carries a caller-supplied payload of type `T`; the last
/// insertion of the same word overwrites the payload. Input is expected to
/// be pre-sanitized by the caller (see [`crate::text`]); the trie itself
/// only trims surrounding whitespace and treats blank input as a no-op.
///
/// Serialization: the index round-trips through serde, readings included.
/// The dictionary box is not serialized — deserialization restores the
/// bundled [`MandarinDict`], so a custom dictionary must be re-attached
/// before further insertions if one was in use.
#[derive(Serialize, Deserialize)]
pub struct SearchTrie<T> {
    /// Node arena; `nodes[0]` is the root sentinel owning nothing but links.
    nodes: Vec<TrieNode<T>>,

    /// Number of distinct words indexed.
    word_count: usize,

    /// Options fixed at construction.
    config: SearchTrieConfig,

    /// Pronunciation source, consulted once per newly created node.
    #[serde(skip, default = "bundled_dict")]
    dict: Box<dyn PhoneticDict>,
}

impl<T> SearchTrie<T> {
    /// Creates an empty trie, with the bundled Mandarin dictionary when
    /// `phonetic` is on.
    pub fn new(phonetic: bool) -> Self {
        Self::with_config(SearchTrieConfig::new().with_phonetic(phonetic))
    }

    /// Creates an empty trie from a configuration.
    pub fn with_config(config: SearchTrieConfig) -> Self {
        Self::with_dict(config, bundled_dict())
    }

    /// Creates an empty trie with a caller-supplied pronunciation source.
    ///
    /// The dictionary is only consulted when `config.phonetic` is on.
    pub fn with_dict(config: SearchTrieConfig, dict: Box<dyn PhoneticDict>) -> Self {
        Self {
            nodes: vec![TrieNode::root()],
            word_count: 0,
            config,
            dict,
        }
    }

    /// Indexes `word` with `payload`.
    ///
    /// Blank input is a silent no-op. Re-inserting an existing word creates
    /// no nodes: it overwrites the payload and increments the per-node
    /// count, leaving [`word_count`](Self::word_count) unchanged.
    pub fn put(&mut self, word: &str, payload: T) {
        let word = word.trim();
        if word.is_empty() {
            return;
        }

        let mut cur = ROOT;
        for c in word.chars() {
            cur = self.child_or_create(cur, c);
        }

        let node = &mut self.nodes[cur];
        if !node.word_end {
            node.word_end = true;
            self.word_count += 1;
        }
        node.count += 1;
        node.payload = Some(payload);
        trace!(word, "indexed");
    }

    /// Returns the payloads of every word starting (literally or
    /// phonetically) with `prefix`, at most `limit` of them.
    ///
    /// `None` means unbounded. Blank prefixes and prefixes matching nothing
    /// yield an empty vector; with phonetic mode off, only literal matches
    /// are ever returned.
    pub fn search(&self, prefix: &str, limit: Option<usize>) -> Vec<&T> {
        self.search_nodes(prefix, limit)
            .into_iter()
            .filter_map(|node| node.payload())
            .collect()
    }

    /// Like [`search`](Self::search), but returns node handles exposing the
    /// matched character, per-word insertion count and reconstructed word.
    pub fn search_nodes(&self, prefix: &str, limit: Option<usize>) -> Vec<NodeRef<'_, T>> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Vec::new();
        }

        let anchors = self.anchors(prefix);
        let hits = self.collect_words(&anchors, limit);
        debug!(
            prefix,
            anchors = anchors.len(),
            hits = hits.len(),
            "prefix search"
        );
        hits.into_iter()
            .map(|id| NodeRef::new(self, id))
            .collect()
    }

    /// Number of distinct words indexed. Re-insertions do not count twice.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Whether no words have been indexed yet.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Whether phonetic matching was enabled at construction.
    pub fn phonetic(&self) -> bool {
        self.config.phonetic
    }

    /// Resolves the anchor set for `prefix`: the literal match when one
    /// exists, otherwise the union of both phonetic strategies.
    fn anchors(&self, prefix: &str) -> Vec<NodeId> {
        if let Some(id) = self.literal_anchor(prefix) {
            return vec![id];
        }
        if !self.config.phonetic {
            return Vec::new();
        }

        // Union deduplicated by node identity; two strategies can land on
        // the same node. Creation order keeps the output deterministic no
        // matter which strategy found an anchor first.
        let mut seen: FnvHashSet<NodeId> = FnvHashSet::default();
        let mut anchors: Vec<NodeId> = self
            .initial_anchors(prefix)
            .into_iter()
            .chain(self.pronunciation_anchors(prefix))
            .filter(|id| seen.insert(*id))
            .collect();
        anchors.sort_unstable();
        anchors
    }

    /// Returns the child of `parent` for `c`, creating it if missing.
    fn child_or_create(&mut self, parent: NodeId, c: char) -> NodeId {
        if let Some(id) = self.nodes[parent].child(c) {
            return id;
        }

        let readings = if self.config.phonetic {
            self.lookup_readings(c)
        } else {
            CharReadings::none()
        };
        let id = self.nodes.len();
        self.nodes.push(TrieNode::new(parent, c, readings));
        self.nodes[parent]
            .children
            .get_or_insert_with(FnvHashMap::default)
            .insert(c, id);
        id
    }

    /// Collaborator boundary: a failing dictionary degrades to "no known
    /// pronunciation" and never interrupts insertion.
    fn lookup_readings(&self, c: char) -> CharReadings {
        match self.dict.readings(c) {
            Ok(readings) => readings,
            Err(err) => {
                warn!(
                    character = %c,
                    error = %err,
                    "phonetic lookup failed, indexing without readings"
                );
                CharReadings::none()
            }
        }
    }
}

impl<T> Default for SearchTrie<T> {
    fn default() -> Self {
        Self::with_config(SearchTrieConfig::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for SearchTrie<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchTrie")
            .field("word_count", &self.word_count)
            .field("nodes", &self.nodes.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
