// Copyright (c) 2025 Hantrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the search trie.

use serde::{Deserialize, Serialize};

/// Construction-time options for a [`SearchTrie`](super::SearchTrie).
///
/// The phonetic flag is fixed for the trie's lifetime: readings are attached
/// to nodes at insertion time, so flipping the flag afterwards could not
/// retrofit already-indexed words.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchTrieConfig {
    /// Whether indexed characters carry pronunciations, enabling the
    /// pinyin and initial-letter query modes. Off by default.
    pub phonetic: bool,
}

impl SearchTrieConfig {
    /// Creates a configuration with phonetic matching disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether phonetic matching is enabled.
    pub fn with_phonetic(mut self, value: bool) -> Self {
        self.phonetic = value;
        self
    }
}
