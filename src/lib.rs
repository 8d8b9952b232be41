//! Hantrie
//!
//! An in-memory prefix-search index over short text labels (product titles,
//! category names, contact labels) with three query modes against the same
//! index:
//!
//! 1. literal character-prefix matching — `保险` finds `保险`, `保险箱`, …
//! 2. pinyin prefix matching — `baoxian`, `baoxi` or `bxian` find the same
//!    words, heteronyms included
//! 3. pinyin initial-letter matching — `bx` finds them too
//!
//! # Architecture
//!
//! The crate is designed with the following principles in mind:
//! - One arena-owned tree, no internal locking: `&mut`/`&` enforce the
//!   build-then-query discipline at compile time
//! - Pronunciation derivation lives behind the [`phonetic::PhoneticDict`]
//!   trait, injected for testability; the bundled [`phonetic::MandarinDict`]
//!   covers Han characters
//! - Failures at the dictionary boundary degrade to "no known
//!   pronunciation", never into query control flow
//! - Input sanitization is the caller's job; [`text`] has the helpers
//!
//! # Example
//!
//! ```
//! use hantrie::SearchTrie;
//!
//! let mut trie = SearchTrie::new(true);
//! trie.put("保险", "insurance");
//! trie.put("保险箱", "safe box");
//! trie.put("保安", "guard");
//!
//! assert_eq!(trie.search("bx", None), vec![&"insurance", &"safe box"]);
//! assert_eq!(trie.search("ba", Some(2)).len(), 2);
//! ```

// Re-export public modules
pub mod phonetic;
pub mod text;
pub mod trie;

pub use phonetic::{CharReadings, MandarinDict, PhoneticDict, PhoneticError};
pub use trie::{NodeRef, SearchTrie, SearchTrieConfig};

/// Version of the hantrie crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
