// Copyright (c) 2025 Hantrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the phonetic dictionary boundary.

/// Errors a [`PhoneticDict`](super::PhoneticDict) implementation may report.
///
/// The trie never propagates these: a failed lookup is logged and degraded to
/// "no known pronunciation" at the call site.
#[derive(Debug, thiserror::Error)]
pub enum PhoneticError {
    /// A lookup for a single character failed.
    #[error("pronunciation lookup failed for '{ch}': {reason}")]
    Lookup {
        /// The character whose lookup failed.
        ch: char,
        /// Backend-specific failure description.
        reason: String,
    },

    /// The dictionary backend is not usable at all.
    #[error("phonetic dictionary unavailable: {0}")]
    Unavailable(String),
}
