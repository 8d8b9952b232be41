// Copyright (c) 2025 Hantrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Caller-side text preparation.
//!
//! The trie indexes and matches text exactly as given; stripping punctuation
//! and folding case are pre-processing steps for the caller. These helpers
//! cover the common case of user-typed queries against indexed labels:
//!
//! ```
//! use hantrie::text;
//!
//! let query = text::lower_case(&text::remove_special_chars(" Dian（电） "));
//! assert_eq!(query, "dian电");
//! ```

use std::borrow::Cow;

/// Characters stripped by [`remove_special_chars`]: whitespace and the
/// punctuation typically found in product labels, both ascii and full-width.
pub const SPECIAL_CHARS: &str =
    "　 \r\n\t,，。·.．;；:：、！@$%*^`~=+&'\"|_-\\/{}【】〈〉<>[]「」“”（）()";

/// Removes the default special-character set from `source`.
pub fn remove_special_chars(source: &str) -> Cow<'_, str> {
    remove_chars(source, SPECIAL_CHARS)
}

/// Removes every character of `chars` from `source`.
///
/// Returns the input unchanged (and unallocated) when there is nothing to
/// strip.
pub fn remove_chars<'a>(source: &'a str, chars: &str) -> Cow<'a, str> {
    if source.is_empty() || chars.is_empty() || !source.chars().any(|c| chars.contains(c)) {
        return Cow::Borrowed(source);
    }
    Cow::Owned(source.chars().filter(|c| !chars.contains(*c)).collect())
}

/// Lowercases `source`.
pub fn lower_case(source: &str) -> String {
    source.to_lowercase()
}

/// Uppercases `source`.
pub fn upper_case(source: &str) -> String {
    source.to_uppercase()
}
