// Copyright (c) 2025 Hantrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bundled Mandarin dictionary backed by the `pinyin` crate.

use pinyin::ToPinyinMulti;

use super::{CharReadings, PhoneticDict, PhoneticError};

/// Mandarin readings from the `pinyin` crate's embedded table.
///
/// Output format: lowercase, tone-less, with `ü` written as `v` (so queries
/// stay plain ASCII, e.g. 旅 → `lv`). Heteronyms produce one entry per
/// distinct reading; 重 yields both `zhong` and `chong`.
///
/// Non-Han characters (Latin letters, digits, punctuation) have no entry in
/// the table and yield empty readings.
#[derive(Debug, Clone, Copy, Default)]
pub struct MandarinDict;

impl MandarinDict {
    /// Creates the dictionary. The reading table is compiled in; there is
    /// nothing to load.
    pub fn new() -> Self {
        Self
    }
}

impl PhoneticDict for MandarinDict {
    fn readings(&self, ch: char) -> Result<CharReadings, PhoneticError> {
        let mut readings = CharReadings::none();
        if let Some(multi) = ch.to_pinyin_multi() {
            for reading in multi {
                readings.push(reading.plain().replace('ü', "v"));
            }
        }
        Ok(readings)
    }
}
