//! The approved-word set.
//!
//! Membership is case-insensitive: entries are stored lowercase and lookups
//! lowercase the queried word once. The built-in set is built on first use and never
//! changes afterwards; callers who need extra words build their own
//! [`ApprovedWords`] on top of it.

use std::collections::HashSet;
use std::sync::LazyLock;

use camino::Utf8Path;

use crate::dictionaries::common_words::COMMON_WORDS;
use crate::dictionaries::supplementary::SUPPLEMENTARY_WORDS;
use crate::error::{ConfigError, ConfigResult};

static BUILTIN: LazyLock<ApprovedWords> = LazyLock::new(|| {
    let words: HashSet<String> = COMMON_WORDS
        .iter()
        .copied()
        .chain(SUPPLEMENTARY_WORDS.iter().copied())
        .map(str::to_lowercase)
        .collect();
    tracing::debug!(count = words.len(), "built-in approved words loaded");
    ApprovedWords { words }
});

/// A case-insensitive set of approved words.
#[derive(Debug, Clone, Default)]
pub struct ApprovedWords {
    words: HashSet<String>,
}

impl ApprovedWords {
    /// The process-wide built-in set (common words plus supplementary words).
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// An empty set. Nothing is approved.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Copy this set and add `extra` words to the copy.
    pub fn with_words<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = self.words.clone();
        words.extend(
            extra
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        Self { words }
    }

    /// Copy this set and add the words listed in a file.
    ///
    /// One word per line. Blank lines and lines starting with `#` are skipped.
    pub fn with_word_file(&self, path: &Utf8Path) -> ConfigResult<Self> {
        let content =
            std::fs::read_to_string(path.as_std_path()).map_err(|e| ConfigError::WordFile {
                path: path.to_path_buf(),
                source: e,
            })?;
        let extra: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .collect();
        tracing::debug!(path = %path, count = extra.len(), "loaded word file");
        Ok(self.with_words(extra))
    }

    /// Returns `true` if `word` is approved, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        if word.bytes().any(|b| b.is_ascii_uppercase()) || !word.is_ascii() {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Number of approved words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no words are approved.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
