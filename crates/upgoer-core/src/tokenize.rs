//! Lexical tokenizer.
//!
//! Splits English text into words, contractions, hyphenated words, ellipses,
//! and single punctuation marks with one ordered-alternation pattern. The
//! alternatives are tried in priority order at every position, so `...` wins
//! over `.` and `well-known` wins over `well` + `-` + `known`.
//!
//! Word characters are ASCII only (`[A-Za-z0-9_]`). Anything the pattern does
//! not cover, whitespace included, is skipped and never reported.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The token pattern, in priority order:
/// ellipsis, hyphenated word, contraction, plain word, punctuation mark.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\.{3}",
        r"|[A-Za-z0-9_]+-[A-Za-z0-9_]+",
        r"|[A-Za-z0-9_]+'[A-Za-z0-9_]*",
        r"|[A-Za-z0-9_]+",
        r"|[[:punct:]]",
    ))
    .expect("valid regex")
});

/// Split text into tokens, preserving order.
///
/// Tokens borrow from `text`. Whitespace and unsupported characters are
/// dropped, so the result may be empty for non-empty input.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn tokenize(text: &str) -> Vec<&str> {
    let tokens: Vec<&str> = TOKEN_PATTERN
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|t| !t.is_empty())
        .collect();
    tracing::debug!(tokens = tokens.len(), "tokenized text");
    tokens
}

/// The shape of a token, inferred from its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// A run of word characters.
    Word,
    /// A word with an apostrophe (`it's`, `dogs'`).
    Contraction,
    /// Two word runs joined by a single hyphen.
    Hyphenated,
    /// Three dots.
    Ellipsis,
    /// A single punctuation character.
    Punctuation,
}

impl TokenKind {
    /// Infer the kind of a token produced by [`tokenize`].
    pub fn of(token: &str) -> Self {
        if token == "..." {
            Self::Ellipsis
        } else if token.len() == 1 && token.as_bytes()[0].is_ascii_punctuation() {
            Self::Punctuation
        } else if token.contains('\'') {
            Self::Contraction
        } else if token.contains('-') {
            Self::Hyphenated
        } else {
            Self::Word
        }
    }

    /// Returns the kind as a kebab-case string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Contraction => "contraction",
            Self::Hyphenated => "hyphenated",
            Self::Ellipsis => "ellipsis",
            Self::Punctuation => "punctuation",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
