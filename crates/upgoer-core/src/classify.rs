//! Word classification.
//!
//! Every token gets exactly one [`Category`]:
//!
//! 1. approved (case-insensitive) → [`Category::PreApproved`]
//! 2. shorter than 6 characters → [`Category::ProbablyOk`]
//! 3. shorter than 10 characters → [`Category::TooLong`] with the exact length
//! 4. anything else → [`Category::Wtf`]

use std::borrow::Cow;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::words::ApprovedWords;

/// Display category for a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "category", content = "length", rename_all = "snake_case")]
pub enum Category {
    /// On the approved-word list.
    PreApproved,
    /// Not approved, but short.
    ProbablyOk,
    /// Not approved and long-ish. Carries the character length.
    TooLong(usize),
    /// Not approved and very long.
    Wtf,
}

impl Category {
    /// The label attached to a rendered unit of this category.
    pub fn label(&self) -> Cow<'static, str> {
        match self {
            Self::PreApproved => Cow::Borrowed("preApproved"),
            Self::ProbablyOk => Cow::Borrowed("probablyOk"),
            Self::TooLong(n) => Cow::Owned(format!("toolong{n}")),
            Self::Wtf => Cow::Borrowed("wtf"),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Length limits used for words that are not approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ClassifyThresholds {
    /// Words shorter than this are [`Category::ProbablyOk`].
    pub short_below: usize,
    /// Words shorter than this (and not short) are [`Category::TooLong`].
    pub long_below: usize,
}

impl Default for ClassifyThresholds {
    fn default() -> Self {
        Self {
            short_below: 6,
            long_below: 10,
        }
    }
}

/// Classifies tokens against an approved-word set.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'w> {
    words: &'w ApprovedWords,
    thresholds: ClassifyThresholds,
}

impl Default for Classifier<'static> {
    fn default() -> Self {
        Self::new(ApprovedWords::builtin())
    }
}

impl<'w> Classifier<'w> {
    /// Create a classifier with the default thresholds.
    pub fn new(words: &'w ApprovedWords) -> Self {
        Self {
            words,
            thresholds: ClassifyThresholds::default(),
        }
    }

    /// Replace the length thresholds.
    pub const fn with_thresholds(mut self, thresholds: ClassifyThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Classify one token.
    pub fn classify(&self, token: &str) -> Category {
        if self.words.contains(token) {
            return Category::PreApproved;
        }
        let len = token.chars().count();
        if len < self.thresholds.short_below {
            Category::ProbablyOk
        } else if len < self.thresholds.long_below {
            Category::TooLong(len)
        } else {
            Category::Wtf
        }
    }
}

/// Classify a token against the built-in word set with default thresholds.
pub fn classify(token: &str) -> Category {
    Classifier::default().classify(token)
}
