//! Sentence shrinking.
//!
//! Long sentences are drawn smaller. The perceived word count is half the
//! token count (punctuation included). Up to `max_ok_words` nothing changes;
//! past that the size falls linearly towards `base_percent` over
//! `max_extra_words` words and never drops below `min_percent`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters of the sentence size curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScaleConfig {
    /// Word count a sentence may reach before it starts shrinking.
    pub max_ok_words: f64,
    /// Extra words over which the size falls to its minimum.
    pub max_extra_words: f64,
    /// Size (percent) the linear curve heads towards.
    pub base_percent: f64,
    /// Smallest size (percent) a sentence is ever drawn at.
    pub min_percent: f64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            max_ok_words: 7.0,
            max_extra_words: 10.0,
            base_percent: 20.0,
            min_percent: 30.0,
        }
    }
}

impl ScaleConfig {
    /// Font size (percent) for a sentence of `token_count` tokens.
    ///
    /// `None` means the sentence keeps the default size.
    pub fn percent_for(&self, token_count: usize) -> Option<f64> {
        let word_count = token_count as f64 / 2.0;
        let excess = word_count - self.max_ok_words;
        if excess < 0.0 {
            return None;
        }
        if excess >= self.max_extra_words {
            return Some(self.min_percent);
        }
        let remaining = (self.max_extra_words - excess) / self.max_extra_words;
        let percent = remaining.mul_add(100.0 - self.base_percent, self.base_percent);
        Some(percent.max(self.min_percent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(tokens: usize) -> f64 {
        ScaleConfig::default().percent_for(tokens).unwrap_or(100.0)
    }

    #[test]
    fn short_sentences_are_untouched() {
        let scale = ScaleConfig::default();
        for n in 0..14 {
            assert_eq!(scale.percent_for(n), None, "{n} tokens");
        }
    }

    #[test]
    fn threshold_sentence_is_full_size() {
        assert_eq!(ScaleConfig::default().percent_for(14), Some(100.0));
    }

    #[test]
    fn shrinks_linearly() {
        // 20 tokens → 10 words → 3 over → 20 + 0.7 * 80
        assert!((size(20) - 76.0).abs() < 1e-9);
        // 24 tokens → 12 words → 5 over → 20 + 0.5 * 80
        assert!((size(24) - 60.0).abs() < 1e-9);
    }

    #[test]
    fn very_long_sentences_hit_the_floor() {
        assert_eq!(size(34), 30.0);
        assert_eq!(size(500), 30.0);
    }

    #[test]
    fn never_below_floor() {
        for n in 0..200 {
            assert!(size(n) >= 30.0, "{n} tokens");
        }
    }

    #[test]
    fn non_increasing_in_token_count() {
        let mut previous = size(0);
        for n in 1..200 {
            let current = size(n);
            assert!(current <= previous, "{n} tokens grew from {previous} to {current}");
            previous = current;
        }
    }

    #[test]
    fn custom_curve() {
        let scale = ScaleConfig {
            max_ok_words: 1.0,
            max_extra_words: 2.0,
            base_percent: 0.0,
            min_percent: 10.0,
        };
        assert_eq!(scale.percent_for(1), None);
        assert_eq!(scale.percent_for(2), Some(100.0));
        assert_eq!(scale.percent_for(4), Some(50.0));
        assert_eq!(scale.percent_for(6), Some(10.0));
    }
}
