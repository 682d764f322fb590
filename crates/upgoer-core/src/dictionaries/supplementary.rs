//! Hand-picked additions to the common-word list.
//!
//! Contractions, large number words, and a few words and marks that show up
//! in everyday writing but are missing from [`super::common_words`].

/// Contractions, number words, and punctuation treated as approved.
pub const SUPPLEMENTARY_WORDS: &[&str] = &[
    // Contractions
    "let's", "you're", "that's", "they're", "she's", "it's", "what's", "you'll", "he'll",
    "they'll", "we'll", "she'll",
    // Number words
    "thousand", "million", "billion", "trillion",
    // Common words
    "welcome", "favorite", "syntax",
    // Punctuation
    "?", ".", "!", "(", ")", ",", "...",
];
