//! Sentence grouping over a token stream.

/// Tokens that end a sentence.
pub const TERMINATORS: &[&str] = &[".", "!", "?", "..."];

/// Returns `true` if `token` ends a sentence.
pub fn is_terminator(token: &str) -> bool {
    TERMINATORS.contains(&token)
}

/// Group tokens into sentences in one left-to-right pass.
///
/// A terminator stays with the sentence it ends. Tokens after the last
/// terminator form a final, unterminated sentence.
#[tracing::instrument(skip_all, fields(tokens = tokens.len()))]
pub fn group_sentences<'a>(tokens: &[&'a str]) -> Vec<Vec<&'a str>> {
    let mut sentences = Vec::new();
    let mut current = Vec::new();

    for &token in tokens {
        current.push(token);
        if is_terminator(token) {
            sentences.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        sentences.push(current);
    }

    tracing::debug!(sentences = sentences.len(), "grouped sentences");
    sentences
}
