//! Owned rendering results.
//!
//! A [`Document`] is what the pipeline produced, detached from any surface.
//! It serializes for JSON output and can be drawn on a surface later.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::classify::Category;
use crate::render::RenderSurface;

/// A token with its display category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StyledToken {
    /// The token text.
    pub text: String,
    /// Display category.
    #[serde(flatten)]
    pub category: Category,
}

/// One sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Sentence {
    /// Tokens in order, terminator included.
    pub tokens: Vec<StyledToken>,
    /// Font size in percent, if the sentence is long enough to shrink.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

/// All sentences of a text, in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Document {
    /// The sentences.
    pub sentences: Vec<Sentence>,
}

/// Counts over a [`Document`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DocumentSummary {
    /// Number of sentences.
    pub sentences: usize,
    /// Number of tokens.
    pub tokens: usize,
    /// Tokens on the approved list.
    pub pre_approved: usize,
    /// Short tokens not on the list.
    pub probably_ok: usize,
    /// Medium-length tokens not on the list.
    pub too_long: usize,
    /// Very long tokens not on the list.
    pub wtf: usize,
    /// Sentences drawn below full size.
    pub shrunk_sentences: usize,
}

impl Document {
    /// Returns `true` if the document has no sentences.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Iterate over all tokens in order.
    pub fn tokens(&self) -> impl Iterator<Item = &StyledToken> {
        self.sentences.iter().flat_map(|s| s.tokens.iter())
    }

    /// Count tokens per category and shrunk sentences.
    pub fn summary(&self) -> DocumentSummary {
        let mut summary = DocumentSummary {
            sentences: self.sentences.len(),
            shrunk_sentences: self
                .sentences
                .iter()
                .filter(|s| s.scale.is_some_and(|p| p < 100.0))
                .count(),
            ..DocumentSummary::default()
        };
        for token in self.tokens() {
            summary.tokens += 1;
            match token.category {
                Category::PreApproved => summary.pre_approved += 1,
                Category::ProbablyOk => summary.probably_ok += 1,
                Category::TooLong(_) => summary.too_long += 1,
                Category::Wtf => summary.wtf += 1,
            }
        }
        summary
    }

    /// Draw this document on a surface.
    ///
    /// Produces the same structure as [`Renderer::render`](crate::render::Renderer::render)
    /// did for the text this document came from.
    pub fn render_to<S: RenderSurface>(&self, surface: &mut S) -> S::Node {
        let groups = self
            .sentences
            .iter()
            .map(|sentence| {
                let units = sentence
                    .tokens
                    .iter()
                    .map(|t| surface.labeled_unit(&t.text, &t.category.label()))
                    .collect();
                let mut group = surface.group(units);
                if let Some(percent) = sentence.scale {
                    surface.set_scale(&mut group, percent);
                }
                group
            })
            .collect();
        surface.group(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Renderer;

    #[test]
    fn empty_text_is_empty_document() {
        let doc = Renderer::default().document("");
        assert!(doc.is_empty());
        assert_eq!(doc.summary(), DocumentSummary::default());
    }

    #[test]
    fn summary_counts_categories() {
        let doc = Renderer::default().document("The tokenizer is extraordinary. Go!");
        let summary = doc.summary();
        assert_eq!(summary.sentences, 2);
        assert_eq!(summary.tokens, 7);
        // the, is, ., ! are approved; go too
        assert_eq!(summary.pre_approved, 5);
        assert_eq!(summary.too_long, 1);
        assert_eq!(summary.wtf, 1);
        assert_eq!(summary.probably_ok, 0);
        assert_eq!(summary.shrunk_sentences, 0);
    }

    #[test]
    fn summary_counts_shrunk_sentences() {
        let long = "word ".repeat(30) + ".";
        let doc = Renderer::default().document(&long);
        assert_eq!(doc.summary().shrunk_sentences, 1);
    }

    #[test]
    fn serializes_category_inline() {
        let doc = Renderer::default().document("Tokenizer");
        let json = serde_json::to_value(&doc).unwrap();
        let token = &json["sentences"][0]["tokens"][0];
        assert_eq!(token["text"], "Tokenizer");
        assert_eq!(token["category"], "too_long");
        assert_eq!(token["length"], 9);
        assert!(json["sentences"][0].get("scale").is_none());
    }
}
