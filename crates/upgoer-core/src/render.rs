//! Rendering pipeline.
//!
//! Text flows through [`tokenize`](crate::tokenize::tokenize), then
//! [`group_sentences`](crate::sentence::group_sentences). Each token becomes a
//! labeled unit, each sentence a group scaled by its length, and the sentences
//! are collected into one document group.
//!
//! The pipeline never touches a concrete output technology. It drives a
//! [`RenderSurface`], which decides what a unit or a group actually is:
//! HTML markup, a serializable tree, colored terminal text.

use crate::classify::Classifier;
use crate::document::{Document, Sentence, StyledToken};
use crate::scale::ScaleConfig;
use crate::sentence::group_sentences;
use crate::tokenize::tokenize;

/// Something the renderer can build output on.
pub trait RenderSurface {
    /// A rendered unit or group.
    type Node;

    /// Create a unit holding `text`, labeled with a category label.
    fn labeled_unit(&mut self, text: &str, label: &str) -> Self::Node;

    /// Create a group holding `children` in order.
    fn group(&mut self, children: Vec<Self::Node>) -> Self::Node;

    /// Draw `node` at `percent` of its normal size.
    fn set_scale(&mut self, node: &mut Self::Node, percent: f64);
}

/// Turns text into styled output on a [`RenderSurface`].
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'w> {
    classifier: Classifier<'w>,
    scale: ScaleConfig,
}

impl Default for Renderer<'static> {
    fn default() -> Self {
        Self::new(Classifier::default())
    }
}

impl<'w> Renderer<'w> {
    /// Create a renderer with the default size curve.
    pub fn new(classifier: Classifier<'w>) -> Self {
        Self {
            classifier,
            scale: ScaleConfig::default(),
        }
    }

    /// Replace the sentence size curve.
    pub const fn with_scale(mut self, scale: ScaleConfig) -> Self {
        self.scale = scale;
        self
    }

    /// The classifier used for tokens.
    pub const fn classifier(&self) -> &Classifier<'w> {
        &self.classifier
    }

    /// Render one token as a labeled unit.
    pub fn render_token<S: RenderSurface>(&self, surface: &mut S, token: &str) -> S::Node {
        let category = self.classifier.classify(token);
        surface.labeled_unit(token, &category.label())
    }

    /// Render a sentence's units as a group, shrinking long sentences.
    pub fn render_sentence<S: RenderSurface>(&self, surface: &mut S, units: Vec<S::Node>) -> S::Node {
        let percent = self.scale.percent_for(units.len());
        let mut group = surface.group(units);
        if let Some(percent) = percent {
            surface.set_scale(&mut group, percent);
        }
        group
    }

    /// Collect sentence groups, in order, into one document group.
    pub fn render_document<S: RenderSurface>(&self, surface: &mut S, groups: Vec<S::Node>) -> S::Node {
        surface.group(groups)
    }

    /// Run the whole pipeline on `text`.
    ///
    /// Empty input, or input with no tokens, renders as an empty group.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn render<S: RenderSurface>(&self, surface: &mut S, text: &str) -> S::Node {
        let tokens = tokenize(text);
        let groups: Vec<S::Node> = group_sentences(&tokens)
            .into_iter()
            .map(|sentence| {
                let units = sentence
                    .into_iter()
                    .map(|token| self.render_token(surface, token))
                    .collect();
                self.render_sentence(surface, units)
            })
            .collect();
        tracing::debug!(tokens = tokens.len(), sentences = groups.len(), "rendered text");
        self.render_document(surface, groups)
    }

    /// Run the pipeline on `text` and keep the result as an owned [`Document`].
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn document(&self, text: &str) -> Document {
        let tokens = tokenize(text);
        let sentences = group_sentences(&tokens)
            .into_iter()
            .map(|sentence| Sentence {
                scale: self.scale.percent_for(sentence.len()),
                tokens: sentence
                    .into_iter()
                    .map(|token| StyledToken {
                        text: token.to_string(),
                        category: self.classifier.classify(token),
                    })
                    .collect(),
            })
            .collect();
        Document { sentences }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::tree::{RenderNode, TreeSurface};

    fn render(text: &str) -> RenderNode {
        Renderer::default().render(&mut TreeSurface, text)
    }

    fn children(node: &RenderNode) -> &[RenderNode] {
        match node {
            RenderNode::Group { children, .. } => children,
            RenderNode::Unit { .. } => panic!("expected a group"),
        }
    }

    #[test]
    fn empty_input_is_empty_group() {
        assert_eq!(
            render(""),
            RenderNode::Group {
                scale: None,
                children: Vec::new()
            }
        );
        assert!(children(&render("  \u{2014} ")).is_empty());
    }

    #[test]
    fn tokens_become_labeled_units() {
        let doc = render("Hi there.");
        let sentences = children(&doc);
        assert_eq!(sentences.len(), 1);
        let units = children(&sentences[0]);
        assert_eq!(
            units,
            &[
                RenderNode::unit("Hi", "probablyOk"),
                RenderNode::unit("there", "preApproved"),
                RenderNode::unit(".", "preApproved"),
            ]
        );
    }

    #[test]
    fn every_token_maps_to_one_unit_in_order() {
        let text = "The quick-witted fox's den... Extraordinary! Why?";
        let doc = render(text);
        let rendered: Vec<&str> = children(&doc)
            .iter()
            .flat_map(|s| children(s).iter())
            .map(|u| match u {
                RenderNode::Unit { text, .. } => text.as_str(),
                RenderNode::Group { .. } => panic!("nested group"),
            })
            .collect();
        assert_eq!(rendered, tokenize(text));
    }

    #[test]
    fn long_sentences_are_scaled() {
        let long = "one two three four five six seven eight nine ten eleven twelve.";
        let doc = render(long);
        match &children(&doc)[0] {
            RenderNode::Group { scale, children } => {
                assert_eq!(children.len(), 13);
                assert_eq!(*scale, None);
            }
            RenderNode::Unit { .. } => panic!("expected a group"),
        }

        let longer = "one two three four five six seven eight nine ten eleven twelve \
                      thirteen fourteen fifteen sixteen seventeen eighteen nineteen.";
        let doc = render(longer);
        match &children(&doc)[0] {
            RenderNode::Group { scale, .. } => {
                // 20 tokens → 10 words → 3 over the limit
                let scale = scale.expect("scaled");
                assert!((scale - 76.0).abs() < 1e-9);
            }
            RenderNode::Unit { .. } => panic!("expected a group"),
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        let text = "It's a well-known fact... Nobody reads long, winding, complicated sentences!";
        assert_eq!(render(text), render(text));
    }

    #[test]
    fn document_matches_rendered_tree() {
        let text = "Hi there. Bye!";
        let document = Renderer::default().document(text);
        assert_eq!(document.sentences.len(), 2);
        assert_eq!(document.render_to(&mut TreeSurface), render(text));
    }
}
