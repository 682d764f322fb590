//! A surface that builds a plain node tree.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::render::RenderSurface;

/// A node of the rendered tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderNode {
    /// A token.
    Unit {
        /// Token text.
        text: String,
        /// Category label.
        label: String,
    },
    /// A sentence or the whole document.
    Group {
        /// Font size in percent, when scaled.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        scale: Option<f64>,
        /// Child nodes in order.
        children: Vec<RenderNode>,
    },
}

impl RenderNode {
    /// Shorthand for a [`RenderNode::Unit`].
    pub fn unit(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Unit {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// Builds [`RenderNode`] trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeSurface;

impl RenderSurface for TreeSurface {
    type Node = RenderNode;

    fn labeled_unit(&mut self, text: &str, label: &str) -> RenderNode {
        RenderNode::unit(text, label)
    }

    fn group(&mut self, children: Vec<RenderNode>) -> RenderNode {
        RenderNode::Group {
            scale: None,
            children,
        }
    }

    fn set_scale(&mut self, node: &mut RenderNode, percent: f64) {
        if let RenderNode::Group { scale, .. } = node {
            *scale = Some(percent);
        }
    }
}
