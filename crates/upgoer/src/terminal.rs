//! Terminal rendering surface.
//!
//! A terminal cannot change font size, so scaled sentences get a dimmed
//! `[N%]` marker instead. Words are colored by category: approved words stay
//! plain, short words are cyan, medium words yellow (bold from 8 characters),
//! and very long words red. Each sentence goes on its own line.

use owo_colors::{OwoColorize, Stream, Style};
use upgoer_core::RenderSurface;
use upgoer_core::surface::format_percent;

/// A piece of terminal output.
#[derive(Debug, Clone, Default)]
pub struct TerminalNode {
    text: String,
    scale: Option<f64>,
    is_group: bool,
}

impl TerminalNode {
    /// Final text of this node, including any scale marker.
    pub fn into_text(self) -> String {
        match self.scale {
            Some(percent) => {
                let marker = format!("[{}]", format_percent(percent));
                format!(
                    "{} {}",
                    self.text,
                    marker.if_supports_color(Stream::Stdout, |m| m.dimmed())
                )
            }
            None => self.text,
        }
    }
}

/// Builds colored terminal text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalSurface;

impl RenderSurface for TerminalSurface {
    type Node = TerminalNode;

    fn labeled_unit(&mut self, text: &str, label: &str) -> TerminalNode {
        let style = style_for(label);
        TerminalNode {
            text: text
                .if_supports_color(Stream::Stdout, |t| t.style(style))
                .to_string(),
            scale: None,
            is_group: false,
        }
    }

    fn group(&mut self, children: Vec<TerminalNode>) -> TerminalNode {
        // Units are joined into a line; groups of groups into lines.
        let separator = if children.iter().any(|c| c.is_group) {
            "\n"
        } else {
            " "
        };
        let text = children
            .into_iter()
            .map(TerminalNode::into_text)
            .collect::<Vec<_>>()
            .join(separator);
        TerminalNode {
            text,
            scale: None,
            is_group: true,
        }
    }

    fn set_scale(&mut self, node: &mut TerminalNode, percent: f64) {
        node.scale = Some(percent);
    }
}

/// Style for a category label.
fn style_for(label: &str) -> Style {
    match label {
        "preApproved" => Style::new(),
        "probablyOk" => Style::new().cyan(),
        "wtf" => Style::new().red().bold(),
        other => match other.strip_prefix("toolong").and_then(|n| n.parse::<usize>().ok()) {
            Some(n) if n >= 8 => Style::new().yellow().bold(),
            Some(_) => Style::new().yellow(),
            None => Style::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use upgoer_core::Renderer;

    fn plain(text: &str) -> String {
        owo_colors::set_override(false);
        Renderer::default()
            .render(&mut TerminalSurface, text)
            .into_text()
    }

    #[test]
    fn sentences_go_on_separate_lines() {
        assert_eq!(plain("Hi there. Bye!"), "Hi there .\nBye !");
    }

    #[test]
    fn empty_input_is_empty_text() {
        assert_eq!(plain(""), "");
    }

    #[test]
    fn scaled_sentences_get_marker() {
        let text = "word ".repeat(19) + ".";
        assert!(plain(&text).ends_with(". [76%]"));
    }

    #[test]
    fn single_sentence_is_one_line() {
        assert_eq!(plain("no terminator here"), "no terminator here");
    }
}
