//! HTML surface.
//!
//! Tokens become `<span class="LABEL">text</span>`, groups become bare
//! `<span>` wrappers, and scaled groups carry `style="font-size:N%"`.
//! A group's children are separated by a single space so words stay apart
//! in a browser without any stylesheet.

use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::render::RenderSurface;

use super::format_percent;

/// A rendered HTML fragment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HtmlNode {
    class: Option<String>,
    scale: Option<f64>,
    body: String,
}

impl HtmlNode {
    /// Write this node's markup to `out`.
    pub fn write_markup(&self, out: &mut String) {
        out.push_str("<span");
        if let Some(ref class) = self.class {
            let _ = write!(out, " class=\"{}\"", encode_double_quoted_attribute(class));
        }
        if let Some(percent) = self.scale {
            let _ = write!(out, " style=\"font-size:{}\"", format_percent(percent));
        }
        out.push('>');
        out.push_str(&self.body);
        out.push_str("</span>");
    }

    /// This node's markup as a string.
    pub fn into_markup(self) -> String {
        let mut out = String::with_capacity(self.body.len() + 32);
        self.write_markup(&mut out);
        out
    }
}

/// Builds [`HtmlNode`] fragments.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSurface;

impl RenderSurface for HtmlSurface {
    type Node = HtmlNode;

    fn labeled_unit(&mut self, text: &str, label: &str) -> HtmlNode {
        HtmlNode {
            class: Some(label.to_string()),
            scale: None,
            body: encode_text(text).into_owned(),
        }
    }

    fn group(&mut self, children: Vec<HtmlNode>) -> HtmlNode {
        let mut body = String::new();
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                body.push(' ');
            }
            child.write_markup(&mut body);
        }
        HtmlNode {
            class: None,
            scale: None,
            body,
        }
    }

    fn set_scale(&mut self, node: &mut HtmlNode, percent: f64) {
        node.scale = Some(percent);
    }
}

const STYLESHEET: &str = "\
body { font-family: Georgia, serif; font-size: 20px; line-height: 1.6; max-width: 48em; margin: 2em auto; }
.preApproved { color: #222; }
.probablyOk { color: #555; }
.toolong6 { background: #fff3c4; }
.toolong7 { background: #ffe08a; }
.toolong8 { background: #ffc46b; }
.toolong9 { background: #ffa15c; }
.wtf { background: #ff6b6b; color: #fff; }
";

/// Wrap rendered markup in a complete HTML page with a stylesheet.
pub fn standalone_page(body: &str, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>\n{STYLESHEET}</style>\n</head>\n<body>\n\
         <div id=\"words\">{body}</div>\n</body>\n</html>\n",
        encode_double_quoted_attribute(title)
    )
}
