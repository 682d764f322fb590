//! Render command: style words and shrink long sentences.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use upgoer_core::config::OutputFormat;
use upgoer_core::document::{Document, DocumentSummary};
use upgoer_core::markdown;
use upgoer_core::surface::html::{self, HtmlSurface};
use upgoer_core::surface::tree::{RenderNode, TreeSurface};

use super::{Engine, read_input};
use crate::terminal::TerminalSurface;

/// Arguments for the `render` subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// File to render (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Output format (defaults to the configured format, then terminal).
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Wrap HTML output in a complete page with a stylesheet.
    #[arg(long)]
    pub standalone: bool,

    /// Strip markdown before rendering (default for `.md` files).
    #[arg(long, conflicts_with = "no_markdown")]
    pub markdown: bool,

    /// Render markdown source as-is.
    #[arg(long)]
    pub no_markdown: bool,

    /// Print token and sentence counts after the output.
    #[arg(long)]
    pub summary: bool,
}

impl RenderArgs {
    fn strip_markdown(&self) -> bool {
        if self.markdown {
            true
        } else if self.no_markdown {
            false
        } else {
            self.file.extension() == Some("md")
        }
    }
}

/// JSON output of the `render` command.
#[derive(Serialize)]
struct RenderReport {
    tree: RenderNode,
    summary: DocumentSummary,
}

/// Render a file to the terminal, HTML, or JSON.
#[instrument(name = "cmd_render", skip_all, fields(file = %args.file))]
pub fn cmd_render(
    args: RenderArgs,
    global_json: bool,
    engine: &Engine,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let format = if global_json {
        OutputFormat::Json
    } else {
        args.format
            .or(engine.config().format)
            .unwrap_or_default()
    };
    let strip_md = args.strip_markdown();
    debug!(%format, strip_md, "executing render command");

    let content = read_input(&args.file, max_input_bytes)?;
    let prose = if strip_md {
        markdown::strip_to_prose(&content)
    } else {
        content
    };

    let document = engine.renderer().document(&prose);
    debug!(sentences = document.sentences.len(), "document built");

    match format {
        OutputFormat::Json => {
            let report = RenderReport {
                tree: document.render_to(&mut TreeSurface),
                summary: document.summary(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Html => {
            let markup = document.render_to(&mut HtmlSurface).into_markup();
            if args.standalone {
                print!("{}", html::standalone_page(&markup, args.file.as_str()));
            } else {
                println!("{markup}");
            }
            if args.summary {
                println!("<!-- {} -->", summary_line(&document.summary()));
            }
        }
        OutputFormat::Terminal => {
            let text = document.render_to(&mut TerminalSurface).into_text();
            if !text.is_empty() {
                println!("{text}");
            }
            if args.summary {
                print_summary(&document);
            }
        }
    }

    Ok(())
}

fn summary_line(summary: &DocumentSummary) -> String {
    format!(
        "{} sentences, {} tokens: {} approved, {} short, {} long, {} very long; {} shrunk",
        summary.sentences,
        summary.tokens,
        summary.pre_approved,
        summary.probably_ok,
        summary.too_long,
        summary.wtf,
        summary.shrunk_sentences,
    )
}

fn print_summary(document: &Document) {
    println!();
    println!(
        "{}",
        summary_line(&document.summary()).if_supports_color(owo_colors::Stream::Stdout, |s| s
            .dimmed())
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(file: &str) -> RenderArgs {
        RenderArgs {
            file: Utf8PathBuf::from(file),
            format: None,
            standalone: false,
            markdown: false,
            no_markdown: false,
            summary: false,
        }
    }

    #[test]
    fn markdown_default_follows_extension() {
        assert!(args("notes.md").strip_markdown());
        assert!(!args("notes.txt").strip_markdown());
        assert!(!args("-").strip_markdown());
    }

    #[test]
    fn markdown_flags_override_extension() {
        let mut forced = args("notes.txt");
        forced.markdown = true;
        assert!(forced.strip_markdown());

        let mut raw = args("notes.md");
        raw.no_markdown = true;
        assert!(!raw.strip_markdown());
    }

    #[test]
    fn summary_line_reads_naturally() {
        let summary = DocumentSummary {
            sentences: 2,
            tokens: 7,
            pre_approved: 5,
            probably_ok: 0,
            too_long: 1,
            wtf: 1,
            shrunk_sentences: 0,
        };
        assert_eq!(
            summary_line(&summary),
            "2 sentences, 7 tokens: 5 approved, 0 short, 1 long, 1 very long; 0 shrunk"
        );
    }
}
