//! Tokenize command.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use upgoer_core::tokenize::{TokenKind, tokenize};

use super::read_input;

/// Arguments for the `tokenize` subcommand.
#[derive(Args, Debug)]
pub struct TokenizeArgs {
    /// File to tokenize (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Show the kind of each token.
    #[arg(long)]
    pub kinds: bool,
}

#[derive(Serialize)]
struct TokenEntry<'a> {
    text: &'a str,
    kind: TokenKind,
}

#[derive(Serialize)]
struct TokenizeReport<'a> {
    count: usize,
    tokens: Vec<TokenEntry<'a>>,
}

/// Print one token per line, or a JSON report.
#[instrument(name = "cmd_tokenize", skip_all, fields(file = %args.file))]
pub fn cmd_tokenize(
    args: TokenizeArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let content = read_input(&args.file, max_input_bytes)?;
    let tokens = tokenize(&content);
    debug!(count = tokens.len(), "executing tokenize command");

    if global_json {
        let report = TokenizeReport {
            count: tokens.len(),
            tokens: tokens
                .iter()
                .map(|t| TokenEntry {
                    text: t,
                    kind: TokenKind::of(t),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for token in tokens {
        if args.kinds {
            println!(
                "{token}\t{}",
                TokenKind::of(token).if_supports_color(owo_colors::Stream::Stdout, |k| k.dimmed())
            );
        } else {
            println!("{token}");
        }
    }
    Ok(())
}
