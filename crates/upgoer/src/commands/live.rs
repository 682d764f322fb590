//! Live command: re-render on every input line.
//!
//! Each line read from stdin is the full new value of the text. The pipeline
//! runs from scratch and its output replaces the previous rendering.

use std::io::{BufRead, IsTerminal, Write};

use clap::Args;
use tracing::{debug, instrument};

use upgoer_core::render::Renderer;
use upgoer_core::surface::tree::TreeSurface;

use super::{Engine, read_line_bounded};
use crate::terminal::TerminalSurface;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Arguments for the `live` subcommand.
#[derive(Args, Debug, Default)]
pub struct LiveArgs {
    /// Clear the screen before each rendering even when stdout is not a terminal.
    #[arg(long, conflicts_with = "no_clear")]
    pub clear: bool,

    /// Never clear the screen; print renderings one after another.
    #[arg(long)]
    pub no_clear: bool,
}

impl LiveArgs {
    /// Whether to clear before each rendering. Terminals clear by default.
    const fn should_clear(&self, stdout_is_terminal: bool) -> bool {
        self.clear || (!self.no_clear && stdout_is_terminal)
    }
}

/// Render each stdin line as it arrives.
#[instrument(name = "cmd_live", skip_all)]
pub fn cmd_live(
    args: LiveArgs,
    global_json: bool,
    engine: &Engine,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let clear = args.should_clear(std::io::stdout().is_terminal());
    debug!(clear, "executing live command");
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let renders = run_live(
        stdin,
        stdout,
        &engine.renderer(),
        clear,
        global_json,
        max_input_bytes,
    )?;
    debug!(renders, "live input closed");
    Ok(())
}

/// Drive the live loop over any reader and writer. Returns the number of renderings.
fn run_live<R: BufRead, W: Write>(
    mut reader: R,
    mut out: W,
    renderer: &Renderer<'_>,
    clear: bool,
    json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<usize> {
    let mut renders = 0;
    let mut line = String::new();
    while read_line_bounded(&mut reader, &mut line, max_input_bytes)? {
        if clear {
            write!(out, "{CLEAR_SCREEN}")?;
        }
        if json {
            let tree = renderer.render(&mut TreeSurface, &line);
            writeln!(out, "{}", serde_json::to_string(&tree)?)?;
        } else {
            let text = renderer.render(&mut TerminalSurface, &line).into_text();
            writeln!(out, "{text}")?;
        }
        out.flush()?;
        renders += 1;
    }
    Ok(renders)
}
