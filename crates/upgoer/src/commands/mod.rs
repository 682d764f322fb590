//! Command implementations.

use std::io::{BufRead, Read};

use anyhow::Context;
use camino::Utf8Path;
use upgoer_core::config::Config;
use upgoer_core::error::check_input_size;
use upgoer_core::{ApprovedWords, Classifier, Renderer};

pub mod classify;
pub mod info;
pub mod live;
pub mod render;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod tokenize;

/// Everything the pipeline needs, built once from configuration.
#[derive(Debug, Clone)]
pub struct Engine {
    words: ApprovedWords,
    config: Config,
}

impl Engine {
    /// Build the approved-word set from `config`.
    ///
    /// Word files not anchored to a config file resolve against `base_dir`.
    pub fn from_config(config: &Config, base_dir: &Utf8Path) -> anyhow::Result<Self> {
        let words = config
            .approved_words(base_dir)
            .context("failed to load approved words")?;
        Ok(Self {
            words,
            config: config.clone(),
        })
    }

    /// A renderer using the configured words, thresholds, and size curve.
    pub fn renderer(&self) -> Renderer<'_> {
        let classifier = Classifier::new(&self.words).with_thresholds(self.config.thresholds);
        Renderer::new(classifier).with_scale(self.config.scale)
    }

    /// Size of the approved-word set, extras included.
    pub fn approved_word_count(&self) -> usize {
        self.words.len()
    }

    /// The loaded configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            words: ApprovedWords::builtin().clone(),
            config: Config::default(),
        }
    }
}

/// Read a file (or stdin for `-`) and validate its size against the configured limit.
pub fn read_input(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == "-" {
        return read_bounded(std::io::stdin().lock(), max_bytes);
    }

    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
    check_input_size(size, max_bytes).with_context(|| format!("{path} rejected"))?;

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

/// Read `reader` to the end, stopping one byte past `max_bytes`.
fn read_bounded<R: Read>(reader: R, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut bytes = Vec::new();
    reader
        .take(read_cap(max_bytes, 1))
        .read_to_end(&mut bytes)
        .context("failed to read stdin")?;
    check_input_size(bytes.len(), max_bytes).context("stdin rejected")?;
    String::from_utf8(bytes).context("stdin is not valid UTF-8")
}

/// Read one line into `buf` without its line ending, consuming at most
/// `max_bytes` plus the terminator. Returns `false` at end of input.
pub fn read_line_bounded<R: BufRead>(
    reader: &mut R,
    buf: &mut String,
    max_bytes: Option<usize>,
) -> anyhow::Result<bool> {
    let mut bytes = Vec::new();
    let n = reader
        .take(read_cap(max_bytes, 2))
        .read_until(b'\n', &mut bytes)
        .context("failed to read stdin")?;
    if n == 0 {
        return Ok(false);
    }
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
    }
    check_input_size(bytes.len(), max_bytes).context("input line rejected")?;
    *buf = String::from_utf8(bytes).context("input line is not valid UTF-8")?;
    Ok(true)
}

fn read_cap(max_bytes: Option<usize>, slack: u64) -> u64 {
    max_bytes.map_or(u64::MAX, |max| {
        u64::try_from(max).unwrap_or(u64::MAX).saturating_add(slack)
    })
}
