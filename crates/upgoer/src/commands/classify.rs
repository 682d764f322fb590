//! Classify command: show the category of each word.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use upgoer_core::classify::Category;

use super::Engine;

/// Arguments for the `classify` subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Words to classify.
    #[arg(required = true)]
    pub words: Vec<String>,
}

#[derive(Serialize)]
struct Classified<'a> {
    word: &'a str,
    #[serde(flatten)]
    category: Category,
    label: String,
}

/// Print each word with its category label.
#[instrument(name = "cmd_classify", skip_all, fields(count = args.words.len()))]
pub fn cmd_classify(args: ClassifyArgs, global_json: bool, engine: &Engine) -> anyhow::Result<()> {
    let renderer = engine.renderer();
    let classifier = renderer.classifier();
    let results: Vec<Classified<'_>> = args
        .words
        .iter()
        .map(|word| {
            let category = classifier.classify(word);
            Classified {
                word,
                category,
                label: category.label().into_owned(),
            }
        })
        .collect();
    debug!(count = results.len(), "executing classify command");

    if global_json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let width = results.iter().map(|r| r.word.len()).max().unwrap_or(0);
    for r in &results {
        println!(
            "{:<width$}  {}",
            r.word,
            r.label.if_supports_color(owo_colors::Stream::Stdout, |l| l.cyan())
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_text_succeeds() {
        let args = ClassifyArgs {
            words: vec!["hello".into(), "extraordinary".into()],
        };
        assert!(cmd_classify(args, false, &Engine::default()).is_ok());
    }

    #[test]
    fn classified_entry_serializes_flat() {
        let entry = Classified {
            word: "amazing",
            category: Category::TooLong(7),
            label: "toolong7".into(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["word"], "amazing");
        assert_eq!(json["category"], "too_long");
        assert_eq!(json["length"], 7);
        assert_eq!(json["label"], "toolong7");
    }
}
