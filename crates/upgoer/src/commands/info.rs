//! Info command implementation

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};
use upgoer_core::classify::ClassifyThresholds;
use upgoer_core::config::{Config, ConfigSources};
use upgoer_core::scale::ScaleConfig;

use super::Engine;

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    approved_words: usize,
    extra_words: usize,
    word_files: Vec<String>,
    thresholds: ClassifyThresholds,
    scale: ScaleConfig,
}

impl ConfigInfo {
    fn new(config: &Config, sources: &ConfigSources, engine: &Engine) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            format: config.format.unwrap_or_default().to_string(),
            max_input_bytes: config.input_limit(),
            approved_words: engine.approved_word_count(),
            extra_words: config.extra_words.as_ref().map_or(0, Vec::len),
            word_files: config
                .word_files
                .iter()
                .flatten()
                .map(ToString::to_string)
                .collect(),
            thresholds: config.thresholds,
            scale: config.scale,
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information and the effective configuration.
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
    engine: &Engine,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::new(config, sources, engine),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let pkg = &full_info.package;
    println!("{} {}", pkg.name.bold(), pkg.version.green());
    if !pkg.description.is_empty() {
        println!("{}", pkg.description);
    }
    if !pkg.license.is_empty() {
        println!("{}: {}", "License".dimmed(), pkg.license);
    }

    let cfg = &full_info.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    if let Some(ref path) = cfg.config_file {
        println!("{}: {}", "Config file".dimmed(), path.cyan());
    } else {
        println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
    }
    println!("{}: {}", "Log level".dimmed(), cfg.log_level);
    if let Some(ref dir) = cfg.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }
    println!("{}: {}", "Output format".dimmed(), cfg.format);
    match cfg.max_input_bytes {
        Some(limit) => println!("{}: {limit} bytes", "Input limit".dimmed()),
        None => println!("{}: {}", "Input limit".dimmed(), "disabled".yellow()),
    }

    println!();
    println!("{}", "Words".bold().underline());
    println!("{}: {}", "Approved words".dimmed(), cfg.approved_words);
    println!("{}: {}", "Extra words".dimmed(), cfg.extra_words);
    if !cfg.word_files.is_empty() {
        println!("{}: {}", "Word files".dimmed(), cfg.word_files.join(", "));
    }
    println!(
        "{}: under {} letters short, under {} medium",
        "Thresholds".dimmed(),
        cfg.thresholds.short_below,
        cfg.thresholds.long_below
    );

    println!();
    println!("{}", "Sentences".bold().underline());
    println!(
        "{}: {:.1} words full size, shrinking over {:.1} more",
        "Shrinking".dimmed(),
        cfg.scale.max_ok_words,
        cfg.scale.max_extra_words
    );
    println!(
        "{}: {:.0}% to {:.0}%",
        "Size range".dimmed(),
        cfg.scale.min_percent,
        100.0
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_info_text_succeeds() {
        let config = Config::default();
        let result = cmd_info(
            InfoArgs::default(),
            false,
            &config,
            &ConfigSources::default(),
            &Engine::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_cmd_info_json_via_global() {
        let config = Config::default();
        let result = cmd_info(
            InfoArgs::default(),
            true,
            &config,
            &ConfigSources::default(),
            &Engine::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_config_info_defaults() {
        let config = Config::default();
        let info = ConfigInfo::new(&config, &ConfigSources::default(), &Engine::default());
        assert!(info.config_file.is_none());
        assert_eq!(info.log_level, "info");
        assert_eq!(info.format, "terminal");
        assert_eq!(info.extra_words, 0);
        assert!(info.approved_words > 900);
        assert_eq!(info.max_input_bytes, Some(upgoer_core::DEFAULT_MAX_INPUT_BYTES));
    }

    #[test]
    fn test_config_info_counts_extra_words() {
        let config = Config {
            extra_words: Some(vec!["frobnicate".into(), "yak".into()]),
            ..Config::default()
        };
        let engine = Engine::from_config(&config, camino::Utf8Path::new(".")).unwrap();
        let info = ConfigInfo::new(&config, &ConfigSources::default(), &engine);
        assert_eq!(info.extra_words, 2);
        assert_eq!(
            info.approved_words,
            Engine::default().approved_word_count() + 2
        );
    }
}
