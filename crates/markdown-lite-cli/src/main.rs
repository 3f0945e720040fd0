mod render;

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use markdown_lite_config::{Config, OutputFormat};
use markdown_lite_engine::{parse_document, parse_or_literal};

/// Parse a markdown subset and print the resulting document.
#[derive(Debug, Parser)]
#[command(name = "markdown-lite", version, about)]
struct Cli {
    /// Markdown file to read; stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Output format: tree, json or html. Overrides the config file.
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Config file location.
    #[arg(long, env = "MARKDOWN_LITE_CONFIG")]
    config: Option<PathBuf>,

    /// Print nothing for input with no recognised blocks instead of echoing it.
    #[arg(long)]
    no_fallback: bool,

    /// Write a default config file and exit.
    #[arg(long)]
    init_config: bool,

    /// More log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(level_for(cli.verbose))
        .init();

    let config_override = match &cli.config {
        Some(path) => Some(
            Config::expand_path(path)
                .with_context(|| format!("Cannot expand config path '{}'", path.display()))?,
        ),
        None => None,
    };
    let config_path = config_override
        .clone()
        .unwrap_or_else(Config::config_path);

    if cli.init_config {
        let defaults = Config::default();
        let written = match &config_override {
            Some(path) => defaults.save_to_path(path),
            None => defaults.save(),
        };
        written.with_context(|| format!("Failed to write config to '{}'", config_path.display()))?;
        println!("Wrote default config to {}", config_path.display());
        return Ok(());
    }

    let loaded = match &config_override {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    let config = match loaded {
        Some(config) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        None => {
            log::debug!("No config at {}, using defaults", config_path.display());
            Config::default()
        }
    };

    let source = read_input(cli.input.as_ref())?;
    let format = cli.format.unwrap_or(config.format);
    let doc = if config.literal_fallback && !cli.no_fallback {
        parse_or_literal(&source)
    } else {
        parse_document(&source)
    };
    log::info!("Parsed {} blocks, writing {format}", doc.len());

    let out = render::render(&doc, format, config.pretty)?;
    io::stdout()
        .lock()
        .write_all(out.as_bytes())
        .context("Failed to write output")?;
    Ok(())
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn level_for(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}
