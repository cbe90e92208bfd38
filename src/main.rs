//! Autocomplete - Main entrypoint.
//!
//! Loads a vocabulary file into the prefix index and prints the words that
//! complete a prefix.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::Context;
use autocomplete_lib::config::{self, AutocompleteConfig, ConfigLoader, LogConfig};
use autocomplete_lib::error::{
    report_error, set_error_reporter, AutocompleteError, ErrorContext, TracingErrorReporter,
};
use autocomplete_lib::loader::WordsLoader;
use autocomplete_lib::prefix_index::PrefixIndex;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the autocomplete tool.
#[derive(Parser, Debug)]
#[clap(name = "autocomplete", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Load the vocabulary and print the words completing a prefix
    Query {
        /// Prefix to complete (defaults to query.prefix)
        #[clap(short, long)]
        prefix: Option<String>,

        /// Maximum word length above the minimum word size (defaults to query.depth)
        #[clap(short, long, allow_hyphen_values = true)]
        depth: Option<i64>,

        /// Vocabulary file (defaults to source.path)
        #[clap(short, long, value_parser)]
        words: Option<PathBuf>,

        /// Print the matches as a JSON array
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };
    result.context("Failed to set global tracing subscriber")
}

/// Builds the index from the vocabulary file and prints the matches.
fn run_query(
    config: &AutocompleteConfig,
    prefix: Option<String>,
    depth: Option<i64>,
    words: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let path = words.unwrap_or_else(|| config.source.path.clone());
    let prefix = prefix.unwrap_or_else(|| config.query.prefix.clone());
    let depth = depth.unwrap_or(config.query.depth);

    let words = match WordsLoader::new().load_from_file(&path) {
        Ok(words) => words,
        Err(e) => {
            report_error(
                ErrorContext::new(e, "loader").with_details(format!("path: {}", path.display())),
            );
            process::exit(1);
        }
    };

    let mut index = PrefixIndex::new();
    let added = index.add(&words);
    info!(added, size = index.size(), "Index built");
    println!("{}", index.size());

    info!(%prefix, depth, "Querying index");
    let matches = index
        .words_with_prefix_depth(&prefix, depth)
        .map_err(AutocompleteError::from)
        .with_context(|| format!("Invalid query for prefix '{prefix}'"))?;

    if json {
        let matches: Vec<String> = matches.collect();
        let rendered = serde_json::to_string_pretty(&matches).map_err(AutocompleteError::from)?;
        println!("{rendered}");
    } else {
        for word in matches {
            println!("{word}");
        }
    }
    Ok(())
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let args = <Args as clap::Parser>::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);

    match args.command.unwrap_or(Command::Query {
        prefix: None,
        depth: None,
        words: None,
        json: false,
    }) {
        Command::Query {
            prefix,
            depth,
            words,
            json,
        } => {
            let config = config_loader.load().context("Failed to load configuration")?;

            init_logging(&config.log)?;
            set_error_reporter(Arc::new(TracingErrorReporter));

            run_query(&config, prefix, depth, words, json)
        }
        Command::Validate => {
            let config = config_loader.load().context("Configuration validation error")?;
            init_logging(&config.log)?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            let default_config = AutocompleteConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .context("Failed to serialize config")?;
            std::fs::write(&output, toml)
                .with_context(|| format!("Failed to write {}", output.display()))?;

            println!("Default configuration written to {}", output.display());
            Ok(())
        }
    }
}
