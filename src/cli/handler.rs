// src/cli/handler.rs
use super::args::Cli;
use crate::config::Config;
use crate::diagnostics::{Diagnostics, Severity};
use crate::exit::DocgenExit;
use crate::extract;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;

/// Runs one extraction and writes the records to `cli.output`.
///
/// A missing input is reported and mapped to [`DocgenExit::Error`] rather
/// than returned as an error.
///
/// # Errors
/// Returns error if the config is invalid, extraction fails, or the output
/// cannot be written.
pub fn handle_generate(cli: &Cli) -> Result<DocgenExit> {
    if !cli.input.is_file() {
        eprintln!("File {} does not exist", cli.input.display());
        return Ok(DocgenExit::Error);
    }

    let config = resolve_config(cli)?;
    let options = config.to_options(cli.class_name.clone());
    let extraction = extract::extract_file(&cli.input, &options)
        .with_context(|| format!("Failed to extract {}", cli.input.display()))?;

    if !cli.quiet {
        print_diagnostics(&extraction.diagnostics);
    }

    let json = if config.pretty {
        serde_json::to_string_pretty(&extraction.records)?
    } else {
        serde_json::to_string(&extraction.records)?
    };
    fs::write(&cli.output, json)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    if !cli.quiet {
        println!(
            "{} {} method(s) -> {}",
            "✓".green(),
            extraction.records.len(),
            cli.output.display()
        );
    }
    Ok(DocgenExit::Success)
}

/// Config file settings with command-line flags layered on top.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if cli.strict {
        config.strict = true;
    }
    if let Some(depth) = cli.import_depth {
        config.import_depth = depth;
    }
    if let Some(mode) = cli.soft_break {
        config.soft_break = mode;
    }
    if cli.compact {
        config.pretty = false;
    }
    Ok(config)
}

fn print_diagnostics(diagnostics: &Diagnostics) {
    for diag in diagnostics.entries() {
        let label = match diag.severity {
            Severity::Warning => "[WARN]".yellow().bold(),
            Severity::Info => "[INFO]".cyan().bold(),
        };
        eprintln!("{label} {diag}");
    }
}
