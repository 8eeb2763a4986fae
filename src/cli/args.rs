// src/cli/args.rs
use crate::render::SoftBreak;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tsdocgen",
    version,
    about = "Extract TSDoc method documentation from a TypeScript module as JSON"
)]
pub struct Cli {
    /// TypeScript module to document
    pub input: PathBuf,
    /// Where to write the JSON array of method records
    pub output: PathBuf,
    /// Only document members of this class
    pub class_name: Option<String>,
    /// Fail when a matched method has no documentation
    #[arg(long)]
    pub strict: bool,
    /// Levels of relative imports to scan for parameter shapes
    #[arg(long, value_name = "N")]
    pub import_depth: Option<usize>,
    /// How line breaks inside a paragraph are rendered
    #[arg(long, value_enum, value_name = "MODE")]
    pub soft_break: Option<SoftBreak>,
    /// Write single-line JSON
    #[arg(long)]
    pub compact: bool,
    /// Read settings from this file instead of ./tsdocgen.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Do not print diagnostics or the summary line
    #[arg(long, short)]
    pub quiet: bool,
}
