// src/config/types.rs
use crate::imports::{DEFAULT_IMPORT_DEPTH, DEFAULT_SOURCE_EXTENSION};
use crate::render::SoftBreak;
use serde::{Deserialize, Serialize};

/// Settings read from `tsdocgen.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Fail on matched declarations without documentation.
    #[serde(default)]
    pub strict: bool,
    /// How many levels of relative imports to scan for shapes.
    #[serde(default = "default_import_depth")]
    pub import_depth: usize,
    /// Extension appended to relative import specifiers.
    #[serde(default = "default_source_extension")]
    pub source_extension: String,
    #[serde(default)]
    pub soft_break: SoftBreak,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict: false,
            import_depth: default_import_depth(),
            source_extension: default_source_extension(),
            soft_break: SoftBreak::default(),
            pretty: default_pretty(),
        }
    }
}

fn default_import_depth() -> usize { DEFAULT_IMPORT_DEPTH }
fn default_source_extension() -> String { DEFAULT_SOURCE_EXTENSION.to_string() }
fn default_pretty() -> bool { true }
