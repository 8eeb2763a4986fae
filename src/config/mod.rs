// src/config/mod.rs
pub mod types;

pub use self::types::Config;

use crate::error::{DocgenError, Result};
use crate::extract::{DocPolicy, ExtractOptions};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "tsdocgen.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `tsdocgen.toml` from the working directory, falling back to
    /// defaults when the file is absent.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::new())
        }
    }

    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| DocgenError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        Self::parse_toml(&content)
            .map_err(|e| DocgenError::Other(format!("{}: {e}", path.display())))
    }

    /// # Errors
    /// Returns error if `content` is not valid TOML for this schema.
    pub fn parse_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| DocgenError::Other(format!("Invalid config: {e}")))
    }

    /// Extraction options for one run, optionally filtered to a class.
    #[must_use]
    pub fn to_options(&self, class_name: Option<String>) -> ExtractOptions {
        ExtractOptions {
            class_name,
            policy: if self.strict {
                DocPolicy::Strict
            } else {
                DocPolicy::Tolerant
            },
            import_depth: self.import_depth,
            source_extension: self.source_extension.clone(),
            soft_break: self.soft_break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::SoftBreak;
    use std::fs;

    #[test]
    fn test_defaults() {
        let c = Config::new();
        assert!(!c.strict);
        assert_eq!(c.import_depth, 1);
        assert_eq!(c.source_extension, "ts");
        assert_eq!(c.soft_break, SoftBreak::Space);
        assert!(c.pretty);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let c = Config::parse_toml("strict = true\nsoft_break = \"newline\"").unwrap();
        assert!(c.strict);
        assert_eq!(c.soft_break, SoftBreak::Newline);
        assert_eq!(c.import_depth, 1);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::parse_toml("import_depth = \"deep\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let d = tempfile::tempdir().unwrap();
        let path = d.path().join(CONFIG_FILE);
        fs::write(&path, "import_depth = 3\nsource_extension = \"tsx\"").unwrap();
        let c = Config::load_from(&path).unwrap();
        assert_eq!(c.import_depth, 3);
        assert_eq!(c.source_extension, "tsx");
    }

    #[test]
    fn test_to_options() {
        let c = Config {
            strict: true,
            ..Config::new()
        };
        let opts = c.to_options(Some("Foo".to_string()));
        assert_eq!(opts.policy, DocPolicy::Strict);
        assert_eq!(opts.class_name.as_deref(), Some("Foo"));
    }
}
