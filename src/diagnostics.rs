// src/diagnostics.rs
//! Recoverable problems found during an extraction run.
//!
//! Nothing recorded here aborts the run; each entry marks a place where the
//! output is degraded (an import that was skipped, a type shown as `unknown`).

use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub path: PathBuf,
    pub line: Option<usize>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{line}: {}", self.path.display(), self.message),
            None => write!(f, "{}: {}", self.path.display(), self.message),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, path: &Path, line: Option<usize>, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(path = %path.display(), ?line, "{message}");
        self.push(Severity::Warning, path, line, message);
    }

    pub fn info(&mut self, path: &Path, line: Option<usize>, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(path = %path.display(), ?line, "{message}");
        self.push(Severity::Info, path, line, message);
    }

    fn push(&mut self, severity: Severity, path: &Path, line: Option<usize>, message: String) {
        self.entries.push(Diagnostic {
            severity,
            message,
            path: path.to_path_buf(),
            line,
        });
    }

    #[must_use]
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn warnings(&self) -> usize {
        self.entries
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }
}
