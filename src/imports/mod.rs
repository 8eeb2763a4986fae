// src/imports/mod.rs
//! Local import closure of a module.
//!
//! Only relative imports are followed. The walk is bounded by an explicit
//! depth; the default of one loads the direct imports and never looks at
//! what those files import in turn.

pub mod extract;
pub mod resolver;

use crate::diagnostics::Diagnostics;
use crate::unit::SourceUnit;
use std::collections::HashSet;
use std::path::PathBuf;

pub const DEFAULT_IMPORT_DEPTH: usize = 1;
pub const DEFAULT_SOURCE_EXTENSION: &str = "ts";

/// Loads the modules reachable from `primary` through relative imports, up
/// to `depth` levels, in the order they are first imported.
///
/// Missing or unparsable imports are reported to `diagnostics` and skipped.
/// The primary module is never part of the result.
pub fn load_closure(
    primary: &SourceUnit,
    depth: usize,
    extension: &str,
    diagnostics: &mut Diagnostics,
) -> Vec<SourceUnit> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    seen.insert(identity(primary.path()));

    let mut loaded: Vec<SourceUnit> = Vec::new();
    let mut frontier_start = 0;
    let mut frontier_end = 0;

    for level in 0..depth {
        let new_units = if level == 0 {
            load_direct(primary, extension, &mut seen, diagnostics)
        } else {
            let mut next = Vec::new();
            for unit in &loaded[frontier_start..frontier_end] {
                next.extend(load_direct(unit, extension, &mut seen, diagnostics));
            }
            next
        };

        if new_units.is_empty() {
            break;
        }
        frontier_start = loaded.len();
        loaded.extend(new_units);
        frontier_end = loaded.len();
    }

    loaded
}

fn load_direct(
    unit: &SourceUnit,
    extension: &str,
    seen: &mut HashSet<PathBuf>,
    diagnostics: &mut Diagnostics,
) -> Vec<SourceUnit> {
    let mut out = Vec::new();
    for specifier in extract::relative_specifiers(unit) {
        let Some(path) = resolver::resolve(unit.path(), &specifier, extension) else {
            let missing = resolver::candidate_path(unit.path(), &specifier, extension);
            diagnostics.warn(
                unit.path(),
                None,
                format!("File in import ({}) does not exist", missing.display()),
            );
            continue;
        };

        if !seen.insert(identity(&path)) {
            continue;
        }

        match SourceUnit::load(&path) {
            Ok(imported) => {
                diagnostics.info(unit.path(), None, format!("Loaded import {}", path.display()));
                out.push(imported);
            }
            Err(e) => diagnostics.warn(unit.path(), None, format!("Skipping import: {e}")),
        }
    }
    out
}

fn identity(path: &std::path::Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
