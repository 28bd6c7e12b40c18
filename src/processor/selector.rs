//! # Selector Module
//!
//! This module resolves include/exclude glob patterns into the ordered set of
//! files that will receive the header.
//!
//! Each pattern is joined to the base directory by plain string concatenation,
//! not path joining: a caller whose base directory lacks a trailing separator
//! must supply patterns with a leading one. The CLI layer normalizes the base
//! directory to end with `/` before the selector runs, so `--add '*.py'`
//! behaves as expected there.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// Resolves glob patterns rooted at a base directory into an ordered file set.
pub struct Selector {
  /// Base directory the include/exclude patterns are rooted at
  base_dir: PathBuf,
}

impl Selector {
  /// Creates a new Selector rooted at the specified base directory.
  pub const fn new(base_dir: PathBuf) -> Self {
    Self { base_dir }
  }

  /// Resolves include and exclude patterns into the final processing set.
  ///
  /// Include patterns are expanded in pattern order, appending every match in
  /// match order; the same file may therefore appear more than once when it
  /// matches several patterns. Exclude patterns are expanded the same way,
  /// and each exclusion removes the **first** matching occurrence from the
  /// include list (exact path equality on the resolved path).
  ///
  /// Zero matches is a valid result, not an error; callers treat an empty set
  /// as a reportable no-op.
  ///
  /// # Errors
  ///
  /// Returns an error if any pattern is not valid glob syntax.
  pub fn resolve(&self, include_patterns: &[String], exclude_patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut include_set = self.expand(include_patterns)?;
    let exclude_set = self.expand(exclude_patterns)?;

    for excluded in &exclude_set {
      if let Some(pos) = include_set.iter().position(|candidate| candidate == excluded) {
        include_set.remove(pos);
      }
    }

    debug!(
      "Resolved {} file(s) from {} include and {} exclude pattern(s)",
      include_set.len(),
      include_patterns.len(),
      exclude_patterns.len()
    );

    Ok(include_set)
  }

  /// Expands each pattern against the base directory, keeping pattern order
  /// then match order. Only regular files are collected.
  fn expand(&self, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut matches = Vec::new();

    for pattern in patterns {
      let rooted = join_pattern(&self.base_dir, pattern);
      let entries = glob::glob(&rooted).with_context(|| format!("Invalid glob pattern: {}", pattern))?;

      for entry in entries {
        match entry {
          Ok(path) => {
            if path.is_file() {
              matches.push(path);
            }
          }
          Err(e) => {
            // An unreadable directory fails that entry only
            eprintln!("Error with glob pattern: {}", e);
          }
        }
      }
    }

    Ok(matches)
  }
}

/// Joins a pattern to the base directory by string concatenation.
pub fn join_pattern(base_dir: &Path, pattern: &str) -> String {
  format!("{}{}", base_dir.display(), pattern)
}

/// Removes later duplicates from a resolved file set, keeping first
/// occurrences in place.
///
/// A file matched by several include patterns would otherwise be rewritten
/// once per occurrence and end up with the header stacked that many times.
pub fn dedup_preserving_order(files: Vec<PathBuf>) -> Vec<PathBuf> {
  let mut seen = std::collections::HashSet::with_capacity(files.len());
  files.into_iter().filter(|path| seen.insert(path.clone())).collect()
}
