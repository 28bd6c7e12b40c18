//! Configuration error taxonomy.
//!
//! Configuration errors are detected by the CLI layer before the processor
//! runs, so a bad invocation never mutates a target file. I/O failures during
//! a run are propagated with `anyhow` context instead, since they carry no
//! category beyond the failing path.

use std::path::PathBuf;

use thiserror::Error;

/// Errors in the invocation itself: bad paths or an empty include set.
///
/// All variants are fully recoverable by the caller (fix the inputs and
/// rerun) and are guaranteed to be raised before any file I/O on targets.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// The header file does not exist or is not a regular file.
  #[error("header file not found: {0}")]
  MissingHeaderFile(PathBuf),

  /// The base directory does not exist or is not a directory.
  #[error("base directory does not exist or is not a directory: {0}")]
  InvalidBaseDir(PathBuf),

  /// No include patterns were supplied.
  #[error("at least one --add pattern is required")]
  NoIncludePatterns,
}
