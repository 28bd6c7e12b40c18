//! # File I/O Module
//!
//! This module provides file reading and writing utilities for the processor.
//! It encapsulates synchronous file operations.
//!
//! Writes never truncate the destination in place: the new content is staged
//! in a sibling temporary file and moved over the target with an atomic
//! rename, so an interrupted run leaves the original file intact.

use std::io::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// File I/O operations for the processor.
///
/// This struct provides static methods for reading and writing files.
pub struct FileIO;

impl FileIO {
  /// Read full file content.
  ///
  /// # Parameters
  ///
  /// * `path` - Path to the file to read
  ///
  /// # Returns
  ///
  /// The complete file content as a String.
  pub fn read_full_content(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
  }

  /// Replace a file's content atomically.
  ///
  /// The content is written to a temporary file in the target's directory
  /// (rename is only atomic within one filesystem) and persisted over the
  /// target. The temporary file is cleaned up automatically if any step
  /// fails.
  ///
  /// # Parameters
  ///
  /// * `path` - Path to the file to replace
  /// * `content` - Content to write to the file
  pub fn write_file(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
      Some(parent) if !parent.as_os_str().is_empty() => parent,
      _ => Path::new("."),
    };

    let mut staged =
      NamedTempFile::new_in(dir).with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    staged
      .write_all(content.as_bytes())
      .with_context(|| format!("Failed to write file: {}", path.display()))?;

    // A fresh temporary file defaults to 0600; carry over the target's mode
    if let Ok(metadata) = std::fs::metadata(path) {
      let _ = std::fs::set_permissions(staged.path(), metadata.permissions());
    }

    staged
      .persist(path)
      .with_context(|| format!("Failed to replace file: {}", path.display()))?;
    Ok(())
  }
}
