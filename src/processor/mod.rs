//! # Processor Module
//!
//! This module contains the core functionality for selecting target files and
//! prepending the header to each of them.
//!
//! The module is organized into several submodules:
//! - [`selector`] - Include/exclude glob resolution into the processing set
//! - [`file_io`] - File reading and atomic writing operations
//! - [`path_subst`] - Template-token replacement with base-relative paths
//!
//! The [`Processor`] struct is the main entry point for all file operations,
//! orchestrating the submodules to provide a cohesive API.

mod file_io;
mod path_subst;
mod selector;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
pub use file_io::FileIO;
pub use path_subst::{base_relative_path, substitute_token};
pub use selector::{Selector, dedup_preserving_order, join_pattern};
use tracing::{debug, trace};

use crate::confirm::{AutoConfirm, Confirmation};
use crate::report::FileReport;
use crate::verbose_log;

/// Configuration for creating a Processor instance.
pub struct ProcessorConfig {
  /// Plain-text file whose content is prepended to every target
  pub header_path: PathBuf,
  /// Directory the include/exclude patterns are rooted at
  pub base_dir: PathBuf,
  /// Include glob patterns, in order; empty means the run is a no-op
  pub include_patterns: Vec<String>,
  /// Exclude glob patterns, in order; may be empty
  pub exclude_patterns: Vec<String>,
  /// Literal token replaced with each file's base-relative path, when set
  pub template_token: Option<String>,
  /// Gate consulted between selection and rewriting; auto-confirms when None
  pub confirmation: Option<Box<dyn Confirmation>>,
}

impl ProcessorConfig {
  /// Creates a new ProcessorConfig with required fields and sensible defaults.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// ProcessorConfig {
  ///     template_token: Some("path/to/file.rb".to_string()),
  ///     ..ProcessorConfig::new(header_path, base_dir, include_patterns)
  /// }
  /// ```
  pub fn new(header_path: PathBuf, base_dir: PathBuf, include_patterns: Vec<String>) -> Self {
    Self {
      header_path,
      base_dir,
      include_patterns,
      exclude_patterns: vec![],
      template_token: None,
      confirmation: None,
    }
  }
}

/// Outcome of pattern resolution.
pub struct Selection {
  /// Files that will be rewritten, in processing order
  pub files: Vec<PathBuf>,
  /// Files matched by the patterns but dropped before rewriting (the header
  /// file itself)
  pub skipped: Vec<PathBuf>,
}

/// Result of one processor run.
pub struct RunOutcome {
  /// Per-file reports, in processing order; empty when nothing matched or
  /// the confirmation gate declined
  pub reports: Vec<FileReport>,
  /// Number of files in the processing set after deduplication
  pub files_selected: usize,
  /// `false` when the confirmation gate declined and no file was touched
  pub confirmed: bool,
}

/// Processor for prepending a header to a set of files.
///
/// The `Processor` is responsible for:
/// - Resolving include/exclude patterns into the processing set
/// - Reading the header once, before any target is touched
/// - Rewriting each target as header content followed by original content
/// - Optionally replacing a template token with each file's relative path
/// - Collecting report data about processed files
///
/// Files are read and rewritten one at a time, in set order; there is no
/// parallelism and no shared mutable state across files.
pub struct Processor {
  /// Path to the header file
  header_path: PathBuf,

  /// Directory the patterns are rooted at
  base_dir: PathBuf,

  /// Include glob patterns
  include_patterns: Vec<String>,

  /// Exclude glob patterns
  exclude_patterns: Vec<String>,

  /// Template token for path substitution
  template_token: Option<String>,

  /// Confirmation gate consulted before rewriting
  confirmation: Box<dyn Confirmation>,

  /// Selector for include/exclude resolution
  selector: Selector,
}

impl Processor {
  /// Creates a new processor with the specified configuration.
  ///
  /// Existence checks on the header file and base directory belong to the
  /// calling layer, which runs them before any file I/O.
  ///
  /// # Errors
  ///
  /// Returns an error if any include or exclude pattern is invalid glob
  /// syntax.
  pub fn new(config: ProcessorConfig) -> Result<Self> {
    for pattern in config.include_patterns.iter().chain(config.exclude_patterns.iter()) {
      glob::Pattern::new(pattern).with_context(|| format!("Invalid glob pattern: {}", pattern))?;
    }

    let selector = Selector::new(config.base_dir.clone());
    let confirmation = config.confirmation.unwrap_or_else(|| Box::new(AutoConfirm));

    Ok(Self {
      header_path: config.header_path,
      base_dir: config.base_dir,
      include_patterns: config.include_patterns,
      exclude_patterns: config.exclude_patterns,
      template_token: config.template_token,
      confirmation,
      selector,
    })
  }

  /// Resolves the processing set without touching any file.
  ///
  /// The resolved set is deduplicated (first occurrence wins) so a file
  /// matched by several include patterns receives the header exactly once,
  /// and the header file itself is moved to the skip list so a run can never
  /// rewrite its own header source.
  pub fn select(&self) -> Result<Selection> {
    let resolved = self.selector.resolve(&self.include_patterns, &self.exclude_patterns)?;
    let deduped = dedup_preserving_order(resolved);

    let mut files = Vec::with_capacity(deduped.len());
    let mut skipped = Vec::new();
    let header_canonical = self.canonical_header_path();

    for path in deduped {
      let is_header = header_canonical
        .as_ref()
        .is_some_and(|header| path.canonicalize().map(|candidate| candidate == *header).unwrap_or(false));

      if is_header {
        trace!("Dropping header file from processing set: {}", path.display());
        skipped.push(path);
      } else {
        files.push(path);
      }
    }

    Ok(Selection { files, skipped })
  }

  /// Asks the configured confirmation gate whether to proceed.
  pub fn confirm(&self, file_count: usize) -> bool {
    self.confirmation.confirm(file_count)
  }

  /// Prepends the header to every file in `files`, in order.
  ///
  /// The header is read in full before the first target is touched, so a
  /// missing or unreadable header aborts with zero side effects. Each file's
  /// new content is computed fully in memory and written through an atomic
  /// rename.
  ///
  /// A file that cannot be read or rewritten is recorded as a per-file
  /// failure (path and cause, surfaced on stderr) and processing continues
  /// with the next file; files already rewritten stay rewritten.
  pub fn apply(&self, files: &[PathBuf]) -> Result<Vec<FileReport>> {
    let header_text = FileIO::read_full_content(&self.header_path)
      .with_context(|| format!("Failed to read header file: {}", self.header_path.display()))?;

    debug!(
      "Read {} byte header, processing {} file(s)",
      header_text.len(),
      files.len()
    );

    let mut reports = Vec::with_capacity(files.len());

    for path in files {
      match self.prepend_to_file(path, &header_text) {
        Ok(path_rewritten) => {
          verbose_log!("Prepended header to: {}", path.display());
          reports.push(FileReport::prepended(path.clone(), path_rewritten));
        }
        Err(e) => {
          eprintln!("Error processing {}: {:#}", path.display(), e);
          reports.push(FileReport::failed(path.clone(), format!("{:#}", e)));
        }
      }
    }

    Ok(reports)
  }

  /// Runs the whole pipeline: select, confirm, apply.
  ///
  /// Library convenience over [`select`](Self::select) and
  /// [`apply`](Self::apply); the CLI drives those two directly so it can
  /// report the file count before rewriting starts.
  pub fn run(&self) -> Result<RunOutcome> {
    let selection = self.select()?;
    let files_selected = selection.files.len();

    if selection.files.is_empty() {
      return Ok(RunOutcome {
        reports: selection.skipped.into_iter().map(FileReport::skipped).collect(),
        files_selected,
        confirmed: true,
      });
    }

    if !self.confirm(files_selected) {
      return Ok(RunOutcome {
        reports: Vec::new(),
        files_selected,
        confirmed: false,
      });
    }

    let mut reports = self.apply(&selection.files)?;
    reports.extend(selection.skipped.into_iter().map(FileReport::skipped));
    Ok(RunOutcome {
      reports,
      files_selected,
      confirmed: true,
    })
  }

  /// Rewrites one file as header + original content, then applies the
  /// template-token substitution when configured.
  ///
  /// Returns whether the token substitution changed the file.
  fn prepend_to_file(&self, path: &Path, header_text: &str) -> Result<bool> {
    let original = FileIO::read_full_content(path)?;

    // Exact concatenation: no separator is inserted between header and content
    let mut new_content = String::with_capacity(header_text.len() + original.len());
    new_content.push_str(header_text);
    new_content.push_str(&original);

    FileIO::write_file(path, &new_content)?;

    match &self.template_token {
      Some(token) => substitute_token(path, &self.base_dir, token),
      None => Ok(false),
    }
  }

  fn canonical_header_path(&self) -> Option<PathBuf> {
    self.header_path.canonicalize().ok()
  }
}
