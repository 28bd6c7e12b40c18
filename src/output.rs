//! # Output Module
//!
//! This module centralizes all user-facing output for the headstamp tool.
//! It provides consistent formatting, colors, and symbols for terminal output.
//!
//! ## Design Goals
//!
//! - **Informative**: Show actionable information without requiring flags
//! - **Scannable**: Use formatting to make output easy to parse visually
//! - **Progressive**: More detail with `-v`, silence with `-q`
//! - **Scriptable**: Keep stdout predictable for piping/automation

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::report::{FileAction, FileReport, RunSummary};

/// Symbols used in output
pub mod symbols {
  /// Success/prepended
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Failure
  pub const FAILURE: &str = "\u{2717}"; // ✗
}

/// Maximum number of files to show in the default output before truncating
const DEFAULT_FILE_LIST_LIMIT: usize = 20;

/// Print the initial "Prepending header to N files..." message.
pub fn print_start_message(file_count: usize) {
  if is_quiet() {
    return;
  }

  let files_word = if file_count == 1 { "file" } else { "files" };
  println!("Prepending header to {} {}...", file_count, files_word);
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Print the warning for an empty selection.
///
/// Zero matches is a no-op, not an error: the run completes successfully
/// without opening any file for writing.
pub fn print_no_files_matched() {
  if is_quiet() {
    return;
  }

  println!(
    "{}",
    "No files matched the include patterns; nothing to do.".if_supports_color(Stream::Stdout, |s| s.yellow())
  );
}

/// Print the message for a declined confirmation.
pub fn print_declined() {
  if is_quiet() {
    return;
  }

  println!("Aborted; no files were modified.");
}

/// Print the list of files that received the header.
///
/// Shows up to `DEFAULT_FILE_LIST_LIMIT` files; in verbose mode, shows all.
pub fn print_prepended_files(files: &[&FileReport], base_dir: Option<&Path>) {
  if is_quiet() || files.is_empty() {
    return;
  }

  let count = files.len();
  let header = format!(
    "{} Prepended header to {} {}:",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    count,
    if count == 1 { "file" } else { "files" }
  );
  println!("{}", header);

  let show_all = is_verbose();
  let limit = if show_all { count } else { DEFAULT_FILE_LIST_LIMIT };

  for file in files.iter().take(limit) {
    let display_path = make_relative_path(&file.path, base_dir);
    println!("  {}", display_path);
  }

  if !show_all && count > limit {
    let remaining = count - limit;
    println!(
      "  {} ... and {} more (use -v to see all)",
      "".if_supports_color(Stream::Stdout, |s| s.dimmed()),
      remaining
    );
  }
}

/// Print the list of files whose rewrite failed.
///
/// Failures are never truncated; each line carries the cause.
pub fn print_failed_files(files: &[&FileReport], base_dir: Option<&Path>) {
  if files.is_empty() {
    return;
  }

  if is_quiet() {
    // In quiet mode, just print the file paths (for scripting)
    for file in files {
      let display_path = make_relative_path(&file.path, base_dir);
      println!("{}", display_path);
    }
    return;
  }

  let count = files.len();
  let header = format!(
    "{} {} {} could not be rewritten:",
    symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
    count,
    if count == 1 { "file" } else { "files" }
  );
  println!("{}", header);

  for file in files {
    let display_path = make_relative_path(&file.path, base_dir);
    match &file.error {
      Some(cause) => println!("  {} ({})", display_path, cause),
      None => println!("  {}", display_path),
    }
  }
}

/// Print the run summary.
///
/// Format: "Summary: X prepended, Y failed, Z paths rewritten"
/// In verbose mode, also shows timing.
pub fn print_summary(summary: &RunSummary, path_substitution: bool) {
  if is_quiet() {
    return;
  }

  let prepended_str = summary
    .files_prepended
    .if_supports_color(Stream::Stdout, |s| s.cyan())
    .to_string();
  let failed_str = if summary.files_failed > 0 {
    summary
      .files_failed
      .if_supports_color(Stream::Stdout, |s| s.red())
      .to_string()
  } else {
    summary
      .files_failed
      .if_supports_color(Stream::Stdout, |s| s.cyan())
      .to_string()
  };

  let mut summary_line = format!("Summary: {} prepended, {} failed", prepended_str, failed_str);

  if path_substitution {
    summary_line.push_str(&format!(
      ", {} {} rewritten",
      summary.paths_rewritten.if_supports_color(Stream::Stdout, |s| s.cyan()),
      if summary.paths_rewritten == 1 { "path" } else { "paths" }
    ));
  }

  // Show timing in verbose mode
  if is_verbose() {
    summary_line.push_str(&format!(" ({:.2}s)", summary.processing_time.as_secs_f64()));
  }

  println!("{}", summary_line);
}

/// Categorize file reports into different groups for output.
pub struct CategorizedReports<'a> {
  /// Files that received the header
  pub prepended: Vec<&'a FileReport>,
  /// Files whose rewrite failed
  pub failed: Vec<&'a FileReport>,
  /// Files dropped from the set before rewriting
  pub skipped: Vec<&'a FileReport>,
}

impl<'a> CategorizedReports<'a> {
  /// Categorize a slice of file reports.
  pub fn from_reports(reports: &'a [FileReport]) -> Self {
    let mut prepended = Vec::new();
    let mut failed = Vec::new();
    let mut skipped = Vec::new();

    for report in reports {
      match report.action {
        FileAction::Prepended => prepended.push(report),
        FileAction::Failed => failed.push(report),
        FileAction::Skipped => skipped.push(report),
      }
    }

    Self {
      prepended,
      failed,
      skipped,
    }
  }
}

/// Make a path relative to the base directory for display.
fn make_relative_path(path: &Path, base_dir: Option<&Path>) -> String {
  if let Some(root) = base_dir {
    path
      .strip_prefix(root)
      .map(|p| p.to_string_lossy().to_string())
      .unwrap_or_else(|_| path.to_string_lossy().to_string())
  } else {
    path.to_string_lossy().to_string()
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::*;

  #[test]
  fn test_categorize_reports_mixed() {
    let reports = vec![
      FileReport::prepended(PathBuf::from("src/a.py"), false),
      FileReport::prepended(PathBuf::from("src/b.py"), true),
      FileReport::failed(PathBuf::from("src/gone.py"), "unreadable".to_string()),
      FileReport::skipped(PathBuf::from("NOTICE.txt")),
    ];

    let categorized = CategorizedReports::from_reports(&reports);

    assert_eq!(categorized.prepended.len(), 2);
    assert_eq!(categorized.failed.len(), 1);
    assert_eq!(categorized.skipped.len(), 1);
  }

  #[test]
  fn test_categorize_reports_empty() {
    let categorized = CategorizedReports::from_reports(&[]);

    assert!(categorized.prepended.is_empty());
    assert!(categorized.failed.is_empty());
    assert!(categorized.skipped.is_empty());
  }

  #[test]
  fn test_make_relative_path_with_root() {
    let path = PathBuf::from("/workspace/project/src/main.rs");
    let root = PathBuf::from("/workspace/project");

    let result = make_relative_path(&path, Some(&root));
    assert_eq!(result, "src/main.rs");
  }

  #[test]
  fn test_make_relative_path_without_root() {
    let path = PathBuf::from("/workspace/project/src/main.rs");

    let result = make_relative_path(&path, None);
    assert_eq!(result, "/workspace/project/src/main.rs");
  }
}
