//! # Report Module
//!
//! This module provides functionality for generating reports of header
//! processing in machine-readable formats (JSON, CSV).
//!
//! It captures information about each file in the processing set, including
//! the action taken and any per-file failure, and can output this information
//! in the requested format.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Information about one file in the processing set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
  /// Path to the file
  #[serde(with = "path_serialization")]
  pub path: PathBuf,
  /// Action taken on the file
  pub action: FileAction,
  /// Whether the template token was replaced with the file's relative path
  pub path_rewritten: bool,
  /// Failure cause, when the action is [`FileAction::Failed`]
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl FileReport {
  /// Report for a successfully rewritten file.
  pub const fn prepended(path: PathBuf, path_rewritten: bool) -> Self {
    Self {
      path,
      action: FileAction::Prepended,
      path_rewritten,
      error: None,
    }
  }

  /// Report for a file whose rewrite failed.
  pub const fn failed(path: PathBuf, error: String) -> Self {
    Self {
      path,
      action: FileAction::Failed,
      path_rewritten: false,
      error: Some(error),
    }
  }

  /// Report for a file dropped from the set before rewriting.
  pub const fn skipped(path: PathBuf) -> Self {
    Self {
      path,
      action: FileAction::Skipped,
      path_rewritten: false,
      error: None,
    }
  }
}

/// Possible outcomes for a file in the processing set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileAction {
  /// The header was prepended to the file
  Prepended,
  /// The file could not be read or rewritten
  Failed,
  /// The file was dropped from the set before rewriting (e.g. it is the
  /// header file itself)
  Skipped,
}

/// Helper module for serializing/deserializing PathBuf
mod path_serialization {
  use std::path::PathBuf;

  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S>(path: &std::path::Path, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&path.to_string_lossy())
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<PathBuf, D::Error>
  where
    D: Deserializer<'de>,
  {
    let s = String::deserialize(deserializer)?;
    Ok(PathBuf::from(s))
  }
}

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
  /// JSON format for machine readability
  Json,
  /// CSV format for spreadsheet compatibility
  Csv,
}

impl std::fmt::Display for ReportFormat {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ReportFormat::Json => write!(f, "JSON"),
      ReportFormat::Csv => write!(f, "CSV"),
    }
  }
}

/// Error returned when parsing a string into a ReportFormat fails
#[derive(Debug, thiserror::Error)]
#[error("Invalid report format: {0}")]
pub struct ParseReportFormatError(pub String);

impl std::str::FromStr for ReportFormat {
  type Err = ParseReportFormatError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "json" => Ok(ReportFormat::Json),
      "csv" => Ok(ReportFormat::Csv),
      _ => Err(ParseReportFormatError(s.to_string())),
    }
  }
}

/// Report Generator for creating run reports
pub struct ReportGenerator<'a> {
  /// Format of the report to generate
  format: ReportFormat,
  /// Path where the report will be saved
  output_path: &'a std::path::Path,
}

impl<'a> ReportGenerator<'a> {
  /// Create a new report generator
  ///
  /// # Parameters
  ///
  /// * `format` - The format to use for the report
  /// * `output_path` - The path where the report will be saved
  pub const fn new(format: ReportFormat, output_path: &'a std::path::Path) -> Self {
    Self { format, output_path }
  }

  /// Generate a report from a collection of file reports
  ///
  /// # Parameters
  ///
  /// * `files` - List of file reports to include
  /// * `summary` - Run summary information
  ///
  /// # Returns
  ///
  /// `Ok(())` if the report was generated successfully, or an error if the
  /// report couldn't be generated or written to disk.
  pub fn generate(&self, files: &[FileReport], summary: &RunSummary) -> Result<()> {
    let content = match self.format {
      ReportFormat::Json => self.generate_json(files, summary)?,
      ReportFormat::Csv => self.generate_csv(files, summary),
    };

    fs::write(self.output_path, content)
      .with_context(|| format!("Failed to write report to {}", self.output_path.display()))
  }

  /// Generate JSON report content
  fn generate_json(&self, files: &[FileReport], summary: &RunSummary) -> Result<String> {
    use serde_json::{json, to_string_pretty};

    let report = json!({
        "summary": summary,
        "files": files,
    });

    Ok(to_string_pretty(&report)?)
  }

  /// Generate CSV report content
  fn generate_csv(&self, files: &[FileReport], summary: &RunSummary) -> String {
    let mut csv = String::new();

    // Add header
    csv.push_str("file_path,action,path_rewritten,notes\n");

    // Add file details
    for file in files {
      let path = file.path.to_string_lossy().replace(',', "%2C"); // Escape commas in path

      let action = match file.action {
        FileAction::Prepended => "Prepended",
        FileAction::Failed => "Failed",
        FileAction::Skipped => "Skipped",
      };

      let note = file
        .error
        .as_ref()
        .map(|cause| cause.replace(',', "%2C")) // Escape commas in note
        .unwrap_or_default();

      csv.push_str(&format!("{},{},{},{}\n", path, action, file.path_rewritten, note));
    }

    // Add summary at the end
    csv.push_str("\n# Summary\n");
    csv.push_str(&format!("Files selected,{}\n", summary.total_files));
    csv.push_str(&format!("Headers prepended,{}\n", summary.files_prepended));
    csv.push_str(&format!("Files failed,{}\n", summary.files_failed));
    csv.push_str(&format!("Files skipped,{}\n", summary.files_skipped));
    csv.push_str(&format!("Paths rewritten,{}\n", summary.paths_rewritten));
    csv.push_str(&format!(
      "Processing time (seconds),{:.2}\n",
      summary.processing_time.as_secs_f64()
    ));

    csv
  }
}

/// Summary of one run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
  /// Total number of files in the processing set
  pub total_files: usize,
  /// Number of files that received the header
  pub files_prepended: usize,
  /// Number of files whose rewrite failed
  pub files_failed: usize,
  /// Number of files dropped from the set before rewriting
  pub files_skipped: usize,
  /// Number of files in which the template token was replaced
  pub paths_rewritten: usize,
  /// Total processing time
  #[serde(skip_serializing)]
  pub processing_time: std::time::Duration,
  /// Processing time in seconds for serialization
  #[serde(rename = "processing_time_seconds")]
  pub processing_time_secs: f64,
}

impl RunSummary {
  /// Create a new RunSummary initialized to zero
  pub fn new(processing_time: std::time::Duration) -> Self {
    Self {
      total_files: 0,
      files_prepended: 0,
      files_failed: 0,
      files_skipped: 0,
      paths_rewritten: 0,
      processing_time,
      processing_time_secs: processing_time.as_secs_f64(),
    }
  }

  /// Create a RunSummary from a collection of FileReports
  pub fn from_reports(files: &[FileReport], processing_time: std::time::Duration) -> Self {
    let mut summary = Self::new(processing_time);

    summary.total_files = files.len();

    for file in files {
      match file.action {
        FileAction::Prepended => summary.files_prepended += 1,
        FileAction::Failed => summary.files_failed += 1,
        FileAction::Skipped => summary.files_skipped += 1,
      }

      if file.path_rewritten {
        summary.paths_rewritten += 1;
      }
    }

    summary
  }
}
