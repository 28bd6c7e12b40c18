//! # Apply Command
//!
//! This module implements the command that prepends the header to the
//! selected files. It validates the invocation before any file I/O, wires the
//! core processor together, and renders the run's outcome.

use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use anyhow::Result;
use clap::Args;
use tracing::debug;

use crate::confirm::{Confirmation, StdinConfirm};
use crate::errors::ConfigError;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::{
  CategorizedReports, print_blank_line, print_declined, print_failed_files, print_no_files_matched,
  print_prepended_files, print_start_message, print_summary,
};
use crate::processor::{Processor, ProcessorConfig};
use crate::report::{FileReport, ReportFormat, ReportGenerator, RunSummary};
use crate::{info_log, verbose_log};

/// Arguments for the apply command
#[derive(Args, Debug)]
pub struct ApplyArgs {
  /// The header to be prepended to each target file (a plain-text file)
  #[arg(value_name = "HEADER_FILE")]
  pub header_file: PathBuf,

  /// The directory that contains the files to which the header will be
  /// prepended
  #[arg(value_name = "BASE_DIR")]
  pub base_dir: PathBuf,

  /// Add files matching GLOB (rooted at BASE_DIR) to the processing set
  /// (repeatable, at least one required)
  #[arg(long = "add", value_name = "GLOB")]
  pub add: Vec<String>,

  /// Remove files matching GLOB (rooted at BASE_DIR) from the processing set
  /// (repeatable)
  #[arg(long = "rm", value_name = "GLOB")]
  pub rm: Vec<String>,

  /// Replace every occurrence of TOKEN in each processed file with the
  /// file's base-relative path
  #[arg(long = "path", value_name = "TOKEN")]
  pub path_token: Option<String>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Ask for confirmation once the file count is known, before any file is
  /// rewritten
  #[arg(long, short = 'i')]
  pub interactive: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,

  /// Generate a JSON report of the run and save to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,

  /// Generate a CSV report of the run and save to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_csv: Option<PathBuf>,
}

impl ApplyArgs {
  /// Validate the arguments and return an error if invalid.
  ///
  /// Runs before any target file is opened, so a bad invocation performs no
  /// filesystem mutation at all.
  fn validate(&self) -> Result<(), ConfigError> {
    if !self.header_file.is_file() {
      return Err(ConfigError::MissingHeaderFile(self.header_file.clone()));
    }
    if !self.base_dir.is_dir() {
      return Err(ConfigError::InvalidBaseDir(self.base_dir.clone()));
    }
    if self.add.is_empty() {
      return Err(ConfigError::NoIncludePatterns);
    }
    Ok(())
  }
}

/// Run the apply command with the given arguments
pub fn run_apply(args: ApplyArgs) -> Result<()> {
  // Validate arguments
  if let Err(e) = args.validate() {
    eprintln!("ERROR: {e}");
    process::exit(1);
  }

  // Initialize tracing subscriber for structured logging
  init_tracing(args.quiet, args.verbose);

  // Set verbose mode for output formatting and the logging macros
  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  // The selector joins patterns to the base directory by concatenation, so
  // root the patterns with a trailing separator; `--add '*.py'` then works
  // as written
  let base_dir = ensure_trailing_separator(&args.base_dir);
  debug!("Base directory: {}", base_dir.display());

  let confirmation: Option<Box<dyn Confirmation>> = if args.interactive {
    Some(Box::new(StdinConfirm))
  } else {
    None
  };

  let config = ProcessorConfig {
    exclude_patterns: args.rm,
    template_token: args.path_token.clone(),
    confirmation,
    ..ProcessorConfig::new(args.header_file, base_dir, args.add)
  };
  let processor = Processor::new(config)?;

  let selection = processor.select()?;

  if selection.files.is_empty() {
    print_no_files_matched();
    return Ok(());
  }

  verbose_log!("Identified {} file(s):", selection.files.len());
  for file in &selection.files {
    verbose_log!("  {}", file.display());
  }

  print_start_message(selection.files.len());

  if !processor.confirm(selection.files.len()) {
    print_declined();
    return Ok(());
  }

  // Start timing
  let start_time = Instant::now();

  let mut reports = processor.apply(&selection.files)?;
  reports.extend(selection.skipped.into_iter().map(FileReport::skipped));

  // Calculate elapsed time
  let elapsed = start_time.elapsed();

  let summary = RunSummary::from_reports(&reports, elapsed);
  let categorized = CategorizedReports::from_reports(&reports);

  print_blank_line();
  print_prepended_files(&categorized.prepended, Some(&args.base_dir));
  if !categorized.failed.is_empty() {
    if !categorized.prepended.is_empty() {
      print_blank_line();
    }
    print_failed_files(&categorized.failed, Some(&args.base_dir));
  }

  print_blank_line();
  print_summary(&summary, args.path_token.is_some());

  // Generate JSON report if requested
  if let Some(ref output_path) = args.report_json {
    let report_generator = ReportGenerator::new(ReportFormat::Json, output_path);
    if let Err(e) = report_generator.generate(&reports, &summary) {
      eprintln!("Error generating JSON report: {}", e);
    } else {
      info_log!("Generated JSON report at {}", output_path.display());
    }
  }

  // Generate CSV report if requested
  if let Some(ref output_path) = args.report_csv {
    let report_generator = ReportGenerator::new(ReportFormat::Csv, output_path);
    if let Err(e) = report_generator.generate(&reports, &summary) {
      eprintln!("Error generating CSV report: {}", e);
    } else {
      info_log!("Generated CSV report at {}", output_path.display());
    }
  }

  // Exit with non-zero code if any file failed; files already rewritten
  // stay rewritten
  if summary.files_failed > 0 {
    process::exit(1);
  }

  Ok(())
}

/// Appends the platform separator to `dir` unless it already ends with one.
fn ensure_trailing_separator(dir: &Path) -> PathBuf {
  if dir.to_string_lossy().ends_with(['/', '\\']) {
    dir.to_path_buf()
  } else {
    let mut joined = dir.as_os_str().to_os_string();
    joined.push(std::path::MAIN_SEPARATOR_STR);
    PathBuf::from(joined)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ensure_trailing_separator_appends_once() {
    let dir = ensure_trailing_separator(Path::new("/proj"));
    assert!(dir.to_string_lossy().ends_with(std::path::MAIN_SEPARATOR));

    let unchanged = ensure_trailing_separator(&dir);
    assert_eq!(unchanged, dir);
  }

  #[test]
  fn test_validate_requires_existing_header() {
    let tmp = tempfile::tempdir().unwrap();
    let args = ApplyArgs {
      header_file: tmp.path().join("absent.txt"),
      base_dir: tmp.path().to_path_buf(),
      add: vec!["*.py".to_string()],
      rm: vec![],
      path_token: None,
      verbose: 0,
      quiet: false,
      interactive: false,
      colors: ColorMode::Auto,
      report_json: None,
      report_csv: None,
    };

    assert!(matches!(args.validate(), Err(ConfigError::MissingHeaderFile(_))));
  }

  #[test]
  fn test_validate_requires_at_least_one_include_pattern() {
    let tmp = tempfile::tempdir().unwrap();
    let header = tmp.path().join("header.txt");
    std::fs::write(&header, "# LICENSE\n").unwrap();

    let args = ApplyArgs {
      header_file: header,
      base_dir: tmp.path().to_path_buf(),
      add: vec![],
      rm: vec![],
      path_token: None,
      verbose: 0,
      quiet: false,
      interactive: false,
      colors: ColorMode::Auto,
      report_json: None,
      report_csv: None,
    };

    assert!(matches!(args.validate(), Err(ConfigError::NoIncludePatterns)));
  }
}
