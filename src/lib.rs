//! # headstamp
//!
//! A tool that prepends a plain-text header block (license text, copyright
//! notice, banner) to a selected set of source files under a base directory.
//!
//! Targets are resolved from include/exclude glob patterns, each rooted at the
//! base directory. Every selected file is rewritten in place as the header
//! content followed by the file's original content. Optionally, a template
//! token inside each file is replaced with the file's base-relative path.
//!
//! ## Features
//!
//! * Recursive glob selection (`**`) with repeatable include and exclude patterns
//! * Header prepended byte-for-byte, with no separator inserted
//! * Atomic in-place rewrite (temporary file + rename), so a crash mid-run never
//!   truncates a target file
//! * Optional template-path substitution with platform-independent `/` separators
//! * Optional interactive confirmation before any file is touched
//!
//! ## Usage as a Library
//!
//! This crate can be used as a library in your Rust projects:
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//!
//! use headstamp::processor::{Processor, ProcessorConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ProcessorConfig::new(
//!         PathBuf::from("NOTICE.txt"),
//!         PathBuf::from("proj/"),
//!         vec!["src/**/*.rs".to_string()],
//!     );
//!
//!     let processor = Processor::new(config)?;
//!     let outcome = processor.run()?;
//!
//!     for report in &outcome.reports {
//!         println!("{}", report.path.display());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - File selection, header rewriting, and path substitution
//! * [`report`] - Per-file reports and run summaries
//! * [`logging`] - Logging utilities for verbose output
//!
//! [`processor`]: crate::processor
//! [`report`]: crate::report
//! [`logging`]: crate::logging

pub mod cli;
pub mod confirm;
pub mod errors;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
