//! # headstamp
//!
//! A tool that prepends a plain-text header block to selected source files.

use anyhow::Result;
use headstamp::cli::{Cli, run_apply};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run_apply(cli.apply_args)
}
