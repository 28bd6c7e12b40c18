//! Confirmation gate applied between selection and rewriting.
//!
//! The gate is an injected trait object so the core stays usable in automated
//! pipelines: the default implementation auto-confirms, and only the
//! `--interactive` CLI flag installs a blocking stdin prompt.

use std::io::{BufRead, Write};

/// Decides whether a run may proceed once the file count is known.
pub trait Confirmation {
  /// Returns `true` to proceed with rewriting `file_count` files.
  fn confirm(&self, file_count: usize) -> bool;
}

/// Non-interactive default: always proceed.
pub struct AutoConfirm;

impl Confirmation for AutoConfirm {
  fn confirm(&self, _file_count: usize) -> bool {
    true
  }
}

/// Blocking stdin prompt, only constructed for `--interactive` runs.
///
/// Anything other than an explicit `y`/`yes` declines, including EOF.
pub struct StdinConfirm;

impl Confirmation for StdinConfirm {
  fn confirm(&self, file_count: usize) -> bool {
    let files_word = if file_count == 1 { "file" } else { "files" };
    eprint!("Prepend header to {} {}? [y/N] ", file_count, files_word);
    let _ = std::io::stderr().flush();

    let mut answer = String::new();
    if std::io::stdin().lock().read_line(&mut answer).is_err() {
      return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_auto_confirm_always_proceeds() {
    let gate = AutoConfirm;
    assert!(gate.confirm(0));
    assert!(gate.confirm(1));
    assert!(gate.confirm(10_000));
  }
}
