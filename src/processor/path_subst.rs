//! # Path Substitution Module
//!
//! This module replaces a literal template token inside target files with the
//! file's path relative to the base directory.
//!
//! The relative path is computed by structural prefix removal, and directory
//! separators are normalized to `/` on every platform, so the rewritten
//! content is identical regardless of where the run happens.

use std::path::Path;

use anyhow::Result;
use tracing::trace;

use super::file_io::FileIO;

/// Computes a file's base-relative path with forward-slash separators.
///
/// Falls back to a `pathdiff` walk when the file is not lexically under the
/// base directory (e.g. the base was given through a symlinked prefix), and
/// to the full path when no relative form exists at all.
pub fn base_relative_path(path: &Path, base_dir: &Path) -> String {
  let relative = match path.strip_prefix(base_dir) {
    Ok(stripped) => stripped.to_path_buf(),
    Err(_) => pathdiff::diff_paths(path, base_dir).unwrap_or_else(|| path.to_path_buf()),
  };

  to_forward_slashes(&relative)
}

/// Renders a path with `/` between components, independent of the host
/// platform's separator.
fn to_forward_slashes(path: &Path) -> String {
  let components: Vec<String> = path
    .components()
    .map(|component| component.as_os_str().to_string_lossy().into_owned())
    .collect();
  components.join("/")
}

/// Replaces every literal occurrence of `token` in the file with the file's
/// base-relative path.
///
/// Returns `true` when the file contained the token and was rewritten,
/// `false` when it was left untouched.
pub fn substitute_token(path: &Path, base_dir: &Path, token: &str) -> Result<bool> {
  let content = FileIO::read_full_content(path)?;
  if !content.contains(token) {
    trace!("No template token in: {}", path.display());
    return Ok(false);
  }

  let relative = base_relative_path(path, base_dir);
  let rewritten = content.replace(token, &relative);
  FileIO::write_file(path, &rewritten)?;

  trace!("Rewrote template token in: {}", path.display());
  Ok(true)
}
