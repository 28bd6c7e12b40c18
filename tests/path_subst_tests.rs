use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use headstamp::processor::{Processor, ProcessorConfig, base_relative_path, substitute_token};
use tempfile::tempdir;

fn slashed(path: &Path) -> PathBuf {
  PathBuf::from(format!("{}/", path.display()))
}

#[test]
fn test_substitution_replaces_token_with_relative_path() -> Result<()> {
  let temp_dir = tempdir()?;
  let src_dir = temp_dir.path().join("src");
  fs::create_dir_all(&src_dir)?;

  let file = src_dir.join("a.rb");
  fs::write(&file, "# File: TEMPLATE\nputs 'a'\n")?;

  let changed = substitute_token(&file, temp_dir.path(), "TEMPLATE")?;
  assert!(changed);
  assert_eq!(fs::read_to_string(&file)?, "# File: src/a.rb\nputs 'a'\n");
  Ok(())
}

#[test]
fn test_substitution_replaces_every_occurrence() -> Result<()> {
  let temp_dir = tempdir()?;
  let file = temp_dir.path().join("a.rb");
  fs::write(&file, "TEMPLATE\nTEMPLATE\nmiddle TEMPLATE end\n")?;

  substitute_token(&file, temp_dir.path(), "TEMPLATE")?;
  assert_eq!(fs::read_to_string(&file)?, "a.rb\na.rb\nmiddle a.rb end\n");
  Ok(())
}

#[test]
fn test_relative_paths_always_use_forward_slashes() {
  let rel = base_relative_path(Path::new("/proj/src/nested/a.rb"), Path::new("/proj"));
  assert_eq!(rel, "src/nested/a.rb");
  assert!(!rel.contains('\\'));
}

#[test]
fn test_token_in_prepended_header_is_substituted() -> Result<()> {
  let temp_dir = tempdir()?;

  // the token lives in the header itself; substitution runs after the
  // header write, so each file ends up naming its own path
  let header_path = temp_dir.path().join("header.txt");
  fs::write(&header_path, "# Project: path/to/file.rb\n")?;

  let base_dir = temp_dir.path().join("proj");
  fs::create_dir_all(base_dir.join("lib"))?;
  fs::write(base_dir.join("lib/a.rb"), "puts 'a'\n")?;
  fs::write(base_dir.join("lib/b.rb"), "puts 'b'\n")?;

  let config = ProcessorConfig {
    template_token: Some("path/to/file.rb".to_string()),
    ..ProcessorConfig::new(header_path, slashed(&base_dir), vec!["lib/*.rb".to_string()])
  };
  let processor = Processor::new(config)?;
  let outcome = processor.run()?;

  assert!(outcome.reports.iter().all(|r| r.path_rewritten));
  assert_eq!(
    fs::read_to_string(base_dir.join("lib/a.rb"))?,
    "# Project: lib/a.rb\nputs 'a'\n"
  );
  assert_eq!(
    fs::read_to_string(base_dir.join("lib/b.rb"))?,
    "# Project: lib/b.rb\nputs 'b'\n"
  );
  Ok(())
}

#[test]
fn test_file_without_token_is_reported_unrewritten() -> Result<()> {
  let temp_dir = tempdir()?;

  let header_path = temp_dir.path().join("header.txt");
  fs::write(&header_path, "# LICENSE\n")?;

  let base_dir = temp_dir.path().join("proj");
  fs::create_dir_all(&base_dir)?;
  fs::write(base_dir.join("a.rb"), "puts 'a'\n")?;

  let config = ProcessorConfig {
    template_token: Some("path/to/file.rb".to_string()),
    ..ProcessorConfig::new(header_path, slashed(&base_dir), vec!["*.rb".to_string()])
  };
  let processor = Processor::new(config)?;
  let outcome = processor.run()?;

  assert_eq!(outcome.reports.len(), 1);
  assert!(!outcome.reports[0].path_rewritten);
  assert_eq!(fs::read_to_string(base_dir.join("a.rb"))?, "# LICENSE\nputs 'a'\n");
  Ok(())
}
