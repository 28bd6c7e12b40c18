use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

// Helper function to create a test environment
fn setup_test_environment() -> Result<(tempfile::TempDir, PathBuf, PathBuf)> {
  let temp_dir = tempdir()?;

  // Create the header file outside the base directory
  let header_path = temp_dir.path().join("header.txt");
  fs::write(&header_path, "# LICENSE\n")?;

  // Create a test directory structure
  let base_dir = temp_dir.path().join("proj");
  fs::create_dir_all(base_dir.join("src"))?;
  fs::write(base_dir.join("a.py"), "print('a')\n")?;
  fs::write(base_dir.join("b.py"), "print('b')\n")?;
  fs::write(base_dir.join("c.txt"), "not code\n")?;
  fs::write(base_dir.join("src/lib.py"), "print('lib')\n")?;

  Ok((temp_dir, header_path, base_dir))
}

#[test]
fn test_prepends_header_to_matching_files() -> Result<()> {
  let (_temp_dir, header_path, base_dir) = setup_test_environment()?;

  Command::cargo_bin("headstamp")?
    .arg(&header_path)
    .arg(&base_dir)
    .args(["--add", "*.py"])
    .args(["--colors", "never"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Prepending header to 2 files"));

  assert_eq!(fs::read_to_string(base_dir.join("a.py"))?, "# LICENSE\nprint('a')\n");
  assert_eq!(fs::read_to_string(base_dir.join("b.py"))?, "# LICENSE\nprint('b')\n");

  // files outside the pattern stay untouched
  assert_eq!(fs::read_to_string(base_dir.join("c.txt"))?, "not code\n");
  assert_eq!(fs::read_to_string(base_dir.join("src/lib.py"))?, "print('lib')\n");
  Ok(())
}

#[test]
fn test_recursive_pattern_reaches_nested_files() -> Result<()> {
  let (_temp_dir, header_path, base_dir) = setup_test_environment()?;

  Command::cargo_bin("headstamp")?
    .arg(&header_path)
    .arg(&base_dir)
    .args(["--add", "**/*.py"])
    .assert()
    .success();

  assert_eq!(
    fs::read_to_string(base_dir.join("src/lib.py"))?,
    "# LICENSE\nprint('lib')\n"
  );
  Ok(())
}

#[test]
fn test_rm_pattern_excludes_files() -> Result<()> {
  let (_temp_dir, header_path, base_dir) = setup_test_environment()?;

  Command::cargo_bin("headstamp")?
    .arg(&header_path)
    .arg(&base_dir)
    .args(["--add", "*.py"])
    .args(["--rm", "b.py"])
    .assert()
    .success();

  assert_eq!(fs::read_to_string(base_dir.join("a.py"))?, "# LICENSE\nprint('a')\n");
  assert_eq!(fs::read_to_string(base_dir.join("b.py"))?, "print('b')\n");
  Ok(())
}

#[test]
fn test_zero_matches_is_a_reported_no_op() -> Result<()> {
  let (_temp_dir, header_path, base_dir) = setup_test_environment()?;

  Command::cargo_bin("headstamp")?
    .arg(&header_path)
    .arg(&base_dir)
    .args(["--add", "nomatch*.xyz"])
    .args(["--colors", "never"])
    .assert()
    .success()
    .stdout(predicate::str::contains("No files matched"));

  // no writes occurred
  assert_eq!(fs::read_to_string(base_dir.join("a.py"))?, "print('a')\n");
  Ok(())
}

#[test]
fn test_missing_header_file_is_a_config_error() -> Result<()> {
  let (temp_dir, _header_path, base_dir) = setup_test_environment()?;

  Command::cargo_bin("headstamp")?
    .arg(temp_dir.path().join("absent.txt"))
    .arg(&base_dir)
    .args(["--add", "*.py"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("header file not found"));

  // a configuration error performs no mutation
  assert_eq!(fs::read_to_string(base_dir.join("a.py"))?, "print('a')\n");
  Ok(())
}

#[test]
fn test_base_dir_must_be_a_directory() -> Result<()> {
  let (_temp_dir, header_path, base_dir) = setup_test_environment()?;

  Command::cargo_bin("headstamp")?
    .arg(&header_path)
    .arg(base_dir.join("a.py"))
    .args(["--add", "*.py"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("base directory"));

  assert_eq!(fs::read_to_string(base_dir.join("a.py"))?, "print('a')\n");
  Ok(())
}

#[test]
fn test_at_least_one_add_pattern_is_required() -> Result<()> {
  let (_temp_dir, header_path, base_dir) = setup_test_environment()?;

  Command::cargo_bin("headstamp")?
    .arg(&header_path)
    .arg(&base_dir)
    .assert()
    .failure()
    .stderr(predicate::str::contains("--add"));

  assert_eq!(fs::read_to_string(base_dir.join("a.py"))?, "print('a')\n");
  Ok(())
}

#[test]
fn test_path_substitution_rewrites_template_token() -> Result<()> {
  let temp_dir = tempdir()?;

  let header_path = temp_dir.path().join("header.txt");
  fs::write(&header_path, "# Source: path/to/file.rb\n")?;

  let base_dir = temp_dir.path().join("proj");
  fs::create_dir_all(base_dir.join("lib"))?;
  fs::write(base_dir.join("lib/a.rb"), "puts 'a'\n")?;

  Command::cargo_bin("headstamp")?
    .arg(&header_path)
    .arg(&base_dir)
    .args(["--add", "lib/*.rb"])
    .args(["--path", "path/to/file.rb"])
    .assert()
    .success();

  assert_eq!(
    fs::read_to_string(base_dir.join("lib/a.rb"))?,
    "# Source: lib/a.rb\nputs 'a'\n"
  );
  Ok(())
}

#[test]
fn test_verbose_lists_each_processed_file() -> Result<()> {
  let (_temp_dir, header_path, base_dir) = setup_test_environment()?;

  Command::cargo_bin("headstamp")?
    .arg(&header_path)
    .arg(&base_dir)
    .args(["--add", "*.py"])
    .arg("--verbose")
    .args(["--colors", "never"])
    .assert()
    .success()
    .stderr(predicate::str::contains("Identified 2 file(s)"))
    .stderr(predicate::str::contains("Prepended header to:"))
    .stderr(predicate::str::contains("a.py"));
  Ok(())
}

#[test]
fn test_quiet_mode_is_silent_on_success() -> Result<()> {
  let (_temp_dir, header_path, base_dir) = setup_test_environment()?;

  Command::cargo_bin("headstamp")?
    .arg(&header_path)
    .arg(&base_dir)
    .args(["--add", "*.py"])
    .arg("--quiet")
    .assert()
    .success()
    .stdout(predicate::str::is_empty());

  assert_eq!(fs::read_to_string(base_dir.join("a.py"))?, "# LICENSE\nprint('a')\n");
  Ok(())
}

#[test]
fn test_version_flag() -> Result<()> {
  Command::cargo_bin("headstamp")?
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains("headstamp"));
  Ok(())
}

#[test]
fn test_help_documents_the_pattern_flags() -> Result<()> {
  Command::cargo_bin("headstamp")?
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("--add"))
    .stdout(predicate::str::contains("--rm"))
    .stdout(predicate::str::contains("--path"));
  Ok(())
}

#[test]
fn test_running_twice_stacks_the_header() -> Result<()> {
  // No idempotence checking: a second run prepends a second copy
  let (_temp_dir, header_path, base_dir) = setup_test_environment()?;

  for _ in 0..2 {
    Command::cargo_bin("headstamp")?
      .arg(&header_path)
      .arg(&base_dir)
      .args(["--add", "a.py"])
      .assert()
      .success();
  }

  assert_eq!(
    fs::read_to_string(base_dir.join("a.py"))?,
    "# LICENSE\n# LICENSE\nprint('a')\n"
  );
  Ok(())
}
