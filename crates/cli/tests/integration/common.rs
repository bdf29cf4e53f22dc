//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Isolated test environment.
///
/// Each test gets its own temporary directory used as the working directory
/// and as the user config home, so no selection file outside it is found.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  /// Write a file relative to the temp directory.
  pub fn write_file(&self, relative_path: &str, content: &str) -> PathBuf {
    let path = self.temp.path().join(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
  }

  pub fn path(&self, relative_path: &str) -> PathBuf {
    self.temp.path().join(relative_path)
  }

  /// A hemeconf command running inside this environment.
  pub fn hemeconf_cmd(&self) -> Command {
    let mut cmd = cargo_bin_cmd!("hemeconf");
    cmd
      .current_dir(self.temp.path())
      .env_remove("HEMECONF_CONFIG")
      .env_remove("RUST_LOG")
      .env("XDG_CONFIG_HOME", self.temp.path().join("config"))
      .env("HOME", self.temp.path());
    cmd
  }
}
