//! CI provider environment export
//!
//! GitHub Actions exposes `GITHUB_ENV`, a file whose `KEY=VALUE` lines
//! become environment variables for later workflow steps. Exporting the
//! resolved identity there lets the rest of the pipeline reference
//! `PERMALINK` and `VERSION` without re-running resolution.

use crate::core::error::{MarkResult, ResultExt};
use std::fs::OpenOptions;
use std::io::Write;

/// Export a variable to the detected CI provider's environment
///
/// Returns `false` without side effects when no provider is detected;
/// running outside CI is not an error.
pub fn export_env(key: &str, value: &str) -> MarkResult<bool> {
  let Some(env_file) = std::env::var_os("GITHUB_ENV") else {
    return Ok(false);
  };

  let mut file = OpenOptions::new()
    .append(true)
    .create(true)
    .open(&env_file)
    .with_context(|| format!("Failed to open CI environment file: {}", env_file.display()))?;

  writeln!(file, "{}={}", key, value).context("Failed to write CI environment file")?;

  Ok(true)
}
