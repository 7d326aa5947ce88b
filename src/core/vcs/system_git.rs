//! System git backend for release-identity queries
//!
//! Uses git plumbing commands with an isolated subprocess environment.
//! Every query degrades to a well-defined default instead of failing:
//! identity resolution must produce an answer even in shallow clones,
//! untagged repositories, and detached-HEAD checkouts.

use crate::core::error::{GitError, MarkError, MarkResult, ResultExt};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Version reported for repositories without any tags
pub const FALLBACK_VERSION: &str = "v0.0.0";

/// Commit hash reported when HEAD cannot be resolved
pub const FALLBACK_COMMIT: &str = "0000000";

/// Git backend using system git (zero crate dependencies)
pub struct SystemGit {
  /// Repository working directory
  repo_path: PathBuf,
}

impl SystemGit {
  /// Open a git repository
  ///
  /// This performs ONE subprocess call to validate the repository.
  pub fn open(path: &Path) -> MarkResult<Self> {
    let output = Command::new("git")
      .arg("-C")
      .arg(path)
      .args(["rev-parse", "--show-toplevel"])
      .output()
      .context("Failed to execute git rev-parse")?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      if stderr.contains("not a git repository") {
        return Err(MarkError::Git(GitError::RepoNotFound {
          path: path.to_path_buf(),
        }));
      }
      return Err(MarkError::Git(GitError::CommandFailed {
        command: "git rev-parse --show-toplevel".to_string(),
        stderr: stderr.to_string(),
      }));
    }

    Ok(Self {
      repo_path: path.to_path_buf(),
    })
  }

  /// Short hash of the current commit, `0000000` when HEAD is unresolvable
  pub fn short_commit(&self) -> String {
    let output = self.git_cmd().args(["rev-parse", "--short", "HEAD"]).output();

    match output {
      Ok(out) if out.status.success() => {
        let commit = String::from_utf8_lossy(&out.stdout).trim().to_string();
        if commit.is_empty() {
          FALLBACK_COMMIT.to_string()
        } else {
          commit
        }
      }
      _ => FALLBACK_COMMIT.to_string(),
    }
  }

  /// Description of the current commit, e.g. `v0.30.1` (tagged) or
  /// `v0.30.1-32-gfe72ff73` (commits past the tag)
  ///
  /// Repositories without any tags report `v0.0.0`.
  pub fn describe_version(&self) -> String {
    let output = self.git_cmd().args(["describe", "--tags"]).output();

    match output {
      Ok(out) if out.status.success() => {
        let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
        if version.is_empty() {
          FALLBACK_VERSION.to_string()
        } else {
          version
        }
      }
      _ => FALLBACK_VERSION.to_string(),
    }
  }

  /// Full names of all refs containing HEAD (branches, remotes, and tags)
  ///
  /// Returns an empty list when the query fails (e.g. unborn HEAD).
  pub fn refs_containing_head(&self) -> Vec<String> {
    let output = self
      .git_cmd()
      .args(["for-each-ref", "--contains", "HEAD", "--format=%(refname)"])
      .output();

    match output {
      Ok(out) if out.status.success() => String::from_utf8_lossy(&out.stdout)
        .lines()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect(),
      _ => Vec::new(),
    }
  }

  /// Whether HEAD is exactly matched by a `v*` tag
  ///
  /// A failed query or no matching tag is the negative case, not an error.
  pub fn has_exact_version_tag(&self) -> bool {
    self
      .git_cmd()
      .args(["describe", "--tags", "--match=v*", "--exact-match"])
      .output()
      .map(|out| out.status.success())
      .unwrap_or(false)
  }

  /// Create a safe git command with isolated environment
  ///
  /// - Sets working directory to repo path
  /// - Clears environment variables
  /// - Whitelists only PATH and HOME
  /// - Adds safe configuration overrides
  fn git_cmd(&self) -> Command {
    let mut cmd = Command::new("git");

    cmd.arg("-C").arg(&self.repo_path);

    // Isolated environment (don't trust global config)
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
      cmd.env("PATH", path);
    }
    if let Ok(home) = std::env::var("HOME") {
      cmd.env("HOME", home);
    }

    // Force safe behavior (override user config)
    cmd.arg("-c").arg("advice.detachedHead=false");
    cmd.arg("-c").arg("core.quotePath=false");

    cmd
  }
}
