//! CI environment snapshot
//!
//! The classification core is a pure function; ambient environment lookups
//! happen only here, once, at the process edge. The snapshot distinguishes
//! three build modes: pull request (`pr_head` set), branch build (`branch`
//! set), and tag build (neither set).

use std::env;

/// Immutable snapshot of the CI signals relevant to identity resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CiSignals {
  /// Pull-request head branch name (non-empty means a PR build)
  pub pr_head: Option<String>,

  /// Branch short name for branch-triggered builds
  ///
  /// Set-but-empty still selects branch mode; the classifier normalizes
  /// the empty name to `dev`.
  pub branch: Option<String>,
}

impl CiSignals {
  /// Capture signals from the GitHub Actions environment
  ///
  /// `GITHUB_HEAD_REF` carries the PR head branch. `GITHUB_REF` is the
  /// full ref that triggered the build; a `refs/tags/` value means a tag
  /// build, anything else means a branch build whose short name is in
  /// `GITHUB_REF_NAME`.
  pub fn from_env() -> Self {
    let pr_head = env::var("GITHUB_HEAD_REF").ok().filter(|b| !b.is_empty());

    let branch = match env::var("GITHUB_REF") {
      Ok(full_ref) if !full_ref.starts_with("refs/tags/") => {
        Some(env::var("GITHUB_REF_NAME").unwrap_or_default())
      }
      _ => None,
    };

    Self { pr_head, branch }
  }

  /// Signals for a tag build (no PR, no branch trigger)
  #[allow(dead_code)] // Constructors below back the classification tests
  pub fn none() -> Self {
    Self::default()
  }

  /// Signals for a pull-request build
  #[allow(dead_code)]
  pub fn pull_request(head: impl Into<String>) -> Self {
    Self {
      pr_head: Some(head.into()),
      branch: None,
    }
  }

  /// Signals for a branch-triggered build
  #[allow(dead_code)]
  pub fn branch_build(name: impl Into<String>) -> Self {
    Self {
      pr_head: None,
      branch: Some(name.into()),
    }
  }
}
