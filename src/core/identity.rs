//! The resolved release identity and its once-per-process load
//!
//! `ReleaseIdentity::resolve` is a pure function over already-collected
//! inputs; `load` gathers those inputs from a real repository and the CI
//! environment, computing the identity at most once per process.

use crate::core::error::MarkResult;
use crate::core::permalink;
use crate::core::signals::CiSignals;
use crate::core::vcs::SystemGit;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

static IDENTITY: OnceLock<ReleaseIdentity> = OnceLock::new();

/// A build's release identity: how its artifacts get labeled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseIdentity {
  /// Version alias the build publishes under, e.g. `latest` or `canary-v1`
  pub permalink: String,

  /// Display version: the tag, or tag plus commit distance
  pub version: String,

  /// Short hash of the current commit
  pub commit: String,

  /// Whether the build is for a versioned tag
  pub is_tagged_release: bool,
}

impl ReleaseIdentity {
  /// Pure resolution over already-collected inputs
  pub fn resolve(
    refs: &[String],
    signals: &CiSignals,
    tag_exact_match: bool,
    version: String,
    commit: String,
  ) -> Self {
    let (permalink, is_tagged_release) = permalink::resolve(refs, signals, tag_exact_match);

    Self {
      permalink,
      version,
      commit,
      is_tagged_release,
    }
  }

  /// Gather inputs from the repository and CI environment, then resolve
  pub fn from_repo(git: &SystemGit) -> Self {
    let refs = git.refs_containing_head();
    let signals = CiSignals::from_env();

    Self::resolve(
      &refs,
      &signals,
      git.has_exact_version_tag(),
      git.describe_version(),
      git.short_commit(),
    )
  }

  /// Resolve the identity for the repository at `repo_path`, at most once
  /// per process
  ///
  /// Later calls return the cached identity without re-querying git.
  pub fn load(repo_path: &Path) -> MarkResult<&'static Self> {
    if let Some(identity) = IDENTITY.get() {
      return Ok(identity);
    }

    let git = SystemGit::open(repo_path)?;
    Ok(IDENTITY.get_or_init(|| Self::from_repo(&git)))
  }

  /// Whether this permalink should be published as an alias
  ///
  /// For now don't publish canary-v1 or latest-v1 to keep things simpler.
  pub fn should_publish_permalink(&self) -> bool {
    self.permalink == "canary" || self.permalink == "latest"
  }
}
