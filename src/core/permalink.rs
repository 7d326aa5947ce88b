//! Permalink derivation: the stable alias a build publishes under
//!
//! Combines tag exactness with the classified channel to produce aliases
//! like `latest`, `canary`, `latest-v2`, or `canary-dev`.

use crate::core::channel;
use crate::core::signals::CiSignals;

const RELEASE_PREFIX: &str = "release/";

/// Resolve the permalink alias and the tagged-release flag
///
/// Pull requests always resolve to `dev` and never count as tagged
/// releases, regardless of tag state. `tag_exact_match` holds when the
/// current commit is exactly matched by a `v*` tag.
pub fn resolve(refs: &[String], signals: &CiSignals, tag_exact_match: bool) -> (String, bool) {
  // Use dev for pull requests
  if signals.pr_head.as_deref().is_some_and(|head| !head.is_empty()) {
    return ("dev".to_string(), false);
  }

  // Use latest for tagged commits
  let (prefix, tagged_release) = if tag_exact_match {
    ("latest", true)
  } else {
    ("canary", false)
  };

  // The current branch name, or the name of the branch we tagged from
  let branch = channel::classify(refs, signals);

  match branch.as_str() {
    "main" => (prefix.to_string(), tagged_release),
    _ => {
      let channel = branch.strip_prefix(RELEASE_PREFIX).unwrap_or(&branch);
      (format!("{}-{}", prefix, channel), tagged_release)
    }
  }
}
