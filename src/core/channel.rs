//! Branch classification: which release channel a build belongs to
//!
//! Maps the refs containing the current commit plus CI signals to exactly
//! one of three channel names: `main`, `vN` (from a `release/vN` branch),
//! or `dev` for everything else.

use crate::core::signals::CiSignals;

const HEADS_PREFIX: &str = "refs/heads/";
const REMOTE_PREFIX: &str = "refs/remotes/origin/";
const RELEASE_PREFIX: &str = "release/";

/// The channel every non-main, non-release branch collapses into
pub const DEV_CHANNEL: &str = "dev";

/// Classify a build into a channel name
///
/// Precedence, first match wins: pull-request head branch, then the
/// branch-build ref, then a scan of the refs containing the commit
/// (tag builds).
pub fn classify(refs: &[String], signals: &CiSignals) -> String {
  let raw = match (&signals.pr_head, &signals.branch) {
    (Some(pr), _) if !pr.is_empty() => pr.clone(),
    (_, Some(branch)) => branch.clone(),
    _ => scan_refs(refs),
  };

  normalize(&raw)
}

/// Find a channel-naming branch ref among the refs containing the commit
///
/// Multiple refs may contain the same commit (the tag plus the branch it
/// was cut from). Sorting first makes the pick deterministic and puts
/// `main` ahead of `release/v*`. No candidate leaves the name empty.
fn scan_refs(refs: &[String]) -> String {
  let mut sorted: Vec<&String> = refs.iter().collect();
  sorted.sort_unstable();

  for full_ref in sorted {
    // Ignore tags
    if full_ref.ends_with("refs/tags") {
      continue;
    }

    // Only main and release/v* branches name a channel
    if full_ref.ends_with("/main") || full_ref.contains("/release/v") {
      return full_ref.clone();
    }
  }

  String::new()
}

/// Collapse a raw ref or branch name into `main`, `vN`, or `dev`
fn normalize(raw: &str) -> String {
  // refs/heads/main -> main, refs/remotes/origin/release/v2 -> release/v2
  let short = raw
    .strip_prefix(HEADS_PREFIX)
    .or_else(|| raw.strip_prefix(REMOTE_PREFIX))
    .unwrap_or(raw);

  if short != "main" && !short.starts_with("release/v") {
    return DEV_CHANNEL.to_string();
  }

  // release/v1 -> v1
  short.strip_prefix(RELEASE_PREFIX).unwrap_or(short).to_string()
}
