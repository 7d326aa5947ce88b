use std::path::Path;

use crate::core::error::MarkResult;
use crate::core::identity::ReleaseIdentity;

/// Run the should-publish command
///
/// Prints `true` or `false` and exits non-zero when the permalink should
/// not be published, so CI steps can gate on the exit code. Per-version
/// aliases like `latest-v1` are not published.
pub fn run_should_publish(repo_path: &Path) -> MarkResult<()> {
  let identity = ReleaseIdentity::load(repo_path)?;
  let publish = identity.should_publish_permalink();

  println!("{}", publish);

  if !publish {
    std::process::exit(1);
  }

  Ok(())
}
