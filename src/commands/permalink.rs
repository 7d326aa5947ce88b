use std::path::Path;

use crate::core::error::MarkResult;
use crate::core::identity::ReleaseIdentity;

/// Run the permalink command
///
/// Prints the bare permalink alias so pipelines can interpolate it
/// directly, e.g. `image:$(relmark permalink)`.
pub fn run_permalink(repo_path: &Path) -> MarkResult<()> {
  let identity = ReleaseIdentity::load(repo_path)?;
  println!("{}", identity.permalink);
  Ok(())
}
