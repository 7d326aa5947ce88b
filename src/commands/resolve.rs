use std::path::Path;

use crate::core::ci;
use crate::core::error::MarkResult;
use crate::core::identity::ReleaseIdentity;

/// Run the resolve command
pub fn run_resolve(repo_path: &Path, json: bool, export: bool) -> MarkResult<()> {
  let identity = ReleaseIdentity::load(repo_path)?;

  if json {
    println!("{}", serde_json::to_string_pretty(identity)?);
  } else {
    print_identity(identity);
  }

  if export {
    if ci::export_env("PERMALINK", &identity.permalink)? {
      ci::export_env("VERSION", &identity.version)?;
    } else {
      eprintln!("No CI provider detected; skipping environment export");
    }
  }

  Ok(())
}

fn print_identity(identity: &ReleaseIdentity) {
  println!("Permalink:      {}", identity.permalink);
  println!("Version:        {}", identity.version);
  println!("Commit:         {}", identity.commit);
  println!("Tagged Release: {}", identity.is_tagged_release);
}
