//! Integration tests for `relmark resolve`

use crate::helpers::{TestRepo, run_relmark, stdout_of};
use anyhow::Result;

#[test]
fn test_tagged_main_resolves_to_latest() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.tag("v1.0.0")?;

  let output = run_relmark(&repo.path, &["resolve"], &[])?;
  let stdout = stdout_of(&output);

  assert!(stdout.contains("Permalink:      latest"), "stdout: {}", stdout);
  assert!(stdout.contains("Version:        v1.0.0"), "stdout: {}", stdout);
  assert!(stdout.contains("Tagged Release: true"), "stdout: {}", stdout);

  Ok(())
}

#[test]
fn test_commits_past_tag_resolve_to_canary() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.tag("v1.0.0")?;
  repo.commit_file("feature.txt", "wip", "feat: more work")?;

  let output = run_relmark(&repo.path, &["resolve"], &[])?;
  let stdout = stdout_of(&output);

  assert!(stdout.contains("Permalink:      canary"), "stdout: {}", stdout);
  // describe reports tag plus distance, e.g. v1.0.0-1-gabc1234
  assert!(stdout.contains("Version:        v1.0.0-1-g"), "stdout: {}", stdout);
  assert!(stdout.contains("Tagged Release: false"), "stdout: {}", stdout);

  Ok(())
}

#[test]
fn test_untagged_repo_falls_back_to_defaults() -> Result<()> {
  let repo = TestRepo::new()?;

  let output = run_relmark(&repo.path, &["resolve"], &[])?;
  let stdout = stdout_of(&output);

  assert!(stdout.contains("Permalink:      canary"), "stdout: {}", stdout);
  assert!(stdout.contains("Version:        v0.0.0"), "stdout: {}", stdout);
  assert!(stdout.contains("Tagged Release: false"), "stdout: {}", stdout);

  Ok(())
}

#[test]
fn test_tagged_release_branch_gets_channel_suffix() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.checkout_new_branch("release/v1")?;
  repo.commit_file("fix.txt", "patch", "fix: backport")?;
  repo.tag("v1.0.1")?;

  let output = run_relmark(&repo.path, &["resolve"], &[])?;
  let stdout = stdout_of(&output);

  assert!(stdout.contains("Permalink:      latest-v1"), "stdout: {}", stdout);
  assert!(stdout.contains("Tagged Release: true"), "stdout: {}", stdout);

  Ok(())
}

#[test]
fn test_detached_tag_checkout_on_main_is_latest() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.tag("v1.0.0")?;
  repo.checkout("v1.0.0")?;

  // Detached HEAD; main still contains the commit, so the ref scan finds it
  let output = run_relmark(&repo.path, &["resolve"], &[])?;
  let stdout = stdout_of(&output);

  assert!(stdout.contains("Permalink:      latest"), "stdout: {}", stdout);

  Ok(())
}

#[test]
fn test_feature_branch_commit_is_canary_dev() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.checkout_new_branch("feature-x")?;
  repo.commit_file("feature.txt", "wip", "feat: new thing")?;

  // main no longer contains HEAD, so no channel branch is found
  let output = run_relmark(&repo.path, &["resolve"], &[])?;
  let stdout = stdout_of(&output);

  assert!(stdout.contains("Permalink:      canary-dev"), "stdout: {}", stdout);

  Ok(())
}

#[test]
fn test_pr_signal_short_circuits_to_dev() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.tag("v1.0.0")?;

  // PR builds are never tagged releases, even on a tagged commit
  let output = run_relmark(&repo.path, &["resolve"], &[("GITHUB_HEAD_REF", "feature-x")])?;
  let stdout = stdout_of(&output);

  assert!(stdout.contains("Permalink:      dev"), "stdout: {}", stdout);
  assert!(stdout.contains("Tagged Release: false"), "stdout: {}", stdout);

  Ok(())
}

#[test]
fn test_branch_signal_overrides_ref_scan() -> Result<()> {
  let repo = TestRepo::new()?;

  // Branch-triggered build from a feature branch; refs would say main
  let output = run_relmark(
    &repo.path,
    &["resolve"],
    &[
      ("GITHUB_REF", "refs/heads/feature-x"),
      ("GITHUB_REF_NAME", "feature-x"),
    ],
  )?;
  let stdout = stdout_of(&output);

  assert!(stdout.contains("Permalink:      canary-dev"), "stdout: {}", stdout);

  Ok(())
}

#[test]
fn test_tag_ref_signal_uses_ref_scan() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.tag("v1.0.0")?;

  // A refs/tags/ GITHUB_REF means tag build; the channel comes from the
  // branch containing the tagged commit
  let output = run_relmark(
    &repo.path,
    &["resolve"],
    &[
      ("GITHUB_REF", "refs/tags/v1.0.0"),
      ("GITHUB_REF_NAME", "v1.0.0"),
    ],
  )?;
  let stdout = stdout_of(&output);

  assert!(stdout.contains("Permalink:      latest"), "stdout: {}", stdout);
  assert!(stdout.contains("Tagged Release: true"), "stdout: {}", stdout);

  Ok(())
}

#[test]
fn test_json_output_shape() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.tag("v2.1.0")?;

  let output = run_relmark(&repo.path, &["resolve", "--json"], &[])?;
  let json: serde_json::Value = serde_json::from_str(&stdout_of(&output))?;

  assert_eq!(json["permalink"], "latest");
  assert_eq!(json["version"], "v2.1.0");
  assert_eq!(json["is_tagged_release"], true);
  assert!(json["commit"].as_str().is_some_and(|c| !c.is_empty()));

  Ok(())
}

#[test]
fn test_export_writes_ci_environment_file() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.tag("v1.0.0")?;

  let env_file = repo.path.join("github_env");
  std::fs::write(&env_file, "")?;

  run_relmark(
    &repo.path,
    &["resolve", "--export"],
    &[("GITHUB_ENV", env_file.to_str().unwrap())],
  )?;

  let exported = std::fs::read_to_string(&env_file)?;
  assert!(exported.contains("PERMALINK=latest"), "exported: {}", exported);
  assert!(exported.contains("VERSION=v1.0.0"), "exported: {}", exported);

  Ok(())
}

#[test]
fn test_export_without_provider_is_a_noop() -> Result<()> {
  let repo = TestRepo::new()?;

  let output = run_relmark(&repo.path, &["resolve", "--export"], &[])?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert!(stderr.contains("No CI provider detected"), "stderr: {}", stderr);

  Ok(())
}
