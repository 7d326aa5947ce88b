//! Core engine for release-identity resolution
//!
//! - **channel**: branch classification (`main` / `vN` / `dev`)
//! - **ci**: CI provider environment export
//! - **error**: error types with contextual help messages
//! - **identity**: the resolved release identity and its memoized load
//! - **permalink**: permalink derivation from channel and tag state
//! - **signals**: immutable snapshot of CI environment signals
//! - **vcs**: git queries via system git (SystemGit)

pub mod channel;
pub mod ci;
pub mod error;
pub mod identity;
pub mod permalink;
pub mod signals;
pub mod vcs;
