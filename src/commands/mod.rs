//! CLI commands for relmark
//!
//! - **resolve**: print the full release identity (table or JSON), with
//!   optional export into the CI environment
//! - **permalink**: print just the permalink alias for pipeline use
//! - **should_publish**: exit-code gate for permalink publishing

mod permalink;
mod resolve;
mod should_publish;

pub use permalink::run_permalink;
pub use resolve::run_resolve;
pub use should_publish::run_should_publish;
