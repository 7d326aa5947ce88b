//! Integration test entrypoint
//!
//! Declared as a single test target in Cargo.toml so all integration
//! tests share the helpers module.


mod test_resolve;
