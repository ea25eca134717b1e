//! Integration tests for the subgraph-dash CLI.
//!
//! These tests run the compiled binary and assert on its output. Everything
//! is pure computation, so no network or fixtures are involved.
//!
//! ```bash
//! cargo test -p subgraph-dash-cli --test integration
//! ```

mod integration {
    pub mod helpers;
    pub mod cli_validation_tests;
    pub mod query_command_tests;
    pub mod resolve_tests;
}
