//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::sync::Once;

static INIT: Once = Once::new();

/// Install a tracing subscriber once per test binary.
///
/// Run with `RUST_LOG=debug cargo test -- --nocapture` to see the table's
/// load/save/skip events while debugging a failing test.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}
