/*! Integration tests for lazyjson.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - value: Tests for the Value handle (construction, navigation, overlays,
 *   materialization, re-encoding, metadata and sharing)
 * - pointer: Tests for the byte-level pointer locator
 * - path: Tests for dotted-path lookup and assignment
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("lazyjson=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod helpers;
mod pointer;
