//! Deployment functions used across test cases.

use std::path::PathBuf;

/// Directory holding the checked-in configuration.
pub const STATIC_DEPLOYMENT_PATH: &str = "static/";

/// Find the project root via the crate root provided by `cargo test`,
/// and resolve a path relative to it.
/// This depends on the convention that this crate lives in `/crates/tests/tests-common`
/// and will break in the unlikely case that we change this
pub fn get_path_from_project_root(deployment_path: &str) -> PathBuf {
    let mut d = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    d.push("../../../");
    d.push(deployment_path);
    d
}
