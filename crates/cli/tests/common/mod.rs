//! Shared test utilities for the `redditor` binary tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//!
//! Invariants / Assumptions:
//! - No `REDDIT_*` variable from the host leaks into a test run.
//! - `REDDIT_ACCESS_TOKEN` is set to "test-token" unless overridden.

use assert_cmd::Command;

#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-token";

/// Returns a hermetic `redditor` command.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - The config file is an empty checked-in fixture, never the host's.
/// - Other `REDDIT_*` variables are cleared.
pub fn redditor_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("redditor");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("REDDIT_ACCESS_TOKEN", TEST_TOKEN);

    cmd.env("REDDIT_CONFIG_PATH", empty_config_path());

    cmd.env_remove("REDDIT_BASE_URL")
        .env_remove("REDDIT_USER_AGENT")
        .env_remove("REDDIT_TIMEOUT");

    cmd
}

pub fn empty_config_path() -> String {
    format!("{}/tests/fixtures/empty_config.json", env!("CARGO_MANIFEST_DIR"))
}

/// Returns a hermetic `redditor` command pointed at `base_url`.
#[allow(dead_code)]
pub fn redditor_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = redditor_cmd();
    cmd.env("REDDIT_BASE_URL", base_url);
    cmd
}
