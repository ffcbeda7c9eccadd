//! Process-level checks of the binary's startup path.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn missing_api_key_fails_before_menu() {
    // Empty working directory and home so no dotenv file can supply a key.
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("sharpapi-cli")
        .unwrap()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("SHARP_API_KEY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key not found"))
        .stdout(predicate::str::contains("Which API job test").not());
}

#[test]
fn invalid_poll_interval_is_fatal() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("sharpapi-cli")
        .unwrap()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .env("SHARP_API_KEY", "test-key")
        .env("SHARP_API_POLL_INTERVAL", "often")
        .assert()
        .failure()
        .stderr(predicate::str::contains("SHARP_API_POLL_INTERVAL"));
}
