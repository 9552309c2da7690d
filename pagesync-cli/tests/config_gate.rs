//! Startup configuration gate: missing credentials must abort before any
//! watch is established, naming the variable that is missing.

use assert_cmd::Command;
use predicates::prelude::*;

fn pagesync() -> Command {
    let mut cmd = Command::cargo_bin("pagesync").expect("pagesync binary");
    // Drop any real credentials inherited from the test environment.
    cmd.env_remove("SHOPIFY_APP_KEY")
        .env_remove("SHOPIFY_APP_SECRET")
        .env_remove("SHOPIFY_STORE");
    cmd
}

#[test]
fn watch_refuses_to_start_without_credentials() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    pagesync()
        .current_dir(dir.path())
        .arg("watch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("SHOPIFY_APP_KEY"));
}

#[test]
fn single_missing_variable_is_named() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    pagesync()
        .current_dir(dir.path())
        .env("SHOPIFY_APP_KEY", "key")
        .env("SHOPIFY_APP_SECRET", "secret")
        .arg("watch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("SHOPIFY_STORE"));
}

#[test]
fn push_requires_credentials_too() {
    pagesync()
        .args(["push", "about.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SHOPIFY_APP_KEY"));
}

#[test]
fn credentials_check_precedes_watch_setup() {
    // With credentials present, the next gate is the watch directory; the
    // process must still exit before watching anything.
    pagesync()
        .env("SHOPIFY_APP_KEY", "key")
        .env("SHOPIFY_APP_SECRET", "secret")
        .env("SHOPIFY_STORE", "acme")
        .args(["watch", "--dir", "/nonexistent/pagesync-test-root"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot resolve watch directory"));
}
