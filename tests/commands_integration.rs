//! End-to-end CLI tests.
//!
//! These run the `vshop` binary against temp state directories and pin
//! down the observable behavior of every command, including the
//! duplicate policies and language switching.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Build a `vshop` invocation isolated to a temp state directory.
///
/// `VESHOP_CONFIG` points at a nonexistent file so a developer's real
/// config cannot leak into the tests.
fn vshop(state: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vshop").expect("binary builds");
    cmd.arg("--state-dir").arg(state.path().join("state"));
    cmd.env("VESHOP_CONFIG", state.path().join("no-such-config.toml"));
    cmd
}

fn state_dir() -> TempDir {
    TempDir::new().expect("create temp dir")
}

#[test]
fn counts_start_at_zero() {
    let state = state_dir();

    vshop(&state)
        .args(["cart", "count"])
        .assert()
        .success()
        .stdout("0\n");

    vshop(&state)
        .args(["wishlist", "count"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn cart_accumulates_duplicates() {
    let state = state_dir();

    vshop(&state).args(["cart", "add", "1"]).assert().success();
    vshop(&state).args(["cart", "add", "2"]).assert().success();

    vshop(&state)
        .args(["cart", "count"])
        .assert()
        .success()
        .stdout("2\n");

    vshop(&state).args(["cart", "add", "1"]).assert().success();

    vshop(&state)
        .args(["cart", "count"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn wishlist_deduplicates() {
    let state = state_dir();

    vshop(&state)
        .args(["wishlist", "add", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item added to wishlist"));

    // Second add is a silent no-op.
    vshop(&state)
        .args(["wishlist", "add", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added").not());

    vshop(&state)
        .args(["wishlist", "count"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn wishlist_remove_flow() {
    let state = state_dir();

    vshop(&state).args(["wishlist", "add", "1"]).assert().success();
    vshop(&state)
        .args(["wishlist", "remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item removed from wishlist"));

    vshop(&state)
        .args(["wishlist", "count"])
        .assert()
        .success()
        .stdout("0\n");

    // Removing an absent id is a no-op, not an error.
    vshop(&state)
        .args(["wishlist", "remove", "1"])
        .assert()
        .success();
}

#[test]
fn unknown_product_id_is_an_error() {
    let state = state_dir();

    vshop(&state)
        .args(["cart", "add", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No product with id '999'"));

    vshop(&state)
        .args(["cart", "count"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn lang_defaults_to_english_ltr() {
    let state = state_dir();

    vshop(&state)
        .arg("lang")
        .assert()
        .success()
        .stdout("en (ltr)\n");
}

#[test]
fn lang_set_switches_and_persists() {
    let state = state_dir();

    vshop(&state).args(["lang", "set", "ar"]).assert().success();

    vshop(&state)
        .arg("lang")
        .assert()
        .success()
        .stdout("ar (rtl)\n");

    vshop(&state).args(["lang", "set", "en"]).assert().success();

    vshop(&state)
        .arg("lang")
        .assert()
        .success()
        .stdout("en (ltr)\n");
}

#[test]
fn lang_set_is_idempotent() {
    let state = state_dir();

    vshop(&state).args(["lang", "set", "ar"]).assert().success();
    vshop(&state).args(["lang", "set", "ar"]).assert().success();

    vshop(&state)
        .arg("lang")
        .assert()
        .success()
        .stdout("ar (rtl)\n");
}

#[test]
fn lang_set_rejects_unknown_codes() {
    let state = state_dir();

    vshop(&state).args(["lang", "set", "fr"]).assert().failure();
}

#[test]
fn status_shows_badges() {
    let state = state_dir();

    vshop(&state).args(["cart", "add", "1"]).assert().success();
    vshop(&state).args(["wishlist", "add", "2"]).assert().success();

    vshop(&state)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cart: 1"))
        .stdout(predicate::str::contains("Wishlist: 1"))
        .stdout(predicate::str::contains("en (ltr)"));
}

#[test]
fn status_localizes_after_language_switch() {
    let state = state_dir();

    vshop(&state).args(["lang", "set", "ar"]).assert().success();

    vshop(&state)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("السلة"))
        .stdout(predicate::str::contains("ar (rtl)"));
}

#[test]
fn quiet_suppresses_status_output() {
    let state = state_dir();

    vshop(&state)
        .args(["status", "--quiet"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn catalog_lists_all_products() {
    let state = state_dir();

    vshop(&state)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("All Products"))
        .stdout(predicate::str::contains("Wireless Bluetooth Headphones"))
        .stdout(predicate::str::contains("Premium Coffee Machine"));
}

#[test]
fn catalog_filters_by_category() {
    let state = state_dir();

    vshop(&state)
        .args(["catalog", "--category", "home"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Premium Coffee Machine"))
        .stdout(predicate::str::contains("Wireless Bluetooth Headphones").not());
}

#[test]
fn catalog_rejects_unknown_category() {
    let state = state_dir();

    vshop(&state)
        .args(["catalog", "--category", "garden"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn catalog_marks_wishlist_membership() {
    let state = state_dir();

    vshop(&state).args(["wishlist", "add", "1"]).assert().success();

    vshop(&state)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("in wishlist"));
}

#[test]
fn corrupt_cart_record_recovers_to_empty() {
    let state = state_dir();

    vshop(&state).args(["cart", "add", "1"]).assert().success();

    let record = state.path().join("state").join("ve-shop-cart.json");
    std::fs::write(&record, "{broken").expect("corrupt record");

    vshop(&state)
        .args(["cart", "count"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn state_persists_across_invocations() {
    let state = state_dir();

    vshop(&state).args(["cart", "add", "5"]).assert().success();

    vshop(&state)
        .args(["cart", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Premium Coffee Machine"))
        .stdout(predicate::str::contains("449.99"));
}

#[test]
fn completion_generates_script() {
    let state = state_dir();

    vshop(&state)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vshop"));
}
