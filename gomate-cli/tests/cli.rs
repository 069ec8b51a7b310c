//! End-to-end tests for the gomate binary in `--mock` mode.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::{tempdir, TempDir};

fn gomate(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gomate").unwrap();
    cmd.arg("--mock").arg("--data-dir").arg(data_dir);
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Data dir whose config fetches every candidate, so searches are predictable.
fn full_catalog_dir() -> TempDir {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("gomate.toml"),
        "[destinations]\nsample_size = 15\nseed = 1\n",
    )
    .unwrap();
    dir
}

#[test]
fn status_on_fresh_data_dir() {
    let dir = tempdir().unwrap();

    gomate(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in"))
        .stdout(predicate::str::contains("Theme:     light"))
        .stdout(predicate::str::contains("Favorites: 0"));
}

#[test]
fn login_persists_across_runs() {
    let dir = tempdir().unwrap();

    gomate(dir.path())
        .args(["login", "--username", "emilys", "--password", "emilyspass"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as Emily Johnson"));

    gomate(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("[E] Emily Johnson"));

    assert!(dir.path().join("state.json").exists());
}

#[test]
fn wrong_password_fails_with_server_message() {
    let dir = tempdir().unwrap();

    gomate(dir.path())
        .args(["login", "-u", "emilys", "-p", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid credentials"));

    gomate(dir.path())
        .arg("status")
        .assert()
        .stdout(predicate::str::contains("Not signed in"));
}

#[test]
fn register_then_logout() {
    let dir = tempdir().unwrap();

    gomate(dir.path())
        .args([
            "register",
            "--username",
            "newbie",
            "--email",
            "newbie@example.com",
            "--first-name",
            "New",
            "--last-name",
            "Bie",
            "--password",
            "secret1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered and logged in as New Bie"));

    gomate(dir.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));

    gomate(dir.path())
        .arg("status")
        .assert()
        .stdout(predicate::str::contains("Not signed in"));
}

#[test]
fn theme_is_remembered() {
    let dir = tempdir().unwrap();

    gomate(dir.path())
        .args(["theme", "dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"));

    gomate(dir.path())
        .arg("status")
        .assert()
        .stdout(predicate::str::contains("Theme:     dark"));

    gomate(dir.path())
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"));
}

#[test]
fn destinations_lists_ten() {
    let dir = tempdir().unwrap();

    let output = gomate(dir.path())
        .args(["--seed", "42", "destinations"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(stdout.lines().count(), 10);
    assert!(stdout.contains("dest-1 "));
    assert!(stdout.contains("dest-10"));
}

#[test]
fn same_seed_same_listing() {
    let dir = tempdir().unwrap();

    let run = || {
        gomate(dir.path())
            .args(["--seed", "9", "destinations"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };

    assert_eq!(run(), run());
}

#[test]
fn search_filters_by_region() {
    let dir = full_catalog_dir();

    gomate(dir.path())
        .args(["destinations", "--search", "oceania"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Australia"))
        .stdout(predicate::str::contains("France").not());
}

#[test]
fn favorite_toggles_and_persists() {
    let dir = tempdir().unwrap();

    gomate(dir.path())
        .args(["favorite", "japan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Japan to favorites"));

    gomate(dir.path())
        .arg("favorites")
        .assert()
        .success()
        .stdout(predicate::str::contains("Japan"));

    gomate(dir.path())
        .args(["favorite", "japan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed Japan from favorites"));

    gomate(dir.path())
        .arg("favorites")
        .assert()
        .stdout(predicate::str::contains("No favorites yet."));
}

#[test]
fn unknown_favorite_fails() {
    let dir = tempdir().unwrap();

    gomate(dir.path())
        .args(["favorite", "atlantis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no destination found for \"atlantis\""));
}

#[test]
fn favorites_from_different_runs_do_not_collide() {
    let dir = tempdir().unwrap();

    for (seed, name) in [("1", "japan"), ("2", "mexico"), ("3", "brazil")] {
        gomate(dir.path())
            .args(["--seed", seed, "favorite", name])
            .assert()
            .success()
            .stdout(predicate::str::contains("Added"));
    }

    gomate(dir.path())
        .arg("favorites")
        .assert()
        .success()
        .stdout(predicate::str::contains("Japan"))
        .stdout(predicate::str::contains("Mexico"))
        .stdout(predicate::str::contains("Brazil"));
}

#[test]
fn favorite_by_stale_id_is_refused() {
    let dir = tempdir().unwrap();

    gomate(dir.path())
        .args(["favorite", "dest-4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("use the name"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("gomate.toml"), "[destinations\n").unwrap();

    gomate(dir.path())
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config file"));
}

#[test]
fn explicit_config_path() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "[storage]\nfile = \"custom-state.json\"\n").unwrap();

    gomate(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["theme", "dark"])
        .assert()
        .success();

    assert!(dir.path().join("custom-state.json").exists());
    assert!(!dir.path().join("state.json").exists());
}
