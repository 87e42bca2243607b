//! Integration tests for the `gom` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gom() -> Command {
    Command::cargo_bin("gom").unwrap()
}

/// Write a one-character catalog so every run presents Leonardo.
fn leonardo_catalog(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("characters.json");
    fs::write(
        &path,
        r#"[{
            "name": "Leonardo da Vinci",
            "category": "GENIUS",
            "biography": "Is a **Genius**. Specifically: he painted the Mona Lisa."
        }]"#,
    )
    .unwrap();
    path
}

// ---------------------------------------------------------------------------
// init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_starter_catalog() {
    let dir = TempDir::new().unwrap();

    gom()
        .arg("init")
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created starter catalog"));

    let catalog = dir.path().join("characters.json");
    assert!(catalog.exists());

    gom()
        .arg("list")
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("Leonardo da Vinci"))
        .stdout(predicate::str::contains("6 characters"));
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    gom().arg("init").arg("--dir").arg(dir.path()).assert().success();
    gom()
        .arg("init")
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

// ---------------------------------------------------------------------------
// list / check
// ---------------------------------------------------------------------------

#[test]
fn list_shows_category_labels() {
    let dir = TempDir::new().unwrap();
    let catalog = leonardo_catalog(&dir);

    gom()
        .arg("list")
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("Genius"))
        .stdout(predicate::str::contains("#0"));
}

#[test]
fn list_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("characters.json");
    fs::write(&path, "[]").unwrap();

    gom()
        .arg("list")
        .arg("--catalog")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("The catalog is empty."));
}

#[test]
fn check_reports_counts() {
    let dir = TempDir::new().unwrap();
    let catalog = leonardo_catalog(&dir);

    gom()
        .arg("check")
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 characters"));
}

#[test]
fn check_missing_file_fails_friendly() {
    let dir = TempDir::new().unwrap();

    gom()
        .arg("check")
        .arg("--catalog")
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no characters available"));
}

#[test]
fn check_malformed_file_fails_friendly() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("characters.json");
    fs::write(&path, "{ definitely not a catalog").unwrap();

    gom()
        .arg("check")
        .arg("--catalog")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no characters available"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_correct_answer() {
    let dir = TempDir::new().unwrap();
    let catalog = leonardo_catalog(&dir);

    gom()
        .arg("play")
        .arg("--catalog")
        .arg(&catalog)
        .arg("--seed")
        .arg("1")
        .write_stdin("1\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Leonardo da Vinci"))
        .stdout(predicate::str::contains("Correct"))
        .stdout(predicate::str::contains("he painted the Mona Lisa."));
}

#[test]
fn play_wrong_answer_names_right_category() {
    let dir = TempDir::new().unwrap();
    let catalog = leonardo_catalog(&dir);

    gom()
        .arg("play")
        .arg("--catalog")
        .arg(&catalog)
        .arg("--seed")
        .arg("1")
        .write_stdin("2\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrong"))
        .stdout(predicate::str::contains("Genius"))
        .stdout(predicate::str::contains("he painted the Mona Lisa."));
}

#[test]
fn play_unrecognized_answer_allows_retry() {
    let dir = TempDir::new().unwrap();
    let catalog = leonardo_catalog(&dir);

    gom()
        .arg("play")
        .arg("--catalog")
        .arg(&catalog)
        .write_stdin("banana\ngenio\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("internal inconsistency"))
        .stdout(predicate::str::contains("Correct"));
}

#[test]
fn play_stop_abandons_the_round() {
    let dir = TempDir::new().unwrap();
    let catalog = leonardo_catalog(&dir);

    gom()
        .arg("play")
        .arg("--catalog")
        .arg(&catalog)
        .write_stdin("stop\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Round abandoned"));
}

#[test]
fn play_empty_catalog_fails_friendly() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("characters.json");
    fs::write(&path, "[]").unwrap();

    gom()
        .arg("play")
        .arg("--catalog")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no characters available"));
}

#[test]
fn play_daily_persists_rotation_state() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("characters.json");
    fs::write(
        &catalog,
        r#"[
            {"name": "Leonardo da Vinci", "category": "GENIUS"},
            {"name": "Giuseppe Garibaldi", "category": "MASSONE"}
        ]"#,
    )
    .unwrap();
    let state = dir.path().join("rotation.json");

    // Never-proposed characters go first, ties in catalog order: Leonardo.
    gom()
        .arg("play")
        .arg("--catalog")
        .arg(&catalog)
        .arg("--daily")
        .arg("--state")
        .arg(&state)
        .write_stdin("1\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Leonardo da Vinci"))
        .stdout(predicate::str::contains("Correct"));

    let contents = fs::read_to_string(&state).unwrap();
    assert!(contents.contains("pick_of_day"));

    // Same day, second run: the recorded pick comes back.
    gom()
        .arg("play")
        .arg("--catalog")
        .arg(&catalog)
        .arg("--daily")
        .arg("--state")
        .arg(&state)
        .write_stdin("stop\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Leonardo da Vinci"));
}
