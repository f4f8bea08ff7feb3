//! End-to-end tests for the `delve` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Write a room file with the given `(difficulty, bonus)` pairs.
fn room_file(dir: &TempDir, rooms: &[(i32, i32)]) -> PathBuf {
    let rooms: Vec<serde_json::Value> = rooms
        .iter()
        .enumerate()
        .map(|(i, (difficulty, bonus))| {
            serde_json::json!({
                "narrative": format!("Chamber {i}."),
                "obstacle": format!("Door {i}."),
                "difficulty": difficulty,
                "reward": { "description": format!("Trinket {i}"), "bonus": bonus }
            })
        })
        .collect();
    let path = dir.path().join("rooms.json");
    fs::write(&path, serde_json::json!({ "rooms": rooms }).to_string()).unwrap();
    path
}

fn delve() -> Command {
    Command::cargo_bin("delve").unwrap()
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_builtin_dungeon_to_completion() {
    let input = format!("Ada\n{}", "roll\n".repeat(500));
    delve()
        .args(["play", "--seed", "42"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("What is your name, traveler?")
                .and(predicate::str::contains("You stand in a dank tavern."))
                .and(predicate::str::contains("You get: Magical Wine"))
                .and(predicate::str::contains("You get: A rusted dagger"))
                .and(predicate::str::contains(
                    "Congratulations on completing the dungeon, Ada!",
                )),
        );
}

#[test]
fn play_custom_rooms() {
    let dir = TempDir::new().unwrap();
    let rooms = room_file(&dir, &[(1, 1), (1, 0)]);
    delve()
        .args(["play", "--rooms", rooms.to_str().unwrap()])
        .write_stdin("Bram\nroll\nroll\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Chamber 0.")
                .and(predicate::str::contains("Door 1."))
                .and(predicate::str::contains("You get: Trinket 1"))
                .and(predicate::str::contains(
                    "Congratulations on completing the dungeon, Bram!",
                )),
        );
}

#[test]
fn play_rejects_unknown_command() {
    let dir = TempDir::new().unwrap();
    let rooms = room_file(&dir, &[(1, 1)]);
    delve()
        .args(["play", "--rooms", rooms.to_str().unwrap()])
        .write_stdin("Bram\nfoo\nhelp\nroll\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Please input an action, help or roll.")
                .and(predicate::str::contains("You rolled:").count(1)),
        );
}

#[test]
fn play_repeat_narrative() {
    let dir = TempDir::new().unwrap();
    let rooms = room_file(&dir, &[(1, 1)]);
    delve()
        .args(["play", "--repeat-narrative", "--rooms", rooms.to_str().unwrap()])
        .write_stdin("Bram\nhelp\nhelp\nroll\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chamber 0.").count(3));
}

#[test]
fn play_fails_when_input_ends() {
    delve()
        .args(["play", "--seed", "1"])
        .write_stdin("Ada\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input ended"));
}

#[test]
fn play_fails_on_invalid_rooms() {
    let dir = TempDir::new().unwrap();
    let rooms = room_file(&dir, &[(9, 1)]);
    delve()
        .args(["play", "--rooms", rooms.to_str().unwrap()])
        .write_stdin("Ada\nroll\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be cleared"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_valid_rooms() {
    let dir = TempDir::new().unwrap();
    let rooms = room_file(&dir, &[(2, 1), (3, 2)]);
    delve()
        .args(["check", rooms.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("All checks passed")
                .and(predicate::str::contains("2 rooms, total bonus 3")),
        );
}

#[test]
fn check_fails_empty_dungeon() {
    let dir = TempDir::new().unwrap();
    let rooms = room_file(&dir, &[]);
    delve()
        .args(["check", rooms.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dungeon has no rooms"));
}

#[test]
fn check_fails_bonus_overflow() {
    let dir = TempDir::new().unwrap();
    let rooms = room_file(&dir, &[(1, i32::MAX)]);
    delve()
        .args(["check", rooms.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("overflows the roll range"));
}

#[test]
fn check_fails_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rooms.json");
    fs::write(&path, "{ \"rooms\": [ { \"narrative\": 1 } ] }").unwrap();
    delve()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid room content"));
}

#[test]
fn check_fails_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");
    delve()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

// ---------------------------------------------------------------------------
// rooms
// ---------------------------------------------------------------------------

#[test]
fn rooms_lists_builtin_dungeon() {
    delve()
        .arg("rooms")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Magical Wine")
                .and(predicate::str::contains("Difficulty"))
                .and(predicate::str::contains("5 rooms")),
        );
}

#[test]
fn rooms_lists_custom_file() {
    let dir = TempDir::new().unwrap();
    let rooms = room_file(&dir, &[(2, -1)]);
    delve()
        .args(["rooms", "--rooms", rooms.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Trinket 0")
                .and(predicate::str::contains("-1"))
                .and(predicate::str::contains("1 rooms")),
        );
}
