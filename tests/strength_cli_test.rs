// ABOUTME: Integration tests for the strength-cli binary
// ABOUTME: Runs commands end to end and checks their JSON output and snapshot updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Integration tests for the strength-cli binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;
use std::path::Path;
use std::process::Command;

use common::{date, male_profile, WorkoutBuilder};
use pierre_strength::data_access::memory::{DataSnapshot, ProfileRecord};
use serde_json::Value;
use strength_core::models::{Exercise, Program, ProgramType};
use uuid::Uuid;

/// Run the CLI and capture exit code, stdout, and stderr
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_strength-cli"))
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

fn write_snapshot(path: &Path, snapshot: &DataSnapshot) {
    fs::write(path, serde_json::to_string(snapshot).unwrap()).unwrap();
}

#[test]
fn test_cli_help_shows_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0);
    for command in ["estimate", "wilks", "classify", "balance", "prs", "program"] {
        assert!(stdout.contains(command), "Help should mention '{command}'");
    }
}

#[test]
fn test_estimate_prints_json() {
    let (exit_code, stdout, _stderr) = run_cli(&["estimate", "--weight", "225", "--reps", "5"]);

    assert_eq!(exit_code, 0);
    let output: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(output["formula"], "brzycki");
    assert!((output["estimated_1rm"].as_f64().unwrap() - 253.125).abs() < 1e-9);
}

#[test]
fn test_classify_accepts_synonyms() {
    let (exit_code, stdout, _stderr) = run_cli(&[
        "classify",
        "--exercise",
        "back squat",
        "--one-rep-max",
        "185",
        "--bodyweight",
        "198",
        "--sex",
        "female",
    ]);

    assert_eq!(exit_code, 0);
    let output: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(output["exercise"], "Barbell Squat");
    assert_eq!(output["level"], "Intermediate");
}

#[test]
fn test_balance_scoring_flag() {
    let (exit_code, stdout, _stderr) = run_cli(&[
        "balance",
        "--squat",
        "400",
        "--bench",
        "200",
        "--deadlift",
        "480",
        "--scoring",
        "wilks_variance",
    ]);

    assert_eq!(exit_code, 0);
    let output: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(output["scoring"], "wilks_variance");
    // No bodyweight given: variance scoring has nothing to normalize with
    assert_eq!(output["score"].as_f64(), Some(0.0));
}

#[test]
fn test_prs_reads_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    let user_id = Uuid::new_v4();
    let bench = Exercise::new("Bench Press");
    let earlier = WorkoutBuilder::new(user_id, date(2025, 5, 1))
        .set(&bench, 185.0, 5)
        .build();
    let latest = WorkoutBuilder::new(user_id, date(2025, 5, 8))
        .set(&bench, 195.0, 5)
        .build();
    let workout_id = latest.id.to_string();
    write_snapshot(
        &path,
        &DataSnapshot {
            exercises: vec![bench],
            profiles: vec![ProfileRecord {
                user_id,
                profile: male_profile(181.0),
            }],
            workouts: vec![earlier, latest],
            programs: Vec::new(),
        },
    );

    let (exit_code, stdout, stderr) = run_cli(&[
        "prs",
        "--input",
        path.to_str().unwrap(),
        "--workout",
        &workout_id,
    ]);

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    let output: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(output["sets"][0]["is_volume_pr"], true);
    assert!(output["summary"]["Bench Press"].is_object());
}

#[test]
fn test_program_advance_rewrites_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    let program = Program::new(
        Uuid::new_v4(),
        "Wave",
        ProgramType::WaveLoading,
        date(2025, 1, 6),
    )
    .with_lift("Squat", 405.0);
    let program_id = program.id.to_string();
    write_snapshot(
        &path,
        &DataSnapshot {
            programs: vec![program],
            ..DataSnapshot::default()
        },
    );
    let input = path.to_str().unwrap();

    let (exit_code, _stdout, stderr) = run_cli(&[
        "program", "advance", "--input", input, "--program", &program_id, "--dry-run",
    ]);
    assert_eq!(exit_code, 0, "stderr: {stderr}");
    let unchanged: DataSnapshot = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(unchanged.programs[0].current_week, 1);

    let (exit_code, stdout, _stderr) = run_cli(&[
        "program", "advance", "--input", input, "--program", &program_id,
    ]);
    assert_eq!(exit_code, 0);
    let printed: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(printed["current_week"], 2);
    let saved: DataSnapshot = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved.programs[0].current_week, 2);

    let (exit_code, stdout, _stderr) =
        run_cli(&["program", "next", "--input", input, "--program", &program_id]);
    assert_eq!(exit_code, 0);
    let next: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(next["label"], "Week 2 (3s)");
}

#[test]
fn test_unknown_program_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    write_snapshot(&path, &DataSnapshot::default());

    let missing = Uuid::new_v4().to_string();
    let (exit_code, _stdout, stderr) = run_cli(&[
        "program",
        "next",
        "--input",
        path.to_str().unwrap(),
        "--program",
        &missing,
    ]);

    assert_eq!(exit_code, 1);
    let error: Value = serde_json::from_str(&stderr).unwrap();
    assert_eq!(error["error"]["code"], "RESOURCE_NOT_FOUND");
    assert!(error["error"]["message"].as_str().unwrap().contains("not found"));
}
