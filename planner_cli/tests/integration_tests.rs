//! Integration tests for the fitplan binary.
//!
//! These tests verify end-to-end behavior including:
//! - Plan rendering and JSON output
//! - Form bounds and choice rejection
//! - Report export
//! - Interactive session progress tracking

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a test directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the CLI binary with an isolated config location
fn cli(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fitplan"));
    cmd.env("XDG_CONFIG_HOME", temp_dir.path().join("config"))
        .env("HOME", temp_dir.path());
    cmd
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Personalized workout and diet planner",
        ));
}

#[test]
fn test_default_command_uses_form_defaults() {
    let temp_dir = setup_test_dir();

    // 65 kg at 170 cm, Weight Loss, Beginner, Vegetarian
    cli(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("BMI: 22.49 (Normal)"))
        .stdout(predicate::str::contains("Calories: 1800 kcal/day"))
        .stdout(predicate::str::contains("Squats – 12 reps"))
        .stdout(predicate::str::contains("Oats / Idli"))
        .stdout(predicate::str::contains(
            "Goal: Weight Loss over 4 weeks at Beginner level",
        ))
        .stdout(predicate::str::contains("generated successfully"));
}

#[test]
fn test_plan_renders_all_sections() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args([
            "plan", "--weight", "100", "--height", "175", "--goal", "Muscle Gain", "--level",
            "Advanced", "--diet", "Non-Vegetarian", "--date", "2026-10-16",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated on: 2026-10-16"))
        .stdout(predicate::str::contains("BMI: 32.65 (Obese)"))
        .stdout(predicate::str::contains("Monday"))
        .stdout(predicate::str::contains("Sunday"))
        .stdout(predicate::str::contains("Squats – 24 reps"))
        .stdout(predicate::str::contains("Chicken + Rice"))
        .stdout(predicate::str::contains("Protein: 165 g, Carbs: 247 g, Fats: 61 g"))
        .stdout(predicate::str::contains("Avoid high-impact workouts"))
        .stdout(predicate::str::contains("Ensure adequate protein intake"))
        .stdout(predicate::str::contains("BMI Progress Chart (1 entry)"));
}

#[test]
fn test_json_output() {
    let temp_dir = setup_test_dir();

    let output = cli(&temp_dir)
        .args(["plan", "--json", "--goal", "general-fitness", "--level", "intermediate"])
        .output()
        .expect("Failed to run fitplan");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["nutrition"]["calories"], 2000);
    assert_eq!(json["nutrition"]["fats_g"], 55);
    assert_eq!(json["preferences"]["level"], "intermediate");
    assert_eq!(json["tips"].as_array().unwrap().len(), 0);

    let days = json["workout"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert!(days[0]["details"]
        .as_str()
        .unwrap()
        .contains("Squats – 18 reps"));
}

#[test]
fn test_unknown_level_rejected() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args(["plan", "--level", "Expert"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid workout level"));
}

#[test]
fn test_out_of_range_inputs_rejected() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args(["plan", "--age", "15"])
        .assert()
        .failure();

    cli(&temp_dir)
        .args(["plan", "--height", "201"])
        .assert()
        .failure();

    cli(&temp_dir)
        .args(["plan", "--weight", "39"])
        .assert()
        .failure();
}

#[test]
fn test_export_writes_report() {
    let temp_dir = setup_test_dir();
    let out_dir = temp_dir.path().join("out");

    cli(&temp_dir)
        .args(["plan", "--name", "Asha", "--date", "2026-01-05", "--export"])
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan exported (text/plain)"));

    let report = fs::read_to_string(out_dir.join("AI_Personalized_Fitness_Plan.txt"))
        .expect("Failed to read report");
    assert!(report.starts_with("\nAI PERSONALIZED FITNESS PLAN\n"));
    assert!(report.contains("Name: Asha\n"));
    assert!(report.ends_with("Generated On: 2026-01-05\n"));
}

#[test]
fn test_json_export_keeps_stdout_parseable() {
    let temp_dir = setup_test_dir();
    let out_dir = temp_dir.path().join("out");

    let output = cli(&temp_dir)
        .args(["plan", "--json", "--date", "2026-01-05", "--export"])
        .arg(&out_dir)
        .output()
        .expect("Failed to run fitplan");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be exactly one JSON document");
    assert_eq!(json["metrics"]["category"], "normal");
    assert!(out_dir.join("AI_Personalized_Fitness_Plan.txt").exists());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Exported"));
}

#[test]
fn test_verbose_logs_pipeline_to_stderr() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .env_remove("RUST_LOG")
        .args(["--verbose", "plan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
fn test_export_is_reproducible() {
    let temp_dir = setup_test_dir();
    let first = temp_dir.path().join("first");
    let second = temp_dir.path().join("second");

    for dir in [&first, &second] {
        cli(&temp_dir)
            .args(["plan", "--date", "2026-01-05", "--goal", "weight loss", "--export"])
            .arg(dir)
            .assert()
            .success();
    }

    let a = fs::read(first.join("AI_Personalized_Fitness_Plan.txt")).unwrap();
    let b = fs::read(second.join("AI_Personalized_Fitness_Plan.txt")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_config_file_supplies_defaults() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("custom.toml");
    fs::write(
        &config_path,
        "[profile]\nweight_kg = 100\nheight_cm = 200\n\n[preferences]\ngoal = \"muscle_gain\"\n",
    )
    .unwrap();

    cli(&temp_dir)
        .arg("--config")
        .arg(&config_path)
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("BMI: 25.00 (Overweight)"))
        .stdout(predicate::str::contains("Calories: 2200 kcal/day"));
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("bad.toml");
    fs::write(&config_path, "[profile]\nage = 99\n").unwrap();

    cli(&temp_dir)
        .arg("--config")
        .arg(&config_path)
        .arg("plan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("profile.age"));
}

#[test]
fn test_session_tracks_progress() {
    let temp_dir = setup_test_dir();
    let csv_path = temp_dir.path().join("progress.csv");

    cli(&temp_dir)
        .args(["session", "--date", "2026-03-01", "--progress-csv"])
        .arg(&csv_path)
        .write_stdin("\nw 70\n\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("BMI progress will become meaningful"))
        .stdout(predicate::str::contains("BMI Progress Chart (3 entries)"))
        .stdout(predicate::str::contains("Session ended with 3 progress entries."));

    let csv = fs::read_to_string(&csv_path).expect("Failed to read CSV");
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines[0], "date,weight_kg,bmi");
    assert_eq!(lines[1], "2026-03-01,65,22.49");
    assert_eq!(lines[2], "2026-03-01,70,24.22");
    assert_eq!(lines[3], "2026-03-01,70,24.22");
}

#[test]
fn test_session_rejects_out_of_range_weight() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .arg("session")
        .write_stdin("w 200\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Weight must be between 40 and 120 kg."))
        .stdout(predicate::str::contains("Session ended with 0 progress entries."));
}

#[test]
fn test_session_updates_height_and_goal() {
    let temp_dir = setup_test_dir();
    let csv_path = temp_dir.path().join("progress.csv");

    cli(&temp_dir)
        .args(["session", "--date", "2026-03-01", "--progress-csv"])
        .arg(&csv_path)
        .write_stdin("h 180\ng muscle gain\nh 250\nl expert\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("BMI: 20.06 (Normal)"))
        .stdout(predicate::str::contains("Calories: 2200 kcal/day"))
        .stdout(predicate::str::contains("Height must be between 140 and 200 cm."))
        .stdout(predicate::str::contains("Invalid workout level"))
        .stdout(predicate::str::contains("Session ended with 2 progress entries."));

    let csv = fs::read_to_string(&csv_path).expect("Failed to read CSV");
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines, vec!["date,weight_kg,bmi", "2026-03-01,65,20.06", "2026-03-01,65,20.06"]);
}

#[test]
fn test_init_config_writes_loadable_defaults() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("nested").join("fitplan.toml");

    cli(&temp_dir)
        .arg("--config")
        .arg(&config_path)
        .arg("init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let contents = fs::read_to_string(&config_path).expect("Failed to read config");
    assert!(contents.contains("weight_kg = 65"));

    // Refuses to clobber without --force
    cli(&temp_dir)
        .arg("--config")
        .arg(&config_path)
        .arg("init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    cli(&temp_dir)
        .arg("--config")
        .arg(&config_path)
        .args(["init-config", "--force"])
        .assert()
        .success();

    cli(&temp_dir)
        .arg("--config")
        .arg(&config_path)
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("BMI: 22.49 (Normal)"));
}

#[test]
fn test_session_export_requires_plan() {
    let temp_dir = setup_test_dir();
    let work_dir = temp_dir.path().join("work");
    fs::create_dir_all(&work_dir).unwrap();

    cli(&temp_dir)
        .current_dir(&work_dir)
        .arg("session")
        .write_stdin("e\n\ne\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generate a plan first."))
        .stdout(predicate::str::contains("Plan exported"));

    assert!(work_dir.join("AI_Personalized_Fitness_Plan.txt").exists());
}
