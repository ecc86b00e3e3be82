//! Integration tests for the hachure CLI.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn hachure_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hachure"))
}

/// A scratch path inside the system temp directory.
fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(name)
}

#[test]
fn default_run_writes_svg_file() {
    let dir = temp_path(&format!("hachure-default-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("Failed to create temp dir");
    let _ = fs::remove_file(dir.join("hatch.svg"));

    let output = hachure_cmd()
        .current_dir(&dir)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Default run should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Line 1:"), "Should log generated lines");

    let svg = fs::read_to_string(dir.join("hatch.svg")).expect("Should write hatch.svg");
    assert!(svg.contains("<svg"), "Should be an SVG document");
    assert!(svg.contains("<line"), "Should contain line elements");
    assert!(svg.contains("stroke=\"red\""), "Should draw the rectangle border");

    let _ = fs::remove_file(dir.join("hatch.svg"));
    let _ = fs::remove_dir(&dir);
}

#[test]
fn horizontal_fill_has_expected_line_count() {
    let path = temp_path("hachure-horizontal.svg");

    let output = hachure_cmd()
        .args(["-a", "0", "-o", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Line 1: (0,0) -> (20,0)"), "got: {}", stdout);
    assert!(stdout.contains("Line 11: (0,10) -> (20,10)"), "got: {}", stdout);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Generated 11 lines"), "got: {}", stderr);
    assert!(stderr.contains("Wrote:"), "Should report the output file");

    // 11 hatch lines plus 4 border edges.
    let svg = fs::read_to_string(&path).expect("Should write the SVG file");
    assert_eq!(svg.matches("<line").count(), 15);

    let _ = fs::remove_file(&path);
}

#[test]
fn svg_streams_to_stdout_with_dash() {
    let output = hachure_cmd()
        .args(["-a", "0", "-o", "-"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stdout.contains("<?xml"), "Should have XML declaration");
    assert!(stdout.contains("</svg>"), "Should close SVG element");

    // The coordinate log moves to stderr so stdout stays parseable.
    assert!(!stdout.contains("Line 1:"), "Log should not mix into the document");
    assert!(stderr.contains("Line 1: (0,0) -> (20,0)"), "got: {}", stderr);
}

#[test]
fn json_format_emits_line_objects() {
    let output = hachure_cmd()
        .args(["-a", "0", "-f", "json", "-o", "-"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"lines\""), "Should have lines key");
    assert_eq!(stdout.matches("\"x1\"").count(), 11, "got: {}", stdout);
}

#[test]
fn crosshatch_pattern_doubles_lines() {
    let output = hachure_cmd()
        .args(["-p", "crosshatch", "-a", "0", "-f", "json", "-o", "-"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());

    // 11 horizontal plus 21 vertical lines.
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("\"x1\"").count(), 32, "got: {}", stdout);
}

#[test]
fn zero_step_fails_with_error() {
    let output = hachure_cmd()
        .args(["-s", "0"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Zero step should fail");
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("step must be greater than zero"),
        "got: {}",
        stderr
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Line"), "Should not log lines on failure");
}

#[test]
fn unknown_pattern_fails() {
    let output = hachure_cmd()
        .args(["-p", "bogus"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown pattern"), "got: {}", stderr);
}

#[test]
fn help_shows_usage() {
    let output = hachure_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--angle"), "Should document the angle option");
    assert!(stderr.contains("--step"), "Should document the step option");
}
