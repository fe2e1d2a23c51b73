use std::path::PathBuf;
use std::process::Command;

fn get_cli_binary() -> PathBuf {
    // Try to find the built binary
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("target");
    path.push("debug");
    path.push("ramp-cli");

    if !path.exists() {
        // Try release build
        path.pop();
        path.pop();
        path.push("release");
        path.push("ramp-cli");
    }

    path
}

#[test]
fn test_cli_solve_basic() {
    let output = Command::new(get_cli_binary())
        .args(["-e", "45", "-r", "10"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("For parabolic ramp with exit angle = 45 degrees and ramp surface length = 10"),
        "Should describe the given pair: {}", stdout
    );
    assert!(
        stdout.contains("The total horizontal length = 9 and the total height = 4"),
        "Should report derived dimensions to the nearest whole unit: {}", stdout
    );
    assert!(stdout.contains("The scale factor = 17.4247"), "Should report the scale factor");
    assert!(
        stdout.contains("x = 9, y = 4, angle = 45.0, ramp surface length = 10"),
        "Should end the point list at the ramp end: {}", stdout
    );
}

#[test]
fn test_cli_fraction_output() {
    let output = Command::new(get_cli_binary())
        .args(["-l", "100", "-t", "25", "-f", "16"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("The ramp surface length = 104 and the exit angle = 26.6 degrees"),
        "Should report derived values: {}", stdout
    );
    assert!(
        stdout.contains("x = 39-3/4, y = 3-15/16, angle = 11.2, ramp surface length = 40"),
        "Should render coordinates as sixteenths: {}", stdout
    );
    assert!(
        stdout.contains("x = 100, y = 25, angle = 26.6, ramp surface length = 104"),
        "Should end at the exact ramp end: {}", stdout
    );
}

#[test]
fn test_cli_output_format_json() {
    let output = Command::new(get_cli_binary())
        .args(["-l", "100", "-t", "25", "-s", "10", "-o", "json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("Should be valid JSON");

    assert!((report["scale_factor"].as_f64().unwrap() - 400.0).abs() < 1e-6);
    assert!((report["exit_angle"].as_f64().unwrap() - 26.565051).abs() < 1e-4);
    assert!((report["horizontal_length"].as_f64().unwrap() - 100.0).abs() < 1e-9);
    assert!((report["height"].as_f64().unwrap() - 25.0).abs() < 1e-9);
    assert!((report["surface_length"].as_f64().unwrap() - 104.022882).abs() < 1e-4);
    assert_eq!(report["points"].as_array().unwrap().len(), 11);
}

#[test]
fn test_cli_output_format_csv() {
    let output = Command::new(get_cli_binary())
        .args(["-l", "100", "-t", "25", "-s", "10", "-o", "csv"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], "x,y,angle,surface_length");
    assert_eq!(lines.len(), 12, "Header plus ten interior points plus the end");
    assert_eq!(lines[11], "100.0000,25.0000,26.6,104.0229");
}

#[test]
fn test_cli_requires_exactly_two_inputs() {
    let output = Command::new(get_cli_binary())
        .args(["-e", "45"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "One known value should be rejected");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("exactly two"), "Should explain the pairing rule: {}", stderr);
}

#[test]
fn test_cli_rejects_zero_length() {
    let output = Command::new(get_cli_binary())
        .args(["-l", "0", "-t", "10"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Zero length should be rejected");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("positive non-zero"), "Should require positive values: {}", stderr);
}

#[test]
fn test_cli_rejects_steep_exit_angle() {
    let output = Command::new(get_cli_binary())
        .args(["-e", "95", "-r", "100"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Angle of 95 degrees should be rejected");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("less than 90"), "Should name the angle limit: {}", stderr);
}

#[test]
fn test_cli_rejects_unknown_fraction() {
    let output = Command::new(get_cli_binary())
        .args(["-l", "100", "-t", "25", "-f", "3"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Fraction of 3 should be rejected");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("can only have the values"), "Should list valid fractions: {}", stderr);
}

#[test]
fn test_cli_rejects_fraction_decimal_conflict() {
    let output = Command::new(get_cli_binary())
        .args(["-l", "100", "-t", "25", "-f", "4", "-d", "2"])
        .output()
        .expect("Failed to execute command");

    // clap enforces the conflict before any solving happens
    assert!(!output.status.success(), "Conflicting format flags should be rejected");
}

#[test]
fn test_cli_unsolvable_geometry() {
    let output = Command::new(get_cli_binary())
        .args(["-r", "14.7894", "-t", "10"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Steep geometry should fail loudly");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no scale factor"), "Should report the failed search: {}", stderr);
}

#[test]
fn test_cli_help() {
    let output = Command::new(get_cli_binary())
        .args(["--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Help command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--exit-angle"), "Should list the exit angle flag");
    assert!(stdout.contains("--fraction"), "Should list the fraction flag");
    assert!(stdout.contains("--list-spacing"), "Should list the spacing flag");
}
