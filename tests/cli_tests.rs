use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn docwright() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_docwright"));
    cmd.env_remove("RUST_LOG").env_remove("DOCWRIGHT_LOG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_review_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.py");
    fs::write(&path, "x = 1\ny = eval(x)\n").unwrap();

    let output = docwright()
        .current_dir(dir.path())
        .arg("review")
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json[0]["line"], 2);
    assert_eq!(json[0]["type"], "security_risks");
}

#[test]
fn test_readability_error_is_json_and_exit_one() {
    let dir = TempDir::new().unwrap();
    let output = docwright()
        .current_dir(dir.path())
        .args(["readability", "-"])
        .write_stdin("   \n  ")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json = stdout_json(&output);
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(object["error"].as_str().unwrap().contains("degenerate"));
}

#[test]
fn test_detect_language_from_stdin() {
    let dir = TempDir::new().unwrap();
    let output = docwright()
        .current_dir(dir.path())
        .args(["detect", "-"])
        .write_stdin("public class Main {}")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["language"], "java");
}

#[test]
fn test_config_file_threshold_is_used() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".docwright.toml"), "line_length_threshold = 10\n").unwrap();
    let path = dir.path().join("long.py");
    fs::write(&path, "value = 12345678\n").unwrap();

    let output = docwright()
        .current_dir(dir.path())
        .arg("review")
        .arg(&path)
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json[0]["message"], "Line exceeds 10 characters");
}

#[test]
fn test_tests_for_non_python_is_unsupported() {
    let dir = TempDir::new().unwrap();
    let output = docwright()
        .current_dir(dir.path())
        .args(["tests", "-", "--language", "java"])
        .write_stdin("public class Main {}")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_json(&output)["error"]
        .as_str()
        .unwrap()
        .contains("test generation"));
}

#[test]
fn test_missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    docwright()
        .current_dir(dir.path())
        .args(["tone", "does-not-exist.txt"])
        .assert()
        .failure();
}

#[test]
fn test_zero_line_length_override_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let output = docwright()
        .current_dir(dir.path())
        .args(["context", "-", "--line-length", "0"])
        .write_stdin("x = 1\n")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_json(&output)["error"]
        .as_str()
        .unwrap()
        .contains("line_length_threshold"));
}

#[test]
fn test_language_follows_file_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.py");
    fs::write(&path, "x = 1\n").unwrap();

    let output = docwright()
        .current_dir(dir.path())
        .arg("quality")
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["language"], "python");
    assert_eq!(json["deep_analysis"], true);

    let path = dir.path().join("widget.js");
    fs::write(&path, "def helper(x):\n    return x\n").unwrap();
    let output = docwright()
        .current_dir(dir.path())
        .arg("tests")
        .arg(&path)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_json(&output)["error"]
        .as_str()
        .unwrap()
        .ends_with("javascript"));
}
