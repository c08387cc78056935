//! Integration tests for the compdbgen binary

use std::fs;
use std::process::{Command, Output};

use tempfile::{tempdir, TempDir};

fn run_compdbgen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_compdbgen"))
        .args(args)
        .env_remove("VULKAN_SDK")
        .env_remove("COMPDBGEN_LOG")
        .output()
        .expect("Failed to execute compdbgen")
}

fn run_compdbgen_with_sdk(sdk_root: &str, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_compdbgen"))
        .args(args)
        .env("VULKAN_SDK", sdk_root)
        .env_remove("COMPDBGEN_LOG")
        .output()
        .expect("Failed to execute compdbgen")
}

fn create_project() -> TempDir {
    let root = tempdir().unwrap();
    fs::create_dir_all(root.path().join("engine/src/platform")).unwrap();
    fs::create_dir_all(root.path().join("testbed/src")).unwrap();
    fs::write(root.path().join("engine/src/engine.c"), "").unwrap();
    fs::write(root.path().join("engine/src/platform/macos.m"), "").unwrap();
    fs::write(root.path().join("testbed/src/main.c"), "").unwrap();
    root
}

#[test]
fn test_writes_database_into_project_root() {
    let project = create_project();
    let output = run_compdbgen(&[project.path().to_str().unwrap()]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Wrote 3 entries"), "stdout: {}", stdout);

    let db = fs::read_to_string(project.path().join("compile_commands.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&db).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 3);
    assert!(db.contains("-Iinclude "), "unset SDK keeps a bare include flag");
}

#[test]
fn test_stdout_mode_does_not_write_file() {
    let project = create_project();
    let output = run_compdbgen(&[
        project.path().to_str().unwrap(),
        "--stdout",
        "--sdk-include",
        "/opt/sdk/include",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 3);
    assert!(stdout.contains("-I/opt/sdk/include"));
    assert!(!project.path().join("compile_commands.json").exists());
}

#[test]
fn test_quiet_suppresses_success_message() {
    let project = create_project();
    let output = run_compdbgen(&[project.path().to_str().unwrap(), "--quiet"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_source_tree_exits_with_error() {
    let root = tempdir().unwrap();
    let output = run_compdbgen(&[root.path().to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Source discovery failed"), "stderr: {}", stderr);
}

#[test]
fn test_unwritable_output_exits_with_error() {
    let project = create_project();
    let missing = project.path().join("no/such/dir/db.json");
    let output = run_compdbgen(&[
        project.path().to_str().unwrap(),
        "--output",
        missing.to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to write"), "stderr: {}", stderr);
}

#[test]
fn test_sdk_include_read_from_environment() {
    let project = create_project();
    let output = run_compdbgen_with_sdk("/opt/vk", &[project.path().to_str().unwrap(), "--stdout"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("-I/opt/vk/include "), "stdout: {}", stdout);
    assert!(!stdout.contains("-Iinclude "), "stdout: {}", stdout);
}

#[test]
fn test_sdk_include_flag_overrides_environment() {
    let project = create_project();
    let output = run_compdbgen_with_sdk(
        "/opt/vk",
        &[
            project.path().to_str().unwrap(),
            "--stdout",
            "--sdk-include",
            "/custom/include",
        ],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("-I/custom/include "), "stdout: {}", stdout);
    assert!(!stdout.contains("/opt/vk"), "stdout: {}", stdout);
}
