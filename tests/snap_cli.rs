#![cfg(unix)]

use std::path::Path;

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::test_helpers::*;

/// Capture config whose "tools" just create the destination file
fn touch_config(root: &Path) -> String {
    format!(
        r#"
[capture]
snapshot_dir = "{root}/snapshots"
screenshot_dir = "{root}/screenshots"
max_jitter_secs = 0

[capture.webcam]
program = "touch"

[capture.screen]
program = "touch"
"#,
        root = root.display()
    )
}

#[test]
fn snap_writes_both_files_with_the_same_name() {
    let root = TempDir::new().unwrap();
    let sandbox = Sandbox::with_config(&touch_config(root.path()));

    let output = sandbox.desk().args(["snap", "--now"]).output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let paths: Vec<&Path> = stdout.lines().map(Path::new).collect();
    assert_eq!(paths.len(), 2);
    assert!(paths[0].starts_with(root.path().join("snapshots")));
    assert!(paths[1].starts_with(root.path().join("screenshots")));
    assert_eq!(paths[0].file_name(), paths[1].file_name());
    assert!(paths.iter().all(|p| p.is_file()));
}

#[test]
fn snap_dir_flags_override_config() {
    let root = TempDir::new().unwrap();
    let sandbox = Sandbox::with_config(&touch_config(root.path()));
    let elsewhere = sandbox.path("cam");

    sandbox
        .desk()
        .args(["snap", "--now", "--snapshot-dir"])
        .arg(&elsewhere)
        .assert()
        .success()
        .stdout(predicate::str::contains(elsewhere.to_string_lossy().into_owned()));

    assert!(elsewhere.is_dir());
}

#[test]
fn failing_webcam_aborts_the_run() {
    let root = TempDir::new().unwrap();
    let config = touch_config(root.path()).replacen("program = \"touch\"", "program = \"false\"", 1);
    let sandbox = Sandbox::with_config(&config);

    sandbox
        .desk()
        .args(["snap", "--now"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Capture error"));

    let screenshots = std::fs::read_dir(root.path().join("screenshots")).unwrap().count();
    assert_eq!(screenshots, 0);
}
