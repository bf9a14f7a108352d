use predicates::prelude::*;
use pretty_assertions::assert_eq;

mod common;
use common::test_helpers::*;

fn stdout_of(sandbox: &Sandbox, args: &[&str]) -> String {
    let output = sandbox.desk().arg("banner").args(args).output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn prints_dash_banner() {
    let sandbox = Sandbox::new();
    let out = stdout_of(&sandbox, &["Test", "--width", "20", "--fill", "-"]);
    assert_eq!(out, "#----<   Test   >----\n");
}

#[test]
fn h1_prints_three_lines_of_equal_width() {
    let sandbox = Sandbox::new();
    let out = stdout_of(&sandbox, &["--preset", "h1", "Important Section Header"]);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains('^'));
    assert!(lines[1].contains("<   Important Section Header   >"));
    assert!(lines[2].contains('v'));
    assert!(lines.iter().all(|l| l.chars().count() == 81));
}

#[test]
fn empty_label_is_accepted() {
    let sandbox = Sandbox::new();
    let out = stdout_of(&sandbox, &["", "--width", "10"]);
    assert_eq!(out, "#=<      >=\n");
}

#[test]
fn flags_override_the_preset() {
    let sandbox = Sandbox::new();
    let out = stdout_of(
        &sandbox,
        &["api", "--preset", "h3", "--width", "16", "--align", "right", "--marker", "//"],
    );
    assert_eq!(out, "//-----<   api   >\n");
}

#[test]
fn config_defaults_apply() {
    let sandbox = Sandbox::with_config("[banner]\npreset = \"h3\"\nwidth = 21\nmarker = \";\"\n");
    let out = stdout_of(&sandbox, &["Test"]);
    assert_eq!(out, ";----<   Test   >-----\n");
}

#[test]
fn json_output() {
    let sandbox = Sandbox::new();
    let out = stdout_of(&sandbox, &["x", "--width", "11", "--top", "--json"]);
    let lines: Vec<String> = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(lines, vec!["#==^     ^==".to_string(), "#=<   x   >=".to_string()]);
}

#[test]
fn zero_width_is_a_usage_error() {
    Sandbox::new()
        .desk()
        .args(["banner", "X", "--width", "0"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn negative_width_is_a_usage_error() {
    Sandbox::new()
        .desk()
        .args(["banner", "X", "--width", "-4"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("width must be positive"));
}

#[test]
fn unknown_alignment_is_a_usage_error() {
    Sandbox::new()
        .desk()
        .args(["banner", "X", "--align", "middle"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported alignment"));
}

#[test]
fn multi_char_fill_is_rejected() {
    Sandbox::new()
        .desk()
        .args(["banner", "X", "--fill", "=-"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("single character"));
}

#[test]
fn broken_config_is_reported() {
    Sandbox::with_config("[banner\n")
        .desk()
        .args(["banner", "X"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config error"));
}

#[cfg(unix)]
#[test]
fn copy_sends_banner_to_clipboard_command() {
    let sandbox = Sandbox::new();
    let sink = sandbox.path("clipboard.txt");

    sandbox
        .desk()
        .env("DESK_CLIPBOARD", format!("tee {}", sink.display()))
        .args(["banner", "Test", "--width", "20", "--fill", "-", "--copy"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("[COPIED] 1 line"));

    assert_eq!(std::fs::read_to_string(&sink).unwrap(), "#----<   Test   >----");
}

#[cfg(unix)]
#[test]
fn copy_from_config_can_be_disabled() {
    let sandbox = Sandbox::with_config("[banner]\ncopy = true\n\n[clipboard]\ncommand = [\"false\"]\n");

    sandbox
        .desk()
        .args(["banner", "ok", "--width", "12", "--no-copy"])
        .assert()
        .success()
        .stdout("#=<   ok   >=\n");
}

#[cfg(unix)]
#[test]
fn clipboard_failure_is_surfaced() {
    Sandbox::new()
        .desk()
        .env("DESK_CLIPBOARD", "false")
        .args(["banner", "Test", "--copy"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Clipboard error"));
}

#[cfg(unix)]
#[test]
fn copy_does_not_wait_for_forked_clipboard_server() {
    let sandbox = Sandbox::with_config(
        "[clipboard]\ncommand = [\"sh\", \"-c\", \"cat >/dev/null; (sleep 4) & exit 0\"]\n",
    );

    let started = std::time::Instant::now();
    sandbox
        .desk()
        .args(["banner", "fast", "--copy"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[COPIED]"));
    assert!(started.elapsed() < std::time::Duration::from_secs(3), "took {:?}", started.elapsed());
}

#[test]
fn log_level_flag_overrides_verbosity() {
    let sandbox = Sandbox::new();

    sandbox
        .desk()
        .args(["--log-level", "debug", "banner", "x"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));

    sandbox
        .desk()
        .args(["-vvv", "--log-level", "error", "banner", "x"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
