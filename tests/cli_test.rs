use std::fs;

mod common;
use common::{stdout_lines, TestContext};

#[test]
fn test_process_subcommand() {
    let ctx = TestContext::new();
    let output = ctx.run(&["process", "clcik the login buttn"]);

    assert!(output.status.success(), "voxcmd failed: {:?}", output);
    assert_eq!(stdout_lines(&output), vec!["click the login button"]);
}

#[test]
fn test_single_operation_subcommands() {
    let ctx = TestContext::new();

    let output = ctx.run(&["correct", "go to redberyltest.in"]);
    assert_eq!(stdout_lines(&output), vec!["go to redbus.in"]);

    let output = ctx.run(&["classify", "blorp zzz"]);
    assert_eq!(stdout_lines(&output), vec!["unknown"]);

    let output = ctx.run(&["type", "search for state california"]);
    assert_eq!(stdout_lines(&output), vec!["State Search"]);
}

#[test]
fn test_analyze_outputs_json() {
    let ctx = TestContext::new();
    let output = ctx.run(&["analyze", "login with emaol user@test.com and oassword mypass"]);
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("analyze should print JSON");
    assert_eq!(value["intent"], "login");
    assert_eq!(value["command_type"], "Password Input");
    assert_eq!(
        value["corrected"],
        "login with email user@test.com and password mypass"
    );
    assert_eq!(value["corrections"].as_array().map(|a| a.len()), Some(2));
}

#[test]
fn test_listen_processes_each_line() {
    let ctx = TestContext::new();
    let input = "go to redberyltest.in\n\nplease visit example.com\nblorp zzz\n";
    let output = ctx.run_with_stdin(&["listen"], input);

    assert!(output.status.success(), "voxcmd failed: {:?}", output);
    assert_eq!(
        stdout_lines(&output),
        vec!["go to redbus.in", "go to example.com", "blorp zzz"]
    );
}

#[test]
fn test_listen_json_lines() {
    let ctx = TestContext::new();
    let output = ctx.run_with_stdin(&["listen", "--json"], "press the blue button\n");

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(value["normalized"], "click the blue button");
    assert_eq!(value["command_type"], "Button Click");
}

#[test]
fn test_process_json_flag() {
    let ctx = TestContext::new();
    let output = ctx.run(&["process", "--json", "clcik the login buttn"]);
    assert!(output.status.success(), "voxcmd failed: {:?}", output);

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["normalized"], "click the login button");
    assert_eq!(value["command_type"], "Login Action");
}

#[test]
fn test_json_flag_rejected_where_unused() {
    let ctx = TestContext::new();
    for sub in ["correct", "classify", "type"] {
        let output = ctx.run(&[sub, "--json", "go to redbus.in"]);
        assert!(!output.status.success(), "{} accepted --json", sub);
        assert!(output.stdout.is_empty());
    }
}

#[test]
fn test_corrupt_config_warns_and_uses_defaults() {
    let ctx = TestContext::new();
    ctx.write_config("{ not json");

    let output = ctx.run(&["process", "go to redberyltest.in"]);
    assert!(output.status.success(), "voxcmd failed: {:?}", output);
    assert_eq!(stdout_lines(&output), vec!["go to redbus.in"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Config file corrupted"),
        "stderr should report the bad config: {}",
        stderr
    );
    assert!(ctx.app_dir().join("config.json.corrupt").exists());
}

#[test]
fn test_audit_log_creation() {
    let ctx = TestContext::new();
    let output = ctx.run(&["--audit", "process", "clcik the login buttn"]);
    assert!(output.status.success());

    let log_path = ctx.app_dir().join("audit.log");
    assert!(log_path.exists(), "Audit log should be created");

    let content = fs::read_to_string(log_path).expect("Failed to read log");
    assert!(
        content.contains("'clcik the login buttn' -> 'click the login button' (Login Action)"),
        "Log should contain the processed command: {}",
        content
    );
}

#[test]
fn test_config_corrections_are_applied() {
    let ctx = TestContext::new();
    ctx.write_config(
        r#"{ "word_corrections": [ { "from": "submitt", "to": "submit" } ] }"#,
    );

    let output = ctx.run(&["correct", "submitt the form"]);
    assert_eq!(stdout_lines(&output), vec!["submit the form"]);
}

#[test]
fn test_explicit_config_path() {
    let ctx = TestContext::new();
    let path = ctx.temp_dir.path().join("strict.json");
    fs::write(&path, r#"{ "fuzzy_threshold": 1.0 }"#).unwrap();

    let output = ctx.run(&["--config", path.to_str().unwrap(), "classify", "clixk the box"]);
    assert_eq!(stdout_lines(&output), vec!["unknown"]);

    let output = ctx.run(&["classify", "clixk the box"]);
    assert_eq!(stdout_lines(&output), vec!["click"]);
}

#[test]
fn test_invalid_threshold_fails() {
    let ctx = TestContext::new();
    ctx.write_config(r#"{ "fuzzy_threshold": 2.0 }"#);

    let output = ctx.run(&["process", "go to redbus.in"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
