//! End-to-end tests for the default register command.

mod common;

use common::TestEnv;

const MISSING_BRIDGE: &str = "/nonexistent/xcadd-test-osascript";

#[test]
fn two_of_three_files_exist() {
    let env = TestEnv::new();
    env.write_project_file("App/A.swift", "struct A {}");
    env.write_project_file("App/C.swift", "struct C {}");

    let dir = env.project_root.path().to_string_lossy().to_string();
    let result = env.run(
        MISSING_BRIDGE,
        &["-C", &dir, "App/A.swift", "App/B.swift", "App/C.swift"],
    );

    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(
        result.lines_starting_with("Adding "),
        vec![
            "Adding App/A.swift to Xcode project...",
            "Adding App/C.swift to Xcode project...",
        ]
    );
    assert_eq!(
        result.lines_starting_with("Warning: "),
        vec!["Warning: App/B.swift does not exist"]
    );
    assert_eq!(result.lines_starting_with("Error running command: ").len(), 2);
    assert!(result.stdout.ends_with(
        "Files added to Xcode project. Please check Xcode to confirm they appear in the navigator.\n"
    ));
}

#[test]
fn failed_command_reports_command_and_error() {
    let env = TestEnv::new();
    env.write_project_file("A.swift", "");

    let result = env.run(MISSING_BRIDGE, &["A.swift"]);

    assert!(result.success);
    let errors = result.lines_starting_with("Error");
    assert_eq!(errors.len(), 2);
    assert!(errors[0].starts_with("Error running command: /nonexistent/xcadd-test-osascript -e"));
    assert!(errors[0].ends_with("A.swift"));
    assert!(errors[1].starts_with("Error: failed to run /nonexistent/xcadd-test-osascript"));
}

#[test]
fn missing_project_directory_aborts() {
    let env = TestEnv::new();
    let gone = env.project_path("does-not-exist");

    let result = env.run(
        MISSING_BRIDGE,
        &["-C", &gone.to_string_lossy(), "A.swift"],
    );

    assert!(!result.success);
    assert!(result.stdout.is_empty(), "stdout: {}", result.stdout);
    assert!(result.stderr.contains("directory not found"));
}

#[cfg(unix)]
#[test]
fn successful_commands_print_only_adding_lines() {
    let env = TestEnv::new();
    env.write_project_file("A.swift", "");
    env.write_project_file("B.swift", "");

    let result = env.run("true", &["A.swift", "B.swift"]);

    assert!(result.success);
    assert_eq!(result.lines_starting_with("Adding ").len(), 2);
    assert!(result.lines_starting_with("Error").is_empty());
}

#[cfg(unix)]
#[test]
fn strict_exits_non_zero_on_missing_file() {
    let env = TestEnv::new();
    env.write_project_file("A.swift", "");

    let relaxed = env.run("true", &["A.swift", "B.swift"]);
    assert!(relaxed.success);

    let strict = env.run("true", &["--strict", "A.swift", "B.swift"]);
    assert_eq!(strict.exit_code, 1);
    assert!(strict.stderr.contains("B.swift does not exist"));
}

#[cfg(unix)]
#[test]
fn strict_exits_non_zero_on_failed_command() {
    let env = TestEnv::new();
    env.write_project_file("A.swift", "");

    let result = env.run("false", &["--strict", "A.swift"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("Error: false exited with code: Some(1)"));
}

#[cfg(unix)]
#[test]
fn json_output_is_ndjson() {
    let env = TestEnv::new();
    env.write_project_file("A.swift", "");

    let result = env.run("true", &["--json", "A.swift", "Gone.swift"]);

    assert!(result.success);
    let events: Vec<serde_json::Value> = result
        .stdout
        .lines()
        .map(|l| serde_json::from_str(l).expect("each line is JSON"))
        .collect();
    let kinds: Vec<&str> = events.iter().map(|e| e["event"].as_str().unwrap()).collect();
    assert_eq!(
        kinds,
        vec!["start", "item_start", "item_opened", "item_missing", "complete"]
    );
    assert_eq!(events[4]["status"], "partial");
}

#[cfg(unix)]
#[test]
fn project_config_supplies_files_and_app() {
    let env = TestEnv::new();
    env.write_project_file("ios/App/A.swift", "");
    env.write_project_file(
        "xcadd.toml",
        r#"
[project]
dir = "ios"
files = ["App/A.swift"]

[bridge]
application = "Xcode-beta"
"#,
    );

    let result = env.run_with_config_dir("true", &[]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(
        result.lines_starting_with("Adding "),
        vec!["Adding App/A.swift to Xcode-beta project..."]
    );
    assert!(result.stdout.contains("Please check Xcode-beta"));
}

#[cfg(unix)]
#[test]
fn unknown_config_key_warns_on_stderr() {
    let env = TestEnv::new();
    env.write_project_file("A.swift", "");
    env.write_project_file("xcadd.toml", "[project]\nfiels = [\"A.swift\"]\n");

    let result = env.run("true", &["A.swift"]);

    assert!(result.success);
    assert!(result.stderr.contains("unknown config key 'fiels'"));
    assert!(result.stderr.contains("did you mean 'files'?"));
    assert!(!result.stdout.contains("fiels"));
}

#[cfg(unix)]
#[test]
fn absolute_entry_is_opened_next_to_relative_ones() {
    let env = TestEnv::new();
    env.write_project_file("A.swift", "");
    env.write_project_file("Shared/B.swift", "");
    let abs = env.project_path("Shared/B.swift").to_string_lossy().to_string();

    let result = env.run("true", &["A.swift", &abs]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(
        result.lines_starting_with("Adding "),
        vec![
            "Adding A.swift to Xcode project...".to_string(),
            format!("Adding {} to Xcode project...", abs),
        ]
    );
}

#[cfg(unix)]
#[test]
fn blank_entry_is_skipped_and_the_rest_still_open() {
    let env = TestEnv::new();
    env.write_project_file("A.swift", "");
    env.write_project_file("B.swift", "");

    let result = env.run("true", &["A.swift", "", "B.swift"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.lines_starting_with("Adding ").len(), 2);
    assert!(result
        .stderr
        .contains("Warning: skipping file list entry 2: path is empty"));
}

#[test]
fn empty_file_list_still_checks_the_directory_first() {
    let env = TestEnv::new();
    let gone = env.project_path("gone");
    env.write_project_file(
        "xcadd.toml",
        &format!("[project]\ndir = {:?}\nfiles = []\n", gone.to_string_lossy()),
    );

    let result = env.run_with_config_dir(MISSING_BRIDGE, &[]);

    assert!(!result.success);
    assert!(result.stderr.contains("directory not found"), "stderr: {}", result.stderr);
}

#[test]
fn empty_file_list_prints_only_the_closing_message() {
    let env = TestEnv::new();
    env.write_project_file("xcadd.toml", "[project]\ndir = \".\"\nfiles = []\n");

    let result = env.run_with_config_dir(MISSING_BRIDGE, &[]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(
        result.stdout,
        "Files added to Xcode project. Please check Xcode to confirm they appear in the navigator.\n"
    );
}

#[cfg(unix)]
#[test]
fn xed_with_custom_app_warns() {
    let env = TestEnv::new();
    env.write_project_file("A.swift", "");

    let result = env.run("true", &["--bridge", "xed", "--app", "Xcode-beta", "A.swift"]);

    assert!(result.success);
    assert!(result
        .stderr
        .contains("the xed bridge ignores application 'Xcode-beta'"));
}
