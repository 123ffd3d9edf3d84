//! Tests for `xcadd config` and config layering.

mod common;

use common::TestEnv;

#[test]
fn config_shows_builtin_defaults() {
    let env = TestEnv::new();

    let result = env.run("osascript", &["config"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("[project]"));
    assert!(result.stdout.contains("PrestigeNative/Core/Models/APIEndpoints.swift"));
    assert!(result.stdout.contains("application = \"Xcode\""));
}

#[test]
fn project_config_overrides_user_config() {
    let env = TestEnv::new();
    env.write_user_config(
        r#"
[bridge]
kind = "xed"
application = "UserApp"
"#,
    );
    env.write_project_file("xcadd.toml", "[bridge]\napplication = \"ProjectApp\"\n");

    let result = env.run("osascript", &["config", "--json"]);

    let value: serde_json::Value = serde_json::from_str(result.stdout.trim()).unwrap();
    assert_eq!(value["data"]["bridge"]["application"], "ProjectApp");
    assert_eq!(value["data"]["bridge"]["kind"], "xed");
}

#[test]
fn explicit_config_file_replaces_project_lookup() {
    let env = TestEnv::new();
    env.write_project_file("xcadd.toml", "[bridge]\napplication = \"FromCwd\"\n");
    env.write_project_file("other.toml", "[bridge]\napplication = \"FromFlag\"\n");

    let result = env.run("osascript", &["config", "--json", "--config", "other.toml"]);

    let value: serde_json::Value = serde_json::from_str(result.stdout.trim()).unwrap();
    assert_eq!(value["data"]["bridge"]["application"], "FromFlag");
}

#[test]
fn invalid_config_is_an_error() {
    let env = TestEnv::new();
    env.write_project_file("xcadd.toml", "[bridge]\nkind = \"emacs\"\n");

    let result = env.run("osascript", &["config"]);

    assert!(!result.success);
    assert!(result.stderr.contains("invalid config"));
}
