use assert_cmd::Command;
use assert_fs::{prelude::*, TempDir};
use predicates::prelude::*;
use serde_json::Value;

const CONFIG_FILE_NAME: &str = "flatconf.config.json";

fn cli() -> Command {
    Command::cargo_bin("flatconf-cli").unwrap()
}

fn stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).unwrap()
}

#[test]
fn print_config_from_discovered_file() {
    let dir = TempDir::new().unwrap();
    dir.child(CONFIG_FILE_NAME)
        .write_str(
            r#"[
  "flatconf:base",
  { "files": ["src/legacy/**"], "rules": { "no-var": "off" } }
]"#,
        )
        .unwrap();
    dir.child("src/legacy").create_dir_all().unwrap();

    // flatconf-cli print-config a.ts (run from a subdirectory)
    let output = cli()
        .current_dir(dir.child("src/legacy").path())
        .arg("print-config")
        .arg("old.ts")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let config = stdout_json(&output);
    assert_eq!(config["path"], "src/legacy/old.ts");
    assert_eq!(config["ignored"], false);
    assert_eq!(config["rules"]["no-var"], "off");
    assert_eq!(config["rules"]["@typescript-eslint/no-explicit-any"], "error");
    assert_eq!(config["languageOptions"]["parser"], "@typescript-eslint/parser");
}

#[test]
fn print_config_with_preset() {
    let dir = TempDir::new().unwrap();

    let output = cli()
        .current_dir(dir.path())
        .args(["print-config", "src/a.js", "--preset", "base"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let config = stdout_json(&output);
    assert_eq!(config["rules"]["no-magic-numbers"], "off");
    assert_eq!(config["rules"]["no-debugger"], "error");
}

#[test]
fn ignored_files_print_nothing() {
    let dir = TempDir::new().unwrap();

    cli()
        .current_dir(dir.path())
        .args(["print-config", "node_modules/react/index.js", "--preset", "node"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn invalid_config_exits_with_config_error() {
    let dir = TempDir::new().unwrap();
    let config = dir.child("custom.json");
    config
        .write_str(r#"[{ "rules": { "made-up-rule": "error" } }]"#)
        .unwrap();

    cli()
        .current_dir(dir.path())
        .arg("print-config")
        .arg("a.ts")
        .arg("--config")
        .arg(config.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown rule: made-up-rule"));
}

#[test]
fn unknown_preset_exits_with_config_error() {
    cli()
        .args(["rules", "--preset", "nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown preset: nope"));
}

#[test]
fn rules_lists_the_registry() {
    cli()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("no-var\n"))
        .stdout(predicate::str::contains("react-hooks/exhaustive-deps\n"));
}

#[test]
fn rules_lists_enabled_preset_rules() {
    cli()
        .args(["rules", "--preset", "nextjs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("react-hooks/exhaustive-deps: warn"))
        .stdout(predicate::str::contains("react/react-in-jsx-scope").not());
}

#[test]
fn rules_keep_layer_scoped_settings() {
    // the JavaScript layer turns no-magic-numbers off, the TypeScript layer keeps it
    cli()
        .args(["rules", "--preset", "base"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "no-magic-numbers: warn (flatconf/base/typescript)",
        ))
        .stdout(predicate::str::contains("no-magic-numbers: off").not())
        .stdout(predicate::str::contains("no-debugger: error (flatconf/recommended)"));
}

#[test]
fn missing_explicit_style_file_exits_with_config_error() {
    let dir = TempDir::new().unwrap();

    cli()
        .current_dir(dir.path())
        .args(["style", "a.ts", "--config", "missing.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Style file not found"));
}

#[test]
fn style_uses_default_file_and_overrides() {
    let dir = TempDir::new().unwrap();
    dir.child(".flatconf-stylerc.json")
        .write_str(r#"{ "printWidth": 80, "proseWrap": "always" }"#)
        .unwrap();

    let output = cli()
        .current_dir(dir.path())
        .args(["style", "src/a.ts"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let options = stdout_json(&output);
    assert_eq!(options["printWidth"], 80);
    assert_eq!(options["proseWrap"], "always");
    assert_eq!(options["trailingComma"], "es5");

    let output = cli()
        .current_dir(dir.path())
        .args(["style", "docs/readme.md"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(stdout_json(&output)["proseWrap"], "preserve");
}

#[test]
fn broken_style_file_exits_with_config_error() {
    let dir = TempDir::new().unwrap();
    let style = dir.child("style.json");
    style.write_str("{ printWidth: ").unwrap();

    cli()
        .current_dir(dir.path())
        .arg("style")
        .arg("a.ts")
        .arg("--config")
        .arg(style.path())
        .assert()
        .code(1);
}
