use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_decldoc")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).unwrap()
}

// -- stdin mode --

#[test]
fn stdin_mode_produces_markdown() {
    let assert = cmd()
        .write_stdin(fixture("string.json"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.starts_with("# string\n\nString utilities.\n"));
    assert!(output.contains("## Index"));
    assert!(output.contains("* [Buffer](#buffer) (class)"));
    assert!(output.contains("## Classes\n\n### Buffer"));
    assert!(output.contains("#### Static methods\n\n##### alloc"));
    assert!(output.contains("constructor(capacity: number)"));
    assert!(output.contains("### Ascii"));
}

#[test]
fn stdin_mode_omits_internal_declarations() {
    let assert = cmd()
        .write_stdin(fixture("string.json"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(!output.contains("internalOnly"));
}

#[test]
fn stdin_mode_consolidates_overloads() {
    let assert = cmd()
        .write_stdin(fixture("string.json"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("export function pad(n: number): string"));
    assert!(output.contains("export function pad(n: number, fill: string): string"));
    // The implementation's own signature never appears
    assert!(!output.contains("fill?"));
}

#[test]
fn stdin_mode_synthesizes_star_export_docs() {
    let assert = cmd()
        .write_stdin(fixture("string.json"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("### chars"));
    assert!(output
        .contains("Re-exports all named exports from the `./chars` module as `chars`."));
    assert!(output.contains("export * as chars from \"./chars\""));
}

#[test]
fn stdin_mode_canonicalizes_constant_type() {
    let assert = cmd()
        .write_stdin(fixture("string.json"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("export declare const empty: Chunk"));
    assert!(!output.contains("import(\"src/string\")"));
}

#[test]
fn stdin_mode_reports_all_violations() {
    cmd()
        .write_stdin(fixture("undocumented.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing documentation in src/bad.ts module",
        ))
        .stderr(predicate::str::contains(
            "Missing @since tag in bad#A documentation",
        ));
}

#[test]
fn stdin_mode_relaxed_policy_accepts_undocumented() {
    let assert = cmd()
        .arg("--no-enforce-version")
        .write_stdin(fixture("undocumented.json"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.starts_with("# bad\n"));
    assert!(output.contains("* [A](#a) (namespace)"));
}

#[test]
fn stdin_mode_enforce_examples() {
    cmd()
        .arg("--enforce-examples")
        .write_stdin(fixture("string.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing @example tag in string#Buffer documentation",
        ));
}

// -- file mode --

#[test]
fn file_mode_creates_output() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("string.json"))
        .assert()
        .success();

    let output = std::fs::read_to_string(dir.path().join("src/string.md")).unwrap();
    assert!(output.starts_with("# string\n"));
}

#[test]
fn file_mode_requires_output() {
    cmd()
        .arg(fixture_path("string.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output is required"));
}

#[test]
fn file_mode_drops_deprecated_module() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("string.json"))
        .arg(fixture_path("deprecated.json"))
        .assert()
        .success();

    assert!(dir.path().join("src/string.md").exists());
    assert!(!dir.path().join("src/legacy.md").exists());
}

#[test]
fn file_mode_excludes_matching_paths() {
    let dir = TempDir::new().unwrap();

    // internal-raw.json would fail validation if traversed
    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["--exclude", "src/internal/*"])
        .arg(fixture_path("string.json"))
        .arg(fixture_path("internal-raw.json"))
        .assert()
        .success();

    assert!(dir.path().join("src/string.md").exists());
    assert!(!dir.path().join("src/internal/raw.md").exists());
}

#[test]
fn file_mode_failure_reports_and_writes_nothing() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("string.json"))
        .arg(fixture_path("undocumented.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "error: src/bad.ts: Missing documentation in src/bad.ts module",
        ))
        .stderr(predicate::str::contains(
            "1 module(s) failed documentation validation",
        ));

    // Successes from other modules are not written on a failed run
    assert!(!dir.path().join("src/string.md").exists());
}

// -- formats --

#[test]
fn json_format_serializes_model() {
    let assert = cmd()
        .args(["-f", "json"])
        .write_stdin(fixture("string.json"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("\"name\": \"string\""));
    assert!(output.contains("\"classes\""));
    assert!(output.contains("\"since\": \"1.0.0\""));
}

#[test]
fn file_mode_json_extension() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-f", "json"])
        .arg(fixture_path("string.json"))
        .assert()
        .success();

    assert!(dir.path().join("src/string.json").exists());
}

#[test]
fn invalid_format_fails() {
    cmd()
        .args(["-f", "xml"])
        .write_stdin(fixture("string.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn malformed_tree_is_a_fatal_input_error() {
    cmd()
        .write_stdin("{ not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse declaration tree"));
}
