/*!
 * End-to-end tests for the srcbundle binary
 */

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn write_file(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn srcbundle() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("srcbundle"));
    cmd.env("RUST_LOG", "info");
    cmd
}

#[test]
fn bundles_project_and_reports_count() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src/index.ts"), b"export const a = 1;");
    write_file(&temp.path().join("node_modules/pkg/index.js"), b"skip");
    write_file(&temp.path().join("package-lock.json"), b"{}");
    write_file(&temp.path().join("README.md"), b"# readme");

    srcbundle()
        .arg(temp.path())
        .arg("--no-pause")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: "))
        .stdout(predicate::str::contains("Bundled 1 source files"))
        .stdout(predicate::str::contains("all_project_code.txt"))
        .stderr(predicate::str::contains("Fatal").not());

    let output = fs::read_to_string(temp.path().join("all_project_code.txt")).unwrap();
    assert_eq!(output.matches(" FILE: ").count(), 1);
    let header = format!(" FILE: {}\n", Path::new("src").join("index.ts").display());
    assert!(output.contains(&header));
    assert!(output.ends_with("export const a = 1;\n"));
}

#[test]
fn custom_output_and_project_name() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("App.js"), b"app");

    srcbundle()
        .arg(temp.path())
        .args(["--output", "bundle.txt", "--project-name", "DEMO", "--no-pause"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bundle.txt"));

    let output = fs::read_to_string(temp.path().join("bundle.txt")).unwrap();
    assert!(output.starts_with(&format!("{}\n   DEMO PROJECT SOURCE CODE\n", "=".repeat(50))));
    assert!(!temp.path().join("all_project_code.txt").exists());
}

#[test]
fn warns_about_unreadable_files_and_continues() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("good.js"), b"ok");
    write_file(&temp.path().join("bad.json"), &[0xff, 0xfe, 0x00]);

    srcbundle()
        .arg(temp.path())
        .arg("--no-pause")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bundled 1 source files"))
        .stderr(predicate::str::contains("bad.json"));

    let output = fs::read_to_string(temp.path().join("all_project_code.txt")).unwrap();
    assert!(!output.contains("bad.json"));
}

#[test]
fn missing_root_is_fatal() {
    let temp = tempdir().unwrap();
    let missing = temp.path().join("nope");

    srcbundle()
        .arg(&missing)
        .arg("--no-pause")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Fatal error"))
        .stdout(predicate::str::contains("Export complete").not());
}

#[test]
fn non_interactive_run_does_not_wait_for_enter() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("index.js"), b"x");

    // stdin is not a terminal here, so the run finishes without --no-pause
    srcbundle()
        .arg(temp.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Press Enter").not());
}
