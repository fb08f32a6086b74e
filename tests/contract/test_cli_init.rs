use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Contract tests for `cobra-scaffold init`

fn scaffold(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cobra-scaffold").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("HOME", temp_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_init_from_go_mod() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("go.mod"), "module github.com/jane/tool\n\ngo 1.22\n").unwrap();

    scaffold(&temp_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Cobra application is ready at"));

    let main = fs::read_to_string(temp_dir.path().join("main.go")).unwrap();
    assert!(main.contains("import \"github.com/jane/tool/cmd\""));

    let root = fs::read_to_string(temp_dir.path().join("cmd/root.go")).unwrap();
    assert!(root.contains("Use:   \"tool\","));

    assert!(!temp_dir.path().join("LICENSE").exists());
}

#[test]
fn test_init_into_new_directory_with_license() {
    let temp_dir = TempDir::new().unwrap();

    scaffold(&temp_dir)
        .args(["init", "app", "--pkg-name", "example.com/app", "-l", "gpl3", "-a", "Jane"])
        .assert()
        .success();

    let app_dir = temp_dir.path().join("app");
    let license = fs::read_to_string(app_dir.join("LICENSE")).unwrap();
    assert!(license.contains("GNU GENERAL PUBLIC LICENSE"));
    assert!(license.contains("Version 3, 29 June 2007"));

    let root = fs::read_to_string(app_dir.join("cmd/root.go")).unwrap();
    assert!(root.contains("Jane\n\nThis program is free software"));
}

#[test]
fn test_init_without_module() {
    let temp_dir = TempDir::new().unwrap();

    scaffold(&temp_dir)
        .arg("init")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("go mod init"));
}

#[test]
fn test_init_then_add() {
    let temp_dir = TempDir::new().unwrap();

    scaffold(&temp_dir)
        .args(["init", "--pkg-name", "example.com/app"])
        .assert()
        .success();

    scaffold(&temp_dir)
        .args(["add", "serve-http"])
        .assert()
        .success();

    assert!(temp_dir.path().join("cmd/root.go").exists());
    assert!(temp_dir.path().join("cmd/serveHttp.go").exists());
}

#[test]
fn test_init_existing_project_needs_force() {
    let temp_dir = TempDir::new().unwrap();

    scaffold(&temp_dir)
        .args(["init", "--pkg-name", "example.com/app"])
        .assert()
        .success();

    scaffold(&temp_dir)
        .args(["init", "--pkg-name", "example.com/app"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    scaffold(&temp_dir)
        .args(["init", "--pkg-name", "example.com/app", "--force"])
        .assert()
        .success();
}
