//! End-to-end runs of the command line tool.

use assert_cmd::Command;
use kodegen_bundler_dsstore::{
    BundlerError, CliError,
    cli::{Args, run_with},
};
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const DS_STORE_LEN: u64 = 8196;

fn bin() -> Command {
    Command::cargo_bin("kodegen_bundler_dsstore").unwrap()
}

fn fixture(name: &str) -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
        .display()
        .to_string()
}

#[test]
fn test_default_layout_for_app() {
    let dir = TempDir::new().unwrap();

    bin()
        .arg(dir.path())
        .args(["--app-name", "MyApp.app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let ds_store = dir.path().join(".DS_Store");
    assert_eq!(std::fs::metadata(ds_store).unwrap().len(), DS_STORE_LEN);
}

#[test]
fn test_layout_file_with_output() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out").join("layout.DS_Store");

    bin()
        .arg(dir.path())
        .args(["--layout", &fixture("layout.json")])
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("layout.DS_Store"));

    assert_eq!(std::fs::metadata(&output).unwrap().len(), DS_STORE_LEN);
    assert!(!dir.path().join(".DS_Store").exists());
}

#[test]
fn test_missing_layout_source() {
    let dir = TempDir::new().unwrap();

    bin()
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required argument"));
}

#[test]
fn test_run_without_layout_source() {
    let dir = TempDir::new().unwrap();
    let args = Args {
        volume_root: dir.path().to_path_buf(),
        layout: None,
        app_name: None,
        width: 640,
        height: 480,
        icon_size: 128.0,
        label_size: 12.0,
        background_image: None,
        output: None,
    };

    assert!(matches!(
        run_with(&args),
        Err(BundlerError::Cli(CliError::MissingArgument { .. }))
    ));
    assert!(!dir.path().join(".DS_Store").exists());
}

#[test]
fn test_layout_conflicts_with_app_name() {
    let dir = TempDir::new().unwrap();

    bin()
        .arg(dir.path())
        .args(["--layout", &fixture("layout.toml"), "--app-name", "MyApp.app"])
        .assert()
        .failure();
}

#[test]
fn test_volume_root_must_exist() {
    bin()
        .args(["/nonexistent/volume", "--app-name", "MyApp.app"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_unreadable_layout() {
    let dir = TempDir::new().unwrap();

    bin()
        .arg(dir.path())
        .args(["--layout", "/nonexistent/layout.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load layout"));
}

#[cfg(unix)]
#[test]
fn test_background_image_is_staged() {
    let dir = TempDir::new().unwrap();
    let volume = dir.path().join("volume");
    std::fs::create_dir(&volume).unwrap();
    let image = dir.path().join("bg.png");
    std::fs::write(&image, b"\x89PNG").unwrap();

    bin()
        .arg(&volume)
        .args(["--app-name", "MyApp.app"])
        .arg("--background-image")
        .arg(&image)
        .assert()
        .success();

    assert!(volume.join(".background").join("bg.png").is_file());
    assert_eq!(
        std::fs::metadata(volume.join(".DS_Store")).unwrap().len(),
        DS_STORE_LEN
    );
}
