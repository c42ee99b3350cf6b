//! Integration tests for springgen-cli.

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `springgen` running inside `dir` with its config file in `dir`.
fn springgen(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("springgen").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("RUST_LOG")
        .arg("--no-color")
        .arg("--config")
        .arg(dir.path().join("config.json"));
    cmd
}

fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("springgen").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("preview"));
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("springgen").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_generate_writes_every_layer() {
    let temp = TempDir::new().unwrap();

    springgen(&temp)
        .args(["generate", "Order", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("generation complete"));

    let root = temp.path().join("src/main/java/com/example/demo");
    for file in [
        "model/Order.java",
        "repository/OrderRepository.java",
        "service/OrderService.java",
        "service/impl/OrderServiceImpl.java",
        "controller/OrderController.java",
    ] {
        assert!(root.join(file).exists(), "missing {file}");
    }

    let service = read(root.join("service/OrderService.java"));
    assert!(service.contains("List<Order> getAll();"));
    assert!(!service.contains("import com.example.demo.service."));
}

#[test]
fn test_generate_creates_default_config() {
    let temp = TempDir::new().unwrap();

    springgen(&temp)
        .args(["generate", "Order", "--yes", "--dry-run"])
        .assert()
        .success();

    let config = read(temp.path().join("config.json"));
    assert!(config.contains("    \"base_package\": \"com.example.demo\""));
}

#[test]
fn test_generate_only_selected_layers() {
    let temp = TempDir::new().unwrap();

    springgen(&temp)
        .args(["generate", "Order", "--repository", "--source-root", "out"])
        .assert()
        .success();

    let root = temp.path().join("out/com/example/demo");
    assert!(root.join("model/Order.java").exists());
    assert!(root.join("repository/OrderRepository.java").exists());
    assert!(!root.join("controller/OrderController.java").exists());
    // Package directories exist even for layers that were not selected.
    assert!(root.join("controller").is_dir());
}

#[test]
fn test_generate_single_folder() {
    let temp = TempDir::new().unwrap();

    springgen(&temp)
        .args(["g", "Order", "--all", "--single-folder", "orders"])
        .assert()
        .success();

    let dir = temp.path().join("src/main/java/com/example/demo/orders");
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 5);
    let controller = read(dir.join("OrderController.java"));
    assert!(!controller.contains("import com.example.demo."));
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    springgen(&temp)
        .args(["generate", "Order", "--yes", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OrderServiceImpl.java"));

    assert!(!temp.path().join("src").exists());
}

#[test]
fn test_existing_files_are_kept_without_force() {
    let temp = TempDir::new().unwrap();
    let entity = temp
        .path()
        .join("src/main/java/com/example/demo/model/Order.java");

    springgen(&temp).args(["generate", "Order", "--yes"]).assert().success();
    fs::write(&entity, "// edited\n").unwrap();

    springgen(&temp)
        .args(["generate", "Order", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped"));
    assert_eq!(read(&entity), "// edited\n");

    springgen(&temp)
        .args(["generate", "Order", "--yes", "--force"])
        .assert()
        .success();
    assert!(read(&entity).contains("public class Order"));
}

#[test]
fn test_generate_json_report() {
    let temp = TempDir::new().unwrap();

    let assert = springgen(&temp)
        .args(["--output-format", "json", "generate", "Order", "--yes"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["written"].as_array().unwrap().len(), 5);
    assert!(report["skipped"].as_array().unwrap().is_empty());
}

#[test]
fn test_pom_selects_javax() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("pom.xml"),
        "<project><parent>\
         <artifactId>spring-boot-starter-parent</artifactId>\
         <version>2.7.18</version>\
         </parent></project>",
    )
    .unwrap();

    springgen(&temp)
        .args(["preview", "Order", "--layer", "entity"])
        .assert()
        .success()
        .stdout(predicate::str::contains("import javax.persistence.*;"));
}

#[test]
fn test_preview_prints_source() {
    let temp = TempDir::new().unwrap();

    springgen(&temp)
        .args(["preview", "Order", "--layer", "controller"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "package com.example.demo.controller;",
        ))
        .stdout(predicate::str::contains("@RequestMapping(\"/api/orders\")"));
}

#[test]
fn test_config_set_then_generate_paged() {
    let temp = TempDir::new().unwrap();

    springgen(&temp)
        .args(["config", "set", "features.pagination_and_sorting", "true"])
        .assert()
        .success();
    springgen(&temp)
        .args(["config", "set", "api.default_sort", "name,desc"])
        .assert()
        .success();

    springgen(&temp)
        .args(["config", "get", "features.pagination_and_sorting"])
        .assert()
        .success()
        .stdout("true\n");

    springgen(&temp)
        .args(["preview", "Order", "--layer", "controller"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sort.Direction.DESC"))
        .stdout(predicate::str::contains("getPage"))
        .stdout(predicate::str::contains("getAll").not());
}

#[test]
fn test_environment_overrides_file() {
    let temp = TempDir::new().unwrap();

    springgen(&temp)
        .env("SPRINGGEN_BASE_PACKAGE", "org.acme.shop")
        .args(["config", "get", "base_package"])
        .assert()
        .success()
        .stdout("org.acme.shop\n");
}

#[test]
fn test_config_show_toml() {
    let temp = TempDir::new().unwrap();

    springgen(&temp)
        .args(["config", "show", "--format", "toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[features]"));
}

#[test]
fn test_config_path() {
    let temp = TempDir::new().unwrap();

    springgen(&temp)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"));
    assert!(!temp.path().join("config.json").exists());
}

#[test]
fn test_config_init_creates_file_once() {
    let temp = TempDir::new().unwrap();

    springgen(&temp)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    springgen(&temp)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_plain_output_has_no_ansi_codes() {
    let temp = TempDir::new().unwrap();

    // No --no-color here: the plain format alone must drop colours.
    Command::cargo_bin("springgen")
        .unwrap()
        .current_dir(temp.path())
        .env("HOME", temp.path())
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(temp.path().join("config.json"))
        .args(["--output-format", "plain", "generate", "Order", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"))
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_completions_bash() {
    let temp = TempDir::new().unwrap();

    springgen(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("springgen"));
}
