//
//  employes-client
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from the caller's environment and configuration file.
fn employes(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("employes").unwrap();
    cmd.env_remove("EMPLOYES_TOKEN")
        .env_remove("EMPLOYES_ADMINISTRATION")
        .env_remove("EMPLOYES_API_URL")
        .env_remove("EMPLOYES_DEBUG")
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(config);
    cmd
}

fn config_file() -> (TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    (dir, path)
}

#[test]
fn help_lists_commands() {
    let (_dir, path) = config_file();
    employes(&path)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("employee"))
        .stdout(predicate::str::contains("leave"));
}

#[test]
fn version_prints_package_version() {
    let (_dir, path) = config_file();
    employes(&path)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_token_exits_with_auth_error() {
    let (_dir, path) = config_file();
    employes(&path)
        .args(["employee", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::starts_with("error: "))
        .stderr(predicate::str::contains("No bearer token configured"));
}

#[test]
fn missing_administration_exits_with_usage_error() {
    let (_dir, path) = config_file();
    employes(&path)
        .args(["--token", "secret", "leave", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No administration configured"));
}

#[test]
fn config_set_then_get() {
    let (_dir, path) = config_file();
    employes(&path)
        .args(["config", "set", "administration_id", "adm-1"])
        .assert()
        .success();

    employes(&path)
        .args(["config", "get", "administration_id"])
        .assert()
        .success()
        .stdout("adm-1\n");
}

#[test]
fn config_set_masks_token() {
    let (_dir, path) = config_file();
    employes(&path)
        .args(["config", "set", "bearer_token", "super-secret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("********"))
        .stdout(predicate::str::contains("super-secret").not());
}

#[test]
fn config_get_masks_token() {
    let (_dir, path) = config_file();
    employes(&path)
        .args(["config", "set", "bearer_token", "super-secret"])
        .assert()
        .success();

    employes(&path)
        .args(["config", "get", "bearer_token"])
        .assert()
        .success()
        .stdout("********\n");

    employes(&path)
        .args(["--json", "config", "get", "bearer_token"])
        .assert()
        .success()
        .stdout(predicate::str::contains("********"))
        .stdout(predicate::str::contains("super-secret").not());
}

#[test]
fn config_rejects_unknown_key() {
    let (_dir, path) = config_file();
    employes(&path)
        .args(["config", "set", "editor", "vim"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key"));
}

#[test]
fn employee_get_prints_json() {
    let (_dir, path) = config_file();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/adm/employees/42")
        .match_header("authorization", "Bearer secret")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"42","first_name":"Jane"}"#)
        .create();

    employes(&path)
        .args(["--json", "--token", "secret", "-a", "adm", "--api-url"])
        .arg(server.url())
        .args(["employee", "get", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""first_name": "Jane""#));

    mock.assert();
}

#[test]
fn employee_get_not_found_exits_with_8() {
    let (_dir, path) = config_file();
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/adm/employees/missing")
        .with_status(404)
        .with_body(r#"{"message":"Employee not found"}"#)
        .create();

    employes(&path)
        .args(["--token", "secret", "-a", "adm", "--api-url"])
        .arg(server.url())
        .args(["employee", "get", "missing"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("Employee not found"));
}

#[test]
fn employee_update_warns_about_read_only_keys() {
    let (_dir, path) = config_file();
    let mut server = mockito::Server::new();
    server
        .mock("PATCH", "/adm/employees/42")
        .match_body("first_name=Jane")
        .with_status(200)
        .with_body("200")
        .create();

    employes(&path)
        .args(["--token", "secret", "-a", "adm", "--api-url"])
        .arg(server.url())
        .args(["employee", "update", "42", "--set", "first_name=Jane", "--set", "id=7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated employee 42"))
        .stderr(predicate::str::contains("Ignoring 'id'"));
}
