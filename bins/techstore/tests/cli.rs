//! End-to-end tests driving the techstore binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn techstore() -> Command {
    let mut cmd = Command::cargo_bin("techstore").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("TECHSTORE_CATALOG");
    cmd
}

#[test]
fn menu_exits_on_zero() {
    techstore()
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("TechStore").and(predicate::str::contains("Goodbye!")));
}

#[test]
fn menu_survives_closed_stdin() {
    techstore().arg("menu").write_stdin("").assert().success();
}

#[test]
fn menu_linear_search() {
    techstore()
        .arg("menu")
        .write_stdin("1\n11\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: index=5, comparisons=6"));
}

#[test]
fn products_available_and_in_stock() {
    techstore()
        .args(["products", "--available", "true", "--min-stock", "1", "--brand", "apple"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("iPhone 15")
                .and(predicate::str::contains("MacBook Air M3"))
                .and(predicate::str::contains("iPad Air"))
                .and(predicate::str::contains("3 products found")),
        );
}

#[test]
fn products_price_range() {
    techstore()
        .args(["products", "--min-price", "500", "--max-price", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("iPhone 15").and(predicate::str::contains("Dell XPS 13").not()));
}

#[test]
fn products_approximate_name() {
    techstore()
        .args(["products", "--name", "samsng", "--tolerance", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Samsung Galaxy S24").and(predicate::str::contains("1 product found")));
}

#[test]
fn products_json_output() {
    let output = techstore()
        .args(["products", "--category", "laptop", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["kind"], "products");
    assert_eq!(value["result"].as_array().unwrap().len(), 2);
    assert_eq!(value["result"][0]["name"], "MacBook Air M3");
}

#[test]
fn employees_by_department() {
    techstore()
        .args(["employees", "--department", "ventas"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana García").and(predicate::str::contains("María Rodríguez")));
}

#[test]
fn employees_require_a_selector() {
    techstore().arg("employees").assert().failure();
}

#[test]
fn match_subcommand() {
    techstore()
        .args(["match", "samsng", "Samsung Galaxy S24", "--tolerance", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("match: true (distance 1, tolerance 1)"));

    techstore()
        .args(["match", "iPhone 15", "ip", "--tolerance", "0"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("match: false"));
}

#[test]
fn custom_catalog_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"products": [{{"id": 1, "name": "Pixel 9", "brand": "Google", "price": 799.0, "stock": 3, "available": true}}]}}"#
    )
    .unwrap();

    techstore()
        .arg("--data")
        .arg(file.path())
        .args(["products", "--brand", "google"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pixel 9"));
}

#[test]
fn invalid_catalog_is_a_data_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"products": [{{"id": 1}}, {{"id": 1}}]}}"#).unwrap();

    techstore()
        .arg("--data")
        .arg(file.path())
        .args(["products"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Duplicate product id 1"));
}

#[test]
fn config_default_tolerance() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[search]\ntolerance = 2").unwrap();

    techstore()
        .arg("--config")
        .arg(file.path())
        .args(["match", "Sany", "Sony"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tolerance 2"));
}

#[test]
fn missing_config_is_a_config_error() {
    techstore()
        .args(["--config", "/nonexistent/techstore.toml", "products"])
        .assert()
        .code(3);
}

#[test]
fn employees_inactive() {
    techstore()
        .args(["employees", "--inactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("María Rodríguez").and(predicate::str::contains("Ana García").not()));
}

#[test]
fn employees_partial_needs_names() {
    techstore()
        .args(["employees", "--department", "ventas", "--partial"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--first"));
}

#[test]
fn missing_catalog_json_report() {
    let output = techstore()
        .args(["--data", "/nonexistent/catalog.json", "products", "--json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["code"], "FILE_NOT_FOUND");
    assert_eq!(report["code_str"], "E2001");
    assert!(report["suggestion"].is_string());
}

#[test]
fn invalid_catalog_json_report_carries_catalog_code() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"employees": [{{"id": 7}}, {{"id": 7}}]}}"#).unwrap();

    let output = techstore()
        .arg("--data")
        .arg(file.path())
        .args(["employees", "--active", "--json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["code"], "INVALID_RECORD");
    assert_eq!(report["context"], "catalog error 11003");
}

#[test]
fn errors_without_json_keep_stdout_clean() {
    techstore()
        .args(["--data", "/nonexistent/catalog.json", "products"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("File not found"));
}
