mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn script(input: &str) -> assert_cmd::assert::Assert {
    let data = common::data_dir();
    let config_dir = tempdir().expect("tempdir");

    let mut cmd = Command::cargo_bin("sales_report_cli").expect("binary built");
    cmd.arg(data.path())
        .env("SALES_REPORT_CLI_SCRIPT", "1")
        .env("SALES_REPORT_CONFIG", config_dir.path().join("config.json"))
        .env("RUST_LOG", "off")
        .write_stdin(input.to_string())
        .assert()
}

#[test]
fn province_report_prints_rollup() {
    script("report province\nexit\n")
        .success()
        .stdout(predicate::str::contains("Revenue by province"))
        .stdout(predicate::str::contains("Ninh Thuan"))
        .stdout(predicate::str::contains("150.00 NZD"))
        .stdout(predicate::str::contains("Lam Dong").not());
}

#[test]
fn client_views_show_details_and_rankings() {
    script("client C1\nclient-top C2\nclient-monthly C1\n")
        .success()
        .stdout(predicate::str::contains("Green Store"))
        .stdout(predicate::str::contains("an@example.com"))
        .stdout(predicate::str::contains("Top 5 products for client `C2`"))
        .stdout(predicate::str::contains("Monthly revenue for client `C1`"));
}

#[test]
fn unknown_id_is_reported_and_shell_continues() {
    script("product P9\nsummary\n")
        .success()
        .stdout(predicate::str::contains("Product not found: P9"))
        .stdout(predicate::str::contains("Total revenue : 387.50 NZD"));
}

#[test]
fn unknown_command_suggests_closest_match() {
    script("sumary\n")
        .success()
        .stdout(predicate::str::contains("Unknown command `sumary`"))
        .stdout(predicate::str::contains("Did you mean `summary`?"));
}

#[test]
fn help_lists_commands_by_group() {
    script("help\n")
        .success()
        .stdout(predicate::str::contains("Shell:"))
        .stdout(predicate::str::contains("Clients:"))
        .stdout(predicate::str::contains("Reports:"))
        .stdout(predicate::str::is_match(r"(?s)Clients:.*client-top.*Reports:.*summary").expect("regex"));
}

#[test]
fn monthly_report_lists_months_on_target() {
    script("report monthly\n")
        .success()
        .stdout(predicate::str::contains("Months meeting target: Jan"));
}

#[test]
fn missing_data_dir_fails_to_start() {
    let config_dir = tempdir().expect("tempdir");
    let missing = config_dir.path().join("no-data");

    Command::cargo_bin("sales_report_cli")
        .expect("binary built")
        .arg(&missing)
        .env("SALES_REPORT_CLI_SCRIPT", "1")
        .env("SALES_REPORT_CONFIG", config_dir.path().join("config.json"))
        .env("RUST_LOG", "off")
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open"));
}
