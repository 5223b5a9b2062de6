//! Integration tests for the ATM CLI.
//!
//! These tests run the actual binary, feed commands on stdin and check the
//! streams and exit status.

use assert_cmd::Command;
use predicates::prelude::*;

/// Build the binary command, logged in to the default account
fn atm() -> Command {
    let mut cmd = Command::cargo_bin("cli-atm").unwrap();
    cmd.args(["--pin", "1234"]);
    cmd
}

#[test]
fn test_logout_exits_successfully() {
    atm()
        .write_stdin("logout\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("PHILEMON, Welcome to the CLI ATM Machine."))
        .stdout(predicate::str::contains("Your current balance is 5006267.00 NGN."))
        .stdout(predicate::str::contains("Exiting CLI ATM Machine ...."));
}

#[test]
fn test_interactive_login_prompt() {
    let mut cmd = Command::cargo_bin("cli-atm").unwrap();
    cmd.write_stdin("4321\n1234\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the pin for the philemon account"))
        .stdout(predicate::str::contains("Welcome"))
        .stderr(predicate::str::contains("unauthorized"));
}

#[test]
fn test_end_of_input_is_graceful() {
    atm()
        .write_stdin("balance philemon 1234\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your account balance is 5006267.00 NGN."))
        .stdout(predicate::str::contains("Exiting CLI ATM Machine ...."));
}

#[test]
fn test_deposit_and_withdraw_scenario() {
    atm()
        .write_stdin(
            "deposit 2000 philemon 1234\n\
             withdraw --amount=500 --username=philemon --pin=1234\n\
             withdraw 5007768 philemon 1234\n\
             balance philemon 1234\n\
             logout\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Your new balance is 5008267.00 NGN."))
        .stdout(predicate::str::contains("Your remaining balance is: 5007767.00 NGN"))
        .stderr(predicate::str::contains(
            "You have 5007767.00 NGN and want to withdraw 5007768.00 NGN",
        ))
        .stdout(predicate::str::contains("Your account balance is 5007767.00 NGN."));
}

#[test]
fn test_errors_go_to_stderr() {
    atm()
        .write_stdin("deposit abc philemon 1234\nbalance ghost 1234\nlogout\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("invalid amount entered"))
        .stderr(predicate::str::contains("user with username ghost does not exist"))
        .stdout(predicate::str::contains("invalid amount").not());
}

#[test]
fn test_startup_command_from_arguments() {
    let mut cmd = Command::cargo_bin("cli-atm").unwrap();
    cmd.args([
        "--pin",
        "1234",
        "createaccount",
        "--username=alice",
        "--pin=0000",
    ])
    .write_stdin("balance alice 0000\nlogout\n")
    .assert()
    .success()
    .stdout(predicate::str::contains(
        "Account with username alice has been created successfully.",
    ))
    .stdout(predicate::str::contains("ALICE, Your account balance is 2000.00 NGN."));
}

#[test]
fn test_malformed_arguments_exit_with_error() {
    let mut cmd = Command::cargo_bin("cli-atm").unwrap();
    cmd.arg("--bogus")
        .write_stdin("logout\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn test_help_flag_exits_successfully() {
    let mut cmd = Command::cargo_bin("cli-atm").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--pin"));
}
