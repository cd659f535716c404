mod common;

use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

#[test]
fn script_mode_runs_budget_flow() {
    let home = TempDir::new().unwrap();
    let input = "add inc Salary 1200.00\n\
                 add exp Rent 300.00\n\
                 add exp \"Weekly shop\" 300.00\n\
                 list exp\n\
                 del income-1\n\
                 totals\n\
                 exit\n";

    common::script_cmd(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Added income-1"))
        .stdout(contains("expense-2"))
        .stdout(contains("Weekly shop"))
        .stdout(contains("50%"))
        .stdout(contains("Removed income-1"))
        .stdout(contains("Balance   -£600.00"));
}

#[test]
fn invalid_amount_is_reported_and_shell_continues() {
    let home = TempDir::new().unwrap();

    common::script_cmd(home.path())
        .write_stdin("add exp Coffee 12.999\nadd exp Coffee 2.50\nexit\n")
        .assert()
        .success()
        .stdout(contains("ERROR: Invalid amount `12.999`"))
        .stdout(contains("Added expense-1"));
}

#[test]
fn unknown_commands_get_suggestions() {
    let home = TempDir::new().unwrap();

    common::script_cmd(home.path())
        .write_stdin("lst\ndel expense-4\nexit\n")
        .assert()
        .success()
        .stdout(contains("Did you mean `list`?"))
        .stdout(contains("No expense entry with id 4"));
}

#[test]
fn del_by_kind_and_id_reports_bad_arguments() {
    let home = TempDir::new().unwrap();
    let input = "add exp Rent 300.00\n\
                 add exp Food 20.00\n\
                 del exp 1\n\
                 del exp x\n\
                 del gift 1\n\
                 del expense-1\n\
                 exit\n";

    common::script_cmd(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Removed expense-1"))
        .stdout(contains("ERROR: Invalid id `x`"))
        .stdout(contains("Use `help <command>` for usage details."))
        .stdout(contains("ERROR: Unknown entry type `gift`; expected `inc` or `exp`"))
        .stdout(contains("No expense entry with id 1"));
}

#[test]
fn blank_description_asks_for_both_fields() {
    let home = TempDir::new().unwrap();

    common::script_cmd(home.path())
        .write_stdin("add exp \"\" 3.00\nadd exp Tea \"\"\nlist exp\nexit\n")
        .assert()
        .success()
        .stdout(contains(
            "ERROR: Enter both a description and an amount; the description is missing",
        ))
        .stdout(contains(
            "ERROR: Enter both a description and an amount; the amount is missing",
        ))
        .stdout(contains("Added").not());
}

#[test]
fn currency_setting_is_persisted() {
    let home = TempDir::new().unwrap();

    common::script_cmd(home.path())
        .write_stdin("config currency eur\nadd inc Bonus 10\ntotals\nexit\n")
        .assert()
        .success()
        .stdout(contains("Currency set to EUR"))
        .stdout(contains("€10.00"));

    let saved = std::fs::read_to_string(home.path().join("config.json")).unwrap();
    assert!(saved.contains("\"EUR\""));

    common::script_cmd(home.path())
        .write_stdin("config\nexit\n")
        .assert()
        .success()
        .stdout(contains("Currency  EUR (€)"))
        .stdout(contains("£").not());
}
