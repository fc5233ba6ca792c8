//! CLI tests for `dbconfig check`

use crate::helpers::cli::CliTestHelper;
use anyhow::Result;
use predicates::prelude::*;

#[test]
fn test_check_sqlite_environment() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_config("development:\n  dialect: sqlite3\n  datasource: \"sqlite::memory:\"\n")?;

    helper
        .command()
        .args(["check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Environment 'development' is ready: sqlite3"));

    Ok(())
}

#[test]
fn test_check_unsupported_dialect() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_config("legacy:\n  dialect: oracle\n  datasource: oracle://db/app\n")?;

    helper
        .command()
        .args(["check", "--env", "legacy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported dialect: oracle"));

    Ok(())
}

#[test]
fn test_check_mismatched_data_source() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write_config(
        "production:\n  dialect: postgres\n  datasource: mysql://deploy:hunter2@db/app\n",
    )?;

    helper
        .command()
        .args(["check", "--env", "production"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot connect to postgres database"))
        .stderr(predicate::str::contains("hunter2").not());

    Ok(())
}

#[test]
fn test_check_with_dialect_override() -> Result<()> {
    let helper = CliTestHelper::new();

    helper
        .command()
        .args(["check", "--dialect", "sqlite3", "--datasource", "sqlite::memory:"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sqlite3 at sqlite::memory:"));

    Ok(())
}
